//! Error types shared by the checker and the merger

use std::path::PathBuf;

/// Errors raised while resolving, loading, merging or writing collections
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No input provided. Use either -i/--input or -f/--file")]
    NoInput,

    #[error("No JSON files found in the specified input paths")]
    NoFiles,

    #[error("No collections to merge")]
    NoCollections,

    #[error("Collection #{index} has no info.name")]
    MissingName { index: usize },

    #[error("Collection #{index} has an item section that is not a list")]
    ItemNotArray { index: usize },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;
