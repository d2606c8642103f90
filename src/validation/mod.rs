//! Structural checks that decide whether a file is a Postman collection
//!
//! The check is shallow on purpose: a collection is a JSON object with an
//! object-valued `info` and some `item`. Nothing below that is inspected.

use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Keys every collection must carry, in the order they are reported
pub const REQUIRED_FIELDS: [&str; 2] = ["info", "item"];

/// Outcome of reading one file from disk
#[derive(Debug)]
pub enum FileContents {
    /// The file parsed as JSON
    Parsed(Value),
    /// The bytes were read but are not JSON (or not UTF-8)
    ParseError(String),
    /// The file could not be read at all
    IoError(String),
}

/// Read and parse a file without ever failing
pub fn read_collection_file(path: &Path) -> FileContents {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return FileContents::IoError(e.to_string()),
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => FileContents::Parsed(value),
        Err(e) => FileContents::ParseError(e.to_string()),
    }
}

/// Validity plus a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: "valid Postman collection".to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.valid {
            "Valid"
        } else {
            "Invalid"
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.status(), self.message)
    }
}

/// Judge an already parsed document
pub fn validate_document(value: &Value) -> Verdict {
    let Some(object) = value.as_object() else {
        return Verdict::invalid("not a JSON object");
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Verdict::invalid(format!(
            "missing required fields: {}",
            missing.join(", ")
        ));
    }

    if !object["info"].is_object() {
        return Verdict::invalid("info section is not an object");
    }

    Verdict::valid()
}

/// Turn a read outcome into a verdict
pub fn judge(contents: &FileContents) -> Verdict {
    match contents {
        FileContents::Parsed(value) => validate_document(value),
        FileContents::ParseError(e) => Verdict::invalid(format!("invalid JSON: {}", e)),
        FileContents::IoError(e) => Verdict::invalid(format!("error reading file: {}", e)),
    }
}

/// Read, parse and judge a single file
pub fn validate_collection_file(path: &Path) -> Verdict {
    let contents = read_collection_file(path);
    let verdict = judge(&contents);
    tracing::debug!(path = %path.display(), valid = verdict.valid, "checked file");
    verdict
}
