//! Postman collection tools
//!
//! Library behind two command-line utilities: `collection-checker`, which
//! finds JSON files and reports whether each one is a Postman collection,
//! and `collection-merger`, which combines several collections into one.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use discovery::{discover_all, find_json_files, DEFAULT_MAX_DEPTH};
pub use error::{CollectionError, CollectionResult};
pub use merge::{load_collection, merge_collections};
pub use report::{Report, ReportMode};
pub use validation::{validate_collection_file, validate_document, FileContents, Verdict};
