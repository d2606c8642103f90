//! Loading collections and combining them into one document

pub mod inputs;

use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CollectionError, CollectionResult};

/// Separator placed between collection names in the merged name
pub const NAME_JOINER: &str = " + ";

/// Parse a collection file. Any failure aborts the merge.
pub fn load_collection(path: &Path) -> CollectionResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| CollectionError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| CollectionError::parse(path, e))
}

/// Load every path in order, stopping at the first failure
pub fn load_collections(paths: &[PathBuf]) -> CollectionResult<Vec<Value>> {
    paths
        .iter()
        .map(|path| {
            debug!(path = %path.display(), "loading collection");
            load_collection(path)
        })
        .collect()
}

fn collection_name(collection: &Value, index: usize) -> CollectionResult<&str> {
    collection
        .get("info")
        .and_then(|info| info.get("name"))
        .and_then(Value::as_str)
        .ok_or(CollectionError::MissingName { index })
}

/// Sorted distinct names joined with `" + "`
pub fn merged_name(collections: &[Value]) -> CollectionResult<String> {
    let names = collections
        .iter()
        .enumerate()
        .map(|(index, collection)| collection_name(collection, index))
        .collect::<CollectionResult<BTreeSet<&str>>>()?;

    Ok(names.into_iter().collect::<Vec<_>>().join(NAME_JOINER))
}

/// Merge collections into a new document.
///
/// The first collection is cloned as the base, its `info.name` replaced by
/// [`merged_name`], and the `item` lists of the remaining collections are
/// appended in order. The inputs are left untouched.
pub fn merge_collections(collections: &[Value]) -> CollectionResult<Value> {
    let (first, rest) = collections
        .split_first()
        .ok_or(CollectionError::NoCollections)?;
    let name = merged_name(collections)?;

    let mut merged = first.clone();
    let base = merged
        .as_object_mut()
        .ok_or(CollectionError::MissingName { index: 0 })?;

    match base.get_mut("info") {
        Some(Value::Object(info)) => {
            info.insert("name".to_string(), Value::String(name));
        }
        _ => return Err(CollectionError::MissingName { index: 0 }),
    }

    for (offset, collection) in rest.iter().enumerate() {
        let index = offset + 1;
        let Some(items) = collection.get("item") else {
            debug!(index, "collection has no items, skipping");
            continue;
        };
        let items = items
            .as_array()
            .ok_or(CollectionError::ItemNotArray { index })?;
        base_items(base)?.extend(items.iter().cloned());
    }

    Ok(merged)
}

fn base_items(base: &mut Map<String, Value>) -> CollectionResult<&mut Vec<Value>> {
    base.entry("item")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or(CollectionError::ItemNotArray { index: 0 })
}

/// Output file derived from the merged name, e.g. `A_B_merged.json`
pub fn default_output_path(merged_name: &str) -> PathBuf {
    PathBuf::from(format!("{}_merged.json", merged_name.replace(NAME_JOINER, "_")))
}

/// Write a collection with two-space indentation, overwriting `path`
pub fn write_collection(path: &Path, collection: &Value) -> CollectionResult<()> {
    let content = serde_json::to_string_pretty(collection)
        .map_err(|e| CollectionError::write(path, e.into()))?;
    fs::write(path, content).map_err(|e| CollectionError::write(path, e))
}
