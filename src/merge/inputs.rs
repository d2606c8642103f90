use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::list_json_children;
use crate::error::{CollectionError, CollectionResult};

/// Read a list file with one collection path per line; blank lines are skipped
pub fn read_path_list(list_file: &Path) -> CollectionResult<Vec<PathBuf>> {
    let content = fs::read_to_string(list_file).map_err(|e| CollectionError::io(list_file, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Expand directories one level deep; other paths are kept verbatim
pub fn expand_inputs(paths: &[PathBuf]) -> CollectionResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(list_json_children(path).map_err(|e| CollectionError::io(path, e))?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Build the ordered list of collection files from `-i` paths and an
/// optional list file.
pub fn resolve_collection_files(
    inputs: &[PathBuf],
    list_file: Option<&Path>,
) -> CollectionResult<Vec<PathBuf>> {
    let mut paths = inputs.to_vec();
    if let Some(list_file) = list_file {
        paths.extend(read_path_list(list_file)?);
    }
    if paths.is_empty() {
        return Err(CollectionError::NoInput);
    }

    let files = expand_inputs(&paths)?;
    if files.is_empty() {
        return Err(CollectionError::NoFiles);
    }
    Ok(files)
}
