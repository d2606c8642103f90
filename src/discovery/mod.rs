//! Locating candidate collection files on disk

pub mod filter;

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::discovery::filter::{has_json_name, is_json_file};

/// Default maximum directory depth searched by the checker
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Find candidate JSON files under `path`.
///
/// A regular file is returned as-is, whatever its extension. A directory is
/// walked down to `max_depth` levels, where a direct child sits at depth 1;
/// a depth of 0 is treated as 1. Anything else yields nothing.
pub fn find_json_files(path: &Path, max_depth: usize) -> Vec<PathBuf> {
    let normalized = normalize_input(path);
    let in_current_dir = normalized.as_os_str().is_empty();
    let path = if in_current_dir {
        Path::new(".")
    } else {
        normalized.as_path()
    };

    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    if !path.is_dir() {
        debug!(path = %path.display(), "skipping input that is neither file nor directory");
        return Vec::new();
    }

    let mut json_files = Vec::new();
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(max_depth.max(1))
        .sort_by_file_name();

    for entry in walker {
        match entry {
            Ok(entry) if is_json_file(entry.path()) => {
                let found = entry.into_path();
                if in_current_dir {
                    let relative = found.strip_prefix(".").map(Path::to_path_buf);
                    json_files.push(relative.unwrap_or(found));
                } else {
                    json_files.push(found);
                }
            }
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable entry under {}: {}", path.display(), e),
        }
    }

    debug!(
        root = %path.display(),
        found = json_files.len(),
        "directory scan finished"
    );
    json_files
}

/// Drop `.` components and redundant separators, so `./cols/` becomes
/// `cols`. The current directory itself normalises to an empty path.
pub fn normalize_input(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Run `find_json_files` on every input and concatenate the results in
/// input order. Duplicates are kept.
pub fn discover_all<P: AsRef<Path>>(inputs: &[P], max_depth: usize) -> Vec<PathBuf> {
    inputs
        .iter()
        .flat_map(|input| find_json_files(input.as_ref(), max_depth))
        .collect()
}

/// List the entries directly inside `dir` whose names end in `.json`,
/// sorted by name. Entries are not checked for being files, so a broken
/// link or a `*.json` directory is listed and later fails to load.
pub fn list_json_children(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut json_files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if has_json_name(&path) {
            json_files.push(path);
        }
    }
    json_files.sort();
    Ok(json_files)
}
