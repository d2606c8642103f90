use std::path::Path;

/// Return true if the path is an existing file whose name ends in `.json`
pub fn is_json_file(path: &Path) -> bool {
    path.is_file() && has_json_name(path)
}

/// Name check only; `.json` itself counts, `data.JSON` does not
pub fn has_json_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"))
}
