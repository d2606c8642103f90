//! End-to-end tests for the collection-merger binary

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_merger_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collection-merger"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute collection-merger")
}

fn write_collection(root: &Path, name: &str, collection: &Value) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, collection.to_string()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_merge_into_derived_output_name() {
    let dir = tempdir().unwrap();
    write_collection(dir.path(), "a.json", &json!({"info": {"name": "A"}, "item": [1]}));
    write_collection(dir.path(), "b.json", &json!({"info": {"name": "B"}, "item": [2, 3]}));

    let output = run_merger_in(dir.path(), &["-i", "a.json", "b.json"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Successfully merged collections into: A_B_merged.json\n"
    );

    let merged = read_json(&dir.path().join("A_B_merged.json"));
    assert_eq!(merged, json!({"info": {"name": "A + B"}, "item": [1, 2, 3]}));
}

#[test]
fn test_merge_directory_one_level_deep() {
    let dir = tempdir().unwrap();
    let cols = dir.path().join("cols");
    write_collection(&cols, "users.json", &json!({"info": {"name": "Users"}, "item": ["u"]}));
    write_collection(&cols, "orders.json", &json!({"info": {"name": "Orders"}, "item": ["o"]}));
    write_collection(&cols, "deep/ignored.json", &json!({"info": {"name": "Deep"}, "item": ["d"]}));
    let out = dir.path().join("all.json");

    let output = run_merger_in(dir.path(), &["-i", "cols", "-o", out.to_str().unwrap()]);
    assert!(output.status.success());

    let merged = read_json(&out);
    assert_eq!(merged["info"]["name"], "Orders + Users");
    assert_eq!(merged["item"], json!(["o", "u"]));
}

#[test]
fn test_merge_from_list_file() {
    let dir = tempdir().unwrap();
    write_collection(dir.path(), "x.json", &json!({"info": {"name": "X"}, "item": []}));
    write_collection(dir.path(), "y.json", &json!({"info": {"name": "X"}, "item": [{"name": "r"}]}));
    fs::write(dir.path().join("list.txt"), "x.json\n\ny.json\n").unwrap();

    let output = run_merger_in(dir.path(), &["-f", "list.txt"]);
    assert!(output.status.success());

    let merged = read_json(&dir.path().join("X_merged.json"));
    assert_eq!(merged, json!({"info": {"name": "X"}, "item": [{"name": "r"}]}));
}

#[test]
fn test_output_is_pretty_printed_and_keeps_key_order() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.json"),
        r#"{"item": [], "info": {"schema": "s", "name": "A"}, "variable": []}"#,
    )
    .unwrap();

    let output = run_merger_in(dir.path(), &["-i", "a.json", "-o", "out.json"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("out.json")).unwrap(),
        "{\n  \"item\": [],\n  \"info\": {\n    \"schema\": \"s\",\n    \"name\": \"A\"\n  },\n  \"variable\": []\n}"
    );
}

#[test]
fn test_no_input_exits_with_error() {
    let dir = tempdir().unwrap();
    let output = run_merger_in(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Error: No input provided. Use either -i/--input or -f/--file\n"
    );
}

#[test]
fn test_empty_directory_exits_with_error() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    let output = run_merger_in(dir.path(), &["-i", "empty"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Error: No JSON files found in the specified input paths\n"
    );
}

#[test]
fn test_single_bad_input_aborts_everything() {
    let dir = tempdir().unwrap();
    write_collection(dir.path(), "a.json", &json!({"info": {"name": "A"}, "item": []}));
    fs::write(dir.path().join("b.json"), "{ broken").unwrap();

    let output = run_merger_in(dir.path(), &["-i", "a.json", "b.json", "-o", "out.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Error: "));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_missing_name_aborts_merge() {
    let dir = tempdir().unwrap();
    write_collection(dir.path(), "a.json", &json!({"info": {"name": "A"}, "item": []}));
    write_collection(dir.path(), "b.json", &json!({"item": [1]}));

    let output = run_merger_in(dir.path(), &["-i", "a.json", "b.json", "-o", "out.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Error: Collection #1 has no info.name\n"
    );
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_missing_input_file_is_reported() {
    let dir = tempdir().unwrap();
    let output = run_merger_in(dir.path(), &["-i", "ghost.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Error: ghost.json: "));
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let dir = tempdir().unwrap();
    write_collection(dir.path(), "a.json", &json!({"info": {"name": "A"}, "item": [1]}));

    let output = run_merger_in(dir.path(), &["-i", "a.json", "-o", "no/such/dir/out.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout)
        .starts_with("Error: Failed to write no/such/dir/out.json: "));
    assert!(!dir.path().join("no").exists());
}

#[test]
fn test_json_named_directory_fails_the_merge() {
    let dir = tempdir().unwrap();
    let cols = dir.path().join("cols");
    write_collection(&cols, "a.json", &json!({"info": {"name": "A"}, "item": [1]}));
    fs::create_dir_all(cols.join("z.json")).unwrap();

    let output = run_merger_in(dir.path(), &["-i", "cols", "-o", "out.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Error: cols/z.json: "));
    assert!(!dir.path().join("out.json").exists());
}
