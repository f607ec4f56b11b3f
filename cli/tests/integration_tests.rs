//! Integration tests for the `suggest-check` binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("suggest_check_test_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn write_greet_schema(dir: &TempDir) -> PathBuf {
    let json = serde_json::json!({
        "name": "greet",
        "flags": [
            {"name": "name", "kind": "String"},
            {"name": "help", "aliases": ["h"], "kind": "Bool"}
        ],
        "subcommands": [
            {
                "name": "neighbors",
                "flags": [{"name": "smiling", "kind": "Bool"}]
            }
        ]
    });
    let path = dir.join("greet.json");
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap())
        .expect("failed to write schema");
    path
}

fn suggest_check(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_suggest-check"))
        .args(args)
        .output()
        .expect("failed to run suggest-check")
}

#[test]
fn test_flag_subcommand_prints_suggestion() {
    let dir = TempDir::new("flag");
    let schema = write_greet_schema(&dir);

    let output = suggest_check(&["flag", "--schema", schema.to_str().unwrap(), "nema"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "--name\n");
}

#[test]
fn test_flag_subcommand_reports_no_suggestion() {
    let dir = TempDir::new("flag_none");
    let schema = write_greet_schema(&dir);

    let output = suggest_check(&["flag", "--schema", schema.to_str().unwrap(), "zzz"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "no suggestion\n");
}

#[test]
fn test_from_error_subcommand_formats_message() {
    let dir = TempDir::new("from_error");
    let schema = write_greet_schema(&dir);

    let output = suggest_check(&[
        "from-error",
        "--schema",
        schema.to_str().unwrap(),
        "--scope",
        "neighbors",
        "flag provided but not defined: -sliming",
    ]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Did you mean \"--smiling\"?\n\n"
    );
}

#[test]
fn test_from_error_subcommand_fails_on_unrecognized_text() {
    let dir = TempDir::new("from_error_bad");
    let schema = write_greet_schema(&dir);

    let output = suggest_check(&[
        "from-error",
        "--schema",
        schema.to_str().unwrap(),
        "something else went wrong",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not an undefined-flag report"), "{stderr}");
}

#[test]
fn test_invalid_schema_is_rejected() {
    let dir = TempDir::new("invalid_schema");
    let path = dir.join("bad.json");
    // Duplicate flag name within the root scope.
    fs::write(
        &path,
        r#"{"name": "app", "flags": [{"name": "x"}, {"name": "x"}]}"#,
    )
    .unwrap();

    let output = suggest_check(&["flag", "--schema", path.to_str().unwrap(), "y"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate flag name"), "{stderr}");
}
