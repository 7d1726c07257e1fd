use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appicon-contents"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run appicon-contents")
}

fn manifest_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("Contents.json")
}

#[test]
fn test_updates_manifest_and_exits_zero() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        manifest_path(&dir),
        r#"{"images":[{"idiom":"mac","scale":"2x","size":"32x32"}],"info":{"version":1}}"#,
    )
    .unwrap();
    fs::write(dir.path().join("icon_32x32@2x.png"), b"").unwrap();

    let output = run(&[dir.path()]);

    assert_eq!(output.status.code(), Some(0));
    let written = fs::read_to_string(manifest_path(&dir)).unwrap();
    assert!(written.contains("\"filename\": \"icon_32x32@2x.png\""));
    assert!(written.ends_with("}\n"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Contents.json updated"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_icons_dir_argument_is_accepted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let icons = TempDir::new().expect("Failed to create temp dir");
    fs::write(manifest_path(&dir), r#"{"images":[]}"#).unwrap();

    let output = run(&[dir.path(), icons.path()]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_manifest_exits_one() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let output = run(&[dir.path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!manifest_path(&dir).exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Contents.json not found at"));
}

#[test]
fn test_missing_argument_exits_one() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_malformed_manifest_exits_one() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(manifest_path(&dir), "{ \"images\": [").unwrap();

    let output = run(&[dir.path()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        fs::read_to_string(manifest_path(&dir)).unwrap(),
        "{ \"images\": ["
    );
}

#[test]
fn test_non_list_images_exits_one() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(manifest_path(&dir), r#"{"images":"icon.png"}"#).unwrap();

    let output = run(&[dir.path()]);

    assert_eq!(output.status.code(), Some(1));
}
