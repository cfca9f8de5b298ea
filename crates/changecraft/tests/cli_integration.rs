//! End-to-end CLI integration tests.
//!
//! Each test runs the binary inside a fresh temporary directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CHANGELOG_TEXT: &str = "\
# Changelog

## [1.1.0] - 2024-03-10
### Added
- Export to HTML
- Fixed typo in README

## [1.0.0] - 2024-01-02
### Changed
- Improve startup time
";

fn changecraft(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_changecraft"));
    cmd.current_dir(dir).env_remove("CHANGECRAFT_DOCUMENT").env_remove("RUST_LOG");
    cmd
}

/// Parses `CHANGELOG_TEXT` into `changelog.json` inside `dir`.
fn setup_document(dir: &Path) {
    fs::write(dir.join("CHANGELOG.txt"), CHANGELOG_TEXT).expect("failed to write input");
    changecraft(dir)
        .args(["parse", "CHANGELOG.txt", "-o", "changelog.json"])
        .assert()
        .success();
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    changecraft(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created changecraft.toml"));

    let content = fs::read_to_string(dir.join("changecraft.toml")).unwrap();
    assert!(content.contains("[document]"));
    assert!(content.contains("[export]"));
    assert!(content.contains("limit = 10"));
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("changecraft.toml"), "# old config\n").unwrap();

    changecraft(dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    changecraft(dir).args(["init", "--force"]).assert().success();

    let content = fs::read_to_string(dir.join("changecraft.toml")).unwrap();
    assert!(!content.contains("# old config"));
}

#[test]
fn test_parse_from_stdin() {
    let temp_dir = TempDir::new().unwrap();

    changecraft(temp_dir.path())
        .args(["parse", "-"])
        .write_stdin("## [2.0.0] - 2024/05/01\n- Fix login redirect\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"2.0.0\""))
        .stdout(predicate::str::contains("\"date\": \"2024-05-01\""))
        .stdout(predicate::str::contains("\"type\": \"fixed\""));
}

#[test]
fn test_parse_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    changecraft(temp_dir.path())
        .args(["parse", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_export_markdown_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    setup_document(dir);

    changecraft(dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Changelog\n"))
        .stdout(predicate::str::contains("## [1.1.0] - 2024-03-10"))
        .stdout(predicate::str::contains("### Fixed\n\n- Fixed typo in README"))
        .stdout(predicate::str::contains("### Changed\n\n- Improve startup time"));
}

#[test]
fn test_export_html_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    setup_document(dir);

    changecraft(dir)
        .args(["export", "--format", "html", "-o", "dist/changelog.html"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.join("dist/changelog.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h2 class=\"version\">1.1.0</h2>"));
}

#[test]
fn test_export_uses_configured_format() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    setup_document(dir);
    fs::write(
        dir.join("changecraft.toml"),
        "[export]\nformat = \"json\"\n",
    )
    .unwrap();

    changecraft(dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"releases\": ["));
}

#[test]
fn test_export_rejects_unknown_format() {
    let temp_dir = TempDir::new().unwrap();

    changecraft(temp_dir.path())
        .args(["export", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export format"));
}

#[test]
fn test_export_without_document_fails() {
    let temp_dir = TempDir::new().unwrap();

    changecraft(temp_dir.path())
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("changelog.json"));
}

#[test]
fn test_snapshot_history_and_diff() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    setup_document(dir);

    changecraft(dir)
        .args(["snapshot", "before"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved snapshot 'before'"));

    changecraft(dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("before"));

    // Unchanged document
    changecraft(dir)
        .args(["diff", "before"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences."));

    // Bump the newest version label and add a change
    let edited = CHANGELOG_TEXT.replace("1.1.0", "1.2.0") + "### Fixed\n- Crash on exit\n";
    fs::write(dir.join("CHANGELOG.txt"), edited).unwrap();
    changecraft(dir)
        .args(["parse", "CHANGELOG.txt", "-o", "changelog.json"])
        .assert()
        .success();

    changecraft(dir)
        .args(["diff", "before", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"oldVersion\": \"1.1.0\""))
        .stdout(predicate::str::contains("\"newVersion\": \"1.2.0\""))
        .stdout(predicate::str::contains("\"change\": \"Crash on exit\""));

    changecraft(dir).args(["snapshot", "after"]).assert().success();

    changecraft(dir)
        .args(["diff", "after", "before"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~ version 1.1.0 -> 1.2.0"))
        .stdout(predicate::str::contains("+ [1.0.0] fixed: Crash on exit"));
}

#[test]
fn test_history_limit_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    setup_document(dir);
    fs::write(dir.join("changecraft.toml"), "[history]\nlimit = 2\n").unwrap();

    for name in ["one", "two", "three"] {
        changecraft(dir).args(["snapshot", name]).assert().success();
    }

    changecraft(dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("three"))
        .stdout(predicate::str::contains("two"))
        .stdout(predicate::str::contains("one").not());
}

#[test]
fn test_diff_unknown_snapshot_fails() {
    let temp_dir = TempDir::new().unwrap();

    changecraft(temp_dir.path())
        .args(["diff", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("snapshot not found: nope"));
}
