use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rs_linecount"))
}

fn write(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A workspace with a `src/` tree, as the tool expects by default.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/main.rs", b"fn main() {\n    println!(\"hi\");\n}\n");
    write(dir.path(), "src/parser/mod.rs", b"pub mod lexer;\npub mod ast;");
    write(dir.path(), "src/templates/page.rss", b"<rss>\n</rss>\n");
    write(dir.path(), "src/README.md", b"docs\n");
    write(dir.path(), "other.rs", b"outside the root\n");
    dir
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rs_linecount"));
}

#[test]
fn scans_src_by_default() {
    let dir = workspace();
    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            "=== Rust Code Line Counter ===\n\
             Root folder : src\n\
             Rust files  : 3\n\
             Total lines : 7\n",
        )
        .stderr("");
}

#[test]
fn output_is_identical_across_runs() {
    let dir = workspace();
    let first = bin().current_dir(dir.path()).output().unwrap();
    let second = bin().current_dir(dir.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn missing_root_reports_zero_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust files  : 0"))
        .stdout(predicate::str::contains("Total lines : 0"));
}

#[test]
fn explicit_root_and_suffix() {
    let dir = workspace();
    bin()
        .current_dir(dir.path())
        .args(["src", "--ext", ".md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust files  : 1"))
        .stdout(predicate::str::contains("Total lines : 1"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_counted_and_reported_once() {
    let dir = workspace();
    let dangling = dir.path().join("src/dangling.rs");
    std::os::unix::fs::symlink(dir.path().join("src/gone.rs"), &dangling).unwrap();

    let output = bin().current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Rust files  : 4"));
    assert!(stdout.contains("Total lines : 7"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let diagnostics: Vec<_> = stderr.lines().filter(|l| l.starts_with("[ERROR]")).collect();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].contains("src/dangling.rs"));
}

#[cfg(unix)]
#[test]
fn dangling_link_is_reported_when_following_links() {
    let dir = workspace();
    std::os::unix::fs::symlink(dir.path().join("src/gone.rs"), dir.path().join("src/dangling.rs"))
        .unwrap();

    bin()
        .current_dir(dir.path())
        .arg("--follow")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust files  : 4"))
        .stdout(predicate::str::contains("Total lines : 7"))
        .stderr(predicate::str::contains("[ERROR] Failed to read src/dangling.rs"));
}

#[test]
fn strict_utf8_turns_bad_bytes_into_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/latin1.rs", b"// caf\xe9\n");

    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines : 1"))
        .stderr("");

    bin()
        .current_dir(dir.path())
        .arg("--strict-utf8")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust files  : 1"))
        .stdout(predicate::str::contains("Total lines : 0"))
        .stderr(predicate::str::contains("[ERROR] Failed to read src/latin1.rs: invalid UTF-8"));
}

#[test]
fn rejects_empty_suffix() {
    bin().args(["--ext", ""]).assert().failure();
}
