//! Integration tests for the command-line interface

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_insert_rewrites_c_header_in_place() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("mymodule.h");
    fs::copy(fixture_path("mymodule.h"), &path).unwrap();

    Command::cargo_bin("auto-header")
        .unwrap()
        .args(["insert", path.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("#ifndef MYMODULE_H\n#define MYMODULE_H\n"));
    assert!(content.contains("\textern \"C\" {"));
    assert!(content.ends_with("#endif //MYMODULE_H\n"));
}

#[test]
fn test_insert_scaffolds_class_in_cpp_header() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("widget.hpp");
    fs::copy(fixture_path("widget.hpp"), &path).unwrap();

    Command::cargo_bin("auto-header")
        .unwrap()
        .args(["insert", path.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("#ifndef WIDGET_HPP\n"));
    assert!(content.contains("class Widget\n{\n\n} //Widget\n"));
}

#[test]
fn test_insert_verbose_reports_guard_macro() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("mymodule.h");
    fs::copy(fixture_path("mymodule.h"), &path).unwrap();

    Command::cargo_bin("auto-header")
        .unwrap()
        .args(["insert", "--verbose", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Inserted include guard: MYMODULE_H"));
}

#[test]
fn test_insert_rejects_unknown_extension() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("notes.txt");
    fs::write(&path, "plain text\n").unwrap();

    Command::cargo_bin("auto-header")
        .unwrap()
        .args(["insert", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Invalid file type, cannot insert header"));

    // The rejected file must not be rewritten.
    assert_eq!(fs::read_to_string(&path).unwrap(), "plain text\n");
}

#[test]
fn test_insert_missing_file_fails() {
    Command::cargo_bin("auto-header")
        .unwrap()
        .args(["insert", "no/such/file.h"])
        .assert()
        .failure()
        .stderr(contains("Failed to read file"));
}

#[test]
fn test_hello_prints_greeting() {
    Command::cargo_bin("auto-header")
        .unwrap()
        .arg("hello")
        .assert()
        .success()
        .stdout("Hello World from auto-header!\n");
}
