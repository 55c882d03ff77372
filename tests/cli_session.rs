use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bookshelf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_list_and_exit_write_both_files() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nМастер и Маргарита\nМихаил Булгаков\n1967\n1\nDune\nFrank Herbert\n1965\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added!"))
        .stdout(predicate::str::contains(
            "0. Мастер и Маргарита (Михаил Булгаков, 1967)",
        ))
        .stdout(predicate::str::contains("1. Dune (Frank Herbert, 1965)"));

    let json = fs::read_to_string(temp_dir.path().join("books.json")).unwrap();
    assert!(json.contains("\"Title\": \"Мастер и Маргарита\""));
    assert!(json.contains("\"Id\": 1"));

    let csv = fs::read_to_string(temp_dir.path().join("books.csv")).unwrap();
    assert_eq!(
        csv,
        "ID,Title,Author,Year\n0,Мастер и Маргарита,Михаил Булгаков,1967\n1,Dune,Frank Herbert,1965\n"
    );
}

#[test]
fn catalog_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nA\nX\n2000\n1\nB\nY\n2001\n2\n0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book removed: A"));

    bookshelf(temp_dir.path())
        .write_stdin("1\nC\nZ\n2002\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. B (Y, 2001)"))
        .stdout(predicate::str::contains("2. C (Z, 2002)"))
        .stdout(predicate::str::contains("0. A").not());
}

#[test]
fn bad_input_prints_error_and_keeps_going() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nT\nA\nnot a year\n2\n42\n4\n4\nnineteen\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error").count(3));

    assert!(!temp_dir.path().join("books.json").exists());
    assert!(temp_dir.path().join("books.csv").exists());
}

#[test]
fn corrupt_snapshot_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("books.json"), "[{ broken").unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn duplicate_ids_load_quietly() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("books.json"),
        r#"[{"Id":0,"Title":"Old","Author":"A","Year":1},{"Id":0,"Title":"New","Author":"B","Year":2}]"#,
    )
    .unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. New (B, 2)"))
        .stdout(predicate::str::contains("Old").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn end_of_input_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nA\nX\n2000\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("books.csv").exists());
}

#[test]
fn file_flags_override_defaults() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf(temp_dir.path())
        .args(["--data-file", "lib.json", "--export-file", "lib.csv"])
        .write_stdin("1\nA\nX\n2000\n5\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("lib.json").exists());
    assert!(temp_dir.path().join("lib.csv").exists());
    assert!(!temp_dir.path().join("books.json").exists());
}

#[test]
fn config_file_sets_paths() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("bookshelf.json"),
        r#"{"data_file": "shelf.json", "export_file": "shelf.csv"}"#,
    )
    .unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nA\nX\n2000\n5\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("shelf.json").exists());
    assert!(temp_dir.path().join("shelf.csv").exists());
}

#[test]
fn write_failure_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf(temp_dir.path())
        .args(["--data-file", "missing/books.json"])
        .write_stdin("1\nA\nX\n2000\n3\n5\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"));

    assert!(!temp_dir.path().join("books.csv").exists());
}
