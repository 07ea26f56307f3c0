//! CLI integration tests for bookshelf
//!
//! These tests drive the binary end to end: one-shot commands, scripted
//! menu sessions, and the persisted library file between runs.

use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a command instance for the bookshelf binary, isolated from any
/// user configuration and pointed at `file`
fn bookshelf_cmd(dir: &Path, file: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"));
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("HOME", dir)
        .env("BOOKSHELF_FILE", file);
    cmd
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("library.text");
    (dir, file)
}

fn add_book(dir: &Path, file: &Path, title: &str, author: &str, read: bool) {
    let mut cmd = bookshelf_cmd(dir, file);
    cmd.args(["add", title, "--author", author, "--year", "1965", "--genre", "Sci-Fi"]);
    if read {
        cmd.arg("--read");
    }
    cmd.assert().success();
}

// =============================================================================
// One-shot Commands
// =============================================================================

#[test]
fn test_add_creates_library_file() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .args(["add", "Dune", "-a", "Frank Herbert", "-y", "1965", "-g", "Sci-Fi", "--read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Dune has been added to the library."));

    let content = fs::read_to_string(&file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["Dune"]["author"], "Frank Herbert");
    assert_eq!(value["Dune"]["year"], "1965");
    assert_eq!(value["Dune"]["read"], true);
}

#[test]
fn test_add_rejects_empty_field() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .args(["add", "Dune", "--author", "", "--year", "1965", "--genre", "Sci-Fi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The author must not be empty"));

    assert!(!file.exists());
}

#[test]
fn test_add_same_title_overwrites() {
    let (dir, file) = setup();
    add_book(dir.path(), &file, "Dune", "Frank Herbert", true);
    add_book(dir.path(), &file, "Dune", "Brian Herbert", false);

    bookshelf_cmd(dir.path(), &file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune by Brian Herbert - 1965 - Sci-Fi - unread"))
        .stdout(predicate::str::contains("Frank Herbert").not());
}

#[test]
fn test_list_empty_library() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty"));
}

#[test]
fn test_remove_book() {
    let (dir, file) = setup();
    add_book(dir.path(), &file, "Dune", "Frank Herbert", true);

    bookshelf_cmd(dir.path(), &file)
        .args(["remove", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Dune has been removed from the library."));

    bookshelf_cmd(dir.path(), &file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty"));
}

#[test]
fn test_remove_missing_book_is_not_an_error() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .args(["remove", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Dune was not found in the library."));

    // Nothing was removed, so nothing was written
    assert!(!file.exists());
}

#[test]
fn test_search_by_title_and_author() {
    let (dir, file) = setup();
    add_book(dir.path(), &file, "Dune", "Frank Herbert", true);
    add_book(dir.path(), &file, "Neuromancer", "William Gibson", false);

    bookshelf_cmd(dir.path(), &file)
        .args(["search", "title", "NEURO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Neuromancer by William Gibson"))
        .stdout(predicate::str::contains("Dune").not());

    bookshelf_cmd(dir.path(), &file)
        .args(["search", "author", "herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune by Frank Herbert"))
        .stdout(predicate::str::contains("Neuromancer").not());
}

#[test]
fn test_search_no_results() {
    let (dir, file) = setup();
    add_book(dir.path(), &file, "Dune", "Frank Herbert", true);

    bookshelf_cmd(dir.path(), &file)
        .args(["search", "author", "Austen"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No books found for \"austen\" in the author field.",
        ));
}

#[test]
fn test_search_invalid_field() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .args(["search", "genre", "Sci-Fi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'title' or 'author'"));
}

#[test]
fn test_stats() {
    let (dir, file) = setup();
    add_book(dir.path(), &file, "Dune", "Frank Herbert", true);
    add_book(dir.path(), &file, "Emma", "Jane Austen", true);
    add_book(dir.path(), &file, "Ulysses", "James Joyce", false);
    add_book(dir.path(), &file, "Neuromancer", "William Gibson", true);

    bookshelf_cmd(dir.path(), &file)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total books: 4"))
        .stdout(predicate::str::contains("Total read: 3"))
        .stdout(predicate::str::contains("Total unread: 1"))
        .stdout(predicate::str::contains("Percentage read: 75.00%"));
}

#[test]
fn test_stats_empty_library() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Percentage read: 0.00%"));
}

// =============================================================================
// JSON Output
// =============================================================================

#[test]
fn test_list_json() {
    let (dir, file) = setup();
    add_book(dir.path(), &file, "Dune", "Frank Herbert", true);

    let output = bookshelf_cmd(dir.path(), &file)
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(books.as_array().unwrap().len(), 1);
    assert_eq!(books[0]["title"], "Dune");
}

#[test]
fn test_stats_json() {
    let (dir, file) = setup();
    add_book(dir.path(), &file, "Dune", "Frank Herbert", true);
    add_book(dir.path(), &file, "Emma", "Jane Austen", false);

    let output = bookshelf_cmd(dir.path(), &file)
        .args(["stats", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["read"], 1);
    assert_eq!(stats["unread"], 1);
    assert_eq!(stats["read_percentage"], 50.0);
}

// =============================================================================
// Interactive Menu
// =============================================================================

#[test]
fn test_menu_is_default() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the library system."))
        .stdout(predicate::str::contains("6. Exit"));
}

#[test]
fn test_menu_session_round_trip() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .arg("menu")
        .write_stdin("1\nDune\nHerbert\n1965\nSci-Fi\nyes\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Dune has been added to the library."))
        .stdout(predicate::str::contains("Dune by Herbert - 1965 - Sci-Fi - read"));

    // A second session sees the persisted book
    bookshelf_cmd(dir.path(), &file)
        .write_stdin("2\nDune\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book Dune has been removed from the library."))
        .stdout(predicate::str::contains("Library is empty"));
}

#[test]
fn test_menu_invalid_choice() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .write_stdin("seven\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}

#[test]
fn test_menu_exits_on_end_of_input() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty"));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_corrupt_file_fails() {
    let (dir, file) = setup();
    fs::write(&file, "this is not json").unwrap();

    bookshelf_cmd(dir.path(), &file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    // The corrupt file is left as it was
    assert_eq!(fs::read_to_string(&file).unwrap(), "this is not json");
}

#[test]
fn test_reads_existing_library_file() {
    let (dir, file) = setup();
    fs::write(
        &file,
        r#"{"Emma": {"title": "Emma", "author": "Jane Austen", "year": "1815", "genre": "Romance", "read": false}}"#,
    )
    .unwrap();

    bookshelf_cmd(dir.path(), &file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma by Jane Austen - 1815 - Romance - unread"));
}

#[test]
fn test_file_flag_overrides_env() {
    let (dir, file) = setup();
    let other = dir.path().join("other.json");

    bookshelf_cmd(dir.path(), &file)
        .args(["--file", other.to_str().unwrap()])
        .args(["add", "Dune", "-a", "Herbert", "-y", "1965", "-g", "Sci-Fi"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!file.exists());
}

#[test]
fn test_default_file_in_working_directory() {
    let dir = TempDir::new().unwrap();

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"))
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("HOME", dir.path())
        .env_remove("BOOKSHELF_FILE")
        .args(["add", "Dune", "-a", "Herbert", "-y", "1965", "-g", "Sci-Fi"])
        .assert()
        .success();

    assert!(dir.path().join("library.text").exists());
}

#[test]
fn test_unwritable_file_fails() {
    let (dir, _) = setup();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let file = blocker.join("library.text");

    bookshelf_cmd(dir.path(), &file)
        .args(["add", "Dune", "-a", "Herbert", "-y", "1965", "-g", "Sci-Fi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (dir, file) = setup();

    bookshelf_cmd(dir.path(), &file)
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:store] Using library file"));
}
