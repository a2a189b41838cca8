//! End-to-end tests for the treecat binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Lay out the shared scenario tree:
/// `file1.go`, `file2.txt`, and `dir/file3.go`.
fn setup_tree() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(dir.path().join("file1.go"), "package main").unwrap();
    fs::write(dir.path().join("file2.txt"), "plain text").unwrap();
    fs::create_dir(dir.path().join("dir")).unwrap();
    fs::write(dir.path().join("dir").join("file3.go"), "package sub").unwrap();
    dir
}

fn treecat() -> Command {
    Command::cargo_bin("treecat").expect("binary not built")
}

#[test]
fn prints_tree_and_matching_file_contents() {
    let dir = setup_tree();

    treecat()
        .current_dir(dir.path())
        .args([".", "--filter", "go"])
        .assert()
        .success()
        .stdout("./\n./dir/\n./dir/file3.go\npackage sub\n./file1.go\npackage main\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn ignored_directory_is_pruned_entirely() {
    let dir = setup_tree();

    treecat()
        .current_dir(dir.path())
        .args([".", "-f", "go", "-i", "dir"])
        .assert()
        .success()
        .stdout("./\n./file1.go\npackage main\n");
}

#[test]
fn empty_filter_value_includes_every_file() {
    let dir = setup_tree();

    treecat()
        .current_dir(dir.path())
        .args([".", "--filter", ""])
        .assert()
        .success()
        .stdout(
            "./\n./dir/\n./dir/file3.go\npackage sub\n./file1.go\npackage main\n./file2.txt\nplain text\n",
        );
}

#[test]
fn missing_filter_flag_is_a_usage_error() {
    let dir = setup_tree();

    treecat()
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--filter"));
}

#[test]
fn missing_path_argument_is_a_usage_error() {
    treecat()
        .args(["--filter", "go"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn extra_positional_arguments_are_a_usage_error() {
    let dir = setup_tree();

    treecat()
        .arg(dir.path())
        .args(["extra", "--filter", "go"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_root_fails_with_scan_error() {
    treecat()
        .args(["/nonexistent/treecat-e2e", "--filter", "go"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to scan directory"));
}

#[test]
#[cfg(unix)]
fn read_failure_aborts_after_earlier_output() {
    use std::os::unix::fs::PermissionsExt;

    let dir = setup_tree();
    let blocked = dir.path().join("zzz.go");
    fs::write(&blocked, "unreadable").unwrap();

    let mut perms = fs::metadata(&blocked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&blocked, perms).unwrap();

    if fs::read(&blocked).is_ok() {
        // Permission bits are not enforced here (e.g. running as root), so
        // the abort path cannot be provoked this way.
        return;
    }

    // zzz.go sorts last: everything before it is already on stdout when the
    // read fails, and stays there.
    treecat()
        .current_dir(dir.path())
        .args([".", "-f", "go"])
        .assert()
        .failure()
        .stdout("./\n./dir/\n./dir/file3.go\npackage sub\n./file1.go\npackage main\n")
        .stderr(predicate::str::contains("failed to read file"));
}
