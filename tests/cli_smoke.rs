//! CLI binary smoke tests using assert_cmd.
//!
//! These run the compiled `matfact` binary end to end: argument parsing,
//! exit codes, and the printed matrices.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("matfact").unwrap()
}

fn write_grid(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

#[test]
fn no_args_is_usage_error() {
    cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("factorization"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matfact"));
}

#[test]
fn unknown_factorization_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "1\n1\n2\n");
    cmd().arg(&a).args(["-f", "qr"]).assert().code(1);
}

// ---------------------------------------------------------------------------
// File errors
// ---------------------------------------------------------------------------

#[test]
fn missing_first_file_exits_2() {
    cmd()
        .arg("/nonexistent/a.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("/nonexistent/a.txt"));
}

#[test]
fn missing_second_file_exits_3() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "1\n1\n2\n");
    cmd().arg(&a).arg("/nonexistent/b.txt").assert().code(3);
}

#[test]
fn malformed_first_file_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "2\n2\n1,2\n");
    cmd()
        .env_remove("MATFACT_LOG")
        .arg(&a)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse matrix file"))
        .stderr(predicate::str::contains("Expected 2 rows but found only 1"));
}

// ---------------------------------------------------------------------------
// Single-matrix mode
// ---------------------------------------------------------------------------

#[test]
fn lu_prints_factors() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "2\n2\n4,3\n6,3\n");
    cmd()
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A:\n  4  3\n  6  3\n\nP:\n  0  1\n  1  0\n"))
        .stdout(predicate::str::contains("L:\n"))
        .stdout(predicate::str::contains("U:\n"));
}

#[test]
fn lu_singular_matrix_fails() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "2\n2\n0,1\n0,2\n");
    cmd().arg(&a).assert().code(1);
}

#[test]
fn cholesky_prints_r() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "2\n2\n4,2\n2,3\n");
    cmd()
        .arg(&a)
        .args(["--factorization", "cholesky", "--precision", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R:\n  2.000  1.000\n  0.000  1.414\n"));
}

#[test]
fn hessenberg_prints_h() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "3\n3\n1,2,3\n4,5,6\n7,8,9\n");
    cmd()
        .arg(&a)
        .args(["-f", "hessenberg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H:\n"));
}

#[test]
fn config_file_selects_factorization() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "2\n2\n4,2\n2,3\n");
    let cfg = write_grid(&dir, "cfg.json", r#"{"factorization": "cholesky"}"#);
    cmd()
        .arg(&a)
        .arg("--config")
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("R:\n"));
}

// ---------------------------------------------------------------------------
// Two-matrix mode
// ---------------------------------------------------------------------------

#[test]
fn product_of_two_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "2\n2\n1,2\n3,4\n");
    let b = write_grid(&dir, "b.txt", "2\n1\n5\n6\n");
    cmd()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("AB:\n  17\n  39\n"));
}

#[test]
fn product_shape_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_grid(&dir, "a.txt", "2\n3\n1,2,3\n4,5,6\n");
    let b = write_grid(&dir, "b.txt", "2\n2\n1,0\n0,1\n");
    cmd().arg(&a).arg(&b).assert().code(1);
}
