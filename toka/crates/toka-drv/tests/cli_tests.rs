//! CLI Interface E2E Tests
//!
//! These tests run the `toka` binary and check its stdout, stderr and exit
//! status for clean input, lexical errors, legacy mode and I/O failures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the toka binary
fn toka_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_toka"))
}

/// A command running in an empty directory with no toka environment set,
/// so no stray `toka.toml` or variable changes the behavior.
fn toka(dir: &TempDir) -> Command {
    let mut cmd = Command::new(toka_bin());
    cmd.current_dir(dir.path())
        .env_remove("TOKA_CONFIG")
        .env_remove("TOKA_VERBOSE")
        .env_remove("TOKA_NO_COLOR");
    cmd
}

fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

#[test]
fn test_cli_help() {
    let dir = temp_dir();
    toka(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version() {
    let dir = temp_dir();
    toka(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_stdin_program() {
    let dir = temp_dir();
    toka(&dir)
        .write_stdin("if(x<10){return x;}")
        .assert()
        .success()
        .stdout(
            "If\nLPar\nIdent(x)\nLt\nNumber(10)\nRPar\nLBrace\nReturn\nIdent(x)\nSemicolon\nRBrace",
        )
        .stderr("");
}

#[test]
fn test_cli_single_token_has_no_newline() {
    let dir = temp_dir();
    toka(&dir)
        .write_stdin("007\n")
        .assert()
        .success()
        .stdout("Number(007)");
}

#[test]
fn test_cli_empty_input() {
    let dir = temp_dir();
    toka(&dir).write_stdin("").assert().success().stdout("");
    toka(&dir).write_stdin("  \n\t ").assert().success().stdout("");
}

#[test]
fn test_cli_dash_reads_stdin() {
    let dir = temp_dir();
    toka(&dir)
        .arg("-")
        .write_stdin("a == b")
        .assert()
        .success()
        .stdout("Ident(a)\nEqual\nIdent(b)");
}

#[test]
fn test_cli_file_input() {
    let dir = temp_dir();
    let path = dir.path().join("loop.toka");
    std::fs::write(&path, "while (i < 3) { i = i + 1; }\n").unwrap();

    toka(&dir)
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "While\nLPar\nIdent(i)\nLt\nNumber(3)\nRPar\nLBrace\n\
             Ident(i)\nAssign\nIdent(i)\nPlus\nNumber(1)\nSemicolon\nRBrace",
        );
}

#[test]
fn test_cli_lexical_error() {
    let dir = temp_dir();
    toka(&dir)
        .write_stdin("x & y")
        .assert()
        .code(1)
        .stdout("Ident(x)")
        .stderr(
            predicate::str::contains("error[E1001]: unexpected character '&'")
                .and(predicate::str::contains(" --> <stdin>:1:3")),
        );
}

#[test]
fn test_cli_lexical_error_names_file() {
    let dir = temp_dir();
    let path = dir.path().join("bad.toka");
    std::fs::write(&path, "x = 1;\ny = #;").unwrap();

    toka(&dir)
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad.toka:2:5"));
}

#[test]
fn test_cli_legacy_errors_flag() {
    let dir = temp_dir();
    toka(&dir)
        .arg("--legacy-errors")
        .write_stdin("x & y")
        .assert()
        .success()
        .stdout("Ident(x)\nErr");
}

#[test]
fn test_cli_legacy_errors_from_config() {
    let dir = temp_dir();
    std::fs::write(dir.path().join("toka.toml"), "[output]\nlegacy_errors = true\n").unwrap();

    toka(&dir)
        .write_stdin("&")
        .assert()
        .success()
        .stdout("\nErr");
}

#[test]
fn test_cli_explicit_config() {
    let dir = temp_dir();
    let config = dir.path().join("alt.toml");
    std::fs::write(&config, "[output]\nlegacy_errors = true\n").unwrap();

    toka(&dir)
        .arg("--config")
        .arg(&config)
        .write_stdin("a;!")
        .assert()
        .success()
        .stdout("Ident(a)\nSemicolon\nErr");
}

#[test]
fn test_cli_missing_config() {
    let dir = temp_dir();
    toka(&dir)
        .arg("--config")
        .arg("missing.toml")
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_malformed_config() {
    let dir = temp_dir();
    std::fs::write(dir.path().join("toka.toml"), "[output\n").unwrap();

    toka(&dir)
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("error: Configuration error"));
}

#[test]
fn test_cli_missing_input_file() {
    let dir = temp_dir();
    toka(&dir)
        .arg("does_not_exist.toka")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("error: cannot open does_not_exist.toka"));
}

#[test]
fn test_cli_invalid_utf8() {
    let dir = temp_dir();
    toka(&dir)
        .write_stdin(&b"x \xFF"[..])
        .assert()
        .code(2)
        .stdout("Ident(x)")
        .stderr(predicate::str::contains("error: failed to read input"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let dir = temp_dir();
    toka(&dir)
        .args(["--verbose", "--no-color"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("Ident(x)")
        .stderr(predicate::str::contains("input exhausted"));
}
