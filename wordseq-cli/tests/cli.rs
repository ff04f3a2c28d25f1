// Integration tests for the wordseq binary

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn wordseq() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("wordseq")
}

// ============================================================================
// Input sources
// ============================================================================

#[test]
fn test_reads_stdin_when_no_files() {
    wordseq()
        .write_stdin("a b c a b c")
        .assert()
        .success()
        .stdout(" 2 [a b c]\n 1 [b c a]\n 1 [c a b]\n");
}

#[test]
fn test_dash_reads_stdin() {
    wordseq()
        .arg("-")
        .write_stdin("The cat sat. The cat sat!")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 2 [the cat sat]\n"));
}

#[test]
fn test_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("input.txt");
    fs::write(&path, "one two three\none two three\n").unwrap();

    wordseq()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 2 [one two three]\n"));
}

#[test]
fn test_multiple_files_are_one_stream() {
    let tmp_dir = TempDir::new().unwrap();
    let first = tmp_dir.path().join("first.txt");
    let second = tmp_dir.path().join("second.txt");
    fs::write(&first, "alpha beta ").unwrap();
    fs::write(&second, "gamma").unwrap();

    // The sequence spans the file boundary.
    wordseq()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(" 1 [alpha beta gamma]\n");
}

#[test]
fn test_file_and_stdin_mixed() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("head.txt");
    fs::write(&path, "x y ").unwrap();

    wordseq()
        .arg(&path)
        .arg("-")
        .write_stdin("z")
        .assert()
        .success()
        .stdout(" 1 [x y z]\n");
}

#[test]
fn test_missing_file_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let missing = tmp_dir.path().join("nope.txt");

    wordseq()
        .arg(&missing)
        .write_stdin("a b c")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_invalid_utf8_is_replaced() {
    wordseq()
        .write_stdin(&b"a \xff b"[..])
        .assert()
        .success()
        .stdout(" 1 [a \u{fffd} b]\n");
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_top_n_limits_output() {
    wordseq()
        .args(["-n", "1"])
        .write_stdin("a b c a b c")
        .assert()
        .success()
        .stdout(" 2 [a b c]\n");
}

#[test]
fn test_sequence_size() {
    wordseq()
        .args(["--sequence-size", "1", "--top-n", "2"])
        .write_stdin("to be or not to be")
        .assert()
        .success()
        .stdout(" 2 [be]\n 2 [to]\n");
}

#[test]
fn test_counts_are_aligned() {
    let text = "w ".repeat(12);
    wordseq()
        .args(["-k", "1"])
        .write_stdin(format!("{text}x"))
        .assert()
        .success()
        .stdout(" 12 [w]\n  1 [x]\n");
}

#[test]
fn test_fold_diacritics() {
    wordseq()
        .args(["-k", "2", "--fold-diacritics"])
        .write_stdin("Café noir, cafe noir")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 2 [cafe noir]\n"));
}

#[test]
fn test_zero_top_n_rejected() {
    wordseq()
        .args(["-n", "0"])
        .write_stdin("a b c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("top_n must be >= 1"));
}

#[test]
fn test_zero_sequence_size_rejected() {
    wordseq()
        .args(["-k", "0"])
        .write_stdin("a b c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sequence_size must be >= 1"));
}

#[test]
fn test_stats_go_to_stderr() {
    wordseq()
        .arg("--stats")
        .write_stdin("a b c d")
        .assert()
        .success()
        .stdout(" 1 [a b c]\n 1 [b c d]\n")
        .stderr(predicate::str::contains("7 tokens, 4 words, 2 sequences"))
        .stderr(predicate::str::contains("2 distinct sequences"));
}

#[test]
fn test_debug_logs_to_stderr() {
    wordseq()
        .arg("--debug")
        .write_stdin("a b c")
        .assert()
        .success()
        .stdout(" 1 [a b c]\n")
        .stderr(predicate::str::contains("top_n"))
        .stderr(predicate::str::contains("pass started"))
        .stderr(predicate::str::contains("pass complete"));
}

#[test]
fn test_empty_input() {
    wordseq()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_help() {
    wordseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--sequence-size"))
        .stdout(predicate::str::contains("--top-n"));
}
