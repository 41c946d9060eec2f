//! End-to-end runs of the one-shot checker binaries with piped input.

use assert_cmd::Command;
use predicates::prelude::*;

fn checker(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_armstrong_reports_armstrong_number() {
    checker("armstrong")
        .write_stdin("153\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("153 is an Armstrong number."));
}

#[test]
fn test_armstrong_reports_non_armstrong_number() {
    checker("armstrong")
        .write_stdin("10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 is not an Armstrong number."));
}

#[test]
fn test_armstrong_zero_is_armstrong() {
    checker("armstrong")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 is an Armstrong number."));
}

#[test]
fn test_armstrong_prints_prompt() {
    checker("armstrong")
        .write_stdin("9474\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number: "));
}

#[test]
fn test_armstrong_handles_missing_trailing_newline() {
    checker("armstrong")
        .write_stdin("9474")
        .assert()
        .success()
        .stdout(predicate::str::contains("9474 is an Armstrong number."));
}

#[test]
fn test_armstrong_rejects_non_numeric_input() {
    checker("armstrong")
        .write_stdin("hello\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'hello' is not a whole number"));
}

#[test]
fn test_armstrong_rejects_negative_input() {
    checker("armstrong")
        .write_stdin("-5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_armstrong_rejects_empty_input() {
    checker("armstrong")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn test_palindrome_reports_palindrome() {
    checker("palindrome")
        .write_stdin("racecar\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'racecar' is a palindrome."));
}

#[test]
fn test_palindrome_reports_non_palindrome() {
    checker("palindrome")
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'hello' is not a palindrome."));
}

#[test]
fn test_palindrome_is_case_sensitive() {
    checker("palindrome")
        .write_stdin("Racecar\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'Racecar' is not a palindrome."));
}

#[test]
fn test_palindrome_preserves_interior_whitespace() {
    checker("palindrome")
        .write_stdin("race car\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'race car' is not a palindrome."));
}

#[test]
fn test_palindrome_empty_line_is_palindrome() {
    checker("palindrome")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'' is a palindrome."));
}

#[test]
fn test_palindrome_eof_behaves_like_empty_line() {
    checker("palindrome")
        .assert()
        .success()
        .stdout(predicate::str::contains("'' is a palindrome."));
}
