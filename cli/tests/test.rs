use assert_cmd::Command;
use predicates::prelude::*;

fn evalexpr() -> Command {
    Command::cargo_bin("evalexpr").unwrap()
}

#[test]
fn evaluates_every_line() {
    evalexpr()
        .write_stdin("1 + 2 * 3\n4^3^2\n(1 + 2) * (3 - 4)\n")
        .assert()
        .success()
        .stdout("7\n262144\n-3\n");
}

#[test]
fn crlf_line_endings() {
    evalexpr()
        .write_stdin("2^3!\r\n")
        .assert()
        .success()
        .stdout("64\n");
}

#[test]
fn failing_line_does_not_stop_the_rest() {
    evalexpr()
        .write_stdin("1 +\n2\n")
        .assert()
        .failure()
        .stdout("2\n")
        .stderr(predicate::str::contains("Missing an operand"));
}

#[test]
fn arithmetic_fault_fails() {
    evalexpr()
        .write_stdin("1 / 0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Attempted to divide by 0"));
}

#[test]
fn expression_from_args() {
    evalexpr()
        .args(["--", "2", "^", "3!"])
        .assert()
        .success()
        .stdout("64\n");
}

#[test]
fn recursive_parser() {
    evalexpr()
        .args(["--parser", "recursive"])
        .write_stdin("  -   3 ^ 2 + - 4 * 8 / 2 + + 3! -- 2 + ((-1) + 1) * 2 \n")
        .assert()
        .success()
        .stdout("-17\n");
}

#[test]
fn unknown_parser() {
    evalexpr().args(["--parser", "pratt"]).assert().failure();
}

#[test]
fn print_tree() {
    evalexpr()
        .args(["--ast", "--", "-3^2 + 1"])
        .assert()
        .success()
        .stdout("((-(3 ^ 2)) + 1)\n");
}

#[test]
fn json_value() {
    evalexpr()
        .args(["-f", "json", "--", "6 * 7"])
        .assert()
        .success()
        .stdout("{\"input\":\"6 * 7\",\"value\":42}\n");
}

#[test]
fn json_error() {
    let expected = "{\"input\":\"3!!\",\"error\":{\"desc\":\"Found an unexpected operator\",\
\"parse_failure\":true,\"spans\":[{\"start\":2,\"end\":3}]}}\n";

    evalexpr()
        .args(["--format", "json"])
        .write_stdin("3!!\n")
        .assert()
        .failure()
        .stdout(expected);
}
