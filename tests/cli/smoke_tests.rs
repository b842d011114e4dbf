use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, livecount};

#[test]
fn shows_help() {
    livecount().arg("--help").assert().success().stdout(predicate::str::contains("livecount"));
}

#[test]
fn counts_a_file() {
    let ws = TempWorkspace::new();
    let path = ws.write_file("hello.txt", "hello world");
    livecount()
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("wc (all): ( 0 | 2 | 11 ) {}\n", path.display()));
}

#[test]
fn counts_stdin() {
    livecount().write_stdin("a  b\n").assert().success().stdout("wc (all): ( 1 | 2 | 5 ) <stdin>\n");
}

#[test]
fn empty_input_is_all_zero() {
    livecount().write_stdin("").assert().success().stdout("wc (all): ( 0 | 0 | 0 ) <stdin>\n");
}

#[test]
fn byte_mode_follows_encoding() {
    livecount()
        .args(["--count", "byte"])
        .write_stdin("héllo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wc (all): ( 0 | 1 | 6 )"));

    livecount()
        .args(["--count", "byte", "--encoding", "utf-16"])
        .write_stdin("héllo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wc (all): ( 0 | 1 | 10 )"));
}

#[test]
fn custom_whitespace_pattern() {
    livecount()
        .args(["--white-space", "[ ,]"])
        .write_stdin("a,b c")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wc (all): ( 0 | 3 | 5 )"));
}

#[test]
fn selections_are_summed() {
    livecount()
        .args(["--select", "0..3", "--select", "8..13"])
        .write_stdin("one two\nthree four")
        .assert()
        .success()
        .stdout(predicate::str::contains("wc (sel): ( 0 | 2 | 8 ) (2 selections) <stdin>"));
}

#[test]
fn empty_selection_prints_nothing() {
    livecount()
        .args(["--select", "2..2"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains("wc (sel)").not());
}

#[test]
fn selection_past_the_end_fails() {
    livecount()
        .args(["--select", "0..10"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside text"));
}

#[test]
fn json_report_per_file() {
    let ws = TempWorkspace::new();
    let first = ws.write_file("a.txt", "one two\n");
    let second = ws.write_file("b.txt", "three");

    let output = livecount().args(["--format", "json"]).arg(&first).arg(&second).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let reports: Vec<Value> = stdout.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["document"]["words"], 2);
    assert_eq!(reports[0]["document"]["lines"], 1);
    assert_eq!(reports[1]["document"]["size"], 5);
    assert_eq!(reports[1]["count"], "character");
}

#[test]
fn missing_file_is_reported_and_others_still_counted() {
    let ws = TempWorkspace::new();
    let present = ws.write_file("present.txt", "x");
    let missing = ws.path().join("missing.txt");

    livecount()
        .arg(&missing)
        .arg(&present)
        .assert()
        .failure()
        .stdout(predicate::str::contains("wc (all): ( 0 | 1 | 1 )"))
        .stderr(predicate::str::contains("[error]").and(predicate::str::contains("missing.txt")));
}

#[test]
fn invalid_pattern_is_rejected() {
    livecount()
        .args(["--white-space", "["])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
