use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, livecount};

#[test]
fn replays_edits_through_incremental_updates() {
    let ws = TempWorkspace::new();
    let doc = ws.write_file("doc.txt", "foo bar");
    let script = ws.write_file(
        "edits.jsonl",
        "{\"start\":3,\"removedLen\":1}\n\n{\"start\":3,\"inserted\":\" \"}\n[{\"start\":0,\"inserted\":\"x \"},{\"start\":7,\"inserted\":\"\\n\"}]\n",
    );

    let name = doc.display().to_string();
    livecount()
        .arg("--verify")
        .arg("--edits")
        .arg(&script)
        .arg(&doc)
        .assert()
        .success()
        .stdout(format!(
            "wc (all): ( 0 | 2 | 7 ) {name} #0\n\
             wc (all): ( 0 | 1 | 6 ) {name} #1\n\
             wc (all): ( 0 | 2 | 7 ) {name} #2\n\
             wc (all): ( 1 | 3 | 10 ) {name} #3\n"
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn replay_from_stdin_with_selection() {
    let ws = TempWorkspace::new();
    let script = ws.write_file("edits.jsonl", "{\"edits\":[{\"start\":5,\"removedLen\":0,\"inserted\":\"big \"}]}\n");

    livecount()
        .args(["--select", "0..3"])
        .arg("--edits")
        .arg(&script)
        .write_stdin("some text")
        .assert()
        .success()
        .stdout(predicate::str::contains("wc (all): ( 0 | 3 | 13 ) <stdin> #1"))
        .stdout(predicate::str::contains("wc (sel): ( 0 | 1 | 3 ) <stdin> #1"));
}

#[test]
fn rejected_batch_is_resynced_from_host_text() {
    let ws = TempWorkspace::new();
    let script = ws.write_file(
        "edits.jsonl",
        "{\"edits\":[{\"start\":9,\"removedLen\":1}],\"text\":\"a b c\"}\n{\"start\":5,\"inserted\":\" d\"}\n",
    );

    livecount()
        .arg("--edits")
        .arg(&script)
        .write_stdin("ab")
        .assert()
        .failure()
        .stdout(predicate::str::contains("wc (all): ( 0 | 3 | 5 ) <stdin> #1"))
        .stdout(predicate::str::contains("wc (all): ( 0 | 4 | 7 ) <stdin> #2"))
        .stderr(predicate::str::contains("[warn] Rejected edits"));
}

#[test]
fn malformed_script_line_is_located() {
    let ws = TempWorkspace::new();
    let script = ws.write_file("edits.jsonl", "[]\nnot json\n");

    livecount()
        .arg("--edits")
        .arg(&script)
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid edit script line 2"));
}

#[test]
fn edits_need_a_single_document() {
    let ws = TempWorkspace::new();
    let a = ws.write_file("a.txt", "a");
    let b = ws.write_file("b.txt", "b");
    let script = ws.write_file("edits.jsonl", "");

    livecount()
        .arg("--edits")
        .arg(&script)
        .arg(&a)
        .arg(&b)
        .assert()
        .failure()
        .stderr(predicate::str::contains("single document"));
}
