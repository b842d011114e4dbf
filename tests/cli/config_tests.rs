use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, livecount};

#[test]
fn settings_file_selects_byte_mode() {
    let ws = TempWorkspace::new();
    let settings = ws.write_file("settings.json", r#"{"wc":{"characterCount":"byte","encoding":"utf-16"}}"#);

    livecount()
        .arg("--config")
        .arg(&settings)
        .write_stdin("日本")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wc (all): ( 0 | 1 | 4 )"));
}

#[test]
fn command_line_overrides_settings_file() {
    let ws = TempWorkspace::new();
    let settings = ws.write_file("settings.json", r#"{"characterCount":"byte"}"#);

    livecount()
        .arg("--config")
        .arg(&settings)
        .args(["--count", "character"])
        .write_stdin("日本")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wc (all): ( 0 | 1 | 2 )"));
}

#[test]
fn toggled_off_statistics_show_a_dash() {
    let ws = TempWorkspace::new();
    let settings = ws.write_file(
        "settings.json",
        r#"{"defaultDocumentToggle":false,"defaultSelectionToggle":false}"#,
    );

    livecount()
        .arg("--config")
        .arg(&settings)
        .args(["--select", "0..2"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("wc (all): ( - ) <stdin>\nwc (sel): ( - ) <stdin>\n");
}

#[test]
fn unsupported_settings_format() {
    let ws = TempWorkspace::new();
    let settings = ws.write_file("settings.toml", "debug = true");

    livecount()
        .arg("--config")
        .arg(&settings)
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported settings format"));
}

#[test]
fn unknown_count_mode_in_settings() {
    let ws = TempWorkspace::new();
    let settings = ws.write_file("settings.json", r#"{"characterCount":"graphemes"}"#);

    livecount()
        .arg("--config")
        .arg(&settings)
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected character count mode: graphemes"));
}
