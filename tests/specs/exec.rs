// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus exec` and `versus history` specs

use crate::prelude::*;

fn home_using(version: &str) -> Home {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus().args(&["use", version]).passes();
    home
}

#[test]
fn exec_without_current_version_fails() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus()
        .args(&["exec", "--", "status"])
        .fails()
        .code_is(1)
        .stderr_has("No current version set");
}

#[test]
fn exec_relays_output_and_records_history() {
    let home = home_using("1.0.0");
    home.versus().args(&["exec", "--", "greet", "--loud"]).passes().stdout_eq("args: greet --loud\n");

    home.versus()
        .args(&["history"])
        .passes()
        .stdout_has("📊 VERSUS USAGE HISTORY")
        .stdout_has("greet --loud")
        .stdout_has("📈 Total entries: 1");
    assert!(home.path().join("history.json").is_file());
}

#[test]
fn exec_forwards_child_exit_code() {
    let home = home_using("2.0.0");
    home.versus().args(&["exec", "--", "fail"]).fails().code_is(3).stderr_has("broken");

    let run = home.versus().args(&["history", "--format", "json", "--failures-only"]).passes();
    let doc: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(doc[0]["version"], "2.0.0");
    assert_eq!(doc[0]["exit_code"], 3);
    assert_eq!(doc[0]["stderr"], "broken\n");
}

#[test]
fn history_filters_and_stats() {
    let home = home_using("1.0.0");
    home.versus().args(&["exec", "--", "build"]).passes();
    home.versus().args(&["exec", "--", "build"]).passes();
    home.versus().args(&["exec", "--", "test"]).passes();

    home.versus()
        .args(&["history", "--command", "BUILD"])
        .passes()
        .stdout_has("📈 Total entries: 2");
    home.versus()
        .args(&["history", "--version", "2.0.0"])
        .passes()
        .stdout_eq("📭 No history entries found.\n");
    home.versus()
        .args(&["history", "--stats"])
        .passes()
        .stdout_has("🔢 VERSION USAGE:")
        .stdout_has(&format!("{:<50} (2 times)", "build"))
        .stdout_has("Total entries: 3");
    home.versus().args(&["history", "--limit", "1"]).passes().stdout_has("📈 Total entries: 1");
}

#[test]
fn history_clear_removes_the_file() {
    let home = home_using("1.0.0");
    home.versus().args(&["history", "--clear"]).passes().stdout_has("No history file found.");
    home.versus().args(&["exec", "--", "x"]).passes();
    home.versus().args(&["history", "--clear"]).passes().stdout_has("History cleared successfully.");
    home.versus().args(&["history"]).passes().stdout_has("No history entries found.");
}
