// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus benchmark` specs

use crate::prelude::*;

#[test]
fn table_shows_ranking_and_summary() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus()
        .args(&["benchmark", "--iterations", "2", "1.0.0,2.0.0", "--", "--version"])
        .passes()
        .stdout_has("🏁 Benchmarking versions: 1.0.0, 2.0.0\n")
        .stdout_has("🔄 Iterations: 2 per version\n")
        .stdout_has("📊 BENCHMARK RESULTS")
        .stdout_has("🏆 Performance Summary:")
        .stdout_has("100.0%");
}

#[test]
fn json_output_is_machine_readable() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    let run = home
        .versus()
        .args(&["benchmark", "--format", "json", "--iterations", "3", "2.0.0,1.0.0", "--", "go"])
        .passes()
        .stdout_lacks("Benchmarking versions");

    let doc: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    let rows = doc["benchmark_results"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["iterations"], 3);
        assert_eq!(row["success_rate"], 100.0);
    }
}

#[test]
fn csv_output_has_header() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus()
        .args(&["benchmark", "--format", "csv", "--iterations", "1", "1.0.0", "--", "go"])
        .passes()
        .stdout_has("version,iterations,total_time_ms,average_time_ms,min_time_ms,max_time_ms,success_rate\n1.0.0,1,");
}

#[test]
fn failing_command_lowers_success_rate() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus()
        .args(&["benchmark", "--detailed", "--iterations", "2", "1.0.0", "--", "fail"])
        .passes()
        .stdout_has("0.0%")
        .stdout_has("(exit 3)");
}

#[test]
fn zero_iterations_is_rejected() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus()
        .args(&["benchmark", "--iterations", "0", "1.0.0", "--", "go"])
        .fails()
        .stderr_has("iterations must be at least 1");
}

#[test]
fn unknown_selector_fails_before_running() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus()
        .args(&["benchmark", "1.0.0,nope", "--", "go"])
        .fails()
        .code_is(1)
        .stderr_has("version nope (nope) not found");
}

#[test]
fn separator_must_follow_versions() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus()
        .args(&["benchmark", "1.0.0", "go"])
        .fails()
        .stderr_has("missing '--' separator");
}
