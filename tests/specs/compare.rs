// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus compare` specs

use crate::prelude::*;

#[test]
fn identical_output_is_reported_once() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus()
        .args(&["compare", "1.0.0", "2.0.0", "--", "greet", "world"])
        .passes()
        .stdout_has("🔄 Comparing versions: 1.0.0 vs 2.0.0\n📝 Command: greet world\n")
        .stdout_has("✅ OUTPUTS ARE IDENTICAL\n📄 Output (1 lines):")
        .stdout_has("args: greet world")
        .stdout_lacks("OUTPUT DIFFERENCES");
}

#[test]
fn differing_output_shows_side_by_side_marks() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus()
        .args(&["compare", "1.0.0", "2.0.0", "--", "--version"])
        .passes()
        .stdout_has("📊 OUTPUT DIFFERENCES:")
        .stdout_has(&format!("~{:<39} │ ~tool 2.0.0", "tool 1.0.0"));
}

#[test]
fn unified_mode_marks_word_changes() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus()
        .args(&["compare", "--unified", "1.0.0", "2.0.0", "--", "--version"])
        .passes()
        .stdout_has("--- 1.0.0\n+++ 2.0.0\n")
        .stdout_has("- 1.0.0")
        .stdout_has("+ 2.0.0");
}

#[test]
fn exit_code_difference_alone_makes_outputs_differ() {
    let home = Home::with_versions(&["1.0.0"]);
    home.version("2.0.0", "#!/bin/sh\necho same\nexit 2\n");
    home.version("1.0.0", "#!/bin/sh\necho same\n");

    home.versus()
        .args(&["compare", "--timing", "false", "1.0.0", "2.0.0", "--", "run"])
        .passes()
        .stdout_has("🚨 EXIT CODE DIFFERENCE:\n   1.0.0: ✓ 0\n   2.0.0: ✗ 2\n")
        .stdout_has(&format!(" {:<39} │  same\n", "same"))
        .stdout_lacks("EXECUTION TIMING");
}

#[test]
fn aliases_and_latest_resolve_before_running() {
    let home = Home::with_versions(&["1.0.0", "1.10.0", "1.9.0"]);
    home.versus().args(&["alias", "set", "stable", "1.0.0"]).passes();

    home.versus()
        .args(&["compare", "stable", "latest", "--", "--version"])
        .passes()
        .stdout_has("Comparing versions: stable vs latest")
        .stdout_has("~tool 1.0.0")
        .stdout_has("~tool 1.10.0");
}

#[test]
fn unknown_version_fails_before_running() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus()
        .args(&["compare", "1.0.0", "9.9.9", "--", "--version"])
        .fails()
        .code_is(1)
        .stderr_has("error: version 9.9.9 (9.9.9) not found");
}

#[test]
fn missing_separator_is_a_usage_error() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus()
        .args(&["compare", "1.0.0", "2.0.0", "--version"])
        .fails()
        .code_is(1)
        .stderr_has("missing '--' separator")
        .stderr_has("usage: versus compare");
}

#[test]
fn timeout_is_a_warning_not_a_failure() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus()
        .args(&["compare", "--timeout", "1", "1.0.0", "2.0.0", "--", "sleep", "5"])
        .passes()
        .stderr_has("timed out after 1s")
        .stdout_has("COMPARISON RESULTS");
}

#[test]
fn error_output_is_shown_per_version() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.versus()
        .args(&["compare", "1.0.0", "2.0.0", "--", "fail"])
        .passes()
        .stdout_has("🚨 ERROR OUTPUT:\n   1.0.0 ERROR:\nbroken\n   2.0.0 ERROR:\nbroken\n");
}
