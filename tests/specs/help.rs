// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage_and_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("compare")
        .stdout_has("benchmark")
        .stdout_has("history");
}

#[test]
fn compare_help_lists_diff_flags() {
    cli()
        .args(&["compare", "--help"])
        .passes()
        .stdout_has("--unified")
        .stdout_has("--full-width")
        .stdout_has("--timing");
}

#[test]
fn alias_help_shows_subcommands() {
    cli().args(&["alias", "--help"]).passes().stdout_has("set").stdout_has("get").stdout_has("list");
}

#[test]
fn version_flag_prints_version() {
    cli().args(&["--version"]).passes().stdout_has("versus 0.2");
}

#[test]
fn no_args_is_a_usage_error() {
    cli().fails().code_is(2);
}
