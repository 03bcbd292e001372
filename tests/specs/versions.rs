// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version store specs: list, use, remove, clear, link, alias

use crate::prelude::*;

#[test]
fn list_marks_the_current_version() {
    let home = Home::with_versions(&["1.10.0", "1.2.0"]);
    home.versus().args(&["list"]).passes().stdout_eq("Installed versions:\n - 1.2.0\n - 1.10.0\n");

    home.versus().args(&["use", "1.2.0"]).passes().stdout_has("Now using version 1.2.0");
    home.versus().args(&["list"]).passes().stdout_has(" - 1.2.0 (current)\n");
}

#[test]
fn list_with_nothing_installed() {
    Home::empty().versus().args(&["list"]).passes().stdout_has("No versions installed.");
}

#[test]
fn use_latest_picks_newest() {
    let home = Home::with_versions(&["1.9.0", "1.10.0"]);
    home.versus().args(&["use", "latest"]).passes().stdout_has("Now using version 1.10.0");
}

#[test]
fn use_falls_back_to_project_file() {
    let home = Home::with_versions(&["1.0.0", "2.0.0"]);
    home.file(".versus-version", "2.0.0\n");
    home.versus()
        .args(&["use"])
        .passes()
        .stdout_has("Using version from .versus-version: 2.0.0")
        .stdout_has("Now using version 2.0.0");
}

#[test]
fn use_without_selector_or_project_file_fails() {
    Home::with_versions(&["1.0.0"]).versus().args(&["use"]).fails().stderr_has(".versus-version");
}

#[test]
fn use_unknown_version_fails() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus().args(&["use", "3.0.0"]).fails().code_is(1).stderr_has("not found");
}

#[test]
fn remove_and_clear_delete_versions() {
    let home = Home::with_versions(&["1.0.0", "2.0.0", "3.0.0"]);
    home.versus().args(&["remove", "2.0.0"]).passes();
    home.versus().args(&["list"]).passes().stdout_lacks("2.0.0");
    home.versus().args(&["remove", "2.0.0"]).fails().stderr_has("version 2.0.0 is not installed");

    home.versus().args(&["clear"]).passes().stdout_has("All versions removed");
    home.versus().args(&["list"]).passes().stdout_has("No versions installed.");
}

#[test]
fn link_copies_a_local_binary() {
    let home = Home::empty();
    let source = home.work_dir().join("dev-build");
    write_executable(&source, &tool_script("dev"));

    home.versus()
        .args(&["link", "--from", source.to_str().unwrap(), "--name", "dev"])
        .passes()
        .stdout_has("as version dev");
    home.versus().args(&["use", "dev"]).passes();
    home.versus().args(&["exec", "--", "--version"]).passes().stdout_eq("tool dev\n");
}

#[test]
fn link_missing_source_fails() {
    Home::empty()
        .versus()
        .args(&["link", "--from", "/nonexistent/versus-bin", "--name", "dev"])
        .fails()
        .stderr_has("no such file");
}

#[test]
fn alias_lifecycle() {
    let home = Home::with_versions(&["1.0.0"]);
    home.versus().args(&["alias", "set", "stable", "1.0.0"]).passes();
    home.versus().args(&["alias", "get", "stable"]).passes().stdout_eq("1.0.0\n");
    home.versus().args(&["alias", "list"]).passes().stdout_eq("stable => 1.0.0\n");

    home.versus().args(&["use", "stable"]).passes().stdout_has("Using alias 'stable' resolved to version: 1.0.0");

    home.versus().args(&["alias", "remove", "stable"]).passes();
    home.versus().args(&["alias", "get", "stable"]).fails().code_is(1).stderr_has("alias stable does not exist");
}
