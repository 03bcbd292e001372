// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error types.
//!
//! Everything here is fatal and raised before any process is spawned.
//! Per-execution failures travel as [`versus_exec::ExecError`] warnings.

use std::path::PathBuf;

pub const COMPARE_USAGE: &str = "versus compare <version1> <version2> -- <command> [args...]";
pub const BENCHMARK_USAGE: &str = "versus benchmark <version1,version2,...> -- <command> [args...]";

/// Malformed operator arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("usage: {usage}")]
    TooFewArguments { usage: &'static str },

    #[error("missing '--' separator\nusage: {usage}")]
    MissingSeparator { usage: &'static str },

    #[error("no versions specified\nusage: {usage}")]
    NoVersions { usage: &'static str },

    #[error("blank version in '{list}'")]
    BlankSelector { list: String },

    #[error("no command specified after '--'")]
    EmptyCommand,

    #[error("iterations must be at least 1")]
    ZeroIterations,
}

/// Why a catalog could not produce a binary for a version.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("version is not installed")]
    MissingVersion,

    #[error("binary not found at {}", path.display())]
    MissingBinary { path: PathBuf },

    #[error("no versions are installed")]
    NothingInstalled,

    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A selector that did not resolve to an installed binary.
#[derive(Debug, thiserror::Error)]
#[error("version {selector} ({version}) not found: {source}")]
pub struct ResolveError {
    pub selector: String,
    pub version: String,
    pub source: CatalogError,
}

/// Errors returned by the comparison and benchmark engines.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
