// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use versus_storage::{VersionStore, DEFAULT_BINARY};

/// Version string shown by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve the state root: VERSUS_HOME > ~/.versus
pub fn versus_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("VERSUS_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".versus"))
        .ok_or_else(|| anyhow!("cannot locate a home directory; set VERSUS_HOME"))
}

/// Executable name inside each version directory (VERSUS_BINARY, default `bin`).
pub fn binary_name() -> String {
    std::env::var("VERSUS_BINARY").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_BINARY.to_string())
}

/// Tracing filter directive (VERSUS_LOG, default `warn`).
pub fn log_filter() -> String {
    std::env::var("VERSUS_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// The version store rooted at [`versus_home`].
pub fn store() -> Result<VersionStore> {
    Ok(VersionStore::new(versus_home()?, binary_name()))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
