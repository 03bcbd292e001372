// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.
//!
//! These never replace a result: the executor always returns a complete
//! [`versus_core::ExecutionResult`] and reports one of these alongside it.

use std::path::PathBuf;
use std::time::Duration;

/// Conditions a caller must react to after running a version's binary.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Binary missing, not executable, or otherwise unspawnable.
    #[error("failed to spawn `{}` for version {version}: {source}", binary.display())]
    SpawnFailed {
        version: String,
        binary: PathBuf,
        source: std::io::Error,
    },

    /// The shared deadline passed before the process exited.
    #[error("version {version} timed out after {}s", timeout.as_secs_f64())]
    TimedOut { version: String, timeout: Duration },

    /// The operation was cancelled (e.g. interrupted) before the process exited.
    #[error("version {version} was cancelled")]
    Cancelled { version: String },

    /// Waiting on or collecting output from the child failed.
    #[error("failed to collect output for version {version}: {source}")]
    Wait {
        version: String,
        source: std::io::Error,
    },
}

impl ExecError {
    pub fn version(&self) -> &str {
        match self {
            ExecError::SpawnFailed { version, .. }
            | ExecError::TimedOut { version, .. }
            | ExecError::Cancelled { version }
            | ExecError::Wait { version, .. } => version,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
