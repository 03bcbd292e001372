// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of a single subprocess invocation against one installed version.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Exit code recorded when a process could not be started, was killed by a
/// signal, or was cancelled before it exited on its own.
pub const UNSTARTED_EXIT_CODE: i32 = 1;

/// Captured stdout/stderr, exit code, and timing for one run of one version.
///
/// A failed run is still a complete record: `duration` and `exit_code` are
/// always set by the executor, including on its own error paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Resolved version identifier (never an alias).
    pub version: String,
    /// The argument vector, joined with spaces for display.
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Wall-clock time from spawn to completion (or to cancellation).
    pub duration: Duration,
    /// Display-only correlation timestamp.
    pub started_at: DateTime<Utc>,
}

impl ExecutionResult {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Reconciled output used for display and equality.
    ///
    /// Successful runs fold stderr into the output, since many CLIs print
    /// informational text there. Failed runs keep stdout alone; their stderr
    /// is reported through [`ExecutionResult::error_text`].
    pub fn output(&self) -> String {
        if !self.succeeded() {
            return self.stdout.clone();
        }
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (false, false) => format!("{}\n{}", self.stdout, self.stderr),
            (false, true) => self.stdout.clone(),
            (true, _) => self.stderr.clone(),
        }
    }

    /// Stderr of a failed run; empty for successful runs.
    pub fn error_text(&self) -> &str {
        if self.succeeded() {
            ""
        } else {
            &self.stderr
        }
    }
}

/// Join an argument vector the way it is shown to the operator.
pub fn display_command(args: &[String]) -> String {
    args.join(" ")
}

crate::builder! {
    ExecutionResultBuilder => ExecutionResult {
        version: String = "1.0.0",
        command: String = "--version",
        stdout: String = "",
        stderr: String = "",
        exit_code: i32 = 0_i32,
        duration: Duration = Duration::from_millis(10),
        started_at: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH,
    }
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
