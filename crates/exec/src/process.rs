// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run one installed version's binary and capture everything it did.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tracing::Instrument;
use versus_core::{display_command, ExecutionResult, UNSTARTED_EXIT_CODE};

use crate::context::{Interrupt, RunContext};
use crate::error::ExecError;

/// A resolved version and the binary that implements it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub version: String,
    pub binary: PathBuf,
}

impl Target {
    pub fn new(version: impl Into<String>, binary: impl Into<PathBuf>) -> Self {
        Self { version: version.into(), binary: binary.into() }
    }
}

/// A complete result plus the error, if any, the caller should surface.
#[derive(Debug)]
pub struct Execution {
    pub result: ExecutionResult,
    pub error: Option<ExecError>,
}

/// Runs a single attempt of a command against one target.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, target: &Target, args: &[String], ctx: &RunContext) -> Execution;
}

/// Spawns real processes via `tokio::process::Command`.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    inherit_stdin: bool,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self { inherit_stdin: true }
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give children an empty stdin instead of the operator's terminal.
    pub fn null_stdin(mut self) -> Self {
        self.inherit_stdin = false;
        self
    }
}

/// What ended the wait on a child.
enum Waited {
    Exited(std::io::Result<std::process::Output>),
    Interrupted(Interrupt),
}

#[async_trait]
impl Executor for ProcessExecutor {
    async fn execute(&self, target: &Target, args: &[String], ctx: &RunContext) -> Execution {
        let span = tracing::info_span!(
            "versus.exec",
            version = %target.version,
            args = ?args,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let fut = run_process(target, args, ctx, self.inherit_stdin);
        let execution = fut.instrument(span.clone()).await;
        span.record("exit_code", execution.result.exit_code);
        span.record("duration_ms", execution.result.duration.as_millis() as u64);
        execution
    }
}

async fn run_process(target: &Target, args: &[String], ctx: &RunContext, inherit_stdin: bool) -> Execution {
    let started_at = Utc::now();
    let start = Instant::now();
    let mut result = ExecutionResult {
        version: target.version.clone(),
        command: display_command(args),
        stdout: String::new(),
        stderr: String::new(),
        exit_code: UNSTARTED_EXIT_CODE,
        duration: Default::default(),
        started_at,
    };

    let mut process = tokio::process::Command::new(&target.binary);
    process.args(args);
    process.stdin(if inherit_stdin { Stdio::inherit() } else { Stdio::null() });
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());
    // Dropping the wait future on timeout/cancel must not leak the child.
    process.kill_on_drop(true);

    let child = match process.spawn() {
        Ok(child) => child,
        Err(source) => {
            result.duration = start.elapsed();
            tracing::warn!(binary = %target.binary.display(), error = %source, "spawn failed");
            let error = ExecError::SpawnFailed {
                version: target.version.clone(),
                binary: target.binary.clone(),
                source,
            };
            return Execution { result, error: Some(error) };
        }
    };

    let waited = tokio::select! {
        output = child.wait_with_output() => Waited::Exited(output),
        interrupt = ctx.interrupted() => Waited::Interrupted(interrupt),
    };
    result.duration = start.elapsed();

    let error = match waited {
        Waited::Exited(Ok(output)) => {
            result.exit_code = output.status.code().unwrap_or(UNSTARTED_EXIT_CODE);
            result.stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            result.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            None
        }
        Waited::Exited(Err(source)) => {
            Some(ExecError::Wait { version: target.version.clone(), source })
        }
        Waited::Interrupted(Interrupt::DeadlineExceeded) => {
            Some(ExecError::TimedOut { version: target.version.clone(), timeout: ctx.timeout() })
        }
        Waited::Interrupted(Interrupt::Cancelled) => {
            Some(ExecError::Cancelled { version: target.version.clone() })
        }
    };

    if let Some(ref err) = error {
        tracing::warn!(error = %err, "execution did not complete");
    }
    Execution { result, error }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
