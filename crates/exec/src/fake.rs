// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted executor for engine tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use versus_core::{display_command, ExecutionResult, UNSTARTED_EXIT_CODE};

use crate::context::{Interrupt, RunContext};
use crate::error::ExecError;
use crate::process::{Execution, Executor, Target};

/// One scripted response.
#[derive(Debug, Clone)]
pub enum Scripted {
    Exit { stdout: String, stderr: String, exit_code: i32, duration: Duration },
    /// Reports a deadline overrun after `duration`.
    TimeOut { duration: Duration },
    SpawnFailure,
}

impl Scripted {
    pub fn ok(stdout: &str, duration: Duration) -> Self {
        Scripted::Exit { stdout: stdout.to_string(), stderr: String::new(), exit_code: 0, duration }
    }

    pub fn exit(exit_code: i32, stdout: &str, stderr: &str, duration: Duration) -> Self {
        Scripted::Exit {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
            duration,
        }
    }

    fn duration(&self) -> Duration {
        match self {
            Scripted::Exit { duration, .. } | Scripted::TimeOut { duration } => *duration,
            Scripted::SpawnFailure => Duration::ZERO,
        }
    }
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCall {
    pub version: String,
    pub args: Vec<String>,
}

#[derive(Default)]
struct FakeState {
    queued: HashMap<String, VecDeque<Scripted>>,
    fallback: HashMap<String, Scripted>,
    calls: Vec<FakeCall>,
}

/// Executor returning scripted outcomes per version.
///
/// Queued responses are consumed in order; once a version's queue is empty
/// its fallback (default: exit 0 with no output) repeats. With
/// [`FakeExecutor::simulate_time`] each response sleeps for its duration
/// and honors the context's deadline and cancellation.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    state: Arc<Mutex<FakeState>>,
    simulate_time: bool,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulate_time(mut self) -> Self {
        self.simulate_time = true;
        self
    }

    /// Queue responses for `version`, consumed one per call.
    pub fn script(self, version: &str, responses: impl IntoIterator<Item = Scripted>) -> Self {
        self.state.lock().queued.entry(version.to_string()).or_default().extend(responses);
        self
    }

    /// Response repeated for `version` once its queue is exhausted.
    pub fn always(self, version: &str, response: Scripted) -> Self {
        self.state.lock().fallback.insert(version.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.state.lock().calls.clone()
    }

    fn next(&self, version: &str, args: &[String]) -> Scripted {
        let mut state = self.state.lock();
        state.calls.push(FakeCall { version: version.to_string(), args: args.to_vec() });
        if let Some(next) = state.queued.get_mut(version).and_then(VecDeque::pop_front) {
            return next;
        }
        state
            .fallback
            .get(version)
            .cloned()
            .unwrap_or_else(|| Scripted::ok("", Duration::from_millis(1)))
    }
}

#[async_trait]
impl Executor for FakeExecutor {
    async fn execute(&self, target: &Target, args: &[String], ctx: &RunContext) -> Execution {
        let scripted = self.next(&target.version, args);
        let mut result = ExecutionResult {
            version: target.version.clone(),
            command: display_command(args),
            stdout: String::new(),
            stderr: String::new(),
            exit_code: UNSTARTED_EXIT_CODE,
            duration: scripted.duration(),
            started_at: Utc::now(),
        };

        if self.simulate_time {
            let start = tokio::time::Instant::now();
            let interrupted = tokio::select! {
                _ = tokio::time::sleep(scripted.duration()) => None,
                interrupt = ctx.interrupted() => Some(interrupt),
            };
            result.duration = start.elapsed();
            match interrupted {
                Some(Interrupt::DeadlineExceeded) => {
                    let error = ExecError::TimedOut {
                        version: target.version.clone(),
                        timeout: ctx.timeout(),
                    };
                    return Execution { result, error: Some(error) };
                }
                Some(Interrupt::Cancelled) => {
                    let error = ExecError::Cancelled { version: target.version.clone() };
                    return Execution { result, error: Some(error) };
                }
                None => {}
            }
        }

        let error = match scripted {
            Scripted::Exit { stdout, stderr, exit_code, .. } => {
                result.stdout = stdout;
                result.stderr = stderr;
                result.exit_code = exit_code;
                None
            }
            Scripted::TimeOut { .. } => {
                Some(ExecError::TimedOut { version: target.version.clone(), timeout: ctx.timeout() })
            }
            Scripted::SpawnFailure => Some(ExecError::SpawnFailed {
                version: target.version.clone(),
                binary: target.binary.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted spawn failure"),
            }),
        };
        Execution { result, error }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
