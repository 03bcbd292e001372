// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline and cancellation boundary shared by concurrent executions.

use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why an in-flight execution stopped waiting on its process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    DeadlineExceeded,
    Cancelled,
}

/// An optional deadline plus a cancellation token.
///
/// Cloning shares both: every execution holding a clone observes the same
/// deadline and the same cancellation.
#[derive(Debug, Clone)]
pub struct RunContext {
    deadline: Option<Instant>,
    timeout: Duration,
    cancel: CancellationToken,
}

impl RunContext {
    /// Deadline `timeout` from now, under `cancel`.
    pub fn new(timeout: Duration, cancel: CancellationToken) -> Self {
        Self { deadline: Some(Instant::now() + timeout), timeout, cancel }
    }

    /// No deadline; only `cancel` interrupts.
    pub fn unbounded(cancel: CancellationToken) -> Self {
        Self { deadline: None, timeout: Duration::ZERO, cancel }
    }

    /// Deadline `timeout` from now with a fresh, never-cancelled token.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, CancellationToken::new())
    }

    /// A fresh deadline that shares this context's cancellation token.
    pub fn renewed(&self, timeout: Duration) -> Self {
        Self::new(timeout, self.cancel.clone())
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Length of the deadline window; zero when unbounded.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Resolves when the deadline passes or the token is cancelled.
    pub async fn interrupted(&self) -> Interrupt {
        let Some(deadline) = self.deadline else {
            self.cancel.cancelled().await;
            return Interrupt::Cancelled;
        };
        tokio::select! {
            _ = self.cancel.cancelled() => Interrupt::Cancelled,
            _ = tokio::time::sleep_until(deadline) => Interrupt::DeadlineExceeded,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
