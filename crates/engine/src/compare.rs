// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pairwise comparison: two versions, one command, one shared deadline.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use versus_core::ComparisonOutcome;
use versus_exec::{ExecError, Executor, RunContext};

use crate::catalog::{resolve, Resolved, VersionCatalog};
use crate::engine::{Engine, DEFAULT_TIMEOUT};
use crate::error::EngineError;
use crate::request::CompareRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    pub timeout: Duration,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT }
    }
}

/// Everything a renderer needs to present a comparison.
#[derive(Debug)]
pub struct ComparisonReport {
    pub left: Resolved,
    pub right: Resolved,
    pub command: Vec<String>,
    pub outcome: ComparisonOutcome,
    /// Execution errors from either side, left first.
    pub warnings: Vec<ExecError>,
}

impl<C, E> Engine<C, E>
where
    C: VersionCatalog,
    E: Executor,
{
    /// Run the request's command against both versions at once.
    ///
    /// Resolution errors are returned before anything spawns. Execution
    /// errors never abort the other side; they come back as warnings next
    /// to two complete results.
    pub async fn compare(
        &self,
        request: &CompareRequest,
        options: &CompareOptions,
        cancel: CancellationToken,
    ) -> Result<ComparisonReport, EngineError> {
        let left = resolve(&self.catalog, &request.left)?;
        let right = resolve(&self.catalog, &request.right)?;

        let ctx = RunContext::new(options.timeout, cancel);
        let (l, r) = tokio::join!(
            self.executor.execute(&left.target, &request.command, &ctx),
            self.executor.execute(&right.target, &request.command, &ctx),
        );

        let warnings: Vec<ExecError> = [l.error, r.error].into_iter().flatten().collect();
        let outcome = ComparisonOutcome::classify(l.result, r.result);
        tracing::debug!(
            left = %left.target.version,
            right = %right.target.version,
            identical = outcome.is_identical(),
            warnings = warnings.len(),
            "comparison finished"
        );

        Ok(ComparisonReport { left, right, command: request.command.clone(), outcome, warnings })
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
