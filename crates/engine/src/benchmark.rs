// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! N-way benchmarking: versions run concurrently, iterations sequentially.

use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use versus_core::{BenchmarkRanking, BenchmarkResult};
use versus_exec::{ExecError, Execution, Executor, RunContext, Target};

use crate::catalog::{resolve_all, VersionCatalog};
use crate::engine::{Engine, DEFAULT_TIMEOUT};
use crate::error::{EngineError, UsageError};
use crate::request::BenchmarkRequest;

pub const DEFAULT_ITERATIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkOptions {
    pub iterations: u32,
    /// Deadline for each iteration, not the whole run.
    pub timeout: Duration,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS, timeout: DEFAULT_TIMEOUT }
    }
}

/// One iteration that did not complete normally.
#[derive(Debug)]
pub struct IterationFailure {
    pub version: String,
    /// 1-based.
    pub iteration: u32,
    pub error: ExecError,
    at: Instant,
}

#[derive(Debug)]
pub struct BenchmarkReport {
    pub command: Vec<String>,
    pub ranking: BenchmarkRanking,
    /// Grouped by version in selector order, iterations ascending.
    pub failures: Vec<IterationFailure>,
}

impl BenchmarkReport {
    /// The earliest failure observed across all versions.
    pub fn first_error(&self) -> Option<&ExecError> {
        self.failures.iter().min_by_key(|f| f.at).map(|f| &f.error)
    }
}

impl<C, E> Engine<C, E>
where
    C: VersionCatalog,
    E: Executor,
{
    /// Run the request's command `options.iterations` times per version.
    ///
    /// Every selector is resolved before anything spawns. A failed iteration
    /// is recorded and the version moves on to its next iteration.
    pub async fn benchmark(
        &self,
        request: &BenchmarkRequest,
        options: &BenchmarkOptions,
        cancel: CancellationToken,
    ) -> Result<BenchmarkReport, EngineError> {
        if options.iterations == 0 {
            return Err(UsageError::ZeroIterations.into());
        }
        let resolved = resolve_all(&self.catalog, &request.selectors)?;

        let parent = RunContext::new(options.timeout, cancel);
        let runs = join_all(
            resolved
                .iter()
                .map(|r| self.run_version(&r.target, &request.command, options, &parent)),
        )
        .await;

        let mut results = Vec::with_capacity(runs.len());
        let mut failures = Vec::new();
        for (result, version_failures) in runs {
            results.push(result);
            failures.extend(version_failures);
        }
        let ranking = BenchmarkRanking::rank(results);
        tracing::debug!(versions = ranking.results().len(), failures = failures.len(), "benchmark finished");

        Ok(BenchmarkReport { command: request.command.clone(), ranking, failures })
    }

    async fn run_version(
        &self,
        target: &Target,
        command: &[String],
        options: &BenchmarkOptions,
        parent: &RunContext,
    ) -> (BenchmarkResult, Vec<IterationFailure>) {
        let mut executions = Vec::with_capacity(options.iterations as usize);
        let mut failures = Vec::new();

        for iteration in 1..=options.iterations {
            let ctx = parent.renewed(options.timeout);
            let Execution { result, error } = self.executor.execute(target, command, &ctx).await;
            if let Some(error) = error {
                tracing::warn!(version = %target.version, iteration, %error, "iteration failed");
                failures.push(IterationFailure {
                    version: target.version.clone(),
                    iteration,
                    error,
                    at: Instant::now(),
                });
            }
            executions.push(result);
        }

        (BenchmarkResult::aggregate(target.version.clone(), executions), failures)
    }
}

#[cfg(test)]
#[path = "benchmark_tests.rs"]
mod tests;
