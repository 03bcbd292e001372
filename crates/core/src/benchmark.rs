// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-version benchmark aggregation and cross-version ranking.

use crate::ExecutionResult;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::time::Duration;

/// All iterations for one version, with aggregate timing statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub version: String,
    pub iterations: u32,
    /// One entry per iteration, in iteration order.
    pub executions: Vec<ExecutionResult>,
    pub total_time: Duration,
    pub average_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    /// Percentage of iterations that exited 0, in `[0, 100]`.
    pub success_rate: f64,
}

impl BenchmarkResult {
    /// Aggregate a completed sequence of iterations.
    pub fn aggregate(version: impl Into<String>, executions: Vec<ExecutionResult>) -> Self {
        let iterations = executions.len() as u32;
        let mut total_time = Duration::ZERO;
        let mut min_time = Duration::MAX;
        let mut max_time = Duration::ZERO;
        let mut successes = 0u32;

        for exec in &executions {
            total_time += exec.duration;
            min_time = min_time.min(exec.duration);
            max_time = max_time.max(exec.duration);
            if exec.succeeded() {
                successes += 1;
            }
        }

        let (average_time, success_rate) = if iterations == 0 {
            min_time = Duration::ZERO;
            (Duration::ZERO, 0.0)
        } else {
            (total_time / iterations, f64::from(successes) * 100.0 / f64::from(iterations))
        };

        Self {
            version: version.into(),
            iterations,
            executions,
            total_time,
            average_time,
            min_time,
            max_time,
            success_rate,
        }
    }

    /// Machine-readable summary (milliseconds, two decimals).
    pub fn summary(&self) -> BenchmarkSummary {
        BenchmarkSummary {
            version: self.version.clone(),
            iterations: self.iterations,
            total_time_ms: round2(millis(self.total_time)),
            average_time_ms: round2(millis(self.average_time)),
            min_time_ms: round2(millis(self.min_time)),
            max_time_ms: round2(millis(self.max_time)),
            success_rate: round2(self.success_rate),
        }
    }
}

/// Flat row emitted by the JSON and CSV renderers.
///
/// Float fields serialize with exactly two decimals (`12.50`, not `12.5`)
/// when written through `serde_json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkSummary {
    pub version: String,
    pub iterations: u32,
    #[serde(serialize_with = "two_decimals")]
    pub total_time_ms: f64,
    #[serde(serialize_with = "two_decimals")]
    pub average_time_ms: f64,
    #[serde(serialize_with = "two_decimals")]
    pub min_time_ms: f64,
    #[serde(serialize_with = "two_decimals")]
    pub max_time_ms: f64,
    #[serde(serialize_with = "two_decimals")]
    pub success_rate: f64,
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return serializer.serialize_f64(*value);
    }
    let raw = RawValue::from_string(format!("{value:.2}")).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

/// Benchmark results ordered fastest-first by average time.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRanking {
    results: Vec<BenchmarkResult>,
}

impl BenchmarkRanking {
    /// Stable sort by average time; ties keep input order.
    pub fn rank(mut results: Vec<BenchmarkResult>) -> Self {
        results.sort_by_key(|r| r.average_time);
        Self { results }
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn fastest(&self) -> Option<&BenchmarkResult> {
        self.results.first()
    }

    pub fn slowest(&self) -> Option<&BenchmarkResult> {
        self.results.last()
    }

    /// `avg / avg_fastest`; 1.0 when the fastest average is zero.
    pub fn relative_speed(&self, result: &BenchmarkResult) -> f64 {
        match self.fastest() {
            Some(fastest) if !fastest.average_time.is_zero() => {
                result.average_time.as_nanos() as f64 / fastest.average_time.as_nanos() as f64
            }
            _ => 1.0,
        }
    }

    pub fn summaries(&self) -> Vec<BenchmarkSummary> {
        self.results.iter().map(BenchmarkResult::summary).collect()
    }
}

/// Duration as fractional milliseconds.
pub fn millis(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1e6
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "benchmark_tests.rs"]
mod tests;
