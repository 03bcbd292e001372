// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! versus-core: data model shared by the executor, engines, and renderers

pub mod macros;

pub mod benchmark;
pub mod comparison;
pub mod execution;
pub mod selector;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use benchmark::{millis, BenchmarkRanking, BenchmarkResult, BenchmarkSummary};
pub use comparison::ComparisonOutcome;
#[cfg(any(test, feature = "test-support"))]
pub use execution::ExecutionResultBuilder;
pub use execution::{display_command, ExecutionResult, UNSTARTED_EXIT_CODE};
pub use selector::{compare_versions, Selector};
pub use time_fmt::format_duration;
