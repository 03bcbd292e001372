// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! versus-engine: selector resolution, comparison, benchmarking, and diffs

pub mod benchmark;
pub mod catalog;
pub mod compare;
pub mod diff;
mod engine;
pub mod error;
pub mod request;

pub use benchmark::{BenchmarkOptions, BenchmarkReport, IterationFailure, DEFAULT_ITERATIONS};
#[cfg(any(test, feature = "test-support"))]
pub use catalog::FakeCatalog;
pub use catalog::{resolve, resolve_all, Resolved, VersionCatalog};
pub use compare::{CompareOptions, ComparisonReport};
pub use diff::{align_lines, unified, AlignedLine, DiffRun, LineMark, TokenChange};
pub use engine::{Engine, DEFAULT_TIMEOUT};
pub use error::{CatalogError, EngineError, ResolveError, UsageError};
pub use request::{BenchmarkRequest, CompareRequest, SEPARATOR};
