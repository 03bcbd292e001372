// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::ExecutionResult;
use std::time::Duration;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for execution records.
pub mod strategies {
    use crate::ExecutionResult;
    use proptest::prelude::*;
    use std::time::Duration;

    pub fn arb_execution() -> impl Strategy<Value = ExecutionResult> {
        (
            "[0-9]\\.[0-9]{1,2}\\.[0-9]",
            "[a-z \n]{0,24}",
            "[a-z \n]{0,12}",
            prop_oneof![Just(0), Just(1), Just(2), 3i32..130],
            0u64..5_000_000,
        )
            .prop_map(|(version, stdout, stderr, exit_code, micros)| {
                ExecutionResult::builder()
                    .version(version)
                    .stdout(stdout)
                    .stderr(stderr)
                    .exit_code(exit_code)
                    .duration(Duration::from_micros(micros))
                    .build()
            })
    }
}

// ── Factory functions ─────────────────────────────────────────────────────

/// A successful run printing `stdout` that took `ms` milliseconds.
pub fn passed(version: &str, stdout: &str, ms: u64) -> ExecutionResult {
    ExecutionResult::builder()
        .version(version)
        .stdout(stdout)
        .duration(Duration::from_millis(ms))
        .build()
}

/// A failed run with the given exit code and stderr.
pub fn failed(version: &str, exit_code: i32, stderr: &str, ms: u64) -> ExecutionResult {
    ExecutionResult::builder()
        .version(version)
        .stderr(stderr)
        .exit_code(exit_code)
        .duration(Duration::from_millis(ms))
        .build()
}
