// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable duration formatting.

use std::time::Duration;

/// Format a duration with a unit matched to its magnitude.
///
/// Sub-millisecond values print in microseconds, sub-second values in
/// milliseconds, everything else in seconds; always two decimals.
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{:.2}μs", d.as_nanos() as f64 / 1e3)
    } else if d < Duration::from_secs(1) {
        format!("{:.2}ms", d.as_nanos() as f64 / 1e6)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
