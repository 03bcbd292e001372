// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    micros       = { Duration::from_nanos(250_000), "250.00μs" },
    zero         = { Duration::ZERO, "0.00μs" },
    millis       = { Duration::from_micros(12_500), "12.50ms" },
    one_ms       = { Duration::from_millis(1), "1.00ms" },
    seconds      = { Duration::from_millis(1_500), "1.50s" },
    many_seconds = { Duration::from_secs(90), "90.00s" },
)]
fn format_duration_picks_unit(d: Duration, expected: &str) {
    assert_eq!(format_duration(d), expected);
}
