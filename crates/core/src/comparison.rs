// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Equal/unequal classification of two executions of the same command.

use crate::ExecutionResult;

/// Two executions plus the verdict on whether they behaved identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonOutcome {
    pub left: ExecutionResult,
    pub right: ExecutionResult,
    identical: bool,
}

impl ComparisonOutcome {
    /// Classify two results.
    ///
    /// Identical requires trimmed output, exit code, and error text to all
    /// match. A crash whose text happens to match is still "different".
    pub fn classify(left: ExecutionResult, right: ExecutionResult) -> Self {
        let identical = left.output().trim() == right.output().trim()
            && left.exit_code == right.exit_code
            && left.error_text() == right.error_text();
        Self { left, right, identical }
    }

    pub fn is_identical(&self) -> bool {
        self.identical
    }

    pub fn exit_codes_differ(&self) -> bool {
        self.left.exit_code != self.right.exit_code
    }

    pub fn has_error_text(&self) -> bool {
        !self.left.error_text().is_empty() || !self.right.error_text().is_empty()
    }

    /// Trimmed reconciled outputs, in (left, right) order.
    pub fn trimmed_outputs(&self) -> (String, String) {
        (self.left.output().trim().to_string(), self.right.output().trim().to_string())
    }
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
