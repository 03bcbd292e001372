// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `<selectors> -- <command...>` argument lists.

use crate::error::{UsageError, BENCHMARK_USAGE, COMPARE_USAGE};

pub const SEPARATOR: &str = "--";

/// Two selectors and the command to run under each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    pub left: String,
    pub right: String,
    pub command: Vec<String>,
}

impl CompareRequest {
    /// Parse `<sel1> <sel2> -- <command...>`.
    ///
    /// The separator must sit at index 2.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        if args.len() < 3 {
            return Err(UsageError::TooFewArguments { usage: COMPARE_USAGE });
        }
        if args[2] != SEPARATOR {
            return Err(UsageError::MissingSeparator { usage: COMPARE_USAGE });
        }
        let command = args[3..].to_vec();
        if command.is_empty() {
            return Err(UsageError::EmptyCommand);
        }
        Ok(Self { left: args[0].clone(), right: args[1].clone(), command })
    }
}

/// Selectors to benchmark and the command to run under each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRequest {
    pub selectors: Vec<String>,
    pub command: Vec<String>,
}

impl BenchmarkRequest {
    /// Parse `<sel1,sel2,...> -- <command...>`.
    ///
    /// The separator may appear anywhere after the first argument; selectors
    /// always come from the first argument.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        if args.len() < 2 {
            return Err(UsageError::TooFewArguments { usage: BENCHMARK_USAGE });
        }
        let separator = args
            .iter()
            .position(|a| a == SEPARATOR)
            .ok_or(UsageError::MissingSeparator { usage: BENCHMARK_USAGE })?;
        if separator == 0 {
            return Err(UsageError::NoVersions { usage: BENCHMARK_USAGE });
        }
        if separator > 1 {
            tracing::debug!(ignored = ?&args[1..separator], "ignoring tokens between selectors and separator");
        }

        let list = &args[0];
        let selectors: Vec<String> = list.split(',').map(|s| s.trim().to_string()).collect();
        if selectors.iter().any(String::is_empty) {
            return Err(UsageError::BlankSelector { list: list.clone() });
        }

        let command = args[separator + 1..].to_vec();
        if command.is_empty() {
            return Err(UsageError::EmptyCommand);
        }
        Ok(Self { selectors, command })
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
