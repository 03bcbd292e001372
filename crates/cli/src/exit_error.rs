// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit status carried through `anyhow` to `main`.

use std::fmt;

/// Handlers return this instead of calling `std::process::exit()`.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    /// Printed to stderr before exiting; `None` when the child already reported.
    pub message: Option<String>,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: Some(message.into()) }
    }

    pub fn silent(code: i32) -> Self {
        Self { code, message: None }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "exit status {}", self.code),
        }
    }
}

impl std::error::Error for ExitError {}
