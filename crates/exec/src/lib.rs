// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! versus-exec: run one version's binary under a deadline and capture the result

pub mod context;
pub mod error;
pub mod process;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use context::{Interrupt, RunContext};
pub use error::ExecError;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeCall, FakeExecutor, Scripted};
pub use process::{Execution, Executor, ProcessExecutor, Target};
