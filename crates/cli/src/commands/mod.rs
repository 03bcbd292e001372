// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod alias;
pub mod benchmark;
pub mod compare;
pub mod exec;
pub mod history;
pub mod versions;

use versus_engine::{Engine, EngineError};
use versus_exec::ProcessExecutor;
use versus_storage::VersionStore;

use crate::color;
use crate::env;
use crate::exit_error::ExitError;

/// Engine over the on-disk store and real processes.
pub(crate) fn engine() -> anyhow::Result<Engine<VersionStore, ProcessExecutor>> {
    Ok(Engine::new(env::store()?, ProcessExecutor::new()))
}

/// Usage and resolution failures end the process with status 1.
pub(crate) fn fail(err: impl Into<EngineError>) -> anyhow::Error {
    ExitError::new(1, format!("error: {}", err.into())).into()
}

pub(crate) fn use_color(no_color: bool) -> bool {
    !no_color && color::should_colorize()
}
