// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The orchestration entry point shared by comparison and benchmarking.

use std::time::Duration;

use versus_exec::Executor;

use crate::catalog::VersionCatalog;

/// Deadline applied to each execution unless the operator overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves selectors through a catalog and runs them through an executor.
///
/// See `compare` and `benchmark` for the two orchestration algorithms.
pub struct Engine<C, E> {
    pub(crate) catalog: C,
    pub(crate) executor: E,
}

impl<C, E> Engine<C, E>
where
    C: VersionCatalog,
    E: Executor,
{
    pub fn new(catalog: C, executor: E) -> Self {
        Self { catalog, executor }
    }
}
