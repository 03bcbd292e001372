// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! versus-storage: installed versions, aliases, and the usage history log

pub mod history;
pub mod store;

pub use history::{
    newest_first, CommandCount, History, HistoryEntry, HistoryError, HistoryFilter, HistoryStats,
    VersionStats, MAX_ENTRIES, MAX_OUTPUT_BYTES,
};
pub use store::{read_project_version, StoreError, VersionStore, DEFAULT_BINARY, PROJECT_FILE};
