// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus exec` - run the active version and record it in history

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;
use versus_exec::{Executor, ProcessExecutor, RunContext, Target};
use versus_storage::{History, HistoryEntry};

use crate::env;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct ExecArgs {
    /// Arguments passed to the active version's binary
    #[arg(value_name = "ARGS", required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub async fn handle(args: ExecArgs, cancel: CancellationToken) -> Result<()> {
    let store = env::store()?;
    let Some(version) = store.current()? else {
        return Err(ExitError::new(1, "No current version set. Run `versus use <version>` first.").into());
    };
    let binary = store.binary(&version).map_err(|e| ExitError::new(1, format!("error: {e}")))?;
    tracing::debug!(%version, binary = %binary.display(), "exec");

    let target = Target::new(version, binary);
    let execution = ProcessExecutor::new().execute(&target, &args.args, &RunContext::unbounded(cancel)).await;
    let result = execution.result;

    std::io::stdout().write_all(result.stdout.as_bytes())?;
    std::io::stderr().write_all(result.stderr.as_bytes())?;

    let history = History::open(store.history_path());
    if let Err(e) = history.append(HistoryEntry::from_result(&result)) {
        tracing::warn!(error = %e, "failed to record history");
    }

    if let Some(err) = execution.error {
        return Err(ExitError::new(1, format!("error: {err}")).into());
    }
    if result.exit_code != 0 {
        return Err(ExitError::silent(result.exit_code).into());
    }
    Ok(())
}
