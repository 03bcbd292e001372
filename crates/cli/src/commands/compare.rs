// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus compare` - run one command against two versions

use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Args};
use tokio_util::sync::CancellationToken;
use versus_engine::{CompareOptions, CompareRequest};

use super::{engine, fail, use_color};
use crate::render::{self, DiffMode, RenderConfig};

#[derive(Args)]
pub struct CompareArgs {
    /// Show a word-level unified diff
    #[arg(long, conflicts_with = "full_width")]
    pub unified: bool,

    /// Show only changed lines, each across the full width
    #[arg(long)]
    pub full_width: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Deadline shared by both executions, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Show execution timing
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub timing: bool,

    /// <v1> <v2> -- <command...>
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl CompareArgs {
    fn diff_mode(&self) -> DiffMode {
        if self.unified {
            DiffMode::Unified
        } else if self.full_width {
            DiffMode::FullWidth
        } else {
            DiffMode::SideBySide
        }
    }
}

pub async fn handle(args: CompareArgs, cancel: CancellationToken) -> Result<()> {
    let request = CompareRequest::parse(&args.args).map_err(fail)?;
    let config = RenderConfig {
        color: use_color(args.no_color),
        timing: args.timing,
        diff: args.diff_mode(),
        ..RenderConfig::default()
    };
    let options = CompareOptions { timeout: Duration::from_secs(args.timeout) };

    print!("{}", render::compare::banner(&request));
    let report = engine()?.compare(&request, &options, cancel).await.map_err(fail)?;

    eprint!("{}", render::compare::warnings(&report.warnings, &config.palette()));
    print!("{}", render::compare::comparison(&report, &config));
    Ok(())
}
