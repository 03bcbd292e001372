// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus benchmark` - time one command across several versions

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;
use versus_engine::{BenchmarkOptions, BenchmarkRequest, DEFAULT_ITERATIONS};

use super::{engine, fail, use_color};
use crate::output::OutputFormat;
use crate::render::{self, RenderConfig};

#[derive(Args)]
pub struct BenchmarkArgs {
    /// Runs per version
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Deadline for each iteration, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show every iteration and every failure
    #[arg(long)]
    pub detailed: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// <v1,v2,...> -- <command...>
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub async fn handle(args: BenchmarkArgs, cancel: CancellationToken) -> Result<()> {
    let request = BenchmarkRequest::parse(&args.args).map_err(fail)?;
    let config = RenderConfig {
        color: use_color(args.no_color),
        detailed: args.detailed,
        format: args.format,
        ..RenderConfig::default()
    };
    let options = BenchmarkOptions { iterations: args.iterations, timeout: Duration::from_secs(args.timeout) };

    if config.format == OutputFormat::Table {
        print!("{}", render::benchmark::banner(&request, options.iterations));
    }
    let report = engine()?.benchmark(&request, &options, cancel).await.map_err(fail)?;

    eprint!("{}", render::benchmark::failures(&report, &config));
    print!("{}", render::benchmark::render(&report.ranking, &config)?);
    Ok(())
}
