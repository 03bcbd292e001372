// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus history` - usage records written by `versus exec`

use anyhow::Result;
use chrono::Local;
use clap::Args;
use versus_storage::{newest_first, History, HistoryFilter, HistoryStats};

use super::use_color;
use crate::env;
use crate::output::OutputFormat;
use crate::render::{self, RenderConfig};

#[derive(Args)]
pub struct HistoryArgs {
    /// Maximum number of entries to show (0 shows all)
    #[arg(short = 'n', long, default_value_t = 50)]
    pub limit: usize,

    /// Show aggregated statistics instead of entries
    #[arg(long)]
    pub stats: bool,

    /// Only entries for this version
    #[arg(long)]
    pub version: Option<String>,

    /// Only commands containing this text (case-insensitive)
    #[arg(long)]
    pub command: Option<String>,

    /// Only commands that exited non-zero
    #[arg(long)]
    pub failures_only: bool,

    /// Include captured stdout/stderr
    #[arg(long)]
    pub show_output: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Delete all history (cannot be undone)
    #[arg(long)]
    pub clear: bool,
}

impl HistoryArgs {
    fn filter(&self) -> HistoryFilter {
        HistoryFilter {
            version: self.version.clone(),
            command: self.command.clone(),
            failures_only: self.failures_only,
        }
    }
}

pub fn handle(args: HistoryArgs) -> Result<()> {
    let history = History::open(env::store()?.history_path());
    if args.clear {
        if history.clear()? {
            println!("🗑️  History cleared successfully.");
        } else {
            println!("📭 No history file found.");
        }
        return Ok(());
    }

    let entries = args.filter().apply(history.load()?);
    if entries.is_empty() {
        println!("📭 No history entries found.");
        return Ok(());
    }

    let config = RenderConfig { color: use_color(args.no_color), format: args.format, ..RenderConfig::default() };
    if args.stats {
        print!("{}", render::history::stats(&HistoryStats::compute(&entries), &config, &Local));
    } else {
        let entries = newest_first(entries, args.limit);
        print!("{}", render::history::render(&entries, args.show_output, &config, &Local)?);
    }
    Ok(())
}
