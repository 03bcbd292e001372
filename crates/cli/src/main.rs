// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! versus - run, compare, and benchmark side-by-side installed versions of a CLI

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use commands::{alias, benchmark, compare, exec, history, versions};
use exit_error::ExitError;

#[derive(Parser)]
#[command(
    name = "versus",
    version = env::VERSION,
    about = "Run, compare, and benchmark installed versions of a command-line tool",
    styles = color::styles(),
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command against two versions and diff the results
    Compare(compare::CompareArgs),
    /// Time a command across several versions
    Benchmark(benchmark::BenchmarkArgs),
    /// Run the active version, recording the invocation in history
    Exec(exec::ExecArgs),
    /// Show recorded usage history
    History(history::HistoryArgs),
    /// List installed versions
    List {},
    /// Select the active version
    Use {
        /// Version, alias, or `latest` (defaults to the .versus-version file)
        selector: Option<String>,
    },
    /// Remove an installed version
    Remove {
        version: String,
    },
    /// Remove every installed version
    Clear {},
    /// Copy a local binary in as a named version
    Link {
        /// Path to the binary
        #[arg(long)]
        from: PathBuf,
        /// Version name to assign
        #[arg(long)]
        name: String,
    },
    /// Manage version aliases
    Alias(alias::AliasArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env::log_filter()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run().await {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if let Some(message) = &exit.message {
                    eprintln!("{message}");
                }
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupted");
            on_interrupt.cancel();
        }
    });

    match cli.command {
        Commands::Compare(args) => compare::handle(args, cancel).await,
        Commands::Benchmark(args) => benchmark::handle(args, cancel).await,
        Commands::Exec(args) => exec::handle(args, cancel).await,
        Commands::History(args) => history::handle(args),
        Commands::List {} => versions::list(&env::store()?),
        Commands::Use { selector } => versions::use_version(&env::store()?, selector),
        Commands::Remove { version } => versions::remove(&env::store()?, &version),
        Commands::Clear {} => versions::clear(&env::store()?),
        Commands::Link { from, name } => versions::link(&env::store()?, &from, &name),
        Commands::Alias(args) => alias::handle(args.command, &env::store()?),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
