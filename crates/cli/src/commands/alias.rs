// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `versus alias` - named pointers to installed versions

use anyhow::Result;
use clap::{Args, Subcommand};
use versus_storage::{StoreError, VersionStore};

#[derive(Args)]
pub struct AliasArgs {
    #[command(subcommand)]
    pub command: AliasCommand,
}

#[derive(Subcommand)]
pub enum AliasCommand {
    /// Point an alias at a version (e.g. stable => 2.1.0)
    Set {
        /// Alias name
        name: String,
        /// Target version
        version: String,
    },
    /// Print the version an alias points at
    Get {
        /// Alias name
        name: String,
    },
    /// Delete an alias
    Remove {
        /// Alias name
        name: String,
    },
    /// List every alias
    List {},
}

pub fn handle(command: AliasCommand, store: &VersionStore) -> Result<()> {
    match command {
        AliasCommand::Set { name, version } => {
            store.set_alias(&name, &version)?;
            println!("✅ Alias '{name}' set to {version}");
        }
        AliasCommand::Get { name } => match store.alias(&name)? {
            Some(version) => println!("{version}"),
            None => return Err(StoreError::UnknownAlias(name).into()),
        },
        AliasCommand::Remove { name } => {
            store.remove_alias(&name)?;
            println!("🗑️  Alias '{name}' removed");
        }
        AliasCommand::List {} => {
            let aliases = store.aliases()?;
            if aliases.is_empty() {
                println!("No aliases defined.");
            }
            for (name, version) in aliases {
                println!("{name} => {version}");
            }
        }
    }
    Ok(())
}
