// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Installed-version management: list, use, remove, clear, link

use std::path::Path;

use anyhow::{bail, Context, Result};
use versus_core::Selector;
use versus_storage::{read_project_version, VersionStore, PROJECT_FILE};

use super::fail;

pub fn list(store: &VersionStore) -> Result<()> {
    let installed = store.installed()?;
    if installed.is_empty() {
        println!("No versions installed.");
        return Ok(());
    }
    let current = store.current()?;
    println!("Installed versions:");
    for version in installed {
        let mark = if current.as_deref() == Some(version.as_str()) { " (current)" } else { "" };
        println!(" - {version}{mark}");
    }
    Ok(())
}

/// Select the active version, falling back to the project file.
pub fn use_version(store: &VersionStore, selector: Option<String>) -> Result<()> {
    let selector = match selector {
        Some(selector) => selector,
        None => {
            let cwd = std::env::current_dir().context("cannot read the working directory")?;
            match read_project_version(&cwd)? {
                Some(version) => {
                    println!("Using version from {PROJECT_FILE}: {version}");
                    version
                }
                None => bail!("no version given and no {PROJECT_FILE} file found"),
            }
        }
    };

    let resolved = versus_engine::resolve(store, &selector).map_err(fail)?;
    if let Selector::Alias { name, target } = &resolved.selector {
        println!("Using alias '{name}' resolved to version: {target}");
    }
    store.set_current(&resolved.target.version)?;
    println!("✅ Now using version {}", resolved.target.version);
    Ok(())
}

pub fn remove(store: &VersionStore, version: &str) -> Result<()> {
    store.remove(version)?;
    println!("🗑️  Removed version {version}");
    Ok(())
}

pub fn clear(store: &VersionStore) -> Result<()> {
    let removed = store.clear()?;
    println!("All versions removed ({removed}).");
    Ok(())
}

pub fn link(store: &VersionStore, from: &Path, name: &str) -> Result<()> {
    let target = store.link(from, name)?;
    tracing::debug!(target = %target.display(), "linked");
    println!("✅ Linked {} as version {name}", from.display());
    Ok(())
}
