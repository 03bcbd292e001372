// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk layout of installed versions, aliases, and the active version.
//!
//! ```text
//! <root>/versions/<version>/<binary>
//! <root>/aliases/<name>          contains the target version
//! <root>/current                 contains the active version
//! <root>/history.json
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use versus_core::compare_versions;
use versus_engine::{CatalogError, VersionCatalog};

/// Executable name inside each version directory.
pub const DEFAULT_BINARY: &str = "bin";
/// Per-project file naming the version `use` should select.
pub const PROJECT_FILE: &str = ".versus-version";

const VERSIONS_DIR: &str = "versions";
const ALIASES_DIR: &str = "aliases";
const CURRENT_FILE: &str = "current";
const HISTORY_FILE: &str = "history.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("version {0} is not installed")]
    NotInstalled(String),

    #[error("binary for version {version} not found at {}", path.display())]
    MissingBinary { version: String, path: PathBuf },

    #[error("alias {0} does not exist")]
    UnknownAlias(String),

    #[error("invalid name '{0}': must be non-empty and contain no path separators")]
    InvalidName(String),

    #[error("no such file: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.to_path_buf(), source }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    let bad = name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']);
    if bad {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Read a single trimmed value from `path`; missing or blank files are `None`.
fn read_value(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let value = text.trim();
            Ok((!value.is_empty()).then(|| value.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_err(path)(e)),
    }
}

fn write_value(path: &Path, value: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    fs::write(path, value).map_err(io_err(path))
}

/// Version named by the project file in `dir`, if present.
pub fn read_project_version(dir: &Path) -> Result<Option<String>, StoreError> {
    read_value(&dir.join(PROJECT_FILE))
}

/// Installed versions and aliases rooted at one directory.
#[derive(Debug, Clone)]
pub struct VersionStore {
    root: PathBuf,
    binary_name: String,
}

impl VersionStore {
    pub fn new(root: impl Into<PathBuf>, binary_name: impl Into<String>) -> Self {
        Self { root: root.into(), binary_name: binary_name.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    fn versions_dir(&self) -> PathBuf {
        self.root.join(VERSIONS_DIR)
    }

    fn version_dir(&self, version: &str) -> PathBuf {
        self.versions_dir().join(version)
    }

    fn alias_path(&self, name: &str) -> PathBuf {
        self.root.join(ALIASES_DIR).join(name)
    }

    fn current_path(&self) -> PathBuf {
        self.root.join(CURRENT_FILE)
    }

    pub fn binary_path(&self, version: &str) -> PathBuf {
        self.version_dir(version).join(&self.binary_name)
    }

    /// Installed versions, oldest first.
    pub fn installed(&self) -> Result<Vec<String>, StoreError> {
        let dir = self.versions_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(&dir)(e)),
        };

        let mut versions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_err(&dir))?;
            if entry.file_type().map_err(io_err(&entry.path()))?.is_dir() {
                versions.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        versions.sort_by(|a, b| compare_versions(a, b));
        Ok(versions)
    }

    /// Binary for `version`, verified to exist.
    pub fn binary(&self, version: &str) -> Result<PathBuf, StoreError> {
        if validate_name(version).is_err() || !self.version_dir(version).is_dir() {
            return Err(StoreError::NotInstalled(version.to_string()));
        }
        let path = self.binary_path(version);
        if !path.is_file() {
            return Err(StoreError::MissingBinary { version: version.to_string(), path });
        }
        Ok(path)
    }

    pub fn alias(&self, name: &str) -> Result<Option<String>, StoreError> {
        if validate_name(name).is_err() {
            return Ok(None);
        }
        read_value(&self.alias_path(name))
    }

    /// Point `name` at `version`. The version need not be installed yet.
    pub fn set_alias(&self, name: &str, version: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        write_value(&self.alias_path(name), version.trim())
    }

    pub fn remove_alias(&self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        let path = self.alias_path(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::UnknownAlias(name.to_string())),
            Err(e) => Err(io_err(&path)(e)),
        }
    }

    /// All aliases by name.
    pub fn aliases(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let dir = self.root.join(ALIASES_DIR);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(io_err(&dir)(e)),
        };

        let mut aliases = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(io_err(&dir))?;
            if let Some(target) = read_value(&entry.path())? {
                aliases.insert(entry.file_name().to_string_lossy().into_owned(), target);
            }
        }
        Ok(aliases)
    }

    pub fn current(&self) -> Result<Option<String>, StoreError> {
        read_value(&self.current_path())
    }

    /// Make `version` the active one; it must be installed.
    pub fn set_current(&self, version: &str) -> Result<(), StoreError> {
        self.binary(version)?;
        write_value(&self.current_path(), version)
    }

    /// Delete one installed version, deselecting it if it was active.
    pub fn remove(&self, version: &str) -> Result<(), StoreError> {
        validate_name(version).map_err(|_| StoreError::NotInstalled(version.to_string()))?;
        let dir = self.version_dir(version);
        if !dir.is_dir() {
            return Err(StoreError::NotInstalled(version.to_string()));
        }
        fs::remove_dir_all(&dir).map_err(io_err(&dir))?;

        if self.current()?.as_deref() == Some(version) {
            let path = self.current_path();
            fs::remove_file(&path).map_err(io_err(&path))?;
            tracing::debug!(%version, "removed active version");
        }
        Ok(())
    }

    /// Delete every installed version; returns how many were removed.
    pub fn clear(&self) -> Result<usize, StoreError> {
        let count = self.installed()?.len();
        let dir = self.versions_dir();
        match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(count),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(io_err(&dir)(e)),
        }
    }

    /// Copy a local binary in as version `name`, replacing any existing one.
    pub fn link(&self, from: &Path, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        if !from.is_file() {
            return Err(StoreError::MissingSource(from.to_path_buf()));
        }

        let dir = self.version_dir(name);
        fs::create_dir_all(&dir).map_err(io_err(&dir))?;
        let target = self.binary_path(name);
        fs::copy(from, &target).map_err(io_err(&target))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).map_err(io_err(&target))?;
        }
        tracing::debug!(from = %from.display(), version = name, "linked binary");
        Ok(target)
    }
}

impl VersionCatalog for VersionStore {
    fn alias(&self, name: &str) -> Option<String> {
        match VersionStore::alias(self, name) {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!(alias = name, error = %e, "unreadable alias");
                None
            }
        }
    }

    fn installed(&self) -> Result<Vec<String>, CatalogError> {
        VersionStore::installed(self).map_err(into_catalog_error)
    }

    fn binary(&self, version: &str) -> Result<PathBuf, CatalogError> {
        VersionStore::binary(self, version).map_err(into_catalog_error)
    }
}

fn into_catalog_error(err: StoreError) -> CatalogError {
    match err {
        StoreError::MissingBinary { path, .. } => CatalogError::MissingBinary { path },
        StoreError::Io { source, .. } => CatalogError::Io(source),
        _ => CatalogError::MissingVersion,
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
