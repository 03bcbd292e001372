// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selector resolution against the set of installed versions.

use std::path::PathBuf;

use versus_core::{compare_versions, Selector};
use versus_exec::Target;

use crate::error::{CatalogError, ResolveError};

/// Read-only view of installed versions and their aliases.
pub trait VersionCatalog: Send + Sync {
    /// Version an alias points at, if the alias exists.
    fn alias(&self, name: &str) -> Option<String>;

    /// All installed version identifiers, in any order.
    fn installed(&self) -> Result<Vec<String>, CatalogError>;

    /// Path to a version's binary, verified to exist.
    fn binary(&self, version: &str) -> Result<PathBuf, CatalogError>;
}

/// A classified selector and the binary it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub selector: Selector,
    pub target: Target,
}

/// Classify `raw` and resolve it to an installed binary.
pub fn resolve<C: VersionCatalog + ?Sized>(catalog: &C, raw: &str) -> Result<Resolved, ResolveError> {
    let selector = Selector::classify(raw, |name| catalog.alias(name));
    let failed = |version: String, source: CatalogError| ResolveError {
        selector: selector.to_string(),
        version,
        source,
    };

    let version = match &selector {
        Selector::Alias { target, .. } => target.clone(),
        Selector::Literal(version) => version.clone(),
        Selector::Latest => {
            let installed = catalog.installed().map_err(|e| failed(Selector::LATEST.to_string(), e))?;
            installed
                .into_iter()
                .max_by(|a, b| compare_versions(a, b))
                .ok_or_else(|| failed(Selector::LATEST.to_string(), CatalogError::NothingInstalled))?
        }
    };

    let binary = catalog.binary(&version).map_err(|e| failed(version.clone(), e))?;
    tracing::debug!(selector = %selector, %version, binary = %binary.display(), "resolved selector");
    Ok(Resolved { selector, target: Target::new(version, binary) })
}

/// Resolve every selector, failing on the first that does not resolve.
pub fn resolve_all<C: VersionCatalog + ?Sized>(
    catalog: &C,
    selectors: &[String],
) -> Result<Vec<Resolved>, ResolveError> {
    selectors.iter().map(|raw| resolve(catalog, raw)).collect()
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeCatalog;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory catalog; binaries live under `/fake/<version>/bin`.
    #[derive(Debug, Clone, Default)]
    pub struct FakeCatalog {
        versions: Vec<String>,
        aliases: BTreeMap<String, String>,
    }

    impl FakeCatalog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_versions(mut self, versions: &[&str]) -> Self {
            self.versions.extend(versions.iter().map(|v| v.to_string()));
            self
        }

        pub fn with_alias(mut self, name: &str, target: &str) -> Self {
            self.aliases.insert(name.to_string(), target.to_string());
            self
        }

        pub fn binary_path(version: &str) -> PathBuf {
            PathBuf::from("/fake").join(version).join("bin")
        }
    }

    impl VersionCatalog for FakeCatalog {
        fn alias(&self, name: &str) -> Option<String> {
            self.aliases.get(name).cloned()
        }

        fn installed(&self) -> Result<Vec<String>, CatalogError> {
            Ok(self.versions.clone())
        }

        fn binary(&self, version: &str) -> Result<PathBuf, CatalogError> {
            if self.versions.iter().any(|v| v == version) {
                Ok(Self::binary_path(version))
            } else {
                Err(CatalogError::MissingVersion)
            }
        }
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
