// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-supplied version selectors.

use std::cmp::Ordering;
use std::fmt;

/// How an operator token names a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The symbolic newest installed version.
    Latest,
    /// A named alias and the version it points at.
    Alias { name: String, target: String },
    /// A version named literally (also the fallback for unknown aliases).
    Literal(String),
}

impl Selector {
    pub const LATEST: &'static str = "latest";

    /// Classify a raw token.
    ///
    /// Aliases win over the symbolic `latest`, so an operator can pin
    /// `latest` to a specific version with an alias of that name.
    pub fn classify(raw: &str, alias: impl Fn(&str) -> Option<String>) -> Self {
        let raw = raw.trim();
        if let Some(target) = alias(raw) {
            return Selector::Alias { name: raw.to_string(), target };
        }
        if raw.eq_ignore_ascii_case(Self::LATEST) {
            return Selector::Latest;
        }
        Selector::Literal(raw.to_string())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Latest => f.write_str(Self::LATEST),
            Selector::Alias { name, .. } => f.write_str(name),
            Selector::Literal(version) => f.write_str(version),
        }
    }
}

/// Order version strings by their dotted numeric segments.
///
/// A leading `v` is ignored and non-numeric segments compare as text, so
/// `2.10.0` sorts after `2.9.1`. A `-` suffix marks a prerelease, which
/// sorts before the plain release: `1.0.0-rc1` < `1.0.0`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let split = |s: &str| {
        let s = s.trim_start_matches('v');
        match s.split_once('-') {
            Some((release, pre)) => (release.to_string(), Some(pre.to_string())),
            None => (s.to_string(), None),
        }
    };
    let ((left, left_pre), (right, right_pre)) = (split(a), split(b));
    compare_segments(&left, &right).then_with(|| match (left_pre, right_pre) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(l), Some(r)) => compare_segments(&l, &r),
    })
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    let left: Vec<&str> = a.split(['.', '-']).collect();
    let right: Vec<&str> = b.split(['.', '-']).collect();
    for (l, r) in left.iter().zip(right.iter()) {
        let ord = match (l.parse::<u64>(), r.parse::<u64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            _ => l.cmp(r),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
