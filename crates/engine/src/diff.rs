// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token-level and line-aligned diffs between two captured outputs.
//!
//! Both produce plain data; markers, colors and truncation belong to the
//! renderer.

use similar::{ChangeTag, TextDiff};
use versus_core::simple_display;

/// How a run of tokens differs between left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenChange {
    Equal,
    Delete,
    Insert,
}

/// Consecutive tokens sharing one change kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRun {
    pub change: TokenChange,
    pub text: String,
}

/// Word-level diff from `left` to `right`, as runs in document order.
pub fn unified(left: &str, right: &str) -> Vec<DiffRun> {
    let diff = TextDiff::from_words(left, right);
    let mut runs: Vec<DiffRun> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => TokenChange::Equal,
            ChangeTag::Delete => TokenChange::Delete,
            ChangeTag::Insert => TokenChange::Insert,
        };
        match runs.last_mut() {
            Some(run) if run.change == kind => run.text.push_str(change.value()),
            _ => runs.push(DiffRun { change: kind, text: change.value().to_string() }),
        }
    }
    runs
}

/// Per-line verdict in the positional diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMark {
    Same,
    /// Both sides have text and it differs.
    Changed,
    /// Only the left side has text.
    Removed,
    /// Only the right side has text.
    Added,
}

simple_display! {
    LineMark {
        Same => " ",
        Changed => "~",
        Removed => "-",
        Added => "+",
    }
}

/// One row of the positional diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedLine {
    pub left: String,
    pub right: String,
    pub mark: LineMark,
}

impl AlignedLine {
    pub fn is_marked(&self) -> bool {
        self.mark != LineMark::Same
    }
}

/// Compare `left` and `right` line by line at equal indices.
///
/// Runs to the longer side's line count; a side with fewer lines
/// contributes empty strings.
pub fn align_lines(left: &str, right: &str) -> Vec<AlignedLine> {
    let left: Vec<&str> = left.split('\n').collect();
    let right: Vec<&str> = right.split('\n').collect();
    let rows = left.len().max(right.len());

    (0..rows)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or_default();
            let r = right.get(i).copied().unwrap_or_default();
            let mark = if l == r {
                LineMark::Same
            } else if l.is_empty() {
                LineMark::Added
            } else if r.is_empty() {
                LineMark::Removed
            } else {
                LineMark::Changed
            };
            AlignedLine { left: l.to_string(), right: r.to_string(), mark }
        })
        .collect()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
