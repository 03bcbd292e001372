// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage history: one JSON array of entries, newest appended last.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use versus_core::ExecutionResult;

/// Entries kept after an append; older ones are dropped.
pub const MAX_ENTRIES: usize = 1000;
/// Per-stream byte cap on recorded output.
pub const MAX_OUTPUT_BYTES: usize = 5000;
const TRUNCATION_MARKER: &str = "\n... (truncated)";
const TOP_COMMANDS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to read history {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("history {} is corrupt: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("failed to write history {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

fn is_success(code: &i32) -> bool {
    *code == 0
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration_ms: i64,
    #[serde(default, skip_serializing_if = "is_success")]
    pub exit_code: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stderr: String,
}

impl HistoryEntry {
    /// Record an execution, truncating its captured output.
    pub fn from_result(result: &ExecutionResult) -> Self {
        Self {
            version: result.version.clone(),
            timestamp: result.started_at,
            command: result.command.clone(),
            duration_ms: i64::try_from(result.duration.as_millis()).unwrap_or(i64::MAX),
            exit_code: result.exit_code,
            stdout: truncate_output(&result.stdout),
            stderr: truncate_output(&result.stderr),
        }
    }

    pub fn failed(&self) -> bool {
        self.exit_code != 0
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.duration_ms).unwrap_or_default())
    }
}

/// Cap `text` at [`MAX_OUTPUT_BYTES`] on a char boundary and mark the cut.
fn truncate_output(text: &str) -> String {
    if text.len() <= MAX_OUTPUT_BYTES {
        return text.to_string();
    }
    let mut end = MAX_OUTPUT_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &text[..end], TRUNCATION_MARKER)
}

/// The history file at a fixed path.
#[derive(Debug, Clone)]
pub struct History {
    path: PathBuf,
}

impl History {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in file order; a missing file is empty history.
    pub fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(HistoryError::Read { path: self.path.clone(), source }),
        };
        serde_json::from_slice(&data).map_err(|source| HistoryError::Parse { path: self.path.clone(), source })
    }

    /// Append one entry, keeping the newest [`MAX_ENTRIES`].
    pub fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.load()?;
        entries.push(entry);
        if entries.len() > MAX_ENTRIES {
            entries.drain(..entries.len() - MAX_ENTRIES);
        }
        self.save(&entries)
    }

    /// Remove the file. Returns false if there was nothing to clear.
    pub fn clear(&self) -> Result<bool, HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(HistoryError::Write { path: self.path.clone(), source }),
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        let write_err = |source| HistoryError::Write { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let data = serde_json::to_vec_pretty(entries)?;
        fs::write(&self.path, data).map_err(write_err)
    }
}

/// Entry filters; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub version: Option<String>,
    /// Case-insensitive substring of the command.
    pub command: Option<String>,
    pub failures_only: bool,
}

impl HistoryFilter {
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        if self.version.as_deref().is_some_and(|v| v != entry.version) {
            return false;
        }
        if let Some(pattern) = &self.command {
            if !entry.command.to_lowercase().contains(&pattern.to_lowercase()) {
                return false;
            }
        }
        !self.failures_only || entry.failed()
    }

    pub fn apply(&self, entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Sort newest first and keep at most `limit` entries (0 keeps all).
pub fn newest_first(mut entries: Vec<HistoryEntry>, limit: usize) -> Vec<HistoryEntry> {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    if limit > 0 {
        entries.truncate(limit);
    }
    entries
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStats {
    pub version: String,
    pub count: usize,
    pub total_time: Duration,
    pub first_used: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCount {
    pub command: String,
    pub count: usize,
}

/// Aggregate view over a set of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStats {
    /// Most used first; ties by version order.
    pub versions: Vec<VersionStats>,
    /// Up to ten most frequent non-empty commands; ties alphabetical.
    pub commands: Vec<CommandCount>,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
    pub total_entries: usize,
}

impl HistoryStats {
    pub fn compute(entries: &[HistoryEntry]) -> Self {
        let mut versions: HashMap<&str, VersionStats> = HashMap::new();
        let mut commands: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            let stats = versions.entry(entry.version.as_str()).or_insert_with(|| VersionStats {
                version: entry.version.clone(),
                count: 0,
                total_time: Duration::ZERO,
                first_used: entry.timestamp,
                last_used: entry.timestamp,
            });
            stats.count += 1;
            stats.total_time += entry.duration();
            stats.first_used = stats.first_used.min(entry.timestamp);
            stats.last_used = stats.last_used.max(entry.timestamp);

            if !entry.command.is_empty() {
                *commands.entry(entry.command.as_str()).or_default() += 1;
            }
        }

        let mut versions: Vec<VersionStats> = versions.into_values().collect();
        versions.sort_by(|a, b| {
            b.count.cmp(&a.count).then_with(|| versus_core::compare_versions(&a.version, &b.version))
        });

        let mut commands: Vec<CommandCount> = commands
            .into_iter()
            .map(|(command, count)| CommandCount { command: command.to_string(), count })
            .collect();
        commands.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.command.cmp(&b.command)));
        commands.truncate(TOP_COMMANDS);

        Self {
            versions,
            commands,
            oldest: entries.iter().map(|e| e.timestamp).min(),
            newest: entries.iter().map(|e| e.timestamp).max(),
            total_entries: entries.len(),
        }
    }

    /// Span between the oldest and newest entry.
    pub fn period(&self) -> Duration {
        match (self.oldest, self.newest) {
            (Some(oldest), Some(newest)) => (newest - oldest).to_std().unwrap_or_default(),
            _ => Duration::ZERO,
        }
    }

    /// Entries per day, once history spans more than a day.
    pub fn average_per_day(&self) -> Option<f64> {
        let days = self.period().as_secs_f64() / 86_400.0;
        (days > 1.0).then(|| self.total_entries as f64 / days)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
