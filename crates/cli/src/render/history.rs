// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage history rendering.
//!
//! Timestamps are converted into the caller's timezone so tests can pin
//! output to UTC while the binary shows local time.

use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use versus_core::format_duration;
use versus_storage::{HistoryEntry, HistoryStats};

use super::RenderConfig;
use crate::output::{csv_string, ellipsize, join_lines, OutputFormat, HEAVY_RULE, LIGHT_RULE};

/// Entries slower than this are highlighted.
const SLOW_MS: i64 = 5000;

fn stamp<Tz>(at: DateTime<Utc>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(pattern).to_string()
}

/// Render entries (already filtered, ordered, limited) in the configured format.
pub fn render<Tz>(entries: &[HistoryEntry], show_output: bool, config: &RenderConfig, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match config.format {
        OutputFormat::Table => Ok(table(entries, show_output, config, tz)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(entries)?)),
        OutputFormat::Csv => csv(entries),
    }
}

pub fn table<Tz>(entries: &[HistoryEntry], show_output: bool, config: &RenderConfig, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let palette = config.palette();
    let mut lines = vec!["📊 VERSUS USAGE HISTORY".to_string(), HEAVY_RULE.to_string(), String::new()];
    if show_output {
        lines.push(format!("{:<20} {:<15} {:<12} {:<8} {}", "TIMESTAMP", "VERSION", "DURATION", "EXIT", "COMMAND"));
    } else {
        lines.push(format!("{:<20} {:<15} {:<12} {}", "TIMESTAMP", "VERSION", "DURATION", "COMMAND"));
    }
    lines.push(LIGHT_RULE.to_string());

    for entry in entries {
        let timestamp = palette.header(&format!("{:<20}", stamp(entry.timestamp, tz, "%Y-%m-%d %H:%M:%S")));
        let version = palette.good(&format!("{:<15}", entry.version));
        let duration = if entry.duration_ms > 0 { format!("{}ms", entry.duration_ms) } else { String::new() };
        let duration = format!("{duration:<12}");
        let duration = if entry.duration_ms > SLOW_MS { palette.warn(&duration) } else { palette.good(&duration) };

        if show_output {
            let exit = format!("{:<8}", entry.exit_code);
            let exit = if entry.failed() { palette.bad(&exit) } else { palette.good(&exit) };
            lines.push(format!("{timestamp} {version} {duration} {exit} {}", entry.command).trim_end().to_string());
            if !entry.stdout.is_empty() {
                lines.push("  📤 STDOUT:".to_string());
                lines.push(entry.stdout.clone());
            }
            if !entry.stderr.is_empty() {
                lines.push("  📥 STDERR:".to_string());
                lines.push(palette.bad(&entry.stderr));
            }
            if !entry.stdout.is_empty() || !entry.stderr.is_empty() {
                lines.push(String::new());
            }
        } else {
            let command = ellipsize(&entry.command, 28, 25);
            lines.push(format!("{timestamp} {version} {duration} {command}").trim_end().to_string());
        }
    }

    lines.push(String::new());
    lines.push(format!("📈 Total entries: {}", entries.len()));
    join_lines(&lines)
}

pub fn csv(entries: &[HistoryEntry]) -> Result<String> {
    let header = ["timestamp", "version", "duration_ms", "exit_code", "command"].map(String::from).to_vec();
    let rows = entries.iter().map(|e| {
        vec![
            e.timestamp.to_rfc3339(),
            e.version.clone(),
            e.duration_ms.to_string(),
            e.exit_code.to_string(),
            e.command.clone(),
        ]
    });
    csv_string(std::iter::once(header).chain(rows))
}

/// Aggregated statistics view.
pub fn stats<Tz>(stats: &HistoryStats, config: &RenderConfig, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let palette = config.palette();
    let mut lines = vec![
        "📊 VERSUS USAGE STATISTICS".to_string(),
        HEAVY_RULE.to_string(),
        String::new(),
        "🔢 VERSION USAGE:".to_string(),
        LIGHT_RULE.to_string(),
        format!("{:<15} {:<8} {:<12} {:<20} {}", "VERSION", "COUNT", "TOTAL TIME", "FIRST USED", "LAST USED"),
        LIGHT_RULE.to_string(),
    ];

    for (i, version) in stats.versions.iter().enumerate() {
        let label = format!("{:<15}", version.version);
        let label = if i == 0 { palette.good(&label) } else { palette.header(&label) };
        lines.push(format!(
            "{} {} {:<12} {:<20} {}",
            label,
            palette.warn(&format!("{:<8}", version.count)),
            format_duration(version.total_time),
            stamp(version.first_used, tz, "%Y-%m-%d %H:%M"),
            stamp(version.last_used, tz, "%Y-%m-%d %H:%M"),
        ));
    }

    if !stats.commands.is_empty() {
        lines.push(String::new());
        lines.push("🚀 MOST COMMON COMMANDS:".to_string());
        lines.push(LIGHT_RULE.to_string());
        for (i, command) in stats.commands.iter().enumerate() {
            let times = format!("({} times)", command.count);
            let times = if i == 0 { palette.good(&times) } else { palette.header(&times) };
            lines.push(format!("{:<50} {}", command.command, times));
        }
    }

    lines.push(String::new());
    lines.push("📅 USAGE TIMELINE:".to_string());
    lines.push(LIGHT_RULE.to_string());
    if let (Some(oldest), Some(newest)) = (stats.oldest, stats.newest) {
        lines.push(format!("First usage: {}", palette.good(&stamp(oldest, tz, "%Y-%m-%d %H:%M:%S"))));
        lines.push(format!("Latest usage: {}", palette.good(&stamp(newest, tz, "%Y-%m-%d %H:%M:%S"))));
        lines.push(format!("Total period: {}", palette.warn(&format_duration(stats.period()))));
        lines.push(format!("Total entries: {}", palette.warn(&stats.total_entries.to_string())));
        if let Some(per_day) = stats.average_per_day() {
            lines.push(format!("Average per day: {}", palette.warn(&format!("{per_day:.1}"))));
        }
    }
    join_lines(&lines)
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
