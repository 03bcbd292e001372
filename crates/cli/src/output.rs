// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Heavy rule under report titles.
pub const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════════";
/// Light rule between table sections.
pub const LIGHT_RULE: &str =
    "─────────────────────────────────────────────────────────────────────────────────────";

/// Join lines with a trailing newline, or nothing when there are none.
pub fn join_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Cut text longer than `max` characters to its first `keep` plus `...`.
pub fn ellipsize(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Write CSV rows (header first) into a string.
pub fn csv_string<I, R>(rows: I) -> anyhow::Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
