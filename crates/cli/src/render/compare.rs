// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison report rendering.

use versus_core::{display_command, format_duration, ExecutionResult};
use versus_engine::{align_lines, unified, AlignedLine, ComparisonReport, CompareRequest, LineMark, TokenChange};
use versus_exec::ExecError;

use super::{DiffMode, RenderConfig};
use crate::color::Palette;
use crate::output::{ellipsize, join_lines, HEAVY_RULE, LIGHT_RULE};

/// Width of a side-by-side cell, marker excluded.
const CELL_WIDTH: usize = 39;
const CELL_MAX: usize = 38;
const CELL_KEEP: usize = 35;

/// Printed before the executions start.
pub fn banner(request: &CompareRequest) -> String {
    format!(
        "🔄 Comparing versions: {} vs {}\n📝 Command: {}\n\n",
        request.left,
        request.right,
        display_command(&request.command)
    )
}

/// Execution errors, one line each, for stderr.
pub fn warnings(warnings: &[ExecError], palette: &Palette) -> String {
    let lines: Vec<String> = warnings.iter().map(|w| palette.warn(&format!("⚠️  {w}"))).collect();
    join_lines(&lines)
}

/// The full comparison report.
pub fn comparison(report: &ComparisonReport, config: &RenderConfig) -> String {
    let palette = config.palette();
    let outcome = &report.outcome;
    let sides = [&outcome.left, &outcome.right];

    let mut lines = vec![HEAVY_RULE.to_string(), "🔍 COMPARISON RESULTS".to_string(), HEAVY_RULE.to_string(), String::new()];

    if config.timing {
        lines.push("⏱️  EXECUTION TIMING:".to_string());
        for r in sides {
            lines.push(format!("   Version {}: {}", palette.header(&r.version), format_duration(r.duration)));
        }
        lines.push(String::new());
    }

    if outcome.exit_codes_differ() {
        lines.push("🚨 EXIT CODE DIFFERENCE:".to_string());
        for r in sides {
            lines.push(format!("   {}: {}", r.version, exit_mark(r, &palette)));
        }
        lines.push(String::new());
    }

    if outcome.has_error_text() {
        lines.push("🚨 ERROR OUTPUT:".to_string());
        for r in sides.into_iter().filter(|r| !r.error_text().is_empty()) {
            lines.push(format!("   {} ERROR:", palette.bad(&r.version)));
            lines.push(r.error_text().trim_end().to_string());
        }
        lines.push(String::new());
    }

    let (left, right) = outcome.trimmed_outputs();
    if outcome.is_identical() {
        lines.push("✅ OUTPUTS ARE IDENTICAL".to_string());
        lines.push(format!("📄 Output ({} lines):", left.split('\n').count()));
        lines.push(LIGHT_RULE.to_string());
        lines.push(left);
        return join_lines(&lines);
    }

    lines.push("📊 OUTPUT DIFFERENCES:".to_string());
    let (v1, v2) = (outcome.left.version.as_str(), outcome.right.version.as_str());
    let mut out = join_lines(&lines);
    match config.diff {
        DiffMode::Unified => out.push_str(&unified_diff(&left, &right, v1, v2, &palette)),
        DiffMode::SideBySide => out.push_str(&join_lines(&side_by_side(&align_lines(&left, &right), v1, v2, &palette))),
        DiffMode::FullWidth => out.push_str(&join_lines(&full_width(&align_lines(&left, &right), v1, v2, &palette))),
    }
    out
}

fn exit_mark(result: &ExecutionResult, palette: &Palette) -> String {
    if result.exit_code == 0 {
        palette.good("✓ 0")
    } else {
        palette.bad(&format!("✗ {}", result.exit_code))
    }
}

fn unified_diff(left: &str, right: &str, v1: &str, v2: &str, palette: &Palette) -> String {
    let header = [
        LIGHT_RULE.to_string(),
        format!("{} {v1}", palette.bad("---")),
        format!("{} {v2}", palette.good("+++")),
        LIGHT_RULE.to_string(),
    ];
    let mut out = join_lines(&header);
    for run in unified(left, right) {
        let text = match run.change {
            TokenChange::Equal => format!("  {}", run.text),
            TokenChange::Delete => palette.bad(&format!("- {}", run.text)),
            TokenChange::Insert => palette.good(&format!("+ {}", run.text)),
        };
        out.push_str(&text);
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Cell text for the side-by-side view, truncated on char boundaries.
fn cell(line: &str) -> String {
    ellipsize(line, CELL_MAX, CELL_KEEP)
}

fn side_by_side(rows: &[AlignedLine], v1: &str, v2: &str, palette: &Palette) -> Vec<String> {
    let mut lines = vec![
        LIGHT_RULE.to_string(),
        format!("{} │ {}", palette.header(&format!("{v1:<40}")), palette.header(v2)),
        LIGHT_RULE.to_string(),
    ];
    for row in rows {
        let left = format!("{:<width$}", cell(&row.left), width = CELL_WIDTH);
        let right = cell(&row.right);
        let line = match row.mark {
            LineMark::Same => format!(" {left} │  {right}"),
            LineMark::Changed => format!("~{} │ ~{}", palette.bad(&left), palette.good(&right)),
            LineMark::Removed => format!("-{} │  {right}", palette.bad(&left)),
            LineMark::Added => format!(" {left} │ +{}", palette.good(&right)),
        };
        lines.push(line.trim_end().to_string());
    }
    lines
}

fn full_width(rows: &[AlignedLine], v1: &str, v2: &str, palette: &Palette) -> Vec<String> {
    let width = v1.chars().count().max(v2.chars().count());
    let label = |v: &str| format!("{v:<width$}");
    let mut lines = vec![LIGHT_RULE.to_string()];
    for row in rows {
        match row.mark {
            LineMark::Same if row.left.is_empty() => {}
            LineMark::Same => lines.push(format!("  {} │ {}", " ".repeat(width), palette.context(&row.left))),
            LineMark::Changed => {
                lines.push(palette.bad(&format!("~ {} │ {}", label(v1), row.left)));
                lines.push(palette.good(&format!("~ {} │ {}", label(v2), row.right)));
            }
            LineMark::Removed => lines.push(palette.bad(&format!("- {} │ {}", label(v1), row.left))),
            LineMark::Added => lines.push(palette.good(&format!("+ {} │ {}", label(v2), row.right))),
        }
    }
    lines
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
