// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark ranking rendering: table, JSON, CSV.

use anyhow::Result;
use serde::Serialize;
use versus_core::{display_command, format_duration, BenchmarkRanking, BenchmarkResult, BenchmarkSummary};
use versus_engine::{BenchmarkReport, BenchmarkRequest};

use super::RenderConfig;
use crate::color::Palette;
use crate::output::{csv_string, join_lines, OutputFormat, HEAVY_RULE, LIGHT_RULE};

const CSV_HEADER: [&str; 7] =
    ["version", "iterations", "total_time_ms", "average_time_ms", "min_time_ms", "max_time_ms", "success_rate"];

/// Printed before the iterations start (table format only).
pub fn banner(request: &BenchmarkRequest, iterations: u32) -> String {
    format!(
        "🏁 Benchmarking versions: {}\n📝 Command: {}\n🔄 Iterations: {} per version\n\n",
        request.selectors.join(", "),
        display_command(&request.command),
        iterations
    )
}

/// Iteration failures for stderr: every one when detailed, else a summary.
pub fn failures(report: &BenchmarkReport, config: &RenderConfig) -> String {
    let palette = config.palette();
    let Some(first) = report.first_error() else {
        return String::new();
    };
    let lines: Vec<String> = if config.detailed {
        report
            .failures
            .iter()
            .map(|f| palette.warn(&format!("⚠️  Iteration {} for {} failed: {}", f.iteration, f.version, f.error)))
            .collect()
    } else {
        vec![palette.warn(&format!("⚠️  {} iteration(s) failed; first error: {first}", report.failures.len()))]
    };
    join_lines(&lines)
}

/// Render the ranking in the configured format.
pub fn render(ranking: &BenchmarkRanking, config: &RenderConfig) -> Result<String> {
    match config.format {
        OutputFormat::Table => Ok(table(ranking, config)),
        OutputFormat::Json => json(ranking),
        OutputFormat::Csv => csv(ranking),
    }
}

#[derive(Serialize)]
struct JsonDocument {
    benchmark_results: Vec<BenchmarkSummary>,
}

pub fn json(ranking: &BenchmarkRanking) -> Result<String> {
    let doc = JsonDocument { benchmark_results: ranking.summaries() };
    Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
}

pub fn csv(ranking: &BenchmarkRanking) -> Result<String> {
    let header = CSV_HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let rows = ranking.summaries().into_iter().map(|s| {
        vec![
            s.version,
            s.iterations.to_string(),
            format!("{:.2}", s.total_time_ms),
            format!("{:.2}", s.average_time_ms),
            format!("{:.2}", s.min_time_ms),
            format!("{:.2}", s.max_time_ms),
            format!("{:.2}", s.success_rate),
        ]
    });
    csv_string(std::iter::once(header).chain(rows))
}

pub fn table(ranking: &BenchmarkRanking, config: &RenderConfig) -> String {
    let palette = config.palette();
    let results = ranking.results();
    let mut lines = vec!["📊 BENCHMARK RESULTS".to_string(), HEAVY_RULE.to_string(), String::new()];
    let (Some(fastest), Some(slowest)) = (ranking.fastest(), ranking.slowest()) else {
        lines.push("No benchmark results.".to_string());
        return join_lines(&lines);
    };

    lines.push(format!(
        "{:<15} {:<12} {:<12} {:<12} {:<12} {}",
        "VERSION", "AVG TIME", "MIN TIME", "MAX TIME", "TOTAL TIME", "SUCCESS"
    ));
    lines.push(LIGHT_RULE.to_string());

    let last = results.len() - 1;
    for (i, result) in results.iter().enumerate() {
        let version = format!("{:<15}", result.version);
        let version = match i {
            0 => palette.good(&version),
            i if i == last => palette.bad(&version),
            _ => palette.header(&version),
        };
        lines.push(format!(
            "{} {:<12} {:<12} {:<12} {:<12} {}",
            version,
            format_duration(result.average_time),
            format_duration(result.min_time),
            format_duration(result.max_time),
            format_duration(result.total_time),
            success(result, &palette)
        ));
        if i > 0 {
            let factor = format!("↳ {:.2}x slower", ranking.relative_speed(result));
            lines.push(format!("{:<15} {}", "", palette.warn(&factor)));
        }
    }

    lines.push(String::new());
    lines.push("🏆 Performance Summary:".to_string());
    lines.push(format!(
        "   Fastest: {} ({} avg)",
        palette.good(&fastest.version),
        format_duration(fastest.average_time)
    ));
    if results.len() > 1 {
        lines.push(format!(
            "   Slowest: {} ({} avg, {:.2}x slower)",
            palette.bad(&slowest.version),
            format_duration(slowest.average_time),
            ranking.relative_speed(slowest)
        ));
    }

    if config.detailed {
        lines.push(String::new());
        lines.push("📝 Detailed Execution Log:".to_string());
        for result in results {
            lines.push(String::new());
            lines.push(format!("{}:", palette.header(&result.version)));
            for (i, exec) in result.executions.iter().enumerate() {
                let mark = if exec.succeeded() { palette.good("✓") } else { palette.bad("✗") };
                let mut line = format!("  #{}: {} {}", i + 1, mark, format_duration(exec.duration));
                if !exec.succeeded() {
                    line.push_str(&format!(" (exit {})", exec.exit_code));
                }
                lines.push(line);
            }
        }
    }

    join_lines(&lines)
}

fn success(result: &BenchmarkResult, palette: &Palette) -> String {
    let text = format!("{:.1}%", result.success_rate);
    if result.success_rate >= 100.0 {
        palette.good(&text)
    } else if result.success_rate >= 80.0 {
        palette.warn(&text)
    } else {
        palette.bad(&text)
    }
}

#[cfg(test)]
#[path = "benchmark_tests.rs"]
mod tests;
