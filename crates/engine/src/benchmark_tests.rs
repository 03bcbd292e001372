// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::catalog::FakeCatalog;
use versus_exec::{FakeExecutor, Scripted};

fn argv(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

fn req(s: &str) -> BenchmarkRequest {
    BenchmarkRequest::parse(&argv(s)).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn engine(executor: FakeExecutor) -> Engine<FakeCatalog, FakeExecutor> {
    let catalog = FakeCatalog::new().with_versions(&["1.0.0", "1.1.0", "2.0.0"]).with_alias("old", "1.0.0");
    Engine::new(catalog, executor)
}

#[tokio::test]
async fn timed_out_iteration_costs_success_rate() {
    let exec = FakeExecutor::new()
        .always("1.0.0", Scripted::ok("", ms(30)))
        .script(
            "1.1.0",
            [
                Scripted::ok("", ms(10)),
                Scripted::TimeOut { duration: ms(10) },
                Scripted::ok("", ms(10)),
                Scripted::ok("", ms(10)),
                Scripted::ok("", ms(10)),
            ],
        )
        .always("2.0.0", Scripted::ok("", ms(20)));
    let report = engine(exec)
        .benchmark(&req("1.0.0,1.1.0,2.0.0 -- run"), &BenchmarkOptions::default(), CancellationToken::new())
        .await
        .unwrap();

    let versions: Vec<&str> = report.ranking.results().iter().map(|r| r.version.as_str()).collect();
    assert_eq!(versions, vec!["1.1.0", "2.0.0", "1.0.0"]);

    let flaky = &report.ranking.results()[0];
    assert_eq!(flaky.executions.len(), 5);
    assert_eq!(flaky.success_rate, 80.0);
    assert!(report.ranking.results()[1..].iter().all(|r| r.success_rate == 100.0));

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].version, "1.1.0");
    assert_eq!(report.failures[0].iteration, 2);
    assert!(matches!(report.first_error(), Some(ExecError::TimedOut { .. })));
}

#[tokio::test]
async fn every_version_runs_every_iteration() {
    let exec = FakeExecutor::new();
    let options = BenchmarkOptions { iterations: 3, ..Default::default() };
    let report = engine(exec.clone())
        .benchmark(&req("old,2.0.0 -- run --quick"), &options, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.ranking.results().len(), 2);
    assert!(report.ranking.results().iter().all(|r| r.iterations == 3));
    assert_eq!(exec.calls().len(), 6);
    assert!(exec.calls().iter().all(|c| c.args == argv("run --quick")));
    assert!(report.failures.is_empty());
    assert!(report.first_error().is_none());
}

#[tokio::test]
async fn zero_iterations_is_a_usage_error() {
    let exec = FakeExecutor::new();
    let options = BenchmarkOptions { iterations: 0, ..Default::default() };
    let err = engine(exec.clone())
        .benchmark(&req("1.0.0 -- run"), &options, CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Usage(UsageError::ZeroIterations)));
    assert!(exec.calls().is_empty());
}

#[tokio::test]
async fn unresolved_selector_spawns_nothing() {
    let exec = FakeExecutor::new();
    let err = engine(exec.clone())
        .benchmark(&req("1.0.0,3.0.0 -- run"), &BenchmarkOptions::default(), CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Resolve(ref e) if e.selector == "3.0.0"));
    assert!(exec.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn versions_run_concurrently_iterations_sequentially() {
    let exec = FakeExecutor::new()
        .simulate_time()
        .always("1.0.0", Scripted::ok("", ms(100)))
        .always("1.1.0", Scripted::ok("", ms(100)))
        .always("2.0.0", Scripted::ok("", ms(100)));
    let start = tokio::time::Instant::now();
    let report = engine(exec)
        .benchmark(&req("1.0.0,1.1.0,2.0.0 -- run"), &BenchmarkOptions::default(), CancellationToken::new())
        .await
        .unwrap();

    let elapsed = start.elapsed();
    assert!(elapsed >= ms(500), "iterations overlapped: {elapsed:?}");
    assert!(elapsed < ms(1000), "versions did not overlap: {elapsed:?}");
    assert!(report.failures.is_empty());
}

#[tokio::test(start_paused = true)]
async fn each_iteration_gets_a_fresh_deadline() {
    let exec = FakeExecutor::new().simulate_time().always("1.0.0", Scripted::ok("", ms(100)));
    let options = BenchmarkOptions { iterations: 5, timeout: ms(150) };
    let report = engine(exec)
        .benchmark(&req("1.0.0 -- run"), &options, CancellationToken::new())
        .await
        .unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.ranking.results()[0].success_rate, 100.0);
}

#[tokio::test(start_paused = true)]
async fn cancellation_still_yields_complete_results() {
    let exec = FakeExecutor::new().simulate_time().always("1.0.0", Scripted::ok("", ms(100)));
    let token = CancellationToken::new();
    token.cancel();
    let report = engine(exec)
        .benchmark(&req("1.0.0,2.0.0 -- run"), &BenchmarkOptions::default(), token)
        .await
        .unwrap();

    for result in report.ranking.results() {
        assert_eq!(result.executions.len(), 5);
        assert_eq!(result.success_rate, 0.0);
    }
    assert_eq!(report.failures.len(), 10);
    assert!(matches!(report.first_error(), Some(ExecError::Cancelled { .. })));
}
