//! End-to-end comparison runs against the public library surface.

use easybench::{benchmark, compare, BenchError, Candidate, DEFAULT_ITERATIONS};
use std::time::{Duration, Instant};

fn spin(d: Duration) {
    let start = Instant::now();
    while start.elapsed() < d {
        std::hint::spin_loop();
    }
}

#[test]
fn spin_mean_lands_near_the_spin_duration() {
    let spin_1ms = Candidate::new("spin_1ms", |_: &()| spin(Duration::from_millis(1)));
    let result = benchmark(&spin_1ms, &(), 10).unwrap();
    // The spin floor guarantees the lower bound; the upper bound is loose
    // enough for a loaded machine.
    assert!(result.mean_latency_ms >= 1.0, "mean {}", result.mean_latency_ms);
    assert!(result.mean_latency_ms < 25.0, "mean {}", result.mean_latency_ms);
}

#[test]
fn report_ranks_fast_before_slow() {
    let candidates = vec![
        Candidate::new("slow", |_: &()| spin(Duration::from_millis(2))),
        Candidate::new("fast", |_: &()| {}),
    ];
    let report = compare("slow vs fast", &candidates, &(), 5).unwrap();
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].name, "fast");
    assert_eq!(report.results[1].name, "slow");
}

#[test]
fn report_means_are_non_decreasing() {
    let candidates = vec![
        Candidate::new("mid", |_: &()| spin(Duration::from_micros(300))),
        Candidate::new("noop", |_: &()| {}),
        Candidate::new("short", |_: &()| spin(Duration::from_micros(100))),
    ];
    let report = compare("ordering", &candidates, &(), 5).unwrap();
    assert_eq!(report.results.len(), 3);
    for pair in report.results.windows(2) {
        assert!(pair[0].mean_latency_ms <= pair[1].mean_latency_ms);
    }
}

#[test]
fn table_and_json_render_the_same_report() {
    let candidates = vec![
        Candidate::new("spin_short", |_: &()| spin(Duration::from_micros(50))),
        Candidate::new("noop", |_: &()| {}),
    ];
    let report = compare("rendering", &candidates, &(), 5).unwrap();

    let table = report.table();
    assert!(table.contains("rendering"));
    assert!(table.contains("spin_short"));
    assert!(table.contains("noop"));

    let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(value["test_name"], "rendering");
    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0]["mean_latency_ms"].as_f64().unwrap() >= 0.0);
}

#[test]
fn invalid_iterations_surface_through_the_driver() {
    let candidates = vec![Candidate::new("noop", |_: &()| {})];
    assert!(matches!(
        compare("zero", &candidates, &(), 0),
        Err(BenchError::InvalidIterations)
    ));
}

#[test]
fn default_iteration_count_matches_the_documented_value() {
    assert_eq!(DEFAULT_ITERATIONS, 1000);
}
