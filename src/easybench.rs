//! Mean-latency benchmarking for pure functions.
//!
//! `benchmark` times one candidate over a fixed argument; `compare` runs a
//! set of candidates under identical inputs and ranks them fastest first.

use serde::Serialize;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Iteration count used when the caller has no opinion.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Error type a fallible candidate may surface out of its timed call.
pub type CandidateError = Box<dyn std::error::Error + Send + Sync + 'static>;

type CandidateFn<A> = Box<dyn Fn(&A) -> Result<(), CandidateError>>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("iterations must be a positive integer")]
    InvalidIterations,
    #[error("candidate `{name}` failed during its timed run")]
    Candidate {
        name: String,
        #[source]
        source: CandidateError,
    },
}

/// A named function under measurement. Candidates borrow their argument
/// immutably and are expected to be deterministic and side-effect-free, so
/// repeated invocations are comparable.
pub struct Candidate<A> {
    name: String,
    run: CandidateFn<A>,
}

impl<A> Candidate<A> {
    /// Wrap an infallible function, discarding its return value.
    pub fn new<R, F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&A) -> R + 'static,
    {
        Self {
            name: name.into(),
            run: Box::new(move |args| {
                // Keep the timed call from being optimized away.
                std::hint::black_box(f(args));
                Ok(())
            }),
        }
    }

    /// Wrap a function whose errors should abort the benchmark.
    pub fn fallible<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&A) -> Result<(), CandidateError> + 'static,
    {
        Self {
            name: name.into(),
            run: Box::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Mean per-call latency measured for one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub iterations: u32,
    pub total_time_ms: f64,
    pub mean_latency_ms: f64,
}

impl BenchmarkResult {
    fn new(name: &str, iterations: u32, total: Duration) -> Self {
        let total_ms = total.as_secs_f64() * 1_000.0;
        Self {
            name: name.to_string(),
            iterations,
            total_time_ms: total_ms,
            mean_latency_ms: total_ms / f64::from(iterations),
        }
    }
}

/// Results of one comparison run, ranked fastest first.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub test_name: String,
    pub results: Vec<BenchmarkResult>,
}

impl ComparisonReport {
    /// Rank results ascending by mean latency. The sort is stable, so
    /// equal-latency entries keep their input order.
    pub fn from_results(test_name: &str, mut results: Vec<BenchmarkResult>) -> Self {
        results.sort_by(|a, b| a.mean_latency_ms.total_cmp(&b.mean_latency_ms));
        Self {
            test_name: test_name.to_string(),
            results,
        }
    }

    /// Render the report as a text table, one row per candidate.
    pub fn table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.test_name);
        out.push_str(&"-".repeat(60));
        out.push('\n');
        let _ = writeln!(
            out,
            "{:>4} {:<32} {:>12} {:>8}",
            "Rank", "Candidate", "Mean (ms)", "Relative"
        );
        out.push_str(&"-".repeat(60));
        out.push('\n');
        let baseline = self.results.first().map_or(0.0, |r| r.mean_latency_ms);
        for (i, r) in self.results.iter().enumerate() {
            let relative = if baseline > 0.0 {
                r.mean_latency_ms / baseline
            } else {
                1.0
            };
            let _ = writeln!(
                out,
                "{:>4} {:<32} {:>12.4} {:>7.2}x",
                i + 1,
                r.name,
                r.mean_latency_ms,
                relative
            );
        }
        out
    }

    /// Serialize the report to JSON for machine consumption.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Time `candidate` over `iterations` sequential calls against `args` and
/// return the mean per-call latency.
///
/// A zero iteration count is rejected up front. If the candidate fails on
/// any call the error is surfaced immediately and no result is produced.
pub fn benchmark<A>(
    candidate: &Candidate<A>,
    args: &A,
    iterations: u32,
) -> Result<BenchmarkResult, BenchError> {
    if iterations == 0 {
        return Err(BenchError::InvalidIterations);
    }

    log::debug!("timing `{}` over {} iterations", candidate.name, iterations);
    let start = Instant::now();
    for _ in 0..iterations {
        (candidate.run)(args).map_err(|source| BenchError::Candidate {
            name: candidate.name.clone(),
            source,
        })?;
    }
    let elapsed = start.elapsed();

    Ok(BenchmarkResult::new(&candidate.name, iterations, elapsed))
}

/// Benchmark every candidate in input order under identical `args` and
/// `iterations`, then rank the results.
///
/// Callers are expected to pass at least one candidate. Any single failure
/// aborts the whole comparison; rendering the report is left to the caller.
pub fn compare<A>(
    test_name: &str,
    candidates: &[Candidate<A>],
    args: &A,
    iterations: u32,
) -> Result<ComparisonReport, BenchError> {
    log::info!(
        "comparing {} candidates for `{}`",
        candidates.len(),
        test_name
    );
    let mut results = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        results.push(benchmark(candidate, args, iterations)?);
    }
    Ok(ComparisonReport::from_results(test_name, results))
}
