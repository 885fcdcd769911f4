use std::env;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::bench::runner::{BenchmarkRunner, TrialStats, DEFAULT_REPETITIONS};
use crate::random::{LowEntropySource, UniformIndexGenerator, DEFAULT_SEED, MAX_DRAW_VALUE};
use crate::shuffle::ShuffleAlgorithm;

/// First deck size in the sweep.
pub const SWEEP_START: usize = 10;
/// Per-step size growth, in percent.
pub const GROWTH_PERCENT: usize = 15;
/// Names for the first five fields; the sixth, the analytic expectation,
/// is emitted without a header name.
pub const CSV_HEADER: &str = "n,FY,BR,rand_fy,rand_br";

/// Exact finite sum 1 + 1/2 + ... + 1/n.
pub fn harmonic_number(n: usize) -> f64 {
    let mut sum = 0.0;
    for i in 1..=n {
        sum += 1.0 / i as f64;
    }
    sum
}

/// Analytic expectation n·H(n) for the brute-force draw count.
pub fn expected_brute_force_draws(n: usize) -> f64 {
    n as f64 * harmonic_number(n)
}

/// Next deck size: up roughly 15%, always by at least one.
pub fn next_size(n: usize) -> usize {
    n + (n * GROWTH_PERCENT / 100).max(1)
}

/// One emitted row of the sweep.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepRecord {
    pub n: usize,
    pub fisher_yates: TrialStats,
    pub brute_force: TrialStats,
    pub expected_brute_force_draws: f64,
}

impl SweepRecord {
    /// Fields in header order, expectation last.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{:.6},{:.6},{:.6},{:.6},{:.6}",
            self.n,
            self.fisher_yates.avg_time_ms,
            self.brute_force.avg_time_ms,
            self.fisher_yates.avg_draws,
            self.brute_force.avg_draws,
            self.expected_brute_force_draws,
        )
    }
}

/// Drives deck sizes across a geometric schedule, benchmarking both
/// algorithms at each stop and emitting one CSV row per size.
///
/// The random source is seeded once for the whole sweep, so a run is
/// reproducible as a whole; no single size is reproducible in isolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepHarness {
    pub seed: u64,
    pub repetitions: u32,
    pub start: usize,
    pub max_size: usize,
}

impl SweepHarness {
    /// Sweeps the full source range, from [`SWEEP_START`] up to the largest
    /// value one raw draw can take.
    pub fn new(seed: u64, repetitions: u32) -> Self {
        SweepHarness {
            seed,
            repetitions,
            start: SWEEP_START,
            max_size: MAX_DRAW_VALUE as usize,
        }
    }

    /// Runs the sweep to completion, streaming rows into `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<Vec<SweepRecord>> {
        let mut generator = UniformIndexGenerator::new(LowEntropySource::seeded(self.seed))
            .map_err(|err| {
                io::Error::new(io::ErrorKind::Other, format!("reject random source: {err}"))
            })?;
        let mut runner = BenchmarkRunner::new(self.repetitions);

        writeln!(out, "{}", CSV_HEADER)?;
        let mut records = Vec::new();
        let mut n = self.start;
        while n <= self.max_size {
            let fisher_yates = runner
                .measure(n, ShuffleAlgorithm::FisherYates, &mut generator)
                .map_err(|err| {
                    io::Error::new(io::ErrorKind::Other, format!("fisher-yates batch: {err}"))
                })?;
            let brute_force = runner
                .measure(n, ShuffleAlgorithm::BruteForce, &mut generator)
                .map_err(|err| {
                    io::Error::new(io::ErrorKind::Other, format!("brute-force batch: {err}"))
                })?;

            let record = SweepRecord {
                n,
                fisher_yates,
                brute_force,
                expected_brute_force_draws: expected_brute_force_draws(n),
            };
            writeln!(out, "{}", record.csv_row())?;
            out.flush()?;
            debug_progress(&record);

            records.push(record);
            n = next_size(n);
        }
        Ok(records)
    }
}

impl Default for SweepHarness {
    fn default() -> Self {
        SweepHarness::new(DEFAULT_SEED, DEFAULT_REPETITIONS)
    }
}

fn debug_progress(record: &SweepRecord) {
    if env::var("SHUFFLE_BENCH_PROGRESS").is_ok() {
        eprintln!(
            "n={} fy {:.3} ms | br {:.3} ms | draws {:.1} vs {:.1}",
            record.n,
            record.fisher_yates.avg_time_ms,
            record.brute_force.avg_time_ms,
            record.fisher_yates.avg_draws,
            record.brute_force.avg_draws,
        );
    }
}
