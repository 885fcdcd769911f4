use std::time::Instant;

use serde::Serialize;

use crate::random::{DrawCounter, InvariantViolation, RandomSource, UniformIndexGenerator};
use crate::shuffle::ShuffleAlgorithm;

pub const DEFAULT_REPETITIONS: u32 = 10;

/// Per-size, per-algorithm aggregate over one benchmarked batch.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrialStats {
    pub avg_time_ms: f64,
    pub avg_draws: f64,
}

/// Runs one algorithm repeatedly at a fixed size and averages the cost.
///
/// The runner owns the draw counter; it is reset at the start of every batch
/// and read once after, so each batch is charged only its own draws.
pub struct BenchmarkRunner {
    repetitions: u32,
    counter: DrawCounter,
}

impl BenchmarkRunner {
    pub fn new(repetitions: u32) -> Self {
        BenchmarkRunner {
            repetitions: repetitions.max(1),
            counter: DrawCounter::new(),
        }
    }

    /// Shuffles a fresh deck of size `n` `repetitions` times, timing the
    /// whole batch on a monotonic clock, and averages per call.
    pub fn measure<S: RandomSource>(
        &mut self,
        n: usize,
        algorithm: ShuffleAlgorithm,
        generator: &mut UniformIndexGenerator<S>,
    ) -> Result<TrialStats, InvariantViolation> {
        self.counter.reset();
        let started = Instant::now();
        for _ in 0..self.repetitions {
            algorithm.shuffle(n, generator, &mut self.counter)?;
        }
        let elapsed = started.elapsed();

        let reps = f64::from(self.repetitions);
        Ok(TrialStats {
            avg_time_ms: elapsed.as_secs_f64() * 1000.0 / reps,
            avg_draws: self.counter.total() as f64 / reps,
        })
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        BenchmarkRunner::new(DEFAULT_REPETITIONS)
    }
}
