pub mod runner;
pub mod sweep;

pub use runner::{BenchmarkRunner, TrialStats, DEFAULT_REPETITIONS};
pub use sweep::{
    expected_brute_force_draws, harmonic_number, next_size, SweepHarness, SweepRecord, CSV_HEADER,
    GROWTH_PERCENT, SWEEP_START,
};
