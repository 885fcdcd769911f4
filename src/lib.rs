pub mod bench;
pub mod random;
pub mod shuffle;

pub use bench::{
    runner::{BenchmarkRunner, TrialStats, DEFAULT_REPETITIONS},
    sweep::{
        expected_brute_force_draws, harmonic_number, next_size, SweepHarness, SweepRecord,
        CSV_HEADER, GROWTH_PERCENT, SWEEP_START,
    },
};
pub use random::{
    source::{LowEntropySource, RandomSource, ScriptedSource, DEFAULT_SEED, MAX_DRAW_VALUE},
    uniform::{DrawCounter, InvariantViolation, UniformIndexGenerator},
};
pub use shuffle::{
    algorithms::ShuffleAlgorithm,
    deck::{Deck, UNFILLED},
};
