use rand::{rngs::StdRng, Rng, SeedableRng};

/// Largest value a single draw may take: 2^15 - 1. The whole harness is
/// sized around sources this narrow.
pub const MAX_DRAW_VALUE: u32 = 0x7FFF;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xDECC_ACE5;

/// A bounded pseudorandom source. The index generator combines several of
/// these raw draws into one usable index, so implementations only need to
/// promise the range reported by `max_draw`.
pub trait RandomSource {
    /// One raw value in `[0, max_draw()]`.
    fn next_draw(&mut self) -> u32;

    /// Largest value `next_draw` can return.
    fn max_draw(&self) -> u32;
}

/// Production source: a seeded `StdRng` constrained to 15-bit draws.
pub struct LowEntropySource {
    rng: StdRng,
}

impl LowEntropySource {
    pub fn seeded(seed: u64) -> Self {
        LowEntropySource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for LowEntropySource {
    fn next_draw(&mut self) -> u32 {
        self.rng.random_range(0..=MAX_DRAW_VALUE)
    }

    fn max_draw(&self) -> u32 {
        MAX_DRAW_VALUE
    }
}

/// Deterministic source that replays a fixed script of values, wrapping
/// around at the end. Stands in for the platform source in tests.
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn cycling(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        let values = values
            .into_iter()
            .map(|value| value & MAX_DRAW_VALUE)
            .collect();
        ScriptedSource { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_draw(&mut self) -> u32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }

    fn max_draw(&self) -> u32 {
        MAX_DRAW_VALUE
    }
}
