use std::fmt;

use super::source::{RandomSource, MAX_DRAW_VALUE};

/// Raw draws combined into one index.
pub const DRAWS_PER_INDEX: usize = 5;
/// Usable low-order bits taken from each raw draw.
pub const BITS_PER_DRAW: u32 = 15;

/// A broken correctness assumption. These are fatal: measurements taken
/// after one of these fired would be meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    ZeroBound,
    IndexOutOfRange { index: usize, bound: usize },
    CounterOverflow,
    InsufficientEntropy { max_draw: u32 },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::ZeroBound => {
                write!(f, "index requested over an empty range")
            }
            InvariantViolation::IndexOutOfRange { index, bound } => {
                write!(f, "generated index {index} outside [0, {bound})")
            }
            InvariantViolation::CounterOverflow => {
                write!(f, "draw counter overflowed")
            }
            InvariantViolation::InsufficientEntropy { max_draw } => {
                write!(
                    f,
                    "random source tops out at {max_draw}, below the required {MAX_DRAW_VALUE}"
                )
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Counts index draws consumed during one measured interval. Owned by the
/// measurement context and passed by reference into whatever consumes draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawCounter(pub u64);

impl DrawCounter {
    pub fn new() -> Self {
        DrawCounter(0)
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn record(&mut self) -> Result<(), InvariantViolation> {
        self.0 = self
            .0
            .checked_add(1)
            .ok_or(InvariantViolation::CounterOverflow)?;
        Ok(())
    }

    pub fn total(&self) -> u64 {
        self.0
    }
}

/// Stretches a low-entropy source into indices over [0, bound).
///
/// Five 15-bit draws are packed into a 64-bit composite, normalized to a
/// float in [0, 1], then scaled by the bound. The result approximates a
/// uniform distribution; the approximation is assumed, not verified.
pub struct UniformIndexGenerator<S: RandomSource> {
    source: S,
}

impl<S: RandomSource> UniformIndexGenerator<S> {
    /// Wraps a source, rejecting any that cannot supply 15 bits per draw.
    pub fn new(source: S) -> Result<Self, InvariantViolation> {
        if source.max_draw() < MAX_DRAW_VALUE {
            return Err(InvariantViolation::InsufficientEntropy {
                max_draw: source.max_draw(),
            });
        }
        Ok(UniformIndexGenerator { source })
    }

    /// One index in [0, bound), recorded against `counter`.
    pub fn index(
        &mut self,
        bound: usize,
        counter: &mut DrawCounter,
    ) -> Result<usize, InvariantViolation> {
        if bound == 0 {
            return Err(InvariantViolation::ZeroBound);
        }
        counter.record()?;

        // The earliest draw's high bits fall off the top of the 64-bit
        // accumulator; the composite keeps the most recent 64 bits.
        let mut composite: u64 = 0;
        for _ in 0..DRAWS_PER_INDEX {
            let draw = self.source.next_draw() & MAX_DRAW_VALUE;
            composite = (composite << BITS_PER_DRAW) + u64::from(draw);
        }

        let unit = composite as f64 / u64::MAX as f64;
        let mut index = (unit * bound as f64) as usize;
        // Rounding can land exactly on the bound.
        if index == bound {
            index = bound - 1;
        }
        if index >= bound {
            return Err(InvariantViolation::IndexOutOfRange { index, bound });
        }
        Ok(index)
    }
}
