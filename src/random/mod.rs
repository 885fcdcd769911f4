pub mod source;
pub mod uniform;

pub use source::{LowEntropySource, RandomSource, ScriptedSource, DEFAULT_SEED, MAX_DRAW_VALUE};
pub use uniform::{DrawCounter, InvariantViolation, UniformIndexGenerator};
