use super::deck::{Deck, UNFILLED};
use crate::random::{DrawCounter, InvariantViolation, RandomSource, UniformIndexGenerator};

/// The closed set of shuffle strategies the harness measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleAlgorithm {
    BruteForce,
    FisherYates,
}

impl std::fmt::Display for ShuffleAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShuffleAlgorithm::BruteForce => write!(f, "brute-force"),
            ShuffleAlgorithm::FisherYates => write!(f, "Fisher-Yates"),
        }
    }
}

impl ShuffleAlgorithm {
    /// Builds a fresh permutation of 1..=n, charging every draw to
    /// `counter`.
    pub fn shuffle<S: RandomSource>(
        self,
        n: usize,
        generator: &mut UniformIndexGenerator<S>,
        counter: &mut DrawCounter,
    ) -> Result<Deck, InvariantViolation> {
        match self {
            ShuffleAlgorithm::BruteForce => brute_force(n, generator, counter),
            ShuffleAlgorithm::FisherYates => fisher_yates(n, generator, counter),
        }
    }
}

/// Places labels 1..=n in order, rejection-sampling slots until an unfilled
/// one turns up. Expected draw count is n·H(n); there is no retry cap, so a
/// long enough unlucky streak stalls the run.
fn brute_force<S: RandomSource>(
    n: usize,
    generator: &mut UniformIndexGenerator<S>,
    counter: &mut DrawCounter,
) -> Result<Deck, InvariantViolation> {
    let mut deck = Deck::blank(n);
    for label in 1..=n as u32 {
        loop {
            let slot = generator.index(n, counter)?;
            if deck.0[slot] == UNFILLED {
                deck.0[slot] = label;
                break;
            }
        }
    }
    debug_assert!(deck.is_permutation());
    Ok(deck)
}

/// Classic in-place shuffle, exactly n-1 draws for every n >= 1.
fn fisher_yates<S: RandomSource>(
    n: usize,
    generator: &mut UniformIndexGenerator<S>,
    counter: &mut DrawCounter,
) -> Result<Deck, InvariantViolation> {
    let mut deck = Deck::identity(n);
    for i in (1..n).rev() {
        let s = generator.index(i + 1, counter)?;
        deck.0.swap(s, i);
    }
    debug_assert!(deck.is_permutation());
    Ok(deck)
}
