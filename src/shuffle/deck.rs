/// Marks a slot no label has been placed in yet.
pub const UNFILLED: u32 = 0;

/// A fixed-length run of card labels. A finished shuffle holds each label
/// in [1, n] exactly once; during brute-force construction some slots still
/// carry [`UNFILLED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(pub Vec<u32>);

impl Deck {
    /// Every slot unfilled.
    pub fn blank(n: usize) -> Self {
        Deck(vec![UNFILLED; n])
    }

    /// Labels 1..=n in order.
    pub fn identity(n: usize) -> Self {
        Deck((1..=n as u32).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every label in [1, n] appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.0.len();
        let mut seen = vec![false; n];
        for &label in &self.0 {
            if label == UNFILLED || label as usize > n {
                return false;
            }
            let slot = (label - 1) as usize;
            if seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }
}
