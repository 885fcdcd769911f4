pub mod algorithms;
pub mod deck;

pub use algorithms::ShuffleAlgorithm;
pub use deck::{Deck, UNFILLED};
