//! Core domain types for the spelling bee
//!
//! Letters, letter sets, the fixed game rules, word-length histograms and the
//! rank table. Everything here is pure and has no knowledge of dictionaries or
//! game progress.

mod histogram;
mod letters;
mod rank;
pub mod rules;

pub use histogram::LengthHistogram;
pub use letters::{ALPHABET, Letter, LetterMask, LetterSet, LetterSetError, MOST_FREQUENT};
pub use rank::{RANKS, Rank, percent_of, rank_for};
