//! Player progress against one puzzle

use crate::core::{LengthHistogram, Rank};
use crate::generator::Puzzle;
use std::sync::Arc;

/// Progress through a puzzle
///
/// Only [`ScoringEngine::submit`](super::ScoringEngine::submit) produces a
/// changed state; everything here is read-only.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) puzzle: Arc<Puzzle>,
    /// Found words in the order they were found
    pub(super) found_words: Vec<String>,
    pub(super) score: u32,
    pub(super) percent: f64,
    pub(super) rank: &'static Rank,
    /// Words not yet found, by length
    pub(super) remaining_histogram: LengthHistogram,
}

impl GameState {
    /// Fresh state: nothing found, lowest rank
    #[must_use]
    pub fn new(puzzle: Arc<Puzzle>) -> Self {
        let remaining_histogram = puzzle.length_histogram().clone();
        Self {
            puzzle,
            found_words: Vec::new(),
            score: 0,
            percent: 0.0,
            rank: Rank::lowest(),
            remaining_histogram,
        }
    }

    #[inline]
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    #[must_use]
    pub fn has_found(&self, word: &str) -> bool {
        self.found_words.iter().any(|found| found == word)
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Percent of the maximum score, `0.0..=100.0`
    #[inline]
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> &'static Rank {
        self.rank
    }

    #[inline]
    #[must_use]
    pub const fn remaining_histogram(&self) -> &LengthHistogram {
        &self.remaining_histogram
    }

    /// Words still to find
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.puzzle.valid_words().len() - self.found_words.len()
    }

    /// Every valid word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Pangrams found so far
    #[must_use]
    pub fn pangrams_found(&self) -> usize {
        self.found_words
            .iter()
            .filter(|word| self.puzzle.is_pangram(word))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::puzzle::tests::hundred_point_puzzle;

    #[test]
    fn initial_state() {
        let puzzle = Arc::new(hundred_point_puzzle());
        let state = GameState::new(Arc::clone(&puzzle));

        assert!(state.found_words().is_empty());
        assert_eq!(state.score(), 0);
        assert!(state.percent().abs() < f64::EPSILON);
        assert_eq!(state.rank().name, "Beginner");
        assert_eq!(state.remaining_histogram(), puzzle.length_histogram());
        assert_eq!(state.remaining_count(), 44);
        assert!(!state.is_complete());
        assert_eq!(state.pangrams_found(), 0);
    }
}
