//! The accepted puzzle

use super::solver::Solution;
use crate::core::{LengthHistogram, LetterSet};
use rustc_hash::FxHashSet;

/// An accepted letter set together with its solved word list
///
/// Can only be built from an accepted [`Solution`], so every `Puzzle` has
/// between 20 and 70 valid words and at least one pangram. Immutable once
/// built; share it with `Arc`.
#[derive(Debug, Clone)]
pub struct Puzzle {
    letter_set: LetterSet,
    valid_words: FxHashSet<String>,
    pangrams: FxHashSet<String>,
    length_histogram: LengthHistogram,
    max_score: u32,
}

impl Puzzle {
    /// Build a puzzle from a solver result
    ///
    /// Returns `None` if the solution was rejected.
    #[must_use]
    pub fn from_solution(letter_set: LetterSet, solution: Solution) -> Option<Self> {
        if !solution.accepted {
            return None;
        }

        let max_score = solution.max_score();

        Some(Self {
            letter_set,
            valid_words: solution.valid_words,
            pangrams: solution.pangrams,
            length_histogram: solution.length_histogram,
            max_score,
        })
    }

    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> &LetterSet {
        &self.letter_set
    }

    #[inline]
    #[must_use]
    pub const fn valid_words(&self) -> &FxHashSet<String> {
        &self.valid_words
    }

    #[inline]
    #[must_use]
    pub const fn pangrams(&self) -> &FxHashSet<String> {
        &self.pangrams
    }

    #[inline]
    #[must_use]
    pub const fn length_histogram(&self) -> &LengthHistogram {
        &self.length_histogram
    }

    /// Points for finding every valid word
    #[inline]
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Stable identifier, e.g. `e-anorst`
    #[must_use]
    pub fn id(&self) -> String {
        self.letter_set.id()
    }

    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.valid_words.contains(word)
    }

    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.pangrams.contains(word)
    }

    /// Valid words sorted by length, then alphabetically
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.valid_words.iter().map(String::as_str).collect();
        words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        words
    }

    /// Pangrams in alphabetical order
    #[must_use]
    pub fn sorted_pangrams(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.pangrams.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generator::PuzzleSolver;
    use crate::generator::solver::tests::{earnost, hundred_point_dictionary};
    use crate::wordlists::Dictionary;

    pub(crate) fn hundred_point_puzzle() -> Puzzle {
        let letters = earnost();
        let solution = PuzzleSolver::solve(&letters, &hundred_point_dictionary());
        Puzzle::from_solution(letters, solution).unwrap()
    }

    #[test]
    fn max_score_sums_word_points() {
        let puzzle = hundred_point_puzzle();
        assert_eq!(puzzle.max_score(), 100);
    }

    #[test]
    fn rejected_solution_builds_nothing() {
        let letters = earnost();
        let dict = Dictionary::from_words(["eaten", "stereo", "arose", "treason"]);
        let solution = PuzzleSolver::solve(&letters, &dict);
        assert!(Puzzle::from_solution(letters, solution).is_none());
    }

    #[test]
    fn lookups() {
        let puzzle = hundred_point_puzzle();
        assert!(puzzle.is_valid("treason"));
        assert!(puzzle.is_pangram("treason"));
        assert!(puzzle.is_valid("neat"));
        assert!(!puzzle.is_pangram("neat"));
        assert!(!puzzle.is_valid("trance"));
        assert_eq!(puzzle.id(), "e-anorst");
    }

    #[test]
    fn sorted_words_orders_by_length_then_alpha() {
        let puzzle = hundred_point_puzzle();
        let words = puzzle.sorted_words();
        assert_eq!(words.len(), 44);
        assert_eq!(words[0], "aeon");
        assert_eq!(words[words.len() - 1], "treason");
        assert!(words.windows(2).all(|w| (w[0].len(), w[0]) <= (w[1].len(), w[1])));
        assert_eq!(puzzle.sorted_pangrams(), vec!["treason"]);
    }
}
