//! Letter set solving
//!
//! Given a letter set, find every dictionary word it admits and decide whether
//! the set makes a good puzzle.

use crate::core::rules::{MAX_NUM_SOLUTIONS, MIN_NUM_SOLUTIONS, MIN_WORD_LENGTH, word_points};
use crate::core::{LengthHistogram, LetterSet};
use crate::wordlists::{Dictionary, Entry};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Everything the solver learned about one letter set
#[derive(Debug, Clone)]
pub struct Solution {
    /// Whether the set satisfies the solution-count and pangram bounds
    pub accepted: bool,
    pub valid_words: FxHashSet<String>,
    /// Valid words that use all seven letters
    pub pangrams: FxHashSet<String>,
    pub length_histogram: LengthHistogram,
}

impl Solution {
    /// Points for finding every valid word, pangram bonuses included
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.valid_words
            .iter()
            .map(|word| word_points(word.len(), self.pangrams.contains(word)))
            .sum()
    }
}

/// Derives word lists for letter sets
pub struct PuzzleSolver;

impl PuzzleSolver {
    /// Solve a letter set against a dictionary
    ///
    /// A word is valid when it contains the center letter, uses only the
    /// seven allowed letters, and has at least [`MIN_WORD_LENGTH`] letters.
    /// A pangram is a valid word containing all seven letters.
    ///
    /// Rejection is reported through [`Solution::accepted`], never as an error.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    /// use spelling_bee::generator::PuzzleSolver;
    /// use spelling_bee::wordlists::Dictionary;
    ///
    /// let letters = LetterSet::parse("e", "artnos").unwrap();
    /// let dict = Dictionary::from_words(["eaten", "arose", "treason", "train"]);
    ///
    /// let solution = PuzzleSolver::solve(&letters, &dict);
    /// assert_eq!(solution.valid_words.len(), 3);
    /// assert!(solution.pangrams.contains("treason"));
    /// assert!(!solution.accepted); // too few words
    /// ```
    #[must_use]
    pub fn solve(letter_set: &LetterSet, dictionary: &Dictionary) -> Solution {
        let center = letter_set.center();
        let allowed = letter_set.allowed();

        let valid: Vec<&Entry> = dictionary
            .entries()
            .par_iter()
            .filter(|entry| entry.contains(center) && entry.mask().is_subset_of(allowed))
            .filter(|entry| entry.len() >= MIN_WORD_LENGTH)
            .collect();

        // Valid words are already limited to the allowed letters, so
        // containing all of them means the masks are equal
        let pangrams: FxHashSet<String> = valid
            .iter()
            .filter(|entry| entry.mask() == allowed)
            .map(|entry| entry.text().to_string())
            .collect();

        let length_histogram = LengthHistogram::from_words(valid.iter().map(|entry| entry.text()));
        let valid_words: FxHashSet<String> =
            valid.iter().map(|entry| entry.text().to_string()).collect();

        Solution {
            accepted: is_acceptable(valid_words.len(), pangrams.len()),
            valid_words,
            pangrams,
            length_histogram,
        }
    }
}

/// Whether a word list of this shape makes a good puzzle
#[inline]
#[must_use]
pub const fn is_acceptable(num_valid_words: usize, num_pangrams: usize) -> bool {
    num_valid_words >= MIN_NUM_SOLUTIONS && num_valid_words <= MAX_NUM_SOLUTIONS && num_pangrams >= 1
}
