//! Letter set analysis command
//!
//! Solves a letter set chosen by the user and reports whether the generator
//! would accept it.

use crate::core::rules::{MAX_NUM_SOLUTIONS, MIN_NUM_SOLUTIONS};
use crate::core::{LengthHistogram, LetterSet, LetterSetError};
use crate::generator::PuzzleSolver;
use crate::wordlists::Dictionary;
use std::time::{Duration, Instant};

/// Why a letter set would be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    TooFewWords,
    TooManyWords,
    NoPangram,
}

/// Result of analyzing a letter set
pub struct AnalysisResult {
    pub letter_set: LetterSet,
    pub verdict: Verdict,
    /// Valid words, shortest first
    pub words: Vec<String>,
    pub pangrams: Vec<String>,
    pub histogram: LengthHistogram,
    /// Points available if every word is found
    pub max_score: u32,
    pub duration: Duration,
}

impl AnalysisResult {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// Solve the letter set `center` + `surrounding` against a dictionary
///
/// # Errors
///
/// Returns `LetterSetError` if the letters do not form a valid set: one
/// center letter and six distinct surrounding letters that exclude it.
pub fn analyze_letters(
    center: &str,
    surrounding: &str,
    dictionary: &Dictionary,
) -> Result<AnalysisResult, LetterSetError> {
    let letter_set = LetterSet::parse(center, surrounding)?;

    let start = Instant::now();
    let solution = PuzzleSolver::solve(&letter_set, dictionary);
    let duration = start.elapsed();

    let count = solution.valid_words.len();
    let verdict = if solution.accepted {
        Verdict::Accepted
    } else if count < MIN_NUM_SOLUTIONS {
        Verdict::TooFewWords
    } else if count > MAX_NUM_SOLUTIONS {
        Verdict::TooManyWords
    } else {
        Verdict::NoPangram
    };

    let max_score = solution.max_score();

    let mut words: Vec<String> = solution.valid_words.into_iter().collect();
    words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    let mut pangrams: Vec<String> = solution.pangrams.into_iter().collect();
    pangrams.sort_unstable();

    Ok(AnalysisResult {
        letter_set,
        verdict,
        words,
        pangrams,
        histogram: solution.length_histogram,
        max_score,
        duration,
    })
}
