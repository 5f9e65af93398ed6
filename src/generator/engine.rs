//! Generation retry loop

use super::puzzle::Puzzle;
use super::selector::LetterSetSelector;
use super::solver::PuzzleSolver;
use crate::wordlists::Dictionary;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Attempt cap used when none is configured
///
/// Random sets over the bundled dictionary are accepted roughly once in
/// several thousand tries, so this leaves a wide margin.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Tuning for [`PuzzleGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Letter sets to try before giving up
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Why generation produced no puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("cannot generate a puzzle from an empty dictionary")]
    EmptyDictionary,
    #[error("no acceptable letter set found in {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error("generation cancelled after {attempts} attempts")]
    Cancelled { attempts: u32 },
    #[error("generation worker stopped without reporting a result")]
    WorkerLost,
}

/// A puzzle plus how long it took to find
#[derive(Debug, Clone)]
pub struct Generated {
    pub puzzle: Puzzle,
    /// Letter sets tried, including the accepted one
    pub attempts: u32,
    pub elapsed: Duration,
}

/// Tries letter sets until one makes an acceptable puzzle
pub struct PuzzleGenerator<'a> {
    dictionary: &'a Dictionary,
    config: GeneratorConfig,
}

impl<'a> PuzzleGenerator<'a> {
    pub const fn new(dictionary: &'a Dictionary, config: GeneratorConfig) -> Self {
        Self { dictionary, config }
    }

    /// Generate a puzzle, retrying until a letter set is accepted
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::EmptyDictionary` for an empty dictionary and
    /// `GenerateError::Exhausted` once `max_attempts` sets were rejected.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::generator::{GeneratorConfig, PuzzleGenerator, RandomSelector};
    /// use spelling_bee::wordlists::{EmbeddedWordSource, WordSource};
    ///
    /// let dictionary = EmbeddedWordSource.load().unwrap();
    /// let generator = PuzzleGenerator::new(&dictionary, GeneratorConfig::default());
    ///
    /// let puzzle = generator.generate(&mut RandomSelector::seeded(1)).unwrap();
    /// assert!(puzzle.valid_words().len() >= 20);
    /// assert!(!puzzle.pangrams().is_empty());
    /// ```
    pub fn generate<S>(&self, selector: &mut S) -> Result<Puzzle, GenerateError>
    where
        S: LetterSetSelector + ?Sized,
    {
        self.search(selector, None).map(|generated| generated.puzzle)
    }

    /// Generate a puzzle, checking `cancel` before every attempt
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate), plus `GenerateError::Cancelled` once
    /// the flag is observed set.
    pub fn search<S>(
        &self,
        selector: &mut S,
        cancel: Option<&AtomicBool>,
    ) -> Result<Generated, GenerateError>
    where
        S: LetterSetSelector + ?Sized,
    {
        if self.dictionary.is_empty() {
            return Err(GenerateError::EmptyDictionary);
        }

        let start = Instant::now();
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                let attempts = attempt - 1;
                warn!(attempts, "puzzle generation cancelled");
                return Err(GenerateError::Cancelled { attempts });
            }

            let letter_set = selector.choose();
            let solution = PuzzleSolver::solve(&letter_set, self.dictionary);
            let (words, pangrams) = (solution.valid_words.len(), solution.pangrams.len());

            match Puzzle::from_solution(letter_set, solution) {
                Some(puzzle) => {
                    let elapsed = start.elapsed();
                    info!(
                        id = %puzzle.id(),
                        words,
                        pangrams,
                        max_score = puzzle.max_score(),
                        attempts = attempt,
                        elapsed_ms = elapsed.as_millis(),
                        "generated puzzle"
                    );
                    return Ok(Generated {
                        puzzle,
                        attempts: attempt,
                        elapsed,
                    });
                }
                None => {
                    trace!(attempt, words, pangrams, "rejected letter set");
                    if attempt % 10_000 == 0 {
                        debug!(attempt, "still searching for an acceptable letter set");
                    }
                }
            }
        }

        warn!(attempts = max_attempts, "puzzle generation exhausted");
        Err(GenerateError::Exhausted {
            attempts: max_attempts,
        })
    }
}
