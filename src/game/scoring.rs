//! Word submission and scoring
//!
//! [`ScoringEngine::submit`] is the only way a [`GameState`] changes. It takes
//! the current state by value and hands back the next one, so two
//! submissions can never race on the same state.

use super::state::GameState;
use crate::core::rules::{MIN_WORD_LENGTH, word_points};
use crate::core::{Rank, percent_of, rank_for};
use std::fmt;
use tracing::debug;

/// What happened to a submitted word
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Fewer than four letters
    TooShort,
    /// Does not use the center letter
    MissingCenter,
    NotInWordList,
    AlreadyFound,
    Accepted {
        word: String,
        points: u32,
        /// Rank after this word
        rank: &'static Rank,
        pangram: bool,
    },
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// The player-facing notification text
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => f.write_str("Too Short"),
            Self::MissingCenter => f.write_str("Missing center letter"),
            Self::NotInWordList => f.write_str("Not in word list"),
            Self::AlreadyFound => f.write_str("Already Found"),
            Self::Accepted { points, rank, .. } => write!(f, "{rank}! +{points}"),
        }
    }
}

/// The state after a submission together with what happened
#[derive(Debug, Clone)]
pub struct Submission {
    pub state: GameState,
    pub outcome: Outcome,
}

/// Validates and scores submitted words
pub struct ScoringEngine;

impl ScoringEngine {
    /// Submit a word against the current state
    ///
    /// Input is lowercased but otherwise taken as typed. Checks run in order
    /// and the first failure wins: length, center letter, word list, already
    /// found. Rejected words return the state unchanged.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::game::{GameState, Outcome, ScoringEngine};
    /// # use spelling_bee::generator::{GeneratorConfig, PuzzleGenerator, RandomSelector};
    /// # use spelling_bee::wordlists::{EmbeddedWordSource, WordSource};
    /// # use std::sync::Arc;
    /// # let dictionary = EmbeddedWordSource.load().unwrap();
    /// # let puzzle = PuzzleGenerator::new(&dictionary, GeneratorConfig::default())
    /// #     .generate(&mut RandomSelector::seeded(1))
    /// #     .unwrap();
    /// let state = GameState::new(Arc::new(puzzle));
    ///
    /// let submission = ScoringEngine::submit(state, "ab");
    /// assert_eq!(submission.outcome, Outcome::TooShort);
    /// assert_eq!(submission.outcome.to_string(), "Too Short");
    /// assert_eq!(submission.state.score(), 0);
    /// ```
    #[must_use]
    pub fn submit(mut state: GameState, raw_input: &str) -> Submission {
        let word = raw_input.to_lowercase();

        let rejection = if word.chars().count() < MIN_WORD_LENGTH {
            Some(Outcome::TooShort)
        } else if !word.contains(state.puzzle.letter_set().center().as_char()) {
            Some(Outcome::MissingCenter)
        } else if !state.puzzle.is_valid(&word) {
            Some(Outcome::NotInWordList)
        } else if state.has_found(&word) {
            Some(Outcome::AlreadyFound)
        } else {
            None
        };

        if let Some(outcome) = rejection {
            debug!(word = %word, %outcome, "rejected word");
            return Submission { state, outcome };
        }

        let pangram = state.puzzle.is_pangram(&word);
        let points = word_points(word.len(), pangram);

        state.score += points;
        state.percent = percent_of(state.score, state.puzzle.max_score());
        state.rank = rank_for(state.percent);
        state.remaining_histogram.remove(&word);
        state.found_words.push(word.clone());

        debug!(
            word = %word,
            points,
            score = state.score,
            rank = state.rank.name,
            "accepted word"
        );

        let rank = state.rank;
        Submission {
            state,
            outcome: Outcome::Accepted {
                word,
                points,
                rank,
                pangram,
            },
        }
    }
}
