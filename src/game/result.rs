//! Finished-game records and where they go

use super::state::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::debug;

/// Snapshot of a game, suitable for saving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub puzzle_id: String,
    pub score: u32,
    pub max_score: u32,
    pub rank: String,
    /// Found words in alphabetical order
    pub found_words: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl GameResult {
    /// Snapshot `state` as of now
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self::at(state, Utc::now())
    }

    /// Snapshot `state` with an explicit timestamp
    #[must_use]
    pub fn at(state: &GameState, timestamp: DateTime<Utc>) -> Self {
        let mut found_words = state.found_words().to_vec();
        found_words.sort_unstable();

        Self {
            puzzle_id: state.puzzle().id(),
            score: state.score(),
            max_score: state.puzzle().max_score(),
            rank: state.rank().name.to_string(),
            found_words,
            timestamp,
        }
    }
}

/// Somewhere to keep finished games
pub trait Store {
    type Error: std::error::Error;

    /// Save one result
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the result could not be kept.
    fn save(&mut self, result: GameResult) -> Result<(), Self::Error>;
}

/// Keeps results in memory for the life of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    results: Vec<GameResult>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn results(&self) -> &[GameResult] {
        &self.results
    }
}

impl Store for MemoryStore {
    type Error = Infallible;

    fn save(&mut self, result: GameResult) -> Result<(), Self::Error> {
        debug!(puzzle = %result.puzzle_id, score = result.score, "saved game result");
        self.results.push(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScoringEngine;
    use crate::generator::puzzle::tests::hundred_point_puzzle;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn played() -> GameState {
        let mut state = GameState::new(Arc::new(hundred_point_puzzle()));
        for word in ["treason", "neat", "aerate"] {
            state = ScoringEngine::submit(state, word).state;
        }
        state
    }

    #[test]
    fn snapshot_sorts_found_words() {
        let result = GameResult::from_state(&played());
        assert_eq!(result.puzzle_id, "e-anorst");
        assert_eq!(result.score, 15);
        assert_eq!(result.max_score, 100);
        assert_eq!(result.rank, "Solid");
        assert_eq!(result.found_words, vec!["aerate", "neat", "treason"]);
    }

    #[test]
    fn serializes_to_json() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let result = GameResult::at(&played(), timestamp);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["puzzle_id"], "e-anorst");
        assert_eq!(json["score"], 15);
        assert_eq!(json["found_words"][0], "aerate");
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00Z");

        let back: GameResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn memory_store_keeps_results() {
        let mut store = MemoryStore::new();
        let state = played();
        store.save(GameResult::from_state(&state)).unwrap();

        let better = ScoringEngine::submit(state, "nearer").state;
        store.save(GameResult::from_state(&better)).unwrap();

        let scores: Vec<u32> = store.results().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![15, 18]);
    }
}
