//! A single player's session
//!
//! Owns the game state, the word being typed, the display order of the
//! surrounding letters, and the background generator that supplies new
//! puzzles.

use super::result::GameResult;
use super::scoring::{Outcome, ScoringEngine};
use super::state::GameState;
use crate::core::Letter;
use crate::generator::{BackgroundGenerator, GenerateError, Generated, Puzzle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{info, warn};

/// Interactive game session
pub struct GameSession {
    generator: BackgroundGenerator,
    state: Option<GameState>,
    input: String,
    ring: Vec<Letter>,
    notification: Option<String>,
    next_seed: Option<u64>,
    rng: StdRng,
}

impl GameSession {
    /// Create a session with no puzzle yet
    ///
    /// With a `seed`, puzzles and shuffles are reproducible; each new puzzle
    /// uses the next seed in sequence.
    #[must_use]
    pub fn new(generator: BackgroundGenerator, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            generator,
            state: None,
            input: String::new(),
            ring: Vec::new(),
            notification: None,
            next_seed: seed,
            rng,
        }
    }

    /// Ask for a new puzzle
    ///
    /// Returns `false` if one is already being generated.
    pub fn new_puzzle(&mut self) -> bool {
        let started = self.generator.request(self.next_seed);
        if started {
            self.next_seed = self.next_seed.map(|seed| seed.wrapping_add(1));
        }
        started
    }

    #[inline]
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.generator.is_generating()
    }

    /// Install a finished puzzle if one is ready
    ///
    /// Returns `Ok(true)` when a new puzzle was installed.
    ///
    /// # Errors
    ///
    /// Returns the generator's error if generation failed.
    pub fn poll(&mut self) -> Result<bool, GenerateError> {
        match self.generator.try_take() {
            Some(result) => self.deliver(result),
            None => Ok(false),
        }
    }

    /// Block until the requested puzzle is ready and install it
    ///
    /// Returns `Ok(false)` if nothing was requested.
    ///
    /// # Errors
    ///
    /// Returns the generator's error if generation failed.
    pub fn wait(&mut self) -> Result<bool, GenerateError> {
        match self.generator.wait() {
            Some(result) => self.deliver(result),
            None => Ok(false),
        }
    }

    fn deliver(&mut self, result: Result<Generated, GenerateError>) -> Result<bool, GenerateError> {
        match result {
            Ok(generated) => {
                self.install(generated.puzzle);
                Ok(true)
            }
            Err(err) => {
                warn!(error = %err, "puzzle generation failed");
                Err(err)
            }
        }
    }

    /// Start playing `puzzle`, discarding any previous progress
    pub fn install(&mut self, puzzle: Puzzle) {
        info!(id = %puzzle.id(), words = puzzle.valid_words().len(), "new puzzle");
        self.ring = puzzle.letter_set().surrounding().to_vec();
        self.state = Some(GameState::new(Arc::new(puzzle)));
        self.input.clear();
        self.notification = None;
    }

    /// Append a letter to the current word
    ///
    /// Anything other than an ASCII letter is ignored and `false` returned.
    pub fn type_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        self.input.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last typed letter
    pub fn delete(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// The word typed so far
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Reorder the surrounding letters for display
    pub fn shuffle_surrounding(&mut self) -> &[Letter] {
        if let Some(state) = &self.state {
            self.ring = state
                .puzzle()
                .letter_set()
                .shuffled_surrounding(&mut self.rng);
        }
        &self.ring
    }

    /// Surrounding letters in their current display order
    #[must_use]
    pub fn surrounding_order(&self) -> &[Letter] {
        &self.ring
    }

    /// Submit the typed word
    ///
    /// The input is cleared whether or not the word is accepted. Returns
    /// `None` when there is no puzzle to play or a new one is being generated.
    pub fn submit_current(&mut self) -> Option<Outcome> {
        let word = std::mem::take(&mut self.input);
        self.submit_word(&word)
    }

    /// Submit arbitrary text as a word
    ///
    /// Returns `None` when there is no puzzle to play or a new one is being
    /// generated.
    pub fn submit_word(&mut self, word: &str) -> Option<Outcome> {
        if self.is_generating() {
            return None;
        }
        let state = self.state.take()?;
        let submission = ScoringEngine::submit(state, word);

        self.notification = Some(submission.outcome.to_string());
        self.state = Some(submission.state);
        Some(submission.outcome)
    }

    /// The last submission's notification text
    #[must_use]
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Snapshot of the current game, if any
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.as_ref().map(GameResult::from_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;
    use crate::generator::puzzle::tests::hundred_point_puzzle;
    use crate::wordlists::{Dictionary, EmbeddedWordSource, WordSource};

    fn idle_generator() -> BackgroundGenerator {
        BackgroundGenerator::new(Arc::new(Dictionary::default()), GeneratorConfig::default())
    }

    fn playing() -> GameSession {
        let mut session = GameSession::new(idle_generator(), Some(1));
        session.install(hundred_point_puzzle());
        session
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for letter in word.chars() {
            session.type_letter(letter);
        }
    }

    #[test]
    fn no_puzzle_means_no_submission() {
        let mut session = GameSession::new(idle_generator(), None);
        type_word(&mut session, "treason");
        assert!(session.submit_current().is_none());
        assert_eq!(session.input(), "");
        assert!(session.result().is_none());
    }

    #[test]
    fn typing_and_deleting() {
        let mut session = playing();
        assert!(session.type_letter('N'));
        assert!(!session.type_letter('1'));
        assert!(!session.type_letter(' '));
        type_word(&mut session, "eatt");
        assert_eq!(session.input(), "neatt");

        session.delete();
        assert_eq!(session.input(), "neat");
        session.clear_input();
        assert_eq!(session.input(), "");
        session.delete();
        assert_eq!(session.input(), "");
    }

    #[test]
    fn submit_clears_input_and_records_notification() {
        let mut session = playing();

        type_word(&mut session, "tsar");
        assert_eq!(session.submit_current(), Some(Outcome::MissingCenter));
        assert_eq!(session.input(), "");
        assert_eq!(session.notification(), Some("Missing center letter"));

        type_word(&mut session, "treason");
        assert!(session.submit_current().unwrap().is_accepted());
        assert_eq!(session.input(), "");
        assert_eq!(session.notification(), Some("Good! +11"));
        assert_eq!(session.state().unwrap().score(), 11);
    }

    #[test]
    fn submit_word_bypasses_buffer() {
        let mut session = playing();
        type_word(&mut session, "ne");
        assert!(session.submit_word("neat").unwrap().is_accepted());
        assert_eq!(session.input(), "ne");
    }

    #[test]
    fn shuffle_keeps_the_same_letters() {
        let mut session = playing();
        let mut original = session.surrounding_order().to_vec();
        let mut shuffled = session.shuffle_surrounding().to_vec();

        original.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(original, shuffled);
        assert_eq!(session.state().unwrap().puzzle().id(), "e-anorst");
    }

    #[test]
    fn install_resets_progress() {
        let mut session = playing();
        session.submit_word("treason");
        type_word(&mut session, "ne");

        session.install(hundred_point_puzzle());
        assert_eq!(session.state().unwrap().score(), 0);
        assert_eq!(session.input(), "");
        assert!(session.notification().is_none());
    }

    #[test]
    fn result_snapshots_progress() {
        let mut session = playing();
        session.submit_word("neat");
        let result = session.result().unwrap();
        assert_eq!(result.puzzle_id, "e-anorst");
        assert_eq!(result.found_words, vec!["neat"]);
    }

    #[test]
    fn background_puzzle_is_installed() {
        let dict = EmbeddedWordSource.load().unwrap();
        let generator = BackgroundGenerator::new(Arc::new(dict), GeneratorConfig::default());
        let mut session = GameSession::new(generator, Some(42));

        assert!(session.new_puzzle());
        assert!(!session.new_puzzle());
        assert!(session.is_generating());
        assert!(session.submit_word("anything").is_none());

        assert_eq!(session.wait(), Ok(true));
        assert!(!session.is_generating());
        let state = session.state().unwrap();
        assert_eq!(state.score(), 0);
        assert_eq!(session.surrounding_order().len(), 6);
    }

    #[test]
    fn generation_failure_is_reported() {
        let mut session = GameSession::new(idle_generator(), None);
        assert!(session.new_puzzle());
        assert_eq!(session.wait(), Err(GenerateError::EmptyDictionary));
        assert!(session.state().is_none());
        assert_eq!(session.poll(), Ok(false));
    }
}
