//! Puzzle generation
//!
//! A selector proposes letter sets, the solver derives each set's word list
//! and judges it, and the generator retries until a set is accepted. The
//! background generator runs that search off the caller's thread.

pub mod background;
mod engine;
pub mod puzzle;
pub mod selector;
pub mod solver;

pub use background::BackgroundGenerator;
pub use engine::{DEFAULT_MAX_ATTEMPTS, GenerateError, Generated, GeneratorConfig, PuzzleGenerator};
pub use puzzle::Puzzle;
pub use selector::{LetterSetSelector, RandomSelector, ScriptedSelector, choose_letter_set};
pub use solver::{PuzzleSolver, Solution};
