//! Playing a puzzle
//!
//! [`GameState`] holds progress, [`ScoringEngine`] moves it forward one
//! submission at a time, and [`GameSession`] wraps both with the input
//! buffer and background generation an interactive front end needs.

mod result;
mod scoring;
mod session;
mod state;

pub use result::{GameResult, MemoryStore, Store};
pub use scoring::{Outcome, ScoringEngine, Submission};
pub use session::GameSession;
pub use state::GameState;
