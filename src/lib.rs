//! Spelling Bee
//!
//! Generates "spelling bee" letter puzzles and scores play against them. A
//! puzzle is a center letter plus six surrounding letters; valid words use
//! only those letters, always include the center, and have at least four
//! letters. A pangram uses all seven.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spelling_bee::game::{GameState, ScoringEngine};
//! use spelling_bee::generator::{GeneratorConfig, PuzzleGenerator, RandomSelector};
//! use spelling_bee::wordlists::{EmbeddedWordSource, WordSource};
//! use std::sync::Arc;
//!
//! let dictionary = EmbeddedWordSource.load().unwrap();
//! let generator = PuzzleGenerator::new(&dictionary, GeneratorConfig::default());
//! let puzzle = generator.generate(&mut RandomSelector::from_os_rng()).unwrap();
//! println!("Letters: {}", puzzle.letter_set());
//!
//! let state = GameState::new(Arc::new(puzzle));
//! let submission = ScoringEngine::submit(state, "stone");
//! println!("{}", submission.outcome);
//! ```

// Core domain types
pub mod core;

// Dictionaries
pub mod wordlists;

// Puzzle generation
pub mod generator;

// Game progress and scoring
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
