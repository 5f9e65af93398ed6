//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod generate;
pub mod play;

pub use analyze::{AnalysisResult, Verdict, analyze_letters};
pub use benchmark::{BenchmarkResult, GenerationSample, run_benchmark};
pub use generate::{GenerateResult, PuzzleSummary, generate_puzzle};
pub use play::{PlayError, run_play};
