//! Benchmark command
//!
//! Measures generation latency by generating many puzzles in parallel.

use crate::generator::{GenerateError, GeneratorConfig, PuzzleGenerator, RandomSelector};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One generation in a benchmark run
#[derive(Debug, Clone)]
pub struct GenerationSample {
    pub seed: u64,
    pub attempts: u32,
    pub elapsed: Duration,
    pub word_count: usize,
    pub pangram_count: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub requested: usize,
    pub samples: Vec<GenerationSample>,
    /// Generations that returned an error, by message
    pub failures: BTreeMap<String, usize>,
    pub average_attempts: f64,
    pub min_attempts: u32,
    pub max_attempts: u32,
    pub average_latency: Duration,
    pub max_latency: Duration,
    pub average_words: f64,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles in parallel, seeding each from `base_seed`
///
/// Generation `i` uses seed `base_seed + i`, so a run is reproducible.
#[allow(clippy::missing_panics_doc)] // Template is a constant
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: GeneratorConfig,
    count: usize,
    base_seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let generator = PuzzleGenerator::new(dictionary, config);

    let outcomes: Vec<Result<GenerationSample, GenerateError>> = (0..count)
        .into_par_iter()
        .map(|offset| {
            let seed = base_seed.wrapping_add(offset as u64);
            let result = generator
                .search(&mut RandomSelector::seeded(seed), None)
                .map(|generated| GenerationSample {
                    seed,
                    attempts: generated.attempts,
                    elapsed: generated.elapsed,
                    word_count: generated.puzzle.valid_words().len(),
                    pangram_count: generated.puzzle.pangrams().len(),
                });
            pb.inc(1);
            result
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_with_message("done");

    let mut samples = Vec::with_capacity(count);
    let mut failures: BTreeMap<String, usize> = BTreeMap::new();
    for outcome in outcomes {
        match outcome {
            Ok(sample) => samples.push(sample),
            Err(err) => *failures.entry(err.to_string()).or_insert(0) += 1,
        }
    }

    summarize(count, samples, failures, duration)
}

fn summarize(
    requested: usize,
    samples: Vec<GenerationSample>,
    failures: BTreeMap<String, usize>,
    duration: Duration,
) -> BenchmarkResult {
    let n = samples.len();
    let mean = |total: f64| if n == 0 { 0.0 } else { total / n as f64 };

    let total_attempts: u64 = samples.iter().map(|s| u64::from(s.attempts)).sum();
    let total_latency: Duration = samples.iter().map(|s| s.elapsed).sum();
    let total_words: usize = samples.iter().map(|s| s.word_count).sum();

    BenchmarkResult {
        requested,
        average_attempts: mean(total_attempts as f64),
        min_attempts: samples.iter().map(|s| s.attempts).min().unwrap_or(0),
        max_attempts: samples.iter().map(|s| s.attempts).max().unwrap_or(0),
        average_latency: Duration::from_secs_f64(mean(total_latency.as_secs_f64())),
        max_latency: samples.iter().map(|s| s.elapsed).max().unwrap_or_default(),
        average_words: mean(total_words as f64),
        puzzles_per_second: if duration.is_zero() {
            0.0
        } else {
            n as f64 / duration.as_secs_f64()
        },
        samples,
        failures,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{MAX_NUM_SOLUTIONS, MIN_NUM_SOLUTIONS};
    use crate::wordlists::{EmbeddedWordSource, WordSource};

    #[test]
    fn benchmark_runs() {
        let dict = EmbeddedWordSource.load().unwrap();
        let result = run_benchmark(&dict, GeneratorConfig::default(), 4, 100, false);

        assert_eq!(result.requested, 4);
        assert_eq!(result.samples.len(), 4);
        assert!(result.failures.is_empty());
        assert!(result.min_attempts >= 1);
        assert!(result.average_attempts >= f64::from(result.min_attempts));
        assert!(result.average_attempts <= f64::from(result.max_attempts));
        assert!(result.average_words >= MIN_NUM_SOLUTIONS as f64);
        assert!(result.average_words <= MAX_NUM_SOLUTIONS as f64);
        for sample in &result.samples {
            assert!(sample.pangram_count >= 1);
        }
    }

    #[test]
    fn benchmark_is_reproducible() {
        let dict = EmbeddedWordSource.load().unwrap();
        let first = run_benchmark(&dict, GeneratorConfig::default(), 2, 7, false);
        let second = run_benchmark(&dict, GeneratorConfig::default(), 2, 7, false);

        let attempts = |r: &BenchmarkResult| {
            r.samples
                .iter()
                .map(|s| (s.seed, s.attempts))
                .collect::<Vec<_>>()
        };
        assert_eq!(attempts(&first), attempts(&second));
    }

    #[test]
    fn benchmark_counts_failures() {
        let dict = Dictionary::from_words(["treason"]);
        let result = run_benchmark(&dict, GeneratorConfig { max_attempts: 3 }, 5, 0, false);

        assert!(result.samples.is_empty());
        assert_eq!(result.failures.values().sum::<usize>(), 5);
        assert_eq!(result.min_attempts, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_empty_run() {
        let dict = EmbeddedWordSource.load().unwrap();
        let result = run_benchmark(&dict, GeneratorConfig::default(), 0, 0, false);

        assert_eq!(result.requested, 0);
        assert!(result.samples.is_empty());
        assert!(result.failures.is_empty());
    }
}
