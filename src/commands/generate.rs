//! Generate command
//!
//! Produces one puzzle and describes it, optionally with the answers.

use crate::generator::{
    GenerateError, Generated, GeneratorConfig, Puzzle, PuzzleGenerator, RandomSelector,
};
use crate::wordlists::Dictionary;
use serde::Serialize;
use std::collections::BTreeMap;

/// Serializable description of a puzzle
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleSummary {
    pub id: String,
    pub center: char,
    pub surrounding: Vec<char>,
    pub word_count: usize,
    pub pangram_count: usize,
    pub max_score: u32,
    /// Word count by length
    pub histogram: BTreeMap<usize, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pangrams: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

impl PuzzleSummary {
    /// Describe `puzzle`, including answers only if `reveal` is set
    #[must_use]
    pub fn new(puzzle: &Puzzle, reveal: bool) -> Self {
        let letters = puzzle.letter_set();
        let owned = |words: Vec<&str>| -> Vec<String> {
            words.into_iter().map(str::to_string).collect()
        };

        Self {
            id: puzzle.id(),
            center: letters.center().as_char(),
            surrounding: letters.surrounding().iter().map(|l| l.as_char()).collect(),
            word_count: puzzle.valid_words().len(),
            pangram_count: puzzle.pangrams().len(),
            max_score: puzzle.max_score(),
            histogram: puzzle.length_histogram().iter().collect(),
            pangrams: reveal.then(|| owned(puzzle.sorted_pangrams())),
            words: reveal.then(|| owned(puzzle.sorted_words())),
        }
    }
}

/// Result of the generate command
pub struct GenerateResult {
    pub generated: Generated,
    pub summary: PuzzleSummary,
}

/// Generate one puzzle on the current thread
///
/// # Errors
///
/// Returns `GenerateError` if no acceptable letter set is found.
pub fn generate_puzzle(
    dictionary: &Dictionary,
    config: GeneratorConfig,
    seed: Option<u64>,
    reveal: bool,
) -> Result<GenerateResult, GenerateError> {
    let generator = PuzzleGenerator::new(dictionary, config);
    let mut selector = RandomSelector::from_seed_option(seed);
    let generated = generator.search(&mut selector, None)?;
    let summary = PuzzleSummary::new(&generated.puzzle, reveal);

    Ok(GenerateResult { generated, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::puzzle::tests::hundred_point_puzzle;
    use crate::wordlists::{EmbeddedWordSource, WordSource};

    #[test]
    fn summary_hides_answers_by_default() {
        let summary = PuzzleSummary::new(&hundred_point_puzzle(), false);
        assert_eq!(summary.id, "e-anorst");
        assert_eq!(summary.center, 'e');
        assert_eq!(summary.word_count, 44);
        assert_eq!(summary.pangram_count, 1);
        assert_eq!(summary.max_score, 100);
        assert_eq!(summary.histogram.get(&4), Some(&20));
        assert!(summary.words.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("words").is_none());
        assert!(json.get("pangrams").is_none());
        assert_eq!(json["surrounding"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn summary_reveals_answers() {
        let summary = PuzzleSummary::new(&hundred_point_puzzle(), true);
        assert_eq!(summary.pangrams.as_deref(), Some(&["treason".to_string()][..]));
        assert_eq!(summary.words.as_ref().map(Vec::len), Some(44));
    }

    #[test]
    fn generate_is_reproducible_with_seed() {
        let dict = EmbeddedWordSource.load().unwrap();
        let first = generate_puzzle(&dict, GeneratorConfig::default(), Some(8), false).unwrap();
        let second = generate_puzzle(&dict, GeneratorConfig::default(), Some(8), false).unwrap();
        assert_eq!(first.summary.id, second.summary.id);
        assert_eq!(first.generated.attempts, second.generated.attempts);
    }

    #[test]
    fn generate_reports_exhaustion() {
        let dict = Dictionary::from_words(["treason"]);
        let config = GeneratorConfig { max_attempts: 10 };
        let err = generate_puzzle(&dict, config, Some(1), false).err().unwrap();
        assert_eq!(err, GenerateError::Exhausted { attempts: 10 });
    }
}
