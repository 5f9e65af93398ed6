//! Dictionaries for puzzle generation
//!
//! Provides an embedded dictionary compiled into the binary, a file loader,
//! and the [`Dictionary`] type the generator searches.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, Entry};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::{EmbeddedWordSource, FileWordSource, LoadError, WordSource, normalize_word};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::MIN_WORD_LENGTH;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_words_are_normalized() {
        for &word in DICTIONARY {
            assert!(
                word.len() >= MIN_WORD_LENGTH,
                "Word '{word}' is shorter than {MIN_WORD_LENGTH}"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_sorted_and_unique() {
        for pair in DICTIONARY.windows(2) {
            assert!(pair[0] < pair[1], "'{}' before '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn embedded_dictionary_is_large_enough_to_play() {
        assert!(DICTIONARY_COUNT > 1000);
    }
}
