//! Dictionary loading utilities
//!
//! A [`WordSource`] supplies the dictionary. Loading failures are fatal to
//! generation: without a dictionary no puzzle can be produced.

use super::Dictionary;
use super::embedded::DICTIONARY;
use crate::core::rules::MIN_WORD_LENGTH;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dictionary unavailable: failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary unavailable: {source_name} contains no usable words")]
    Empty { source_name: String },
}

/// Something that can supply a dictionary
pub trait WordSource {
    /// Human-readable name used in logs and errors
    fn name(&self) -> String;

    /// Load and normalize the dictionary
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be read or has no usable words.
    fn load(&self) -> Result<Dictionary, LoadError>;
}

/// The dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn name(&self) -> String {
        "embedded dictionary".to_string()
    }

    fn load(&self) -> Result<Dictionary, LoadError> {
        finish(self.name(), Dictionary::from_words(DICTIONARY))
    }
}

/// A dictionary file: one word per line, or CSV with the word in the first column
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dictionary, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        finish(self.name(), Dictionary::from_words(content.lines()))
    }
}

fn finish(source_name: String, dictionary: Dictionary) -> Result<Dictionary, LoadError> {
    if dictionary.is_empty() {
        return Err(LoadError::Empty { source_name });
    }
    info!(source = %source_name, words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

/// Normalize one raw dictionary line into a candidate word
///
/// Takes the first CSV column, trims whitespace and quotes, and lowercases.
/// Returns `None` for words that can never appear in a puzzle: anything with
/// characters outside `a-z`, or shorter than the minimum word length.
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::normalize_word;
///
/// assert_eq!(normalize_word("Treason,noun").as_deref(), Some("treason"));
/// assert_eq!(normalize_word("  \"Arose\" ").as_deref(), Some("arose"));
/// assert_eq!(normalize_word("cat"), None);
/// assert_eq!(normalize_word("o'clock"), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"')
        .to_lowercase();

    if word.len() < MIN_WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    Some(word)
}
