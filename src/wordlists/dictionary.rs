//! Searchable dictionary
//!
//! Each word is stored with its [`LetterMask`] so the solver can test letter
//! constraints without rescanning the word.

use super::loader::normalize_word;
use crate::core::{Letter, LetterMask};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// A dictionary word with its precomputed letter mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: Box<str>,
    mask: LetterMask,
}

impl Entry {
    /// Build an entry from an already-normalized word
    ///
    /// Returns `None` if the word has characters outside `a-z`.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        LetterMask::of_word(text).map(|mask| Self {
            text: text.into(),
            mask,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    /// Length in letters (entries are ASCII only)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask.contains(letter)
    }
}

/// A normalized, deduplicated word list
///
/// Built once at startup and shared read-only (wrap in `Arc` to hand it to
/// background generation).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    /// Build a dictionary from raw words
    ///
    /// Words are normalized with [`normalize_word`]; unusable words are
    /// skipped and duplicates collapse. Entries are kept in sorted order.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["Treason", "treason", "cat", "it's"]);
    /// assert_eq!(dict.len(), 1);
    /// assert!(dict.contains("treason"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: FxHashSet<String> = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();

        let mut sorted: Vec<String> = unique.into_iter().collect();
        sorted.sort_unstable();

        let entries = sorted
            .into_par_iter()
            .filter_map(|word| Entry::new(&word))
            .collect();

        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Check if a normalized word is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|entry| entry.text().cmp(word))
            .is_ok()
    }

    /// Words in sorted order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_tracks_letters() {
        let entry = Entry::new("arose").unwrap();
        assert_eq!(entry.text(), "arose");
        assert_eq!(entry.len(), 5);
        assert_eq!(entry.mask().len(), 5);
        assert!(entry.contains(Letter::try_from('r').unwrap()));
        assert!(!entry.contains(Letter::try_from('t').unwrap()));
    }

    #[test]
    fn entry_rejects_non_letters() {
        assert!(Entry::new("o'clock").is_none());
    }

    #[test]
    fn from_words_normalizes_and_dedupes() {
        let dict = Dictionary::from_words(["Stone", " stone ", "STONE", "tone"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words().collect::<Vec<_>>(), vec!["stone", "tone"]);
    }

    #[test]
    fn from_words_skips_short_and_symbol_words() {
        let dict = Dictionary::from_words(["ant", "x-ray", "antenna"]);
        assert_eq!(dict.words().collect::<Vec<_>>(), vec!["antenna"]);
    }

    #[test]
    fn contains_uses_sorted_entries() {
        let dict = Dictionary::from_words(["zebra", "apple", "mango"]);
        assert!(dict.contains("apple"));
        assert!(dict.contains("mango"));
        assert!(dict.contains("zebra"));
        assert!(!dict.contains("kiwi"));
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.contains("tent"));
    }
}
