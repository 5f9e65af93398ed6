//! Word counts by length

use super::rules::MAX_WORD_LENGTH;

/// Number of words of each length `0..=MAX_WORD_LENGTH`
///
/// Words longer than [`MAX_WORD_LENGTH`] are not counted in any bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthHistogram([usize; MAX_WORD_LENGTH + 1]);

impl LengthHistogram {
    /// Build a histogram from word lengths measured in characters
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LengthHistogram;
    ///
    /// let hist = LengthHistogram::from_words(["tent", "rose", "stone"]);
    /// assert_eq!(hist.count(4), 2);
    /// assert_eq!(hist.count(5), 1);
    /// ```
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = [0; MAX_WORD_LENGTH + 1];
        for word in words {
            let len = word.chars().count();
            if len <= MAX_WORD_LENGTH {
                counts[len] += 1;
            }
        }
        Self(counts)
    }

    /// Take one word out of its bucket
    ///
    /// Overlong words and already-empty buckets are left alone.
    pub fn remove(&mut self, word: &str) {
        if let Some(bucket) = self.0.get_mut(word.chars().count()) {
            *bucket = bucket.saturating_sub(1);
        }
    }

    /// Count for one length (0 outside the tracked range)
    #[inline]
    #[must_use]
    pub fn count(&self, len: usize) -> usize {
        self.0.get(len).copied().unwrap_or(0)
    }

    /// Sum over all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Non-empty buckets as `(length, count)` in increasing length
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(len, &count)| (len, count))
    }
}

impl Default for LengthHistogram {
    fn default() -> Self {
        Self([0; MAX_WORD_LENGTH + 1])
    }
}
