//! Fixed game rules
//!
//! These are configuration constants, not runtime settings.

/// Letters in a puzzle (1 center + 6 surrounding)
pub const NUM_LETTERS: usize = 7;

/// Letters in the surrounding ring
pub const NUM_SURROUNDING: usize = NUM_LETTERS - 1;

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest word tracked by the length histogram
pub const MAX_WORD_LENGTH: usize = 20;

/// Fewest valid words an accepted puzzle may have
pub const MIN_NUM_SOLUTIONS: usize = 20;

/// Most valid words an accepted puzzle may have
pub const MAX_NUM_SOLUTIONS: usize = 70;

/// Extra points for a word that uses all seven letters
pub const PANGRAM_BONUS: u32 = 7;

/// Points for a valid word of `len` letters
///
/// A four-letter word is worth 1, each extra letter adds 1, and a pangram
/// adds [`PANGRAM_BONUS`].
///
/// # Examples
/// ```
/// use spelling_bee::core::rules::word_points;
///
/// assert_eq!(word_points(4, false), 1);
/// assert_eq!(word_points(7, true), 11);
/// ```
#[inline]
#[must_use]
pub const fn word_points(len: usize, pangram: bool) -> u32 {
    let base = len.saturating_sub(MIN_WORD_LENGTH - 1) as u32;
    if pangram { base + PANGRAM_BONUS } else { base }
}
