//! Formatting utilities for terminal output
//!
//! Plain strings only; coloring happens at the print sites.

use crate::core::{LengthHistogram, Letter, LetterSet, RANKS, Rank};
use std::fmt::Write;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The seven letters on one line, center in brackets
///
/// `ring` is the display order of the surrounding letters; the first half
/// goes left of the center.
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::output::formatters::format_board;
///
/// let letters = LetterSet::parse("e", "artnos").unwrap();
/// assert_eq!(format_board(&letters, letters.surrounding()), "A R T [E] N O S");
/// ```
#[must_use]
pub fn format_board(letter_set: &LetterSet, ring: &[Letter]) -> String {
    let upper = |letter: &Letter| letter.as_char().to_ascii_uppercase().to_string();
    let (left, right) = ring.split_at(ring.len() / 2);

    left.iter()
        .map(upper)
        .chain(std::iter::once(format!("[{}]", upper(&letter_set.center()))))
        .chain(right.iter().map(upper))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-empty histogram buckets as `4: 3  5: 2 ...`
#[must_use]
pub fn format_histogram(histogram: &LengthHistogram) -> String {
    let mut out = String::new();
    for (len, count) in histogram.iter() {
        if !out.is_empty() {
            out.push_str("  ");
        }
        let _ = write!(out, "{len}: {count}");
    }
    out
}

/// The rank after `current`, if any
#[must_use]
pub fn next_rank(current: &Rank) -> Option<&'static Rank> {
    RANKS
        .iter()
        .rev()
        .find(|rank| rank.threshold > current.threshold)
}

/// Points still needed to reach `rank`, rounding up
#[must_use]
pub fn points_to_rank(rank: &Rank, score: u32, max_score: u32) -> u32 {
    let needed = (rank.threshold * f64::from(max_score) / 100.0).ceil() as u32;
    needed.saturating_sub(score)
}

/// Lay words out in columns of `width` characters
#[must_use]
pub fn format_columns(words: &[&str], columns: usize, width: usize) -> String {
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
