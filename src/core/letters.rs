//! Letters, letter masks and letter sets
//!
//! A [`LetterSet`] is the seven-letter alphabet of a puzzle. Words are compared
//! against it through [`LetterMask`], a 26-bit set that turns "uses only these
//! letters" and "uses all of these letters" into single bit operations.

use super::rules::NUM_SURROUNDING;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use thiserror::Error;

/// A lowercase ASCII letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// The full 26-letter alphabet in order
pub const ALPHABET: [Letter; 26] = alphabet();

/// Letters favoured when choosing a letter set
pub const MOST_FREQUENT: [Letter; 7] = [
    Letter(b'e'),
    Letter(b'a'),
    Letter(b'r'),
    Letter(b'o'),
    Letter(b't'),
    Letter(b'n'),
    Letter(b's'),
];

const fn alphabet() -> [Letter; 26] {
    let mut letters = [Letter(b'a'); 26];
    let mut i = 0;
    while i < 26 {
        letters[i] = Letter(b'a' + i as u8);
        i += 1;
    }
    letters
}

impl Letter {
    /// Create a letter from an ASCII byte, folding uppercase to lowercase
    ///
    /// Returns `None` for anything outside `A-Z`/`a-z`.
    #[inline]
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase()))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (`a` = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        (self.0 - b'a') as u32
    }

    #[inline]
    #[must_use]
    pub const fn bit(self) -> u32 {
        1 << self.index()
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterSetError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .ok()
            .and_then(Self::from_ascii)
            .ok_or(LetterSetError::NotALetter(c))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMask(u32);

impl LetterMask {
    pub const EMPTY: Self = Self(0);

    /// Mask of the distinct letters in `word`
    ///
    /// Returns `None` if the word contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterMask;
    ///
    /// let mask = LetterMask::of_word("treason").unwrap();
    /// assert_eq!(mask.len(), 7);
    /// assert!(LetterMask::of_word("don't").is_none());
    /// ```
    #[must_use]
    pub fn of_word(word: &str) -> Option<Self> {
        word.bytes()
            .try_fold(Self::EMPTY, |mask, byte| Letter::from_ascii(byte).map(|l| mask.with(l)))
    }

    #[inline]
    #[must_use]
    pub const fn with(self, letter: Letter) -> Self {
        Self(self.0 | letter.bit())
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = Letter> {
        ALPHABET.into_iter().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<Letter> for LetterMask {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterSetError {
    #[error("'{0}' is not a letter a-z")]
    NotALetter(char),
    #[error("center must be a single letter, got {0:?}")]
    InvalidCenter(String),
    #[error("expected {expected} surrounding letters, got {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("surrounding letter '{0}' appears more than once")]
    Duplicate(Letter),
    #[error("surrounding letters include the center letter '{0}'")]
    ContainsCenter(Letter),
}

/// The seven letters of a puzzle: one center plus six surrounding
///
/// The surrounding letters are always distinct and never equal to the center.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterSet {
    center: Letter,
    surrounding: [Letter; NUM_SURROUNDING],
}

impl LetterSet {
    /// Create a letter set
    ///
    /// # Errors
    /// Returns `LetterSetError` if:
    /// - `surrounding` does not have exactly six letters
    /// - a surrounding letter repeats
    /// - a surrounding letter equals the center
    pub fn new(center: Letter, surrounding: &[Letter]) -> Result<Self, LetterSetError> {
        let surrounding: [Letter; NUM_SURROUNDING] =
            surrounding.try_into().map_err(|_| LetterSetError::WrongCount {
                expected: NUM_SURROUNDING,
                found: surrounding.len(),
            })?;

        let mut seen = LetterMask::EMPTY;
        for &letter in &surrounding {
            if letter == center {
                return Err(LetterSetError::ContainsCenter(letter));
            }
            if seen.contains(letter) {
                return Err(LetterSetError::Duplicate(letter));
            }
            seen = seen.with(letter);
        }

        Ok(Self {
            center,
            surrounding,
        })
    }

    /// Assemble a letter set whose invariants the caller already guarantees
    pub(crate) fn from_parts(center: Letter, surrounding: [Letter; NUM_SURROUNDING]) -> Self {
        debug_assert!(
            Self::new(center, &surrounding).is_ok(),
            "invalid letter set {center} {surrounding:?}"
        );
        Self {
            center,
            surrounding,
        }
    }

    /// Parse a letter set from text, e.g. `("e", "artnos")`
    ///
    /// Case is ignored and whitespace between surrounding letters is skipped.
    ///
    /// # Errors
    /// Returns `LetterSetError` if either part is not made of letters or the
    /// resulting set is invalid.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let set = LetterSet::parse("E", "a r t n o s").unwrap();
    /// assert_eq!(set.id(), "e-anorst");
    ///
    /// assert!(LetterSet::parse("e", "aretno").is_err()); // contains center
    /// ```
    pub fn parse(center: &str, surrounding: &str) -> Result<Self, LetterSetError> {
        let center = center.trim();
        let mut chars = center.chars();
        let center = match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c)?,
            _ => return Err(LetterSetError::InvalidCenter(center.to_string())),
        };

        let surrounding = surrounding
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Letter::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(center, &surrounding)
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> Letter {
        self.center
    }

    #[inline]
    #[must_use]
    pub fn surrounding(&self) -> &[Letter] {
        &self.surrounding
    }

    /// Mask of all seven letters
    #[must_use]
    pub fn allowed(&self) -> LetterMask {
        self.surrounding
            .iter()
            .copied()
            .collect::<LetterMask>()
            .with(self.center)
    }

    /// Stable identifier: center, a dash, then the surrounding letters sorted
    #[must_use]
    pub fn id(&self) -> String {
        let mut sorted = self.surrounding;
        sorted.sort_unstable();
        let ring: String = sorted.iter().map(|l| l.as_char()).collect();
        format!("{}-{ring}", self.center)
    }

    /// The surrounding letters in a fresh random display order
    ///
    /// The letter set itself is unchanged; only presentation order differs.
    pub fn shuffled_surrounding<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Letter> {
        let mut ring = self.surrounding.to_vec();
        ring.shuffle(rng);
        ring
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.center.as_char().to_ascii_uppercase())?;
        for letter in &self.surrounding {
            write!(f, " {}", letter.as_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::try_from(c).unwrap()).collect()
    }

    #[test]
    fn alphabet_is_a_to_z() {
        assert_eq!(ALPHABET[0].as_char(), 'a');
        assert_eq!(ALPHABET[25].as_char(), 'z');
        let mask: LetterMask = ALPHABET.into_iter().collect();
        assert_eq!(mask.len(), 26);
    }

    #[test]
    fn most_frequent_letters_are_distinct() {
        let mask: LetterMask = MOST_FREQUENT.into_iter().collect();
        assert_eq!(mask.len(), 7);
    }

    #[test]
    fn letter_from_char_folds_case() {
        assert_eq!(Letter::try_from('Q').unwrap().as_char(), 'q');
        assert_eq!(Letter::try_from('q').unwrap().index(), 16);
    }

    #[test]
    fn letter_from_char_rejects_non_letters() {
        assert_eq!(Letter::try_from('3'), Err(LetterSetError::NotALetter('3')));
        assert_eq!(Letter::try_from('é'), Err(LetterSetError::NotALetter('é')));
    }

    #[test]
    fn mask_of_word_counts_distinct_letters() {
        let mask = LetterMask::of_word("eaten").unwrap();
        assert_eq!(mask.len(), 4);
        assert!(mask.contains(Letter::try_from('t').unwrap()));
        assert!(!mask.contains(Letter::try_from('s').unwrap()));
    }

    #[test]
    fn mask_of_word_rejects_symbols() {
        assert!(LetterMask::of_word("well-known").is_none());
        assert!(LetterMask::of_word("naïve").is_none());
    }

    #[test]
    fn mask_subset() {
        let word = LetterMask::of_word("arose").unwrap();
        let allowed = LetterMask::of_word("eartnos").unwrap();
        assert!(word.is_subset_of(allowed));
        assert!(!allowed.is_subset_of(word));
    }

    #[test]
    fn mask_letters_are_sorted() {
        let mask = LetterMask::of_word("stone").unwrap();
        let text: String = mask.letters().map(Letter::as_char).collect();
        assert_eq!(text, "enost");
    }

    #[test]
    fn letter_set_valid() {
        let set = LetterSet::new(Letter::try_from('e').unwrap(), &letters("artnos")).unwrap();
        assert_eq!(set.center().as_char(), 'e');
        assert_eq!(set.surrounding(), letters("artnos").as_slice());
        assert_eq!(set.allowed().len(), 7);
    }

    #[test]
    fn letter_set_wrong_count() {
        let err = LetterSet::new(Letter::try_from('e').unwrap(), &letters("art")).unwrap_err();
        assert_eq!(
            err,
            LetterSetError::WrongCount {
                expected: 6,
                found: 3
            }
        );
    }

    #[test]
    fn letter_set_duplicate() {
        let err = LetterSet::new(Letter::try_from('e').unwrap(), &letters("artnoa")).unwrap_err();
        assert_eq!(err, LetterSetError::Duplicate(Letter::try_from('a').unwrap()));
    }

    #[test]
    fn letter_set_contains_center() {
        let err = LetterSet::new(Letter::try_from('e').unwrap(), &letters("artneo")).unwrap_err();
        assert_eq!(err, LetterSetError::ContainsCenter(Letter::try_from('e').unwrap()));
    }

    #[test]
    fn parse_accepts_spaces_and_commas() {
        let set = LetterSet::parse(" e ", "A, R, T, N, O, S").unwrap();
        assert_eq!(set.id(), "e-anorst");
    }

    #[test]
    fn parse_rejects_multi_letter_center() {
        assert_eq!(
            LetterSet::parse("ea", "rtnosl"),
            Err(LetterSetError::InvalidCenter("ea".to_string()))
        );
        assert!(LetterSet::parse("", "rtnosl").is_err());
    }

    #[test]
    fn id_ignores_surrounding_order() {
        let a = LetterSet::parse("e", "artnos").unwrap();
        let b = LetterSet::parse("e", "sontra").unwrap();
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn shuffled_surrounding_is_a_permutation() {
        let set = LetterSet::parse("e", "artnos").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let ring = set.shuffled_surrounding(&mut rng);
        let mask: LetterMask = ring.iter().copied().collect();
        assert_eq!(ring.len(), 6);
        assert_eq!(mask.with(set.center()), set.allowed());
    }

    #[test]
    fn display_uppercases_with_center_first() {
        let set = LetterSet::parse("e", "artnos").unwrap();
        assert_eq!(set.to_string(), "[E] A R T N O S");
    }
}
