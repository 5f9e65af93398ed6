//! Letter set selection
//!
//! Defines the [`LetterSetSelector`] trait and its implementations.

use crate::core::rules::NUM_SURROUNDING;
use crate::core::{ALPHABET, Letter, LetterSet, MOST_FREQUENT};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A source of candidate letter sets for the generator
pub trait LetterSetSelector {
    /// Propose the next letter set to try
    fn choose(&mut self) -> LetterSet;
}

/// Choose a random letter set biased toward frequent letters
///
/// The center comes uniformly from [`MOST_FREQUENT`]. The remaining 25 letters
/// are ordered frequent-first, then the whole sequence is shuffled and the
/// first six become the surrounding ring.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use spelling_bee::core::MOST_FREQUENT;
/// use spelling_bee::generator::choose_letter_set;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let set = choose_letter_set(&mut rng);
/// assert!(MOST_FREQUENT.contains(&set.center()));
/// assert_eq!(set.surrounding().len(), 6);
/// ```
pub fn choose_letter_set<R: Rng + ?Sized>(rng: &mut R) -> LetterSet {
    let center = MOST_FREQUENT[rng.random_range(0..MOST_FREQUENT.len())];

    let (mut pool, other): (Vec<Letter>, Vec<Letter>) = ALPHABET
        .iter()
        .copied()
        .filter(|&letter| letter != center)
        .partition(|letter| MOST_FREQUENT.contains(letter));
    pool.extend(other);
    pool.shuffle(rng);

    // 25 letters remain after removing the center
    let mut surrounding = [center; NUM_SURROUNDING];
    surrounding.copy_from_slice(&pool[..NUM_SURROUNDING]);

    LetterSet::from_parts(center, surrounding)
}

/// Random selector driven by any RNG
///
/// Deterministic when built from a seed.
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    /// Selector with a reproducible sequence
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Selector seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded if `seed` is given, otherwise from the operating system
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> LetterSetSelector for RandomSelector<R> {
    fn choose(&mut self) -> LetterSet {
        choose_letter_set(&mut self.rng)
    }
}

/// Replays a fixed list of letter sets, cycling when it runs out
///
/// Useful for replaying known puzzles and for driving the generator through a
/// known sequence of accepts and rejects.
#[derive(Debug, Clone)]
pub struct ScriptedSelector {
    sets: Vec<LetterSet>,
    next: usize,
}

impl ScriptedSelector {
    /// Returns `None` if `sets` is empty.
    #[must_use]
    pub fn new(sets: Vec<LetterSet>) -> Option<Self> {
        if sets.is_empty() {
            return None;
        }
        Some(Self { sets, next: 0 })
    }
}

impl LetterSetSelector for ScriptedSelector {
    fn choose(&mut self) -> LetterSet {
        let set = self.sets[self.next % self.sets.len()].clone();
        self.next += 1;
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterMask;

    #[test]
    fn random_sets_are_structurally_valid() {
        let mut selector = RandomSelector::seeded(7);
        for _ in 0..500 {
            let set = selector.choose();
            assert!(MOST_FREQUENT.contains(&set.center()));
            assert_eq!(set.surrounding().len(), NUM_SURROUNDING);
            assert!(!set.surrounding().contains(&set.center()));

            let ring: LetterMask = set.surrounding().iter().copied().collect();
            assert_eq!(ring.len() as usize, NUM_SURROUNDING, "duplicate in {set}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomSelector::seeded(99);
        let mut b = RandomSelector::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.choose(), b.choose());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RandomSelector::seeded(1);
        let mut b = RandomSelector::seeded(2);
        let first: Vec<_> = (0..10).map(|_| a.choose()).collect();
        let second: Vec<_> = (0..10).map(|_| b.choose()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn every_frequent_letter_can_be_center() {
        let mut selector = RandomSelector::seeded(5);
        let centers: LetterMask = (0..500).map(|_| selector.choose().center()).collect();
        let frequent: LetterMask = MOST_FREQUENT.into_iter().collect();
        assert_eq!(centers, frequent);
    }

    #[test]
    fn rare_letters_can_reach_the_ring() {
        let mut selector = RandomSelector::seeded(11);
        let ring: LetterMask = (0..500)
            .flat_map(|_| selector.choose().surrounding().to_vec())
            .collect();
        assert!(ring.contains(Letter::try_from('z').unwrap()));
        assert!(ring.contains(Letter::try_from('q').unwrap()));
    }

    #[test]
    fn scripted_selector_cycles() {
        let first = LetterSet::parse("e", "artnos").unwrap();
        let second = LetterSet::parse("a", "bcdefg").unwrap();
        let mut selector = ScriptedSelector::new(vec![first.clone(), second.clone()]).unwrap();

        assert_eq!(selector.choose(), first);
        assert_eq!(selector.choose(), second);
        assert_eq!(selector.choose(), first);
    }

    #[test]
    fn scripted_selector_needs_sets() {
        assert!(ScriptedSelector::new(Vec::new()).is_none());
    }
}
