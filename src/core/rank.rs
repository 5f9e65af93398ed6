//! Rank table
//!
//! Ranks are named tiers reached at a percentage of the puzzle's maximum
//! score.

use std::fmt;

/// A named rank reached at `threshold` percent of the maximum score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rank {
    pub threshold: f64,
    pub name: &'static str,
}

/// All ranks, highest threshold first
pub static RANKS: [Rank; 10] = [
    Rank {
        threshold: 100.0,
        name: "Queen Bee",
    },
    Rank {
        threshold: 70.0,
        name: "Genius",
    },
    Rank {
        threshold: 50.0,
        name: "Amazing",
    },
    Rank {
        threshold: 40.0,
        name: "Great",
    },
    Rank {
        threshold: 25.0,
        name: "Nice",
    },
    Rank {
        threshold: 15.0,
        name: "Solid",
    },
    Rank {
        threshold: 8.0,
        name: "Good",
    },
    Rank {
        threshold: 5.0,
        name: "Moving Up",
    },
    Rank {
        threshold: 2.0,
        name: "Good Start",
    },
    Rank {
        threshold: 0.0,
        name: "Beginner",
    },
];

impl Rank {
    /// The rank every game starts at
    #[must_use]
    pub fn lowest() -> &'static Self {
        &RANKS[RANKS.len() - 1]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The highest rank whose threshold is at or below `percent`
///
/// # Examples
/// ```
/// use spelling_bee::core::rank_for;
///
/// assert_eq!(rank_for(0.0).name, "Beginner");
/// assert_eq!(rank_for(11.0).name, "Good");
/// assert_eq!(rank_for(100.0).name, "Queen Bee");
/// ```
#[must_use]
pub fn rank_for(percent: f64) -> &'static Rank {
    RANKS
        .iter()
        .find(|rank| percent >= rank.threshold)
        .unwrap_or_else(Rank::lowest)
}

/// `100 × score / max_score`, or 0 when there is nothing to score
#[must_use]
pub fn percent_of(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    f64::from(score) * 100.0 / f64::from(max_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_descend() {
        for pair in RANKS.windows(2) {
            assert!(pair[0].threshold > pair[1].threshold);
        }
    }

    #[test]
    fn table_covers_zero_to_hundred() {
        assert!((RANKS[0].threshold - 100.0).abs() < f64::EPSILON);
        assert!(Rank::lowest().threshold.abs() < f64::EPSILON);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(rank_for(2.0).name, "Good Start");
        assert_eq!(rank_for(1.999).name, "Beginner");
        assert_eq!(rank_for(70.0).name, "Genius");
        assert_eq!(rank_for(99.9).name, "Genius");
    }

    #[test]
    fn every_threshold_maps_to_its_own_rank() {
        for rank in &RANKS {
            assert_eq!(rank_for(rank.threshold), rank);
        }
    }

    #[test]
    fn negative_percent_falls_back_to_lowest() {
        assert_eq!(rank_for(-1.0), Rank::lowest());
    }

    #[test]
    fn percent_guard_for_zero_max() {
        assert!(percent_of(5, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_of_score() {
        assert!((percent_of(11, 100) - 11.0).abs() < 1e-9);
        assert!((percent_of(50, 50) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn display_is_name() {
        assert_eq!(rank_for(30.0).to_string(), "Nice");
    }
}
