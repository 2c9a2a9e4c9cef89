//! Percentage-to-rank classification.
//!
//! A rank is a discrete label (S through E) derived from a 0–100
//! percentage via fixed thresholds, evaluated top-down, first match wins.
//! Boundaries are inclusive on the lower bound of each tier.

use serde::{Deserialize, Serialize};

/// Discrete performance rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
    E,
}

impl Rank {
    /// Classify a 0–100 percentage into a rank.
    pub fn classify(percentage: u32) -> Rank {
        if percentage >= 90 {
            Rank::S
        } else if percentage >= 80 {
            Rank::A
        } else if percentage >= 70 {
            Rank::B
        } else if percentage >= 60 {
            Rank::C
        } else if percentage >= 50 {
            Rank::D
        } else {
            Rank::E
        }
    }

    /// Display label, e.g. "S-Class".
    pub fn label(self) -> &'static str {
        match self {
            Rank::S => "S-Class",
            Rank::A => "A-Class",
            Rank::B => "B-Class",
            Rank::C => "C-Class",
            Rank::D => "D-Class",
            Rank::E => "E-Class",
        }
    }

    /// One-line description shown next to the rank.
    pub fn description(self) -> &'static str {
        match self {
            Rank::S => "Master level - exceptional performance",
            Rank::A => "Expert level - excellent performance",
            Rank::B => "Advanced level - strong performance",
            Rank::C => "Intermediate level - good foundation",
            Rank::D => "Developing level - room for growth",
            Rank::E => "Beginner level - starting your journey",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Rank::classify(100), Rank::S);
        assert_eq!(Rank::classify(90), Rank::S);
        assert_eq!(Rank::classify(89), Rank::A);
        assert_eq!(Rank::classify(80), Rank::A);
        assert_eq!(Rank::classify(79), Rank::B);
        assert_eq!(Rank::classify(70), Rank::B);
        assert_eq!(Rank::classify(69), Rank::C);
        assert_eq!(Rank::classify(60), Rank::C);
        assert_eq!(Rank::classify(59), Rank::D);
        assert_eq!(Rank::classify(50), Rank::D);
        assert_eq!(Rank::classify(49), Rank::E);
        assert_eq!(Rank::classify(0), Rank::E);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Rank::S.label(), "S-Class");
        assert_eq!(Rank::E.label(), "E-Class");
    }

    #[test]
    fn test_descriptions_nonempty() {
        for r in [Rank::S, Rank::A, Rank::B, Rank::C, Rank::D, Rank::E] {
            assert!(!r.description().is_empty());
        }
    }
}
