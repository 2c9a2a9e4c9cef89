//! Level thresholds and hunter rank bands.
//!
//! Total XP maps to a level through a fixed threshold table, and the
//! level maps to the profile's hunter rank. Domain progress bars use a
//! fixed per-level XP span as their denominator.

use crate::rank::Rank;

/// XP span of one domain level; denominator of the 0–100 progress bar.
pub const MAX_XP_FOR_LEVEL: u32 = 1000;

/// One level threshold. Table must stay sorted by `xp_required`.
#[derive(Debug, Clone, Copy)]
pub struct LevelInfo {
    pub level: u32,
    pub xp_required: u32,
}

/// Level thresholds. Gaps widen as levels climb.
pub static LEVELS: &[LevelInfo] = &[
    LevelInfo { level: 1, xp_required: 0 },
    LevelInfo { level: 2, xp_required: 100 },
    LevelInfo { level: 3, xp_required: 250 },
    LevelInfo { level: 4, xp_required: 450 },
    LevelInfo { level: 5, xp_required: 700 },
    LevelInfo { level: 6, xp_required: 1000 },
    LevelInfo { level: 7, xp_required: 1350 },
    LevelInfo { level: 8, xp_required: 1750 },
    LevelInfo { level: 9, xp_required: 2200 },
    LevelInfo { level: 10, xp_required: 2700 },
    LevelInfo { level: 11, xp_required: 3300 },
    LevelInfo { level: 12, xp_required: 4000 },
    LevelInfo { level: 13, xp_required: 4800 },
    LevelInfo { level: 14, xp_required: 5700 },
    LevelInfo { level: 15, xp_required: 6700 },
    LevelInfo { level: 16, xp_required: 7900 },
    LevelInfo { level: 17, xp_required: 9300 },
    LevelInfo { level: 18, xp_required: 10900 },
    LevelInfo { level: 19, xp_required: 12700 },
    LevelInfo { level: 20, xp_required: 14700 },
    LevelInfo { level: 21, xp_required: 17000 },
    LevelInfo { level: 22, xp_required: 19600 },
    LevelInfo { level: 23, xp_required: 22500 },
    LevelInfo { level: 24, xp_required: 25700 },
    LevelInfo { level: 25, xp_required: 29200 },
];

/// Level reached at a given total XP.
pub fn level_for_xp(total_xp: u32) -> u32 {
    LEVELS
        .iter()
        .rev()
        .find(|l| total_xp >= l.xp_required)
        .map(|l| l.level)
        .unwrap_or(1)
}

/// Hunter rank band for a level.
pub fn rank_for_level(level: u32) -> Rank {
    match level {
        0..=4 => Rank::E,
        5..=9 => Rank::D,
        10..=14 => Rank::C,
        15..=19 => Rank::B,
        20..=24 => Rank::A,
        _ => Rank::S,
    }
}

/// XP still needed for the next level, or `None` at the table's top.
pub fn xp_for_next_level(total_xp: u32) -> Option<u32> {
    LEVELS
        .iter()
        .find(|l| l.xp_required > total_xp)
        .map(|l| l.xp_required - total_xp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted() {
        for pair in LEVELS.windows(2) {
            assert!(pair[0].xp_required < pair[1].xp_required);
            assert_eq!(pair[0].level + 1, pair[1].level);
        }
    }

    #[test]
    fn test_level_for_xp() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(250), 3);
        assert_eq!(level_for_xp(1_000_000), 25);
    }

    #[test]
    fn test_rank_bands() {
        assert_eq!(rank_for_level(1), Rank::E);
        assert_eq!(rank_for_level(5), Rank::D);
        assert_eq!(rank_for_level(10), Rank::C);
        assert_eq!(rank_for_level(15), Rank::B);
        assert_eq!(rank_for_level(20), Rank::A);
        assert_eq!(rank_for_level(25), Rank::S);
    }

    #[test]
    fn test_xp_for_next_level() {
        assert_eq!(xp_for_next_level(0), Some(100));
        assert_eq!(xp_for_next_level(150), Some(100));
        assert_eq!(xp_for_next_level(29_200), None);
    }
}
