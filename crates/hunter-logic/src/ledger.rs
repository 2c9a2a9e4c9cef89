//! Profile and per-domain XP ledger.
//!
//! The ledger is an explicit context object: every mutation goes through
//! its methods, so tests never share global state. XP only ever
//! increases, and each domain's progress bar is a deterministic,
//! monotone function of that domain's XP.
//!
//! ```
//! use chrono::NaiveDate;
//! use hunter_logic::domains::Domain;
//! use hunter_logic::ledger::ProfileLedger;
//! use hunter_logic::quests::{NewQuest, QuestKind, QuestRegistry};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
//! let mut registry = QuestRegistry::with_starter_catalog();
//! let mut ledger = ProfileLedger::new(today);
//! let quest = registry.quest_mut(1).unwrap();
//! let reward = ledger.complete_quest(quest, today).unwrap();
//! assert_eq!(reward.xp, quest.xp);
//! assert!(ledger.complete_quest(quest, today).is_none()); // no double grant
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domains::Domain;
use crate::levels::{self, MAX_XP_FOR_LEVEL};
use crate::quests::Quest;
use crate::rank::Rank;

/// Profile-level running totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub total_xp: u32,
    pub level: u32,
    pub rank: Rank,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            rank: Rank::E,
        }
    }
}

/// Per-domain accumulators, one row per [`Domain`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DomainProgress {
    pub xp: u32,
    /// 0–100, `min(100, round(xp / MAX_XP_FOR_LEVEL * 100))`.
    pub progress: u32,
    pub quests: u32,
    pub achievements: u32,
}

/// Completion counters with calendar rollover.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CompletionStats {
    pub today: NaiveDate,
    pub today_completed: u32,
    pub weekly_completed: u32,
}

impl CompletionStats {
    /// Advance the counters to `today`, resetting the day bucket on a
    /// new date and the weekly bucket on a new ISO week.
    pub fn roll_to(&mut self, today: NaiveDate) {
        if today == self.today {
            return;
        }
        self.today_completed = 0;
        if today.iso_week() != self.today.iso_week() {
            self.weekly_completed = 0;
        }
        self.today = today;
    }
}

/// What a single completion granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionReward {
    pub xp: u32,
    pub domain: Domain,
    pub new_level: u32,
    pub leveled_up: bool,
}

/// Owns the profile, the six domain rows, and the completion stats.
///
/// Domain rows are a fixed array indexed by [`Domain`], so a quest can
/// never reference a missing domain row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLedger {
    pub profile: Profile,
    domains: [DomainProgress; 6],
    pub stats: CompletionStats,
}

impl Default for ProfileLedger {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            domains: [DomainProgress::default(); 6],
            stats: CompletionStats::default(),
        }
    }
}

impl ProfileLedger {
    /// Fresh ledger with stats anchored to `start`.
    pub fn new(start: NaiveDate) -> Self {
        let mut ledger = Self::default();
        ledger.stats.today = start;
        ledger
    }

    pub fn domain(&self, domain: Domain) -> &DomainProgress {
        &self.domains[domain.index()]
    }

    /// Apply a quest's completion rewards.
    ///
    /// Returns `None` without touching anything when the quest is
    /// already completed — an idempotent guard, not an error. Otherwise
    /// marks the quest completed and applies every effect in one call:
    /// profile XP, domain row, progress bar, stats counters, level and
    /// rank recompute.
    pub fn complete_quest(&mut self, quest: &mut Quest, today: NaiveDate) -> Option<CompletionReward> {
        if quest.completed {
            return None;
        }
        quest.completed = true;

        let old_level = self.profile.level;
        self.grant_xp(quest.xp);

        let row = &mut self.domains[quest.domain.index()];
        row.xp += quest.xp;
        row.quests += 1;
        row.progress = domain_progress(row.xp);

        self.stats.roll_to(today);
        self.stats.today_completed += 1;
        self.stats.weekly_completed += 1;

        Some(CompletionReward {
            xp: quest.xp,
            domain: quest.domain,
            new_level: self.profile.level,
            leveled_up: self.profile.level > old_level,
        })
    }

    /// Add XP to the profile and recompute level and rank.
    ///
    /// Also used by the achievement log when an achievement is earned.
    pub fn grant_xp(&mut self, xp: u32) {
        self.profile.total_xp += xp;
        self.profile.level = levels::level_for_xp(self.profile.total_xp);
        self.profile.rank = levels::rank_for_level(self.profile.level);
    }

    /// Record an achievement against a domain row.
    pub fn record_achievement(&mut self, domain: Domain) {
        self.domains[domain.index()].achievements += 1;
    }
}

/// Progress-bar value for a domain XP total, capped at 100.
fn domain_progress(xp: u32) -> u32 {
    let raw = (xp * 100 + MAX_XP_FOR_LEVEL / 2) / MAX_XP_FOR_LEVEL;
    raw.min(100)
}
