//! One-shot achievements.
//!
//! An achievement flips `earned` false→true exactly once, granting its
//! XP to the profile at that moment. Repeat triggers are no-ops.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domains::Domain;
use crate::ledger::ProfileLedger;

/// Stable achievement identifiers.
pub mod ids {
    /// First user-authored quest created.
    pub const QUEST_CREATOR: u32 = 1;
    /// First quest completed.
    pub const FIRST_BLOOD: u32 = 2;
    /// Ten quests completed in one calendar week.
    pub const WEEKLY_GRIND: u32 = 3;
    /// A domain's progress bar reaches 100.
    pub const DOMAIN_MASTER: u32 = 4;
}

/// One achievement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub xp: u32,
    /// Domain credited when earned; `None` for profile-wide ones.
    pub domain: Option<Domain>,
    pub earned: bool,
    pub earned_on: Option<NaiveDate>,
}

fn seed_catalog() -> Vec<Achievement> {
    let entries: [(u32, &str, u32, Option<Domain>); 4] = [
        (ids::QUEST_CREATOR, "Quest Creator", 50, None),
        (ids::FIRST_BLOOD, "First Blood", 25, None),
        (ids::WEEKLY_GRIND, "Weekly Grind", 100, None),
        (ids::DOMAIN_MASTER, "Domain Master", 200, None),
    ];
    entries
        .iter()
        .map(|(id, title, xp, domain)| Achievement {
            id: *id,
            title: (*title).to_string(),
            xp: *xp,
            domain: *domain,
            earned: false,
            earned_on: None,
        })
        .collect()
}

/// Tracks which achievements have been earned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementLog {
    achievements: Vec<Achievement>,
}

impl Default for AchievementLog {
    fn default() -> Self {
        Self {
            achievements: seed_catalog(),
        }
    }
}

impl AchievementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: u32) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Earn an achievement, granting its XP to the ledger.
    ///
    /// Returns the XP granted, or `None` when the id is unknown or the
    /// achievement was already earned (idempotent guard).
    pub fn earn(&mut self, id: u32, today: NaiveDate, ledger: &mut ProfileLedger) -> Option<u32> {
        let achievement = self.achievements.iter_mut().find(|a| a.id == id)?;
        if achievement.earned {
            return None;
        }
        achievement.earned = true;
        achievement.earned_on = Some(today);
        ledger.grant_xp(achievement.xp);
        if let Some(domain) = achievement.domain {
            ledger.record_achievement(domain);
        }
        Some(achievement.xp)
    }
}
