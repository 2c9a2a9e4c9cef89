//! Storage key constants.
//!
//! Key strings are part of the on-device data contract; changing one
//! orphans existing payloads.

use chrono::NaiveDate;

/// Profile ledger, quest registry, and achievements bundle.
pub const SYSTEM_DATA: &str = "systemData";

/// Assessment answers and results.
pub const CLARITY_DATA: &str = "clarityData";

/// Weekly goal list.
pub const WEEKLY_GOALS: &str = "weeklyGoals";

/// Notification preferences.
pub const NOTIFICATIONS: &str = "notifications";

/// Per-day journal key, e.g. `pointedJournal_2026-08-31`.
pub fn journal_day_key(date: NaiveDate) -> String {
    format!("pointedJournal_{}", date.format("%Y-%m-%d"))
}
