//! Pure progression logic for Hunter Evolution.
//!
//! This crate contains all scoring, ledger, and quest logic that is
//! independent of any storage backend or UI framework. Functions take
//! plain data and return results, making them unit-testable and portable
//! across the mobile shell, native tools, and the headless harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`achievements`] | One-shot achievements granting XP on first trigger |
//! | [`assessment`] | Answer sheet, domain score aggregation, result builder |
//! | [`domains`] | The six life domains that bucket questions, quests, XP |
//! | [`journal`] | Dated journal entries with monotonic ids |
//! | [`ledger`] | Profile/domain XP ledger and quest-completion rewards |
//! | [`levels`] | Level thresholds and hunter rank bands from total XP |
//! | [`questions`] | Fixed 30-question assessment catalog (5 per domain) |
//! | [`quests`] | Quest records, registry, daily generation, filters |
//! | [`rank`] | Percentage-to-rank threshold classifier (S through E) |
//! | [`session`] | Caller-driven countdown state for timer quests |

pub mod achievements;
pub mod assessment;
pub mod domains;
pub mod journal;
pub mod ledger;
pub mod levels;
pub mod questions;
pub mod quests;
pub mod rank;
pub mod session;
