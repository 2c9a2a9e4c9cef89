//! Quest catalog, user-authored creation, and daily generation.
//!
//! The registry owns every quest record plus a monotonic id allocator,
//! so ids are never reused even as the catalog grows. Completion flips
//! `completed` true exactly once and never back; the XP side effects
//! live in [`crate::ledger`].
//!
//! # Daily Quests
//!
//! Daily generation is idempotent per calendar day: asking twice on the
//! same date returns the same set instead of duplicating it. The
//! template catalog is fixed — one quest per template, no sampling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domains::Domain;

/// How a quest is performed and verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    /// Tap-to-complete.
    Simple,
    /// Requires a photo as proof.
    Photo,
    /// Runs a countdown (see [`crate::session`]).
    Timer,
    /// Completed by ticking off subtasks.
    Checklist,
}

/// A unit of user-completable work with a fixed XP reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: u32,
    pub title: String,
    pub domain: Domain,
    pub xp: u32,
    pub kind: QuestKind,
    /// Checklist items; empty for other kinds.
    #[serde(default)]
    pub subtasks: Vec<String>,
    pub completed: bool,
    pub is_daily: bool,
    /// Stamp for daily quests; `None` for the static catalog.
    pub created: Option<NaiveDate>,
}

/// Parameters for a user-authored quest.
#[derive(Debug, Clone)]
pub struct NewQuest {
    pub title: String,
    pub domain: Domain,
    pub xp: u32,
    pub kind: QuestKind,
    pub subtasks: Vec<String>,
}

/// Validation failures surfaced synchronously before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("quest title must not be empty")]
    EmptyTitle,
    #[error("quest XP reward must be positive")]
    ZeroXp,
}

/// Outcome of a successful creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Created {
    pub quest_id: u32,
    /// True only for the first user-authored quest ever created; the
    /// caller uses this to award the one-time Quest Creator achievement.
    pub first_custom: bool,
}

/// Daily quest template.
#[derive(Debug, Clone, Copy)]
struct DailyTemplate {
    title: &'static str,
    domain: Domain,
    xp: u32,
    kind: QuestKind,
}

static DAILY_TEMPLATES: &[DailyTemplate] = &[
    DailyTemplate { title: "Morning workout", domain: Domain::Physical, xp: 50, kind: QuestKind::Timer },
    DailyTemplate { title: "Read for 20 minutes", domain: Domain::Mental, xp: 40, kind: QuestKind::Simple },
    DailyTemplate { title: "Meditation session", domain: Domain::Emotional, xp: 40, kind: QuestKind::Timer },
    DailyTemplate { title: "Reach out to a friend", domain: Domain::Social, xp: 30, kind: QuestKind::Simple },
    DailyTemplate { title: "Track today's spending", domain: Domain::Financial, xp: 30, kind: QuestKind::Simple },
    DailyTemplate { title: "Evening reflection", domain: Domain::Spiritual, xp: 40, kind: QuestKind::Simple },
];

/// Static starter catalog loaded at first launch.
fn starter_catalog() -> Vec<Quest> {
    let entries: [(&str, Domain, u32, QuestKind); 4] = [
        ("Complete your first workout", Domain::Physical, 100, QuestKind::Photo),
        ("Finish a book chapter", Domain::Mental, 80, QuestKind::Simple),
        ("Write a gratitude list", Domain::Emotional, 60, QuestKind::Checklist),
        ("Set a monthly budget", Domain::Financial, 120, QuestKind::Checklist),
    ];
    entries
        .iter()
        .enumerate()
        .map(|(i, (title, domain, xp, kind))| Quest {
            id: i as u32 + 1,
            title: (*title).to_string(),
            domain: *domain,
            xp: *xp,
            kind: *kind,
            subtasks: Vec::new(),
            completed: false,
            is_daily: false,
            created: None,
        })
        .collect()
}

/// Owns the quest catalog and allocates ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestRegistry {
    quests: Vec<Quest>,
    next_id: u32,
    custom_created: u32,
}

impl Default for QuestRegistry {
    fn default() -> Self {
        Self::with_starter_catalog()
    }
}

impl QuestRegistry {
    /// Empty registry; ids start at 1.
    pub fn new() -> Self {
        Self {
            quests: Vec::new(),
            next_id: 1,
            custom_created: 0,
        }
    }

    /// Registry seeded with the static starter catalog.
    pub fn with_starter_catalog() -> Self {
        let quests = starter_catalog();
        let next_id = quests.len() as u32 + 1;
        Self {
            quests,
            next_id,
            custom_created: 0,
        }
    }

    /// Create a user-authored quest. Validation happens before any
    /// mutation; nothing is appended on error.
    pub fn create(&mut self, spec: NewQuest) -> Result<Created, QuestError> {
        if spec.title.trim().is_empty() {
            return Err(QuestError::EmptyTitle);
        }
        if spec.xp == 0 {
            return Err(QuestError::ZeroXp);
        }
        let id = self.alloc_id();
        self.quests.push(Quest {
            id,
            title: spec.title,
            domain: spec.domain,
            xp: spec.xp,
            kind: spec.kind,
            subtasks: spec.subtasks,
            completed: false,
            is_daily: false,
            created: None,
        });
        self.custom_created += 1;
        Ok(Created {
            quest_id: id,
            first_custom: self.custom_created == 1,
        })
    }

    /// Generate today's daily quests, one per template.
    ///
    /// Idempotent per calendar day: if dailies stamped `today` already
    /// exist they are returned unchanged.
    pub fn generate_daily(&mut self, today: NaiveDate) -> Vec<u32> {
        let existing: Vec<u32> = self.daily_for(today).map(|q| q.id).collect();
        if !existing.is_empty() {
            return existing;
        }
        DAILY_TEMPLATES
            .iter()
            .map(|t| {
                let id = self.alloc_id();
                self.quests.push(Quest {
                    id,
                    title: t.title.to_string(),
                    domain: t.domain,
                    xp: t.xp,
                    kind: t.kind,
                    subtasks: Vec::new(),
                    completed: false,
                    is_daily: true,
                    created: Some(today),
                });
                id
            })
            .collect()
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn quest(&self, id: u32) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn quest_mut(&mut self, id: u32) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }

    pub fn all(&self) -> &[Quest] {
        &self.quests
    }

    pub fn by_domain(&self, domain: Domain) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(move |q| q.domain == domain)
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| !q.completed)
    }

    pub fn daily_for(&self, date: NaiveDate) -> impl Iterator<Item = &Quest> {
        self.quests
            .iter()
            .filter(move |q| q.is_daily && q.created == Some(date))
    }
}
