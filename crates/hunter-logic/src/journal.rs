//! Dated journal entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domains::Domain;

/// One journal entry. Stored under a per-day key by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u32,
    pub date: NaiveDate,
    pub prompt: String,
    pub body: String,
    pub domain: Option<Domain>,
}

/// Validation failure for journal mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JournalError {
    #[error("journal entry body must not be empty")]
    EmptyBody,
}

/// Container with a registry-owned monotonic id allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    next_id: u32,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an entry. An empty body is a blocking validation error;
    /// nothing is appended on failure.
    pub fn add(
        &mut self,
        date: NaiveDate,
        prompt: &str,
        body: &str,
        domain: Option<Domain>,
    ) -> Result<u32, JournalError> {
        if body.trim().is_empty() {
            return Err(JournalError::EmptyBody);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(JournalEntry {
            id,
            date,
            prompt: prompt.to_string(),
            body: body.to_string(),
            domain,
        });
        Ok(id)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().filter(move |e| e.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_and_lookup() {
        let mut journal = Journal::new();
        let monday = day("2026-08-31");
        let a = journal.add(monday, "What went well?", "Finished the workout", None).unwrap();
        let b = journal
            .add(day("2026-09-01"), "Focus for today?", "Budget review", Some(Domain::Financial))
            .unwrap();
        assert!(b > a);
        assert_eq!(journal.entries_on(monday).count(), 1);
        assert_eq!(journal.entries().len(), 2);
    }

    #[test]
    fn test_empty_body_rejected() {
        let mut journal = Journal::new();
        let err = journal.add(day("2026-08-31"), "Prompt", "   ", None);
        assert_eq!(err, Err(JournalError::EmptyBody));
        assert!(journal.entries().is_empty());
    }
}
