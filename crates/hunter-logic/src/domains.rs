//! The six life domains.
//!
//! Every question, quest, and XP counter is bucketed under one of these.
//! Catalog order is significant: tie-breaks in strengths/improvements
//! selection and the layout of per-domain ledger rows both follow it.

use serde::{Deserialize, Serialize};

/// A life domain. Serialized as a lowercase string to match the stored
/// JSON payloads the mobile shell reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Physical,
    Mental,
    Emotional,
    Social,
    Financial,
    Spiritual,
}

impl Domain {
    /// All domains in catalog order.
    pub const ALL: [Domain; 6] = [
        Domain::Physical,
        Domain::Mental,
        Domain::Emotional,
        Domain::Social,
        Domain::Financial,
        Domain::Spiritual,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Physical => "Physical",
            Domain::Mental => "Mental",
            Domain::Emotional => "Emotional",
            Domain::Social => "Social",
            Domain::Financial => "Financial",
            Domain::Spiritual => "Spiritual",
        }
    }

    /// Position in catalog order. Used to index per-domain ledger rows.
    pub fn index(self) -> usize {
        match self {
            Domain::Physical => 0,
            Domain::Mental => 1,
            Domain::Emotional => 2,
            Domain::Social => 3,
            Domain::Financial => 4,
            Domain::Spiritual => 5,
        }
    }
}
