//! Fixed assessment question catalog.
//!
//! Thirty questions, five per domain, defined at compile time. Question
//! ids are stable across releases because stored answer payloads key on
//! them.

use crate::domains::Domain;

/// One catalog question. The prompt text lives in the presentation layer;
/// the logic only needs the id-to-domain mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub domain: Domain,
}

/// Questions per domain.
pub const QUESTIONS_PER_DOMAIN: u32 = 5;

/// Maximum rating a single question can receive.
pub const MAX_RATING: u32 = 5;

/// The full catalog: ids 1..=30 in domain blocks of five, catalog order.
pub static CATALOG: [Question; 30] = [
    Question { id: 1, domain: Domain::Physical },
    Question { id: 2, domain: Domain::Physical },
    Question { id: 3, domain: Domain::Physical },
    Question { id: 4, domain: Domain::Physical },
    Question { id: 5, domain: Domain::Physical },
    Question { id: 6, domain: Domain::Mental },
    Question { id: 7, domain: Domain::Mental },
    Question { id: 8, domain: Domain::Mental },
    Question { id: 9, domain: Domain::Mental },
    Question { id: 10, domain: Domain::Mental },
    Question { id: 11, domain: Domain::Emotional },
    Question { id: 12, domain: Domain::Emotional },
    Question { id: 13, domain: Domain::Emotional },
    Question { id: 14, domain: Domain::Emotional },
    Question { id: 15, domain: Domain::Emotional },
    Question { id: 16, domain: Domain::Social },
    Question { id: 17, domain: Domain::Social },
    Question { id: 18, domain: Domain::Social },
    Question { id: 19, domain: Domain::Social },
    Question { id: 20, domain: Domain::Social },
    Question { id: 21, domain: Domain::Financial },
    Question { id: 22, domain: Domain::Financial },
    Question { id: 23, domain: Domain::Financial },
    Question { id: 24, domain: Domain::Financial },
    Question { id: 25, domain: Domain::Financial },
    Question { id: 26, domain: Domain::Spiritual },
    Question { id: 27, domain: Domain::Spiritual },
    Question { id: 28, domain: Domain::Spiritual },
    Question { id: 29, domain: Domain::Spiritual },
    Question { id: 30, domain: Domain::Spiritual },
];

/// The five question ids belonging to a domain.
pub fn questions_for(domain: Domain) -> [u32; 5] {
    let start = domain.index() as u32 * QUESTIONS_PER_DOMAIN + 1;
    [start, start + 1, start + 2, start + 3, start + 4]
}

/// Domain owning a question id, if the id is in the catalog.
pub fn domain_of(question_id: u32) -> Option<Domain> {
    if question_id == 0 || question_id > 30 {
        return None;
    }
    let block = ((question_id - 1) / QUESTIONS_PER_DOMAIN) as usize;
    Some(Domain::ALL[block])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_coverage() {
        assert_eq!(CATALOG.len(), 30);
        for d in Domain::ALL {
            let count = CATALOG.iter().filter(|q| q.domain == d).count();
            assert_eq!(count, 5, "{:?} should have 5 questions", d);
        }
    }

    #[test]
    fn test_ids_are_one_through_thirty() {
        for (i, q) in CATALOG.iter().enumerate() {
            assert_eq!(q.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_questions_for_matches_catalog() {
        for d in Domain::ALL {
            let ids = questions_for(d);
            for id in ids {
                let q = CATALOG.iter().find(|q| q.id == id).unwrap();
                assert_eq!(q.domain, d);
            }
        }
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of(1), Some(Domain::Physical));
        assert_eq!(domain_of(5), Some(Domain::Physical));
        assert_eq!(domain_of(6), Some(Domain::Mental));
        assert_eq!(domain_of(30), Some(Domain::Spiritual));
        assert_eq!(domain_of(0), None);
        assert_eq!(domain_of(31), None);
    }
}
