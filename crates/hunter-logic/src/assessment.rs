//! Assessment scoring — answer sheet, domain aggregation, result builder.
//!
//! The assessment flow is one-shot: the user rates 30 questions on a
//! 1–5 scale, then the result is computed in a single pass. Missing
//! ratings fill with a neutral 3 rather than erroring, so every function
//! here is total.
//!
//! ```
//! use hunter_logic::assessment::{AnswerSheet, build_result};
//! use hunter_logic::domains::Domain;
//! use hunter_logic::rank::Rank;
//!
//! let mut sheet = AnswerSheet::new();
//! for id in 1..=5 {
//!     sheet.record(id, 5); // max out the physical domain
//! }
//! let result = build_result(&sheet);
//! assert_eq!(result.score_for(Domain::Physical).percentage, 100);
//! assert_eq!(result.overall_percentage, 67);
//! assert_eq!(result.overall_rank, Rank::C);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domains::Domain;
use crate::questions::{self, MAX_RATING, QUESTIONS_PER_DOMAIN};
use crate::rank::Rank;

/// Neutral rating substituted for any unanswered question.
pub const NEUTRAL_RATING: u32 = 3;

/// Raw per-question ratings for an in-progress assessment session.
///
/// One answer per question id; recording again overwrites. Cleared only
/// by restarting the flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSheet {
    ratings: BTreeMap<u32, u32>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rating for a question, clamped to 1..=5. Later answers
    /// overwrite earlier ones for the same id.
    pub fn record(&mut self, question_id: u32, rating: u32) {
        self.ratings.insert(question_id, rating.clamp(1, MAX_RATING));
    }

    /// Rating for a question, if answered.
    pub fn rating(&self, question_id: u32) -> Option<u32> {
        self.ratings.get(&question_id).copied()
    }

    /// Number of answered questions.
    pub fn answered(&self) -> usize {
        self.ratings.len()
    }

    /// Restart the flow, dropping all answers.
    pub fn clear(&mut self) {
        self.ratings.clear();
    }
}

/// Score for a single domain, derived from the answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub percentage: u32,
    pub rank: Rank,
}

/// Full assessment output, computed once when results are requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub overall_rank: Rank,
    pub overall_percentage: u32,
    pub domain_scores: [DomainScore; 6],
    /// Two domains with the highest percentage, catalog order on ties.
    pub strengths: [Domain; 2],
    /// Two domains with the lowest percentage, catalog order on ties.
    pub improvements: [Domain; 2],
    /// True when the answers payload was absent or malformed and the
    /// neutral default result was substituted.
    pub used_default: bool,
}

impl AssessmentResult {
    /// Score row for a domain.
    pub fn score_for(&self, domain: Domain) -> DomainScore {
        self.domain_scores[domain.index()]
    }
}

/// Reduce one domain's five ratings to a 0–100 percentage.
///
/// Unanswered questions count as the neutral 3, so an empty sheet scores
/// every domain at 60.
pub fn compute_domain_score(domain: Domain, sheet: &AnswerSheet) -> u32 {
    let sum: u32 = questions::questions_for(domain)
        .iter()
        .map(|id| sheet.rating(*id).unwrap_or(NEUTRAL_RATING))
        .sum();
    let max = QUESTIONS_PER_DOMAIN * MAX_RATING;
    round_ratio_to_percent(sum, max)
}

/// Build the full result from an answer sheet. Pure and deterministic.
pub fn build_result(sheet: &AnswerSheet) -> AssessmentResult {
    build_inner(sheet, false)
}

/// Build the result from a raw JSON payload of `{question_id: rating}`.
///
/// An absent, empty, or unparsable payload substitutes the neutral
/// default result instead of failing the flow; `used_default` tells the
/// caller so it can show a non-blocking notice.
pub fn build_result_from_payload(raw: Option<&str>) -> AssessmentResult {
    let parsed = raw
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| serde_json::from_str::<BTreeMap<u32, u32>>(s).ok());
    match parsed {
        Some(map) if !map.is_empty() => {
            let mut sheet = AnswerSheet::new();
            for (id, rating) in map {
                sheet.record(id, rating);
            }
            build_inner(&sheet, false)
        }
        _ => build_inner(&AnswerSheet::new(), true),
    }
}

fn build_inner(sheet: &AnswerSheet, used_default: bool) -> AssessmentResult {
    let domain_scores = Domain::ALL.map(|d| {
        let percentage = compute_domain_score(d, sheet);
        DomainScore {
            domain: d,
            percentage,
            rank: Rank::classify(percentage),
        }
    });

    let total: u32 = domain_scores.iter().map(|s| s.percentage).sum();
    let overall_percentage = round_ratio_to_percent(total, 600);

    // Stable sort keeps catalog order on equal percentages.
    let mut by_score: Vec<DomainScore> = domain_scores.to_vec();
    by_score.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    let strengths = [by_score[0].domain, by_score[1].domain];
    let mut by_score_asc: Vec<DomainScore> = domain_scores.to_vec();
    by_score_asc.sort_by(|a, b| a.percentage.cmp(&b.percentage));
    let improvements = [by_score_asc[0].domain, by_score_asc[1].domain];

    AssessmentResult {
        overall_rank: Rank::classify(overall_percentage),
        overall_percentage,
        domain_scores,
        strengths,
        improvements,
        used_default,
    }
}

/// `round(num / den * 100)` in integer arithmetic, half rounds up.
fn round_ratio_to_percent(num: u32, den: u32) -> u32 {
    (num * 100 + den / 2) / den
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_sheet(rating: u32) -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        for id in 1..=30 {
            sheet.record(id, rating);
        }
        sheet
    }

    #[test]
    fn test_deterministic() {
        let sheet = full_sheet(4);
        let a = build_result(&sheet);
        let b = build_result(&sheet);
        assert_eq!(a.overall_percentage, b.overall_percentage);
        assert_eq!(a.domain_scores, b.domain_scores);
        assert_eq!(a.strengths, b.strengths);
    }

    #[test]
    fn test_default_fill_neutral() {
        // No answers at all: every rating counts as 3 → 60% → C rank.
        let sheet = AnswerSheet::new();
        for d in Domain::ALL {
            assert_eq!(compute_domain_score(d, &sheet), 60);
        }
        let result = build_result(&sheet);
        assert_eq!(result.overall_percentage, 60);
        assert_eq!(result.overall_rank, Rank::C);
    }

    #[test]
    fn test_partial_domain_fill() {
        // Physical answered 5,5 with three missing (3 each): 5+5+3+3+3 = 19/25 = 76.
        let mut sheet = AnswerSheet::new();
        sheet.record(1, 5);
        sheet.record(2, 5);
        assert_eq!(compute_domain_score(Domain::Physical, &sheet), 76);
    }

    #[test]
    fn test_overwrite_keeps_last_rating() {
        let mut sheet = AnswerSheet::new();
        sheet.record(1, 1);
        sheet.record(1, 5);
        assert_eq!(sheet.rating(1), Some(5));
        assert_eq!(sheet.answered(), 1);
    }

    #[test]
    fn test_rating_clamped() {
        let mut sheet = AnswerSheet::new();
        sheet.record(1, 0);
        sheet.record(2, 99);
        assert_eq!(sheet.rating(1), Some(1));
        assert_eq!(sheet.rating(2), Some(5));
    }

    #[test]
    fn test_end_to_end_example() {
        // Physical all-max plus neutral elsewhere: physical 100 (S),
        // overall round((100 + 60*5)/6) = 67 → C.
        let mut sheet = AnswerSheet::new();
        for id in 1..=5 {
            sheet.record(id, 5);
        }
        let result = build_result(&sheet);
        let physical = result.score_for(Domain::Physical);
        assert_eq!(physical.percentage, 100);
        assert_eq!(physical.rank, Rank::S);
        assert_eq!(result.overall_percentage, 67);
        assert_eq!(result.overall_rank, Rank::C);
        assert_eq!(result.strengths[0], Domain::Physical);
        assert!(!result.used_default);
    }

    #[test]
    fn test_tie_break_catalog_order() {
        // All domains equal: strengths are the first two in catalog
        // order, improvements likewise.
        let result = build_result(&full_sheet(4));
        assert_eq!(result.strengths, [Domain::Physical, Domain::Mental]);
        assert_eq!(result.improvements, [Domain::Physical, Domain::Mental]);
    }

    #[test]
    fn test_improvements_pick_lowest() {
        let mut sheet = full_sheet(4);
        for id in questions::questions_for(Domain::Financial) {
            sheet.record(id, 1);
        }
        for id in questions::questions_for(Domain::Social) {
            sheet.record(id, 2);
        }
        let result = build_result(&sheet);
        assert_eq!(result.improvements, [Domain::Financial, Domain::Social]);
    }

    #[test]
    fn test_payload_absent_uses_default() {
        let result = build_result_from_payload(None);
        assert!(result.used_default);
        assert_eq!(result.overall_percentage, 60);
    }

    #[test]
    fn test_payload_malformed_uses_default() {
        for raw in ["", "   ", "not json", "{\"a\":", "{}"] {
            let result = build_result_from_payload(Some(raw));
            assert!(result.used_default, "payload {:?} should fall back", raw);
        }
    }

    #[test]
    fn test_payload_well_formed() {
        let result = build_result_from_payload(Some("{\"1\":5,\"2\":5,\"3\":5,\"4\":5,\"5\":5}"));
        assert!(!result.used_default);
        assert_eq!(result.score_for(Domain::Physical).percentage, 100);
        assert_eq!(result.overall_percentage, 67);
    }
}
