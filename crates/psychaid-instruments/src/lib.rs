//! psychaid-instruments
//!
//! The questionnaire bank and its scorer. Pure data and arithmetic, no
//! provider or rendering dependency. Each category carries its questions and
//! the recommendations it makes at every severity.

pub mod bank;
pub mod error;
pub mod scoring;

use psychaid_core::models::category::CategoryId;
use psychaid_core::models::severity::Severity;

use error::InstrumentError;
use scoring::Question;

/// Recommendations returned when a (category, severity) lookup misses.
pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Consider seeking professional mental health support",
    "Practice self-care and stress management",
    "Maintain healthy lifestyle habits",
];

/// Trait implemented by each questionnaire category.
pub trait Category: Send + Sync {
    fn id(&self) -> CategoryId;

    /// Human-readable name (e.g., "Depression & Mood").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// The questions of this category, in presentation order.
    fn questions(&self) -> &[Question];

    /// Category-specific recommendations for a severity.
    fn recommendations(&self, severity: Severity) -> &'static [&'static str];

    /// Highest attainable score: the sum of every question's top option.
    fn max_score(&self) -> u32 {
        self.questions().iter().map(Question::max_value).sum()
    }
}

/// Return all categories, in bank order.
pub fn all_categories() -> Vec<Box<dyn Category>> {
    vec![
        Box::new(bank::depression::Depression),
        Box::new(bank::anxiety::Anxiety),
        Box::new(bank::social::Social),
        Box::new(bank::cognitive::Cognitive),
        Box::new(bank::behavioral::Behavioral),
    ]
}

/// Look up a category by id.
pub fn get_category(id: CategoryId) -> Box<dyn Category> {
    match id {
        CategoryId::Depression => Box::new(bank::depression::Depression),
        CategoryId::Anxiety => Box::new(bank::anxiety::Anxiety),
        CategoryId::Social => Box::new(bank::social::Social),
        CategoryId::Cognitive => Box::new(bank::cognitive::Cognitive),
        CategoryId::Behavioral => Box::new(bank::behavioral::Behavioral),
    }
}

/// Look up a category by its wire id, e.g. `"depression"`.
pub fn find_category(id: &str) -> Result<Box<dyn Category>, InstrumentError> {
    id.parse::<CategoryId>()
        .map(get_category)
        .map_err(|_| InstrumentError::UnknownCategory(id.to_string()))
}

/// Recommendations for a category at a severity, as owned strings.
pub fn recommendations_for(category: CategoryId, severity: Severity) -> Vec<String> {
    get_category(category)
        .recommendations(severity)
        .iter()
        .map(|r| r.to_string())
        .collect()
}

/// Untyped recommendation lookup. Unknown categories or severities yield
/// [`FALLBACK_RECOMMENDATIONS`]; this never fails.
pub fn category_recommendations(category: &str, severity: &str) -> Vec<String> {
    match (category.parse::<CategoryId>(), severity.parse::<Severity>()) {
        (Ok(category), Ok(severity)) => recommendations_for(category, severity),
        _ => FALLBACK_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}

/// Number of questions across the whole bank.
pub fn total_questions() -> usize {
    all_categories().iter().map(|c| c.questions().len()).sum()
}

/// Position of a question within the flattened bank.
#[derive(Debug, Clone)]
pub struct QuestionPosition {
    pub question: Question,
    pub category_index: usize,
    pub question_index: usize,
}

/// Find the question at a flat index, walking categories in bank order.
pub fn question_by_index(index: usize) -> Option<QuestionPosition> {
    all_categories()
        .iter()
        .enumerate()
        .flat_map(|(category_index, category)| {
            category
                .questions()
                .iter()
                .enumerate()
                .map(move |(question_index, question)| QuestionPosition {
                    question: question.clone(),
                    category_index,
                    question_index,
                })
                .collect::<Vec<_>>()
        })
        .nth(index)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn bank_order_matches_category_ids() {
        let ids: Vec<_> = all_categories().iter().map(|c| c.id()).collect();
        assert_eq!(ids, CategoryId::ALL.to_vec());
    }

    #[test]
    fn question_ids_are_unique() {
        let mut seen = HashSet::new();
        for category in all_categories() {
            for q in category.questions() {
                assert!(seen.insert(q.id.clone()), "duplicate question id {}", q.id);
                assert_eq!(q.category, category.id());
            }
        }
        assert_eq!(seen.len(), total_questions());
    }

    #[test]
    fn every_category_and_severity_has_recommendations() {
        for category in all_categories() {
            for severity in Severity::ALL {
                let recs = category.recommendations(severity);
                assert_eq!(recs.len(), 3, "{} / {severity}", category.id());
            }
        }
    }

    #[test]
    fn unknown_lookup_returns_fallback() {
        let fallback: Vec<String> = FALLBACK_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect();
        assert_eq!(category_recommendations("sleep", "severe"), fallback);
        assert_eq!(category_recommendations("anxiety", "extreme"), fallback);
        assert_eq!(category_recommendations("", ""), fallback);
    }

    #[test]
    fn find_category_by_wire_id() {
        assert_eq!(find_category("social").unwrap().name(), "Social Functioning");
        assert!(matches!(
            find_category("Social"),
            Err(InstrumentError::UnknownCategory(id)) if id == "Social"
        ));
    }

    #[test]
    fn known_lookup_uses_table() {
        let recs = category_recommendations("depression", "severe");
        assert_eq!(recs[0], "Seek immediate professional intervention");
        assert_eq!(recs[1], "Consider inpatient treatment if necessary");
    }

    #[test]
    fn question_by_index_walks_categories() {
        assert_eq!(total_questions(), 20);

        let first = question_by_index(0).unwrap();
        assert_eq!(first.question.id, "dep_1");

        let fifth = question_by_index(4).unwrap();
        assert_eq!(fifth.question.id, "anx_1");
        assert_eq!(fifth.category_index, 1);
        assert_eq!(fifth.question_index, 0);

        let last = question_by_index(19).unwrap();
        assert_eq!(last.question.id, "beh_4");

        assert!(question_by_index(20).is_none());
    }
}
