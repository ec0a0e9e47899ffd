use psychaid_core::models::answer::AnswerMap;
use psychaid_core::models::category::CategoryId;
use psychaid_core::models::result::AssessmentResult;
use psychaid_core::models::severity::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use ts_rs::TS;

use crate::all_categories;
use crate::error::InstrumentError;

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
}

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub category: CategoryId,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: &str, category: CategoryId, text: &str, options: &[(u32, &str)]) -> Self {
        Self {
            id: id.to_string(),
            category,
            text: text.to_string(),
            options: options
                .iter()
                .map(|(value, label)| AnswerOption {
                    value: *value,
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// Highest value any option of this question can contribute.
    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    pub fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn label_for(&self, value: u32) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// A recorded answer that does not fit the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerError {
    #[error("unknown question: {question_id}")]
    UnknownQuestion { question_id: String },

    #[error("{question_id}: value {value} is not one of {allowed:?}")]
    InvalidValue {
        question_id: String,
        value: u32,
        allowed: Vec<u32>,
    },
}

/// Integer percentage of `score` over `max_score`, rounded half away from
/// zero. A zero maximum scores 0.
pub fn percentage(score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    (f64::from(score) / f64::from(max_score) * 100.0).round() as u32
}

/// Score every category that has at least one answered question.
///
/// Question ids missing from `answers` are skipped. The maximum is always the
/// category's full maximum, so a partially answered category reports a
/// proportionally lower percentage.
pub fn compute_results(answers: &AnswerMap) -> Vec<AssessmentResult> {
    let mut results = Vec::new();

    for category in all_categories() {
        let answered: Vec<u32> = category
            .questions()
            .iter()
            .filter_map(|q| answers.get(&q.id).copied())
            .collect();

        if answered.is_empty() {
            continue;
        }

        let score: u32 = answered.iter().sum();
        let max_score = category.max_score();
        let percentage = percentage(score, max_score);
        let severity = Severity::from_percentage(percentage);

        debug!(
            category = %category.id(),
            answered = answered.len(),
            score,
            max_score,
            percentage,
            severity = %severity,
            "scored category"
        );

        results.push(AssessmentResult {
            category: category.id(),
            score,
            max_score,
            percentage,
            severity,
            recommendations: category
                .recommendations(severity)
                .iter()
                .map(|r| r.to_string())
                .collect(),
        });
    }

    results
}

/// Rounded mean of the per-category percentages; 0 when nothing was scored.
pub fn compute_overall_score(results: &[AssessmentResult]) -> u32 {
    if results.is_empty() {
        return 0;
    }
    let total: u32 = results.iter().map(|r| r.percentage).sum();
    (f64::from(total) / results.len() as f64).round() as u32
}

/// Check every recorded answer against the question bank.
pub fn validate_answers(answers: &AnswerMap) -> Vec<AnswerError> {
    let categories = all_categories();
    let mut errors = Vec::new();

    for (question_id, value) in answers {
        let question = categories
            .iter()
            .flat_map(|c| c.questions())
            .find(|q| &q.id == question_id);

        match question {
            None => errors.push(AnswerError::UnknownQuestion {
                question_id: question_id.clone(),
            }),
            Some(q) if !q.accepts(*value) => errors.push(AnswerError::InvalidValue {
                question_id: question_id.clone(),
                value: *value,
                allowed: q.options.iter().map(|o| o.value).collect(),
            }),
            Some(_) => {}
        }
    }

    errors
}

/// Ids of bank questions that have no recorded answer, in bank order.
pub fn missing_questions(answers: &AnswerMap) -> Vec<String> {
    all_categories()
        .iter()
        .flat_map(|c| c.questions())
        .filter(|q| !answers.contains_key(&q.id))
        .map(|q| q.id.clone())
        .collect()
}

/// Whether every bank question has an answer. Submit requires this.
pub fn is_complete(answers: &AnswerMap) -> bool {
    missing_questions(answers).is_empty()
}

/// Gate for a submitted questionnaire: every answer must fit the bank and
/// every question must be answered.
pub fn check_submission(answers: &AnswerMap) -> Result<(), InstrumentError> {
    if let Some(error) = validate_answers(answers).into_iter().next() {
        return Err(error.into());
    }
    let missing = missing_questions(answers).len();
    if missing > 0 {
        return Err(InstrumentError::Incomplete {
            missing,
            total: crate::total_questions(),
        });
    }
    Ok(())
}
