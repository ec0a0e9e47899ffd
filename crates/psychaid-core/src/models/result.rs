use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::CategoryId;
use super::severity::Severity;

/// Scored outcome for one category that had at least one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub category: CategoryId,
    /// Sum of the chosen values for the answered questions.
    pub score: u32,
    /// The category's full attainable maximum, regardless of how many
    /// questions were answered.
    pub max_score: u32,
    /// `round(score / max_score * 100)`, always within 0..=100.
    pub percentage: u32,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}
