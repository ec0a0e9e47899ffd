use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::narrative::NarrativeSource;
use super::result::AssessmentResult;
use super::user::UserInfo;

/// A fully composed assessment. Immutable once built; regenerating means
/// composing again from the answers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompleteAssessment {
    pub id: Uuid,
    pub user_info: UserInfo,
    pub results: Vec<AssessmentResult>,
    pub overall_score: u32,
    pub diagnosis: String,
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub narrative_source: NarrativeSource,
    pub created_at: jiff::Timestamp,
}
