use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The diagnosis / analysis / recommendations triple attached to an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Narrative {
    pub diagnosis: String,
    pub analysis: String,
    pub recommendations: Vec<String>,
}

/// Where an assessment's narrative came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NarrativeSource {
    RuleTable,
    Provider,
}
