use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The questionnaire categories, in question bank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoryId {
    Depression,
    Anxiety,
    Social,
    Cognitive,
    Behavioral,
}

impl CategoryId {
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Depression,
        CategoryId::Anxiety,
        CategoryId::Social,
        CategoryId::Cognitive,
        CategoryId::Behavioral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Depression => "depression",
            CategoryId::Anxiety => "anxiety",
            CategoryId::Social => "social",
            CategoryId::Cognitive => "cognitive",
            CategoryId::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
