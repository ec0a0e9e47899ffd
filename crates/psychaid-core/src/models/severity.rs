use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Ordinal classification of a category percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::Severe,
    ];

    /// Classify a percentage. Band boundaries (25, 50, 75) belong to the
    /// lower band.
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage <= 25 {
            Severity::Low
        } else if percentage <= 50 {
            Severity::Moderate
        } else if percentage <= 75 {
            Severity::High
        } else {
            Severity::Severe
        }
    }

    /// Whether results at this severity feed their recommendations into the
    /// overall recommendation list.
    pub fn is_elevated(self) -> bool {
        matches!(self, Severity::High | Severity::Severe)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_lower_band() {
        assert_eq!(Severity::from_percentage(0), Severity::Low);
        assert_eq!(Severity::from_percentage(25), Severity::Low);
        assert_eq!(Severity::from_percentage(26), Severity::Moderate);
        assert_eq!(Severity::from_percentage(50), Severity::Moderate);
        assert_eq!(Severity::from_percentage(51), Severity::High);
        assert_eq!(Severity::from_percentage(75), Severity::High);
        assert_eq!(Severity::from_percentage(76), Severity::Severe);
        assert_eq!(Severity::from_percentage(100), Severity::Severe);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = Severity::Low;
        for pct in 0..=100 {
            let current = Severity::from_percentage(pct);
            assert!(current >= previous, "severity dropped at {pct}%");
            previous = current;
        }
    }

    #[test]
    fn only_high_and_severe_are_elevated() {
        assert!(!Severity::Low.is_elevated());
        assert!(!Severity::Moderate.is_elevated());
        assert!(Severity::High.is_elevated());
        assert!(Severity::Severe.is_elevated());
    }

    #[test]
    fn round_trips_through_str() {
        for sev in Severity::ALL {
            assert_eq!(sev.to_string().parse::<Severity>().unwrap(), sev);
        }
        assert!("critical".parse::<Severity>().is_err());
    }
}
