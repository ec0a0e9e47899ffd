//! Fixed-rule narrative text.
//!
//! Category recommendations come from the question bank's per-severity
//! tables. The overall narrative is picked from four score bands and then
//! extended with the recommendations of every high or severe category.

use psychaid_core::models::narrative::Narrative;
use psychaid_core::models::result::AssessmentResult;
use psychaid_core::models::user::UserInfo;

/// Band of the overall score that selects the narrative template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallBand {
    /// 80 and above.
    Good,
    /// 60–79.
    Moderate,
    /// 40–59.
    Significant,
    /// Below 40.
    Severe,
}

impl OverallBand {
    pub fn from_score(overall_score: u32) -> Self {
        if overall_score >= 80 {
            OverallBand::Good
        } else if overall_score >= 60 {
            OverallBand::Moderate
        } else if overall_score >= 40 {
            OverallBand::Significant
        } else {
            OverallBand::Severe
        }
    }

    pub fn diagnosis(self) -> &'static str {
        match self {
            OverallBand::Good => {
                "Good psychological well-being with minor areas for improvement"
            }
            OverallBand::Moderate => "Moderate psychological well-being with some concerns",
            OverallBand::Significant => "Significant psychological concerns requiring attention",
            OverallBand::Severe => {
                "Severe psychological distress requiring immediate intervention"
            }
        }
    }

    pub fn analysis(self, name: &str, overall_score: u32) -> String {
        match self {
            OverallBand::Good => format!(
                "Based on the assessment, {name} demonstrates good overall psychological health \
                 with a score of {overall_score}%. The individual shows healthy patterns across \
                 most categories, with some minor areas that could benefit from attention."
            ),
            OverallBand::Moderate => format!(
                "The assessment indicates moderate psychological well-being ({overall_score}%) \
                 with several areas requiring attention. {name} may benefit from targeted \
                 interventions to improve specific aspects of mental health."
            ),
            OverallBand::Significant => format!(
                "The assessment reveals significant psychological concerns with an overall score \
                 of {overall_score}%. {name} is experiencing notable difficulties that warrant \
                 professional intervention."
            ),
            OverallBand::Severe => format!(
                "The assessment indicates severe psychological distress ({overall_score}%) \
                 requiring immediate professional attention. {name} is experiencing significant \
                 mental health challenges that need urgent care."
            ),
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            OverallBand::Good => &[
                "Continue maintaining current healthy lifestyle habits",
                "Consider mindfulness or meditation practices for stress management",
                "Maintain regular social connections and support networks",
                "Schedule regular check-ins with mental health professionals",
            ],
            OverallBand::Moderate => &[
                "Consider seeking professional mental health support",
                "Implement stress management techniques",
                "Develop healthy coping mechanisms",
                "Establish regular sleep and exercise routines",
            ],
            OverallBand::Significant => &[
                "Seek immediate professional mental health support",
                "Consider therapy or counseling services",
                "Develop a comprehensive treatment plan with healthcare providers",
                "Establish emergency support contacts",
            ],
            OverallBand::Severe => &[
                "Seek immediate professional mental health intervention",
                "Contact emergency mental health services if needed",
                "Develop a comprehensive treatment plan",
                "Establish strong support networks",
            ],
        }
    }
}

/// Category recommendations by untyped ids. Unknown pairs return the generic
/// fallback triple.
pub fn select_category_recommendations(category: &str, severity: &str) -> Vec<String> {
    psychaid_instruments::category_recommendations(category, severity)
}

/// Build the rule-table narrative for a scored assessment.
///
/// The band list comes first, followed by each high or severe result's own
/// recommendations in result order. Repeats are kept.
pub fn select_overall_narrative(
    user_info: &UserInfo,
    results: &[AssessmentResult],
    overall_score: u32,
) -> Narrative {
    let band = OverallBand::from_score(overall_score);

    let mut recommendations: Vec<String> =
        band.recommendations().iter().map(|r| r.to_string()).collect();

    for result in results.iter().filter(|r| r.severity.is_elevated()) {
        recommendations.extend(result.recommendations.iter().cloned());
    }

    Narrative {
        diagnosis: band.diagnosis().to_string(),
        analysis: band.analysis(&user_info.name, overall_score),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(OverallBand::from_score(100), OverallBand::Good);
        assert_eq!(OverallBand::from_score(80), OverallBand::Good);
        assert_eq!(OverallBand::from_score(79), OverallBand::Moderate);
        assert_eq!(OverallBand::from_score(60), OverallBand::Moderate);
        assert_eq!(OverallBand::from_score(59), OverallBand::Significant);
        assert_eq!(OverallBand::from_score(40), OverallBand::Significant);
        assert_eq!(OverallBand::from_score(39), OverallBand::Severe);
        assert_eq!(OverallBand::from_score(0), OverallBand::Severe);
    }

    #[test]
    fn analysis_mentions_name_and_score() {
        for score in [0, 45, 65, 90] {
            let text = OverallBand::from_score(score).analysis("Rin Tanaka", score);
            assert!(text.contains("Rin Tanaka"));
            assert!(text.contains(&format!("{score}%")));
        }
    }

    #[test]
    fn every_band_has_four_recommendations() {
        for band in [
            OverallBand::Good,
            OverallBand::Moderate,
            OverallBand::Significant,
            OverallBand::Severe,
        ] {
            assert_eq!(band.recommendations().len(), 4);
        }
    }
}
