use psychaid_core::models::category::CategoryId;
use psychaid_core::models::severity::Severity;

use crate::scoring::Question;
use crate::Category;

/// Social Functioning. Four items rated 0–3. Maximum 12.
pub struct Social;

impl Category for Social {
    fn id(&self) -> CategoryId {
        CategoryId::Social
    }

    fn name(&self) -> &str {
        "Social Functioning"
    }

    fn description(&self) -> &str {
        "Assessment of social relationships and communication"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let id = CategoryId::Social;
            vec![
                Question::new(
                    "soc_1",
                    id,
                    "How comfortable are you in social situations?",
                    &[
                        (0, "Very comfortable"),
                        (1, "Somewhat comfortable"),
                        (2, "Uncomfortable"),
                        (3, "Very uncomfortable"),
                    ],
                ),
                Question::new(
                    "soc_2",
                    id,
                    "Do you avoid social situations due to fear or anxiety?",
                    &[(0, "Never"), (1, "Rarely"), (2, "Sometimes"), (3, "Often")],
                ),
                Question::new(
                    "soc_3",
                    id,
                    "How would you rate your communication skills?",
                    &[(0, "Excellent"), (1, "Good"), (2, "Fair"), (3, "Poor")],
                ),
                Question::new(
                    "soc_4",
                    id,
                    "Do you feel isolated or disconnected from others?",
                    &[
                        (0, "Not at all"),
                        (1, "Sometimes"),
                        (2, "Often"),
                        (3, "Almost always"),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }

    fn recommendations(&self, severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Low => &[
                "Continue maintaining healthy social connections",
                "Engage in community activities",
                "Practice active listening skills",
            ],
            Severity::Moderate => &[
                "Gradually increase social interactions",
                "Consider social skills training",
                "Join support groups or clubs",
            ],
            Severity::High => &[
                "Seek professional help for social anxiety",
                "Consider exposure therapy",
                "Practice social skills in safe environments",
            ],
            Severity::Severe => &[
                "Seek immediate professional intervention",
                "Consider intensive social skills therapy",
                "Develop gradual exposure plan",
            ],
        }
    }
}
