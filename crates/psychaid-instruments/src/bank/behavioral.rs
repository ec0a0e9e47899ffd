use psychaid_core::models::category::CategoryId;
use psychaid_core::models::severity::Severity;

use crate::scoring::Question;
use crate::Category;

/// Behavioral Patterns: daily behaviours and habits.
/// Four items rated 0–3. Maximum 12.
pub struct Behavioral;

impl Category for Behavioral {
    fn id(&self) -> CategoryId {
        CategoryId::Behavioral
    }

    fn name(&self) -> &str {
        "Behavioral Patterns"
    }

    fn description(&self) -> &str {
        "Assessment of daily behaviors and habits"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let id = CategoryId::Behavioral;
            vec![
                Question::new(
                    "beh_1",
                    id,
                    "How would you rate your daily routine and organization?",
                    &[
                        (0, "Very organized"),
                        (1, "Somewhat organized"),
                        (2, "Disorganized"),
                        (3, "Very disorganized"),
                    ],
                ),
                Question::new(
                    "beh_2",
                    id,
                    "Do you engage in impulsive behaviors?",
                    &[(0, "Never"), (1, "Rarely"), (2, "Sometimes"), (3, "Often")],
                ),
                Question::new(
                    "beh_3",
                    id,
                    "How well do you manage stress and emotions?",
                    &[
                        (0, "Very well"),
                        (1, "Somewhat well"),
                        (2, "Poorly"),
                        (3, "Very poorly"),
                    ],
                ),
                Question::new(
                    "beh_4",
                    id,
                    "Do you have healthy coping mechanisms?",
                    &[
                        (0, "Yes, very healthy"),
                        (1, "Somewhat healthy"),
                        (2, "Unhealthy"),
                        (3, "Very unhealthy"),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }

    fn recommendations(&self, severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Low => &[
                "Maintain current healthy behavioral patterns",
                "Continue positive habit formation",
                "Practice self-monitoring techniques",
            ],
            Severity::Moderate => &[
                "Develop structured daily routines",
                "Practice impulse control strategies",
                "Consider behavioral therapy",
            ],
            Severity::High => &[
                "Seek professional behavioral therapy",
                "Develop comprehensive behavior management plan",
                "Consider medication evaluation",
            ],
            Severity::Severe => &[
                "Seek immediate professional intervention",
                "Consider intensive behavioral therapy",
                "Develop comprehensive treatment plan",
            ],
        }
    }
}
