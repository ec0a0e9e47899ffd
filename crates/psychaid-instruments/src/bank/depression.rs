use psychaid_core::models::category::CategoryId;
use psychaid_core::models::severity::Severity;

use crate::scoring::Question;
use crate::Category;

/// Depression & Mood: depressive symptoms and mood.
/// Four items; the first is rated 0–4, the rest 0–3. Maximum 13.
pub struct Depression;

impl Category for Depression {
    fn id(&self) -> CategoryId {
        CategoryId::Depression
    }

    fn name(&self) -> &str {
        "Depression & Mood"
    }

    fn description(&self) -> &str {
        "Assessment of depressive symptoms and mood disorders"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let id = CategoryId::Depression;
            vec![
                Question::new(
                    "dep_1",
                    id,
                    "How often do you feel sad, empty, or hopeless?",
                    &[
                        (0, "Never"),
                        (1, "Rarely"),
                        (2, "Sometimes"),
                        (3, "Often"),
                        (4, "Almost always"),
                    ],
                ),
                Question::new(
                    "dep_2",
                    id,
                    "Do you have little interest or pleasure in doing things?",
                    &[
                        (0, "Not at all"),
                        (1, "Several days"),
                        (2, "More than half the days"),
                        (3, "Nearly every day"),
                    ],
                ),
                Question::new(
                    "dep_3",
                    id,
                    "How is your sleep pattern?",
                    &[
                        (0, "Normal sleep"),
                        (1, "Slight sleep issues"),
                        (2, "Moderate sleep problems"),
                        (3, "Severe sleep issues"),
                    ],
                ),
                Question::new(
                    "dep_4",
                    id,
                    "Do you feel tired or have little energy?",
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
                "Maintain current positive mood patterns",
                "Continue engaging in enjoyable activities",
                "Practice gratitude exercises",
            ],
            Severity::Moderate => &[
                "Consider talking to a mental health professional",
                "Increase physical activity and social engagement",
                "Practice mindfulness and relaxation techniques",
            ],
            Severity::High => &[
                "Seek professional mental health support immediately",
                "Consider medication evaluation with a psychiatrist",
                "Develop a comprehensive treatment plan",
            ],
            Severity::Severe => &[
                "Seek immediate professional intervention",
                "Consider inpatient treatment if necessary",
                "Establish emergency support contacts",
            ],
        }
    }
}
