use psychaid_core::models::category::CategoryId;
use psychaid_core::models::severity::Severity;

use crate::scoring::Question;
use crate::Category;

/// Cognitive Function: memory, concentration and thinking.
/// Four items rated 0–3. Maximum 12.
pub struct Cognitive;

impl Category for Cognitive {
    fn id(&self) -> CategoryId {
        CategoryId::Cognitive
    }

    fn name(&self) -> &str {
        "Cognitive Function"
    }

    fn description(&self) -> &str {
        "Evaluation of memory, concentration, and thinking"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let id = CategoryId::Cognitive;
            let quality = [(0, "Excellent"), (1, "Good"), (2, "Fair"), (3, "Poor")];
            vec![
                Question::new(
                    "cog_1",
                    id,
                    "How is your ability to concentrate or focus?",
                    &quality,
                ),
                Question::new(
                    "cog_2",
                    id,
                    "Do you have trouble remembering things?",
                    &[
                        (0, "Not at all"),
                        (1, "Sometimes"),
                        (2, "Often"),
                        (3, "Almost always"),
                    ],
                ),
                Question::new("cog_3", id, "How is your decision-making ability?", &quality),
                Question::new(
                    "cog_4",
                    id,
                    "Do you experience racing thoughts or mental fog?",
                    &[(0, "Never"), (1, "Rarely"), (2, "Sometimes"), (3, "Often")],
                ),
            ]
        });
        &QUESTIONS
    }

    fn recommendations(&self, severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Low => &[
                "Continue current cognitive activities",
                "Engage in brain-training exercises",
                "Maintain healthy sleep patterns",
            ],
            Severity::Moderate => &[
                "Practice memory and concentration exercises",
                "Consider cognitive behavioral therapy",
                "Establish consistent daily routines",
            ],
            Severity::High => &[
                "Seek professional cognitive evaluation",
                "Consider neuropsychological assessment",
                "Implement cognitive rehabilitation strategies",
            ],
            Severity::Severe => &[
                "Seek immediate professional evaluation",
                "Consider comprehensive neurological assessment",
                "Develop cognitive support strategies",
            ],
        }
    }
}
