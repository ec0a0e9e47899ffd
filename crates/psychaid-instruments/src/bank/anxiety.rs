use psychaid_core::models::category::CategoryId;
use psychaid_core::models::severity::Severity;

use crate::scoring::Question;
use crate::Category;

/// Anxiety & Stress. Four items rated 0–3. Maximum 12.
pub struct Anxiety;

impl Category for Anxiety {
    fn id(&self) -> CategoryId {
        CategoryId::Anxiety
    }

    fn name(&self) -> &str {
        "Anxiety & Stress"
    }

    fn description(&self) -> &str {
        "Evaluation of anxiety symptoms and stress levels"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let id = CategoryId::Anxiety;
            let frequency = [
                (0, "Not at all"),
                (1, "Sometimes"),
                (2, "Often"),
                (3, "Almost always"),
            ];
            vec![
                Question::new(
                    "anx_1",
                    id,
                    "How often do you feel nervous, anxious, or on edge?",
                    &[
                        (0, "Not at all"),
                        (1, "Several days"),
                        (2, "More than half the days"),
                        (3, "Nearly every day"),
                    ],
                ),
                Question::new(
                    "anx_2",
                    id,
                    "Do you worry too much about different things?",
                    &frequency,
                ),
                Question::new("anx_3", id, "Do you have trouble relaxing?", &frequency),
                Question::new(
                    "anx_4",
                    id,
                    "Do you experience panic attacks or sudden fear?",
                    &[(0, "Never"), (1, "Rarely"), (2, "Sometimes"), (3, "Often")],
                ),
            ]
        });
        &QUESTIONS
    }

    fn recommendations(&self, severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Low => &[
                "Continue current stress management practices",
                "Maintain healthy lifestyle habits",
                "Practice regular relaxation techniques",
            ],
            Severity::Moderate => &[
                "Learn and practice anxiety management techniques",
                "Consider cognitive behavioral therapy",
                "Reduce caffeine and stimulant intake",
            ],
            Severity::High => &[
                "Seek professional anxiety treatment",
                "Consider medication evaluation",
                "Practice daily relaxation and breathing exercises",
            ],
            Severity::Severe => &[
                "Seek immediate professional intervention",
                "Consider anti-anxiety medication evaluation",
                "Develop comprehensive anxiety management plan",
            ],
        }
    }
}
