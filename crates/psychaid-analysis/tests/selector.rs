use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use psychaid_analysis::{NarrativeProvider, NarrativeRequest, NarrativeSelector, RuleTable};
use psychaid_core::models::narrative::{Narrative, NarrativeSource};
use psychaid_core::models::user::UserInfo;

enum Behaviour {
    Answer,
    Unusable,
    Hang,
}

struct StubProvider {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl StubProvider {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
        }
    }
}

impl NarrativeProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, _request: &NarrativeRequest<'_>) -> Option<Narrative> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Answer => Some(Narrative {
                diagnosis: "generated diagnosis".to_string(),
                analysis: "generated analysis".to_string(),
                recommendations: vec!["generated recommendation".to_string()],
            }),
            Behaviour::Unusable => None,
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                None
            }
        }
    }
}

fn request_parts() -> UserInfo {
    UserInfo::new("Jordan", 44, "male")
}

#[tokio::test]
async fn usable_provider_response_is_used() {
    let info = request_parts();
    let selector = NarrativeSelector::new(
        Some(StubProvider::new(Behaviour::Answer)),
        Duration::from_secs(1),
    );

    let selected = selector
        .select(&NarrativeRequest {
            user_info: &info,
            results: &[],
            overall_score: 0,
        })
        .await;

    assert_eq!(selected.source, NarrativeSource::Provider);
    assert_eq!(selected.narrative.diagnosis, "generated diagnosis");
}

#[tokio::test]
async fn unusable_provider_falls_back_after_one_attempt() {
    let info = request_parts();
    let selector = NarrativeSelector::new(
        Some(StubProvider::new(Behaviour::Unusable)),
        Duration::from_secs(1),
    );
    let request = NarrativeRequest {
        user_info: &info,
        results: &[],
        overall_score: 0,
    };

    let selected = selector.select(&request).await;

    assert_eq!(selected.source, NarrativeSource::RuleTable);
    assert_eq!(selected.narrative, RuleTable.narrative(&request));
}

#[tokio::test]
async fn provider_timeout_falls_back() {
    let info = request_parts();
    let provider = StubProvider::new(Behaviour::Hang);
    let selector = NarrativeSelector::new(Some(provider), Duration::from_millis(50));

    let selected = selector
        .select(&NarrativeRequest {
            user_info: &info,
            results: &[],
            overall_score: 85,
        })
        .await;

    assert_eq!(selected.source, NarrativeSource::RuleTable);
    assert_eq!(
        selected.narrative.diagnosis,
        "Good psychological well-being with minor areas for improvement"
    );
}

#[tokio::test]
async fn rule_table_only_never_reports_provider() {
    let info = request_parts();
    let selector = NarrativeSelector::rule_table_only();
    assert!(!selector.has_external_provider());

    let selected = selector
        .select(&NarrativeRequest {
            user_info: &info,
            results: &[],
            overall_score: 65,
        })
        .await;

    assert_eq!(selected.source, NarrativeSource::RuleTable);
    assert_eq!(
        selected.narrative.diagnosis,
        "Moderate psychological well-being with some concerns"
    );
}
