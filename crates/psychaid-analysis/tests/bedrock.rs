//! Integration test for the Bedrock narrative provider.
//!
//! Calls the real Converse API and requires valid AWS credentials and model
//! access in the environment.
//!
//! Run with: `cargo test -p psychaid-analysis --test bedrock -- --ignored`

use psychaid_analysis::bedrock::BedrockProvider;
use psychaid_analysis::config::{NarrativeConfig, ProviderKind};
use psychaid_analysis::NarrativeRequest;
use psychaid_core::models::answer::AnswerMap;
use psychaid_core::models::user::UserInfo;
use psychaid_instruments::scoring::{compute_overall_score, compute_results};

#[tokio::test]
#[ignore]
async fn bedrock_returns_parseable_narrative() {
    let config = NarrativeConfig {
        provider: ProviderKind::Bedrock,
        region: Some("us-east-1".to_string()),
        ..NarrativeConfig::default()
    };
    let provider = BedrockProvider::from_config(&config).await;

    let answers: AnswerMap = [("dep_1", 3), ("dep_2", 2), ("anx_1", 1)]
        .into_iter()
        .map(|(id, v)| (id.to_string(), v))
        .collect();
    let results = compute_results(&answers);
    let info = UserInfo::new("Test Subject", 35, "female");

    let narrative = provider
        .request_narrative(&NarrativeRequest {
            user_info: &info,
            results: &results,
            overall_score: compute_overall_score(&results),
        })
        .await
        .expect("bedrock narrative should parse");

    println!("{narrative:#?}");
    assert!(!narrative.recommendations.is_empty());
}
