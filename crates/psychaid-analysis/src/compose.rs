use psychaid_core::models::answer::AnswerMap;
use psychaid_core::models::assessment::CompleteAssessment;
use psychaid_core::models::user::UserInfo;
use psychaid_instruments::scoring::{compute_overall_score, compute_results};
use tracing::info;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::provider::{NarrativeProvider, NarrativeRequest, NarrativeSelector};

/// Score the answers, select the narrative and stamp the result.
///
/// Fails only when `user_info` lacks a required identity field; nothing is
/// scored in that case.
pub async fn compose<P: NarrativeProvider>(
    selector: &NarrativeSelector<P>,
    user_info: UserInfo,
    answers: &AnswerMap,
) -> Result<CompleteAssessment, AnalysisError> {
    user_info.validate()?;

    let results = compute_results(answers);
    let overall_score = compute_overall_score(&results);

    let selected = selector
        .select(&NarrativeRequest {
            user_info: &user_info,
            results: &results,
            overall_score,
        })
        .await;

    let assessment = CompleteAssessment {
        id: Uuid::new_v4(),
        user_info,
        results,
        overall_score,
        diagnosis: selected.narrative.diagnosis,
        analysis: selected.narrative.analysis,
        recommendations: selected.narrative.recommendations,
        narrative_source: selected.source,
        created_at: jiff::Timestamp::now(),
    };

    info!(
        assessment_id = %assessment.id,
        categories = assessment.results.len(),
        overall_score,
        narrative_source = ?assessment.narrative_source,
        "assessment composed"
    );

    Ok(assessment)
}
