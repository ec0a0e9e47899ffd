use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use psychaid_analysis::compose;
use psychaid_core::models::answer::AnswerMap;
use psychaid_core::models::assessment::CompleteAssessment;
use psychaid_core::models::user::UserInfo;
use psychaid_instruments::scoring::check_submission;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAssessment {
    pub user_info: UserInfo,
    pub answers: AnswerMap,
}

/// Score a completed questionnaire and compose its assessment.
///
/// The result is returned, not stored.
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(req): Json<SubmitAssessment>,
) -> Result<Json<CompleteAssessment>, ApiError> {
    check_submission(&req.answers)?;
    let assessment = compose(state.selector.as_ref(), req.user_info, &req.answers).await?;
    Ok(Json(assessment))
}
