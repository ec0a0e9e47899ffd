//! Prompt assembly and response parsing for text-generation providers.
//!
//! The assessment is serialized into a structured XML-style block that is
//! sent as the user message; the model is asked to reply with the narrative
//! as a single JSON object.

use psychaid_core::models::narrative::Narrative;
use psychaid_core::models::user::provided;
use psychaid_instruments::get_category;

use crate::error::ProviderError;
use crate::provider::NarrativeRequest;

pub const SYSTEM_PROMPT: &str = "\
You are assisting a licensed psychologist in summarising a screening questionnaire. \
You receive the subject's identification, per-category scores (higher percentages \
mean more reported difficulty) and an overall score. \
Reply with exactly one JSON object and nothing else, with the keys \
\"diagnosis\" (one sentence), \"analysis\" (one paragraph that names the subject and \
the overall score) and \"recommendations\" (an array of three to eight short strings).";

/// Build the structured assessment block sent to the provider.
pub fn build_assessment_block(request: &NarrativeRequest<'_>) -> String {
    let info = request.user_info;
    let mut block = String::from("<assessment>\n");

    block.push_str("<subject>\n");
    block.push_str(&format!("name: {}\n", info.name));
    block.push_str(&format!("age: {}\n", info.age));
    block.push_str(&format!("gender: {}\n", info.gender));
    if let Some(occupation) = provided(&info.occupation) {
        block.push_str(&format!("occupation: {occupation}\n"));
    }
    if let Some(history) = provided(&info.medical_history) {
        block.push_str(&format!("medical_history: {history}\n"));
    }
    if let Some(medications) = provided(&info.current_medications) {
        block.push_str(&format!("current_medications: {medications}\n"));
    }
    block.push_str("</subject>\n");

    block.push_str("<results>\n");
    for result in request.results {
        let category = get_category(result.category);
        block.push_str(&format!(
            "- {}: {}/{} ({}%), severity {}\n",
            category.name(),
            result.score,
            result.max_score,
            result.percentage,
            result.severity,
        ));
    }
    block.push_str("</results>\n");

    block.push_str(&format!(
        "<overall_score>{}</overall_score>\n",
        request.overall_score
    ));
    block.push_str("</assessment>");
    block
}

/// Parse a provider reply into a narrative.
///
/// Accepts the object bare or wrapped in a Markdown code fence. A reply with
/// an empty diagnosis or analysis, or without recommendations, is rejected.
pub fn parse_narrative(response_text: &str) -> Result<Narrative, ProviderError> {
    let json = strip_code_fence(response_text.trim());
    if json.is_empty() {
        return Err(ProviderError::ResponseParse("empty response".to_string()));
    }

    let narrative: Narrative = serde_json::from_str(json).map_err(|e| {
        ProviderError::SchemaViolation(format!("failed to parse Narrative: {e}"))
    })?;

    if narrative.diagnosis.trim().is_empty() || narrative.analysis.trim().is_empty() {
        return Err(ProviderError::SchemaViolation(
            "diagnosis and analysis must be non-empty".to_string(),
        ));
    }
    if !narrative.recommendations.iter().any(|r| !r.trim().is_empty()) {
        return Err(ProviderError::SchemaViolation(
            "no recommendations returned".to_string(),
        ));
    }

    Ok(narrative)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use psychaid_core::models::category::CategoryId;
    use psychaid_core::models::result::AssessmentResult;
    use psychaid_core::models::severity::Severity;
    use psychaid_core::models::user::UserInfo;

    use super::*;

    #[test]
    fn block_lists_subject_and_results() {
        let mut info = UserInfo::new("Noor", 27, "female");
        info.medical_history = Some("migraines".to_string());
        let results = vec![AssessmentResult {
            category: CategoryId::Anxiety,
            score: 9,
            max_score: 12,
            percentage: 75,
            severity: Severity::High,
            recommendations: vec![],
        }];
        let request = NarrativeRequest {
            user_info: &info,
            results: &results,
            overall_score: 75,
        };

        let block = build_assessment_block(&request);
        assert!(block.starts_with("<assessment>"));
        assert!(block.ends_with("</assessment>"));
        assert!(block.contains("name: Noor"));
        assert!(block.contains("medical_history: migraines"));
        assert!(!block.contains("occupation:"));
        assert!(block.contains("- Anxiety & Stress: 9/12 (75%), severity high"));
        assert!(block.contains("<overall_score>75</overall_score>"));
    }

    #[test]
    fn parses_bare_json() {
        let narrative = parse_narrative(
            r#"{"diagnosis":"d","analysis":"a","recommendations":["r1","r2"]}"#,
        )
        .unwrap();
        assert_eq!(narrative.diagnosis, "d");
        assert_eq!(narrative.recommendations.len(), 2);
    }

    #[test]
    fn parses_fenced_json() {
        let text = "```json\n{\"diagnosis\":\"d\",\"analysis\":\"a\",\"recommendations\":[\"r\"]}\n```";
        assert!(parse_narrative(text).is_ok());
    }

    #[test]
    fn rejects_prose() {
        assert!(matches!(
            parse_narrative("I think the patient is fine."),
            Err(ProviderError::SchemaViolation(_))
        ));
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(parse_narrative(r#"{"diagnosis":"","analysis":"a","recommendations":["r"]}"#).is_err());
        assert!(parse_narrative(r#"{"diagnosis":"d","analysis":"a","recommendations":[]}"#).is_err());
        assert!(matches!(parse_narrative("   "), Err(ProviderError::ResponseParse(_))));
    }
}
