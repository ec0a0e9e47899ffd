use std::fmt::Write as _;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use psychaid_core::models::assessment::CompleteAssessment;
use psychaid_export::{ReportFormat, render_async};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExportRequest {
    pub assessment: CompleteAssessment,
    #[serde(default)]
    pub format: ReportFormat,
}

/// Render an assessment to PDF or DOCX and return the document as an
/// attachment.
pub async fn export_report(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let styles = state.styles.as_ref().clone();
    let report = render_async(req.assessment, req.format, styles).await?;

    let headers = [
        (header::CONTENT_TYPE, report.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            content_disposition(&report.filename),
        ),
    ];
    Ok((headers, report.bytes).into_response())
}

/// An `attachment` disposition naming `filename` twice: as a quoted ASCII
/// fallback and as a percent-encoded UTF-8 `filename*` (RFC 6266).
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();

    let mut encoded = String::with_capacity(filename.len());
    for byte in filename.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn plain_names_are_unchanged() {
        assert_eq!(
            content_disposition("Medical_Record_Ali_2025-03-14.pdf"),
            "attachment; filename=\"Medical_Record_Ali_2025-03-14.pdf\"; \
             filename*=UTF-8''Medical_Record_Ali_2025-03-14.pdf"
        );
    }

    #[test]
    fn quotes_and_control_characters_cannot_break_the_header() {
        let value = content_disposition("Medical_Record_Jo_\"x\"\\\u{7}_2025-03-14.pdf");
        assert_eq!(
            value,
            "attachment; filename=\"Medical_Record_Jo__x____2025-03-14.pdf\"; \
             filename*=UTF-8''Medical_Record_Jo_%22x%22%5C%07_2025-03-14.pdf"
        );
        assert!(HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn non_ascii_names_survive_in_the_extended_parameter() {
        let value = content_disposition("Medical_Record_Łukasz_2025-03-14.pdf");
        assert!(value.contains("filename=\"Medical_Record__ukasz_2025-03-14.pdf\""));
        assert!(value.ends_with("filename*=UTF-8''Medical_Record_%C5%81ukasz_2025-03-14.pdf"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }
}
