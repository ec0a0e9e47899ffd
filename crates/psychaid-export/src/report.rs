//! Report rendering entry points.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use psychaid_core::models::assessment::CompleteAssessment;
use psychaid_core::report_names::report_filename;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::layout::layout_report;
use crate::pdf::{PdfFonts, generate_pdf};
use crate::render::render_report_markdown;
use crate::styles::DocumentStyles;

/// Printed at the end of every report, word for word.
pub const DISCLAIMER: &str = "This assessment is for informational purposes only and should not replace professional medical advice. Please consult with a qualified mental health professional for proper diagnosis and treatment. This document is part of the patient's medical record and should be treated as confidential.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A finished document, ready to be written or sent.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    /// Pages written. DOCX pagination is left to the word processor.
    pub page_count: Option<usize>,
}

/// Render an assessment to a document.
pub fn render(
    assessment: &CompleteAssessment,
    format: ReportFormat,
    styles: &DocumentStyles,
) -> Result<RenderedReport, ExportError> {
    let filename = report_filename(&assessment.user_info, format.extension());

    let (bytes, page_count) = match format {
        ReportFormat::Pdf => {
            if styles.canvas_width <= 2.0 * styles.canvas_padding {
                return Err(ExportError::Layout(format!(
                    "canvas width {} leaves no room inside padding {}",
                    styles.canvas_width, styles.canvas_padding
                )));
            }
            let canvas = layout_report(assessment, styles);
            let fonts = PdfFonts::from_styles(styles)?;
            let (bytes, pages) =
                generate_pdf(&canvas, "Psychological Assessment Report", &fonts)?;
            (bytes, Some(pages))
        }
        ReportFormat::Docx => {
            let markdown = render_report_markdown(
                assessment,
                styles.signatory_name.as_deref(),
                &styles.organisation,
            )?;
            (generate_docx(&markdown, styles)?, None)
        }
    };

    info!(
        assessment_id = %assessment.id,
        format = format.extension(),
        bytes = bytes.len(),
        pages = ?page_count,
        "report rendered"
    );

    Ok(RenderedReport {
        filename,
        content_type: format.content_type(),
        bytes,
        page_count,
    })
}

/// [`render`] on the blocking thread pool.
///
/// The assessment is moved into the task and all intermediate buffers are
/// dropped there, whether the render succeeds or fails.
pub async fn render_async(
    assessment: CompleteAssessment,
    format: ReportFormat,
    styles: DocumentStyles,
) -> Result<RenderedReport, ExportError> {
    let assessment_id = assessment.id;
    tokio::task::spawn_blocking(move || render(&assessment, format, &styles))
        .await
        .map_err(|e| {
            error!(%assessment_id, error = %e, "render task failed");
            ExportError::Task(e.to_string())
        })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ReportFormat::Docx).unwrap(), "\"docx\"");
        let f: ReportFormat = serde_json::from_str("\"pdf\"").unwrap();
        assert_eq!(f, ReportFormat::Pdf);
        assert_eq!(f.content_type(), "application/pdf");
    }
}
