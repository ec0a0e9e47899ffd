use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text in DOCX output (e.g. "Times New Roman").
    pub body_font: String,

    /// Font for headings in DOCX output.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Heading 1 font size in points.
    pub heading1_size: usize,

    /// Heading 2 font size in points.
    pub heading2_size: usize,

    /// Heading 3 font size in points.
    pub heading3_size: usize,

    /// Width of the layout canvas in layout units. One page is this wide and
    /// `canvas_width * 297 / 210` tall.
    pub canvas_width: f32,

    /// Blank border around the laid-out content, in layout units.
    pub canvas_padding: f32,

    /// Line height as a multiple of the font size.
    pub line_height: f32,

    /// Name printed above the signature line; left blank when absent.
    pub signatory_name: Option<String>,

    /// Issuer shown on the stamp and in the footer.
    pub organisation: String,

    /// TrueType file for regular PDF text. The bundled DejaVu Serif is used
    /// when unset.
    #[serde(default)]
    pub pdf_font: Option<PathBuf>,

    /// TrueType file for bold PDF text.
    #[serde(default)]
    pub pdf_bold_font: Option<PathBuf>,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            heading_font: "Times New Roman".to_string(),
            body_size: 12,
            heading1_size: 16,
            heading2_size: 14,
            heading3_size: 12,
            canvas_width: 800.0,
            canvas_padding: 40.0,
            line_height: 1.6,
            signatory_name: None,
            organisation: "PsychAid Medical Records".to_string(),
            pdf_font: None,
            pdf_bold_font: None,
        }
    }
}
