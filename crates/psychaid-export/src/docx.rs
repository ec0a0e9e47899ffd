use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Colour of quoted (disclaimer) paragraphs.
const QUOTE_COLOR: &str = "FF0000";

/// One line of the Markdown-ish report subset.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    Heading(u8, &'a str),
    Bullet(&'a str),
    Quote(&'a str),
    Blank,
    Body(&'a str),
}

impl<'a> Block<'a> {
    pub(crate) fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Block::Blank
        } else if trimmed.starts_with('\\') {
            Block::Body(trimmed)
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            Block::Heading(3, text)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            Block::Heading(2, text)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            Block::Heading(1, text)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            Block::Bullet(text)
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            Block::Quote(text)
        } else {
            Block::Body(trimmed)
        }
    }
}

/// Escape `text` so it reaches the document verbatim wherever it is
/// interpolated. Each line of a multi-line value becomes a body paragraph.
pub fn escape_markup(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = line.trim_start();
            let mut out = String::with_capacity(line.len() + 1);
            // a leading backslash keeps the line out of the block markers;
            // `\` and `*` already start with one once escaped
            if line.chars().next().is_some_and(|c| !matches!(c, '\\' | '*')) {
                out.push('\\');
            }
            for c in line.chars() {
                if matches!(c, '\\' | '*') {
                    out.push('\\');
                }
                out.push(c);
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate a DOCX document from rendered Markdown-ish report text.
///
/// The `rendered` content uses a simple subset:
/// - `#`, `##`, `###` headings → DOCX Heading 1–3
/// - `- item` → bullet item
/// - `> text` → quoted paragraph, set in red italics
/// - `**bold**` → bold run
/// - `\x` → the character `x`, never markup; a line starting with `\` is
///   always a normal paragraph
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size, styles))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size, styles))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size, styles));

    for line in rendered.lines() {
        let paragraph = match Block::parse(line) {
            Block::Blank => Paragraph::new(),
            Block::Heading(level, text) => Paragraph::new()
                .style(&format!("Heading{level}"))
                .add_run(Run::new().add_text(text).bold()),
            Block::Bullet(text) => {
                let marker = Run::new()
                    .add_text("- ")
                    .fonts(RunFonts::new().ascii(&styles.body_font));
                inline(text, styles, Paragraph::new().add_run(marker))
            }
            Block::Quote(text) => Paragraph::new()
                .align(AlignmentType::Both)
                .add_run(body_run(text, styles).italic().color(QUOTE_COLOR)),
            Block::Body(text) => inline(text, styles, Paragraph::new().align(AlignmentType::Left)),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .fonts(RunFonts::new().ascii(&styles.heading_font))
        .size(size_pt * 2) // OOXML uses half-points
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

enum Token {
    Text(char),
    Bold,
}

fn tokens(text: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(Token::Text(chars.next().unwrap_or('\\'))),
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push(Token::Bold);
            }
            c => out.push(Token::Text(c)),
        }
    }
    out
}

/// Split inline text into `(text, bold)` runs. Escapes are resolved; an
/// unclosed `**` is kept as literal text.
pub(crate) fn spans(text: &str) -> Vec<(String, bool)> {
    let tokens = tokens(text);
    let last_marker = tokens.iter().rposition(|t| matches!(t, Token::Bold));

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut bold = false;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Text(c) => current.push(*c),
            Token::Bold if bold || last_marker.is_some_and(|last| last > i) => {
                if !current.is_empty() {
                    spans.push((std::mem::take(&mut current), bold));
                }
                bold = !bold;
            }
            Token::Bold => current.push_str("**"),
        }
    }
    if !current.is_empty() {
        spans.push((current, bold));
    }
    spans
}

/// Append `text` to `para` as body runs, bold where marked.
fn inline(text: &str, styles: &DocumentStyles, mut para: Paragraph) -> Paragraph {
    for (span, bold) in spans(text) {
        let run = body_run(&span, styles);
        para = para.add_run(if bold { run.bold() } else { run });
    }
    para
}
