use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::Path;

use owned_ttf_parser::Face;
use printpdf::path::PaintMode;
use printpdf::{
    Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect, Rgb as PdfRgb,
};
use tracing::debug;

use crate::canvas::{Canvas, Element, PageSlice, Rgb};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Baseline offset below the top of a glyph box, as a fraction of the size.
const ASCENT: f32 = 0.8;

/// DejaVu Serif, embedded in every PDF unless the styles name other files.
pub const SERIF_REGULAR: &[u8] = include_bytes!("../fonts/DejaVuSerif.ttf");
pub const SERIF_BOLD: &[u8] = include_bytes!("../fonts/DejaVuSerif-Bold.ttf");

/// TrueType programs embedded into an exported PDF.
#[derive(Debug, Clone)]
pub struct PdfFonts {
    regular: Cow<'static, [u8]>,
    bold: Cow<'static, [u8]>,
}

impl Default for PdfFonts {
    fn default() -> Self {
        Self {
            regular: Cow::Borrowed(SERIF_REGULAR),
            bold: Cow::Borrowed(SERIF_BOLD),
        }
    }
}

impl PdfFonts {
    /// Read the font files named in `styles`, falling back to the bundled
    /// faces for any that are unset.
    pub fn from_styles(styles: &DocumentStyles) -> Result<Self, ExportError> {
        Ok(Self {
            regular: read_font(styles.pdf_font.as_deref(), SERIF_REGULAR)?,
            bold: read_font(styles.pdf_bold_font.as_deref(), SERIF_BOLD)?,
        })
    }

    /// Every character of `canvas` text that the matching face cannot draw.
    pub fn missing_glyphs(&self, canvas: &Canvas) -> Result<BTreeSet<char>, ExportError> {
        let regular = parse_face(&self.regular)?;
        let bold = parse_face(&self.bold)?;

        let mut missing = BTreeSet::new();
        for element in canvas.elements() {
            if let Element::Text { bold: is_bold, text, .. } = element {
                let face = if *is_bold { &bold } else { &regular };
                missing.extend(
                    text.chars()
                        .filter(|c| !c.is_control() && face.glyph_index(*c).is_none()),
                );
            }
        }
        Ok(missing)
    }
}

fn read_font(
    path: Option<&Path>,
    bundled: &'static [u8],
) -> Result<Cow<'static, [u8]>, ExportError> {
    match path {
        None => Ok(Cow::Borrowed(bundled)),
        Some(path) => std::fs::read(path).map(Cow::Owned).map_err(|e| {
            ExportError::Pdf(format!("cannot read font {}: {e}", path.display()))
        }),
    }
}

fn parse_face(data: &[u8]) -> Result<Face<'_>, ExportError> {
    Face::parse(data, 0).map_err(|e| ExportError::Pdf(format!("unreadable font: {e}")))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Maps canvas units on one page slice to page millimetres.
#[derive(Clone, Copy)]
struct PageTransform {
    scale: f32,
    top: f32,
}

impl PageTransform {
    fn x(self, x: f32) -> Mm {
        Mm(x * self.scale)
    }

    /// PDF y runs upwards from the bottom edge.
    fn y(self, y: f32) -> Mm {
        Mm(PAGE_HEIGHT_MM - (y - self.top) * self.scale)
    }

    fn points(self, size: f32) -> f32 {
        size * self.scale * PT_PER_MM
    }
}

/// Draw a laid-out canvas as an A4 PDF, one page per slice.
///
/// Returns the document bytes and the number of pages written. Text the
/// fonts cannot draw is an error rather than a silent gap in the record.
pub fn generate_pdf(
    canvas: &Canvas,
    title: &str,
    pdf_fonts: &PdfFonts,
) -> Result<(Vec<u8>, usize), ExportError> {
    let missing = pdf_fonts.missing_glyphs(canvas)?;
    if !missing.is_empty() {
        return Err(ExportError::MissingGlyphs(missing.into_iter().collect()));
    }

    let pages = canvas.pages(canvas.page_height());
    let scale = PAGE_WIDTH_MM / canvas.width();

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let fonts = Fonts {
        regular: doc.add_external_font(&pdf_fonts.regular[..])?,
        bold: doc.add_external_font(&pdf_fonts.bold[..])?,
    };

    for slice in &pages {
        let layer = if slice.index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", slice.index + 1),
            );
            doc.get_page(page).get_layer(layer)
        };
        let transform = PageTransform {
            scale,
            top: slice.top,
        };
        draw_page(&layer, slice, transform, &fonts);
        debug!(page = slice.index + 1, elements = slice.elements.len(), "pdf page drawn");
    }

    let bytes = doc.save_to_bytes()?;
    Ok((bytes, pages.len()))
}

fn draw_page(layer: &PdfLayerReference, slice: &PageSlice<'_>, t: PageTransform, fonts: &Fonts) {
    for element in &slice.elements {
        match element {
            Element::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let mode = match (fill, stroke) {
                    (Some(_), Some(_)) => PaintMode::FillStroke,
                    (Some(_), None) => PaintMode::Fill,
                    (None, Some(_)) => PaintMode::Stroke,
                    (None, None) => continue,
                };
                if let Some(fill) = fill {
                    layer.set_fill_color(color(*fill));
                }
                if let Some(thickness) = stroke {
                    layer.set_outline_color(color(Rgb::BLACK));
                    layer.set_outline_thickness(t.points(*thickness));
                }
                let rect = Rect::new(t.x(*x), t.y(y + height), t.x(x + width), t.y(*y))
                    .with_mode(mode);
                layer.add_rect(rect);
            }
            Element::Rule {
                x1,
                x2,
                y,
                thickness,
            } => {
                let mid = y + thickness / 2.0;
                layer.set_outline_color(color(Rgb::BLACK));
                layer.set_outline_thickness(t.points(*thickness));
                layer.add_line(Line {
                    points: vec![
                        (Point::new(t.x(*x1), t.y(mid)), false),
                        (Point::new(t.x(*x2), t.y(mid)), false),
                    ],
                    is_closed: false,
                });
            }
            Element::Text {
                x,
                y,
                size,
                line_height,
                bold,
                color: text_color,
                text,
            } => {
                let leading = size * (line_height - 1.0) / 2.0;
                let baseline = y + leading + size * ASCENT;
                let font = if *bold { &fonts.bold } else { &fonts.regular };
                layer.set_fill_color(color(*text_color));
                layer.use_text(text.as_str(), t.points(*size), t.x(*x), t.y(baseline), font);
            }
        }
    }
}

fn color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.unit();
    Color::Rgb(PdfRgb::new(r, g, b, None))
}
