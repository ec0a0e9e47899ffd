//! Fixed report layout.
//!
//! Lays a [`CompleteAssessment`] out onto a single tall [`Canvas`], one
//! section after another, at the configured page width.

use psychaid_core::models::assessment::CompleteAssessment;
use psychaid_core::models::result::AssessmentResult;
use psychaid_core::models::severity::Severity;
use psychaid_core::models::user::provided;
use psychaid_core::report_names::record_number;
use psychaid_instruments::get_category;
use tracing::debug;

use crate::canvas::{Canvas, Element, Rgb, text_width, wrap};
use crate::report::DISCLAIMER;
use crate::styles::DocumentStyles;

const TITLE: &str = "PSYCHOLOGICAL ASSESSMENT REPORT";
const SUBTITLE: &str = "International Medical Record Format";
const FOOTER: &str =
    "PsychAid - Professional Psychological Assessment Tool | International Medical Record Format";
const PANEL_PADDING: f32 = 15.0;
const SECTION_GAP: f32 = 25.0;

/// Badge colour (fill, text) for a severity.
pub fn severity_colors(severity: Severity) -> (Rgb, Rgb) {
    match severity {
        Severity::Low => (Rgb::hex(0x90ee90), Rgb::BLACK),
        Severity::Moderate => (Rgb::hex(0xffd700), Rgb::BLACK),
        Severity::High => (Rgb::hex(0xffa500), Rgb::BLACK),
        Severity::Severe => (Rgb::hex(0xff6347), Rgb::WHITE),
    }
}

/// Lay the whole report out onto one canvas.
pub fn layout_report(assessment: &CompleteAssessment, styles: &DocumentStyles) -> Canvas {
    let mut layout = Layout::new(styles);

    layout.header(&record_number(assessment.created_at));
    layout.patient_identification(assessment);

    let info = &assessment.user_info;
    layout.section("MEDICAL HISTORY");
    layout.panel_text(
        provided(&info.medical_history).unwrap_or("No medical history provided"),
        60.0,
    );
    layout.section("CURRENT MEDICATIONS");
    layout.panel_text(
        provided(&info.current_medications).unwrap_or("No medications listed"),
        60.0,
    );

    layout.overall_score(assessment.overall_score);

    layout.section("DETAILED ANALYSIS BY CATEGORY");
    for result in &assessment.results {
        layout.category_block(result);
    }

    layout.section("CLINICAL DIAGNOSIS");
    layout.panel_text(&assessment.diagnosis, 80.0);
    layout.section("DETAILED ANALYSIS");
    layout.panel_text(&assessment.analysis, 100.0);
    layout.section("GENERAL RECOMMENDATIONS");
    layout.panel(Some(Rgb::PANEL), 1.0, 0.0, |l| {
        l.bullets(&assessment.recommendations, l.body_size());
    });

    layout.disclaimer();
    layout.signature_footer(assessment);

    let canvas = layout.finish();
    debug!(
        elements = canvas.len(),
        height = canvas.height(),
        "report laid out"
    );
    canvas
}

struct Layout<'s> {
    canvas: Canvas,
    styles: &'s DocumentStyles,
    cursor: f32,
    left: f32,
    width: f32,
}

impl<'s> Layout<'s> {
    fn new(styles: &'s DocumentStyles) -> Self {
        Self {
            canvas: Canvas::new(styles.canvas_width),
            styles,
            cursor: styles.canvas_padding,
            left: styles.canvas_padding,
            width: styles.canvas_width - 2.0 * styles.canvas_padding,
        }
    }

    fn finish(mut self) -> Canvas {
        self.canvas.extend_to(self.cursor + self.styles.canvas_padding);
        self.canvas
    }

    fn body_size(&self) -> f32 {
        self.styles.body_size as f32
    }

    fn advance(&self, size: f32) -> f32 {
        size * self.styles.line_height
    }

    fn gap(&mut self, height: f32) {
        self.cursor += height;
    }

    /// One unwrapped line at an absolute x, without moving the cursor.
    fn put(&mut self, x: f32, text: &str, size: f32, bold: bool, color: Rgb) {
        self.canvas.push(Element::Text {
            x,
            y: self.cursor,
            size,
            line_height: self.styles.line_height,
            bold,
            color,
            text: text.to_string(),
        });
    }

    /// A wrapped paragraph at the current column.
    fn text(&mut self, text: &str, size: f32, bold: bool, color: Rgb) {
        for line in wrap(text, self.width, size) {
            self.put(self.left, &line, size, bold, color);
            self.cursor += self.advance(size);
        }
    }

    /// A single centred line.
    fn centered(&mut self, text: &str, size: f32, bold: bool, color: Rgb) {
        let x = self.left + ((self.width - text_width(text, size)) / 2.0).max(0.0);
        self.put(x, text, size, bold, color);
        self.cursor += self.advance(size);
    }

    fn rule(&mut self, thickness: f32) {
        self.canvas.push(Element::Rule {
            x1: self.left,
            x2: self.left + self.width,
            y: self.cursor,
            thickness,
        });
        self.cursor += thickness;
    }

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        stroke: Option<f32>,
    ) {
        self.canvas.push(Element::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        });
    }

    /// Run `body` inside a bordered panel. The panel is painted beneath the
    /// body and grows to fit it, but is never shorter than `min_height`.
    fn panel(
        &mut self,
        fill: Option<Rgb>,
        stroke: f32,
        min_height: f32,
        body: impl FnOnce(&mut Self),
    ) {
        let index = self.canvas.len();
        let top = self.cursor;
        let (left, width) = (self.left, self.width);

        self.left += PANEL_PADDING;
        self.width -= 2.0 * PANEL_PADDING;
        self.cursor += PANEL_PADDING;
        body(self);
        self.left = left;
        self.width = width;

        let height = (self.cursor + PANEL_PADDING - top).max(min_height + 2.0 * PANEL_PADDING);
        self.canvas.insert(
            index,
            Element::Rect {
                x: left,
                y: top,
                width,
                height,
                fill,
                stroke: Some(stroke),
            },
        );
        self.cursor = top + height + SECTION_GAP;
    }

    /// Lay out `body` in a column starting at the current cursor and return
    /// the cursor position it ends at. The cursor itself is restored.
    fn column(&mut self, x: f32, width: f32, body: impl FnOnce(&mut Self)) -> f32 {
        let (left, column_width, top) = (self.left, self.width, self.cursor);
        self.left = x;
        self.width = width;
        body(self);
        let end = self.cursor;
        self.left = left;
        self.width = column_width;
        self.cursor = top;
        end
    }

    fn section(&mut self, title: &str) {
        self.text(title, self.styles.heading1_size as f32, true, Rgb::BLACK);
        self.rule(2.0);
        self.gap(10.0);
    }

    fn panel_text(&mut self, text: &str, min_height: f32) {
        let size = self.body_size();
        self.panel(Some(Rgb::PANEL), 1.0, min_height, |l| {
            l.text(text, size, false, Rgb::BLACK);
        });
    }

    fn bullets(&mut self, items: &[String], size: f32) {
        let indent = 20.0;
        for item in items {
            let lines = wrap(item, self.width - indent, size);
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    self.put(self.left + indent / 2.0 - size, "-", size, false, Rgb::BLACK);
                }
                self.put(self.left + indent, line, size, false, Rgb::BLACK);
                self.cursor += self.advance(size);
            }
        }
    }

    fn header(&mut self, record_number: &str) {
        let top = self.cursor;
        let side = self.width * 0.3;
        let center = self.width * 0.4;
        let left = self.left;

        let badge = |l: &mut Self, line1: &str, line2: &str| {
            let box_top = l.cursor;
            l.gap(10.0);
            l.centered(line1, 12.0, true, Rgb::BLACK);
            l.centered(line2, 10.0, true, Rgb::BLACK);
            l.gap(10.0);
            let height = l.cursor - box_top;
            l.rect(l.left, box_top, l.width, height, None, Some(2.0));
        };

        let left_end = self.column(left, side, |l| badge(l, "MEDICAL RECORD", "CONFIDENTIAL"));
        let center_end = self.column(left + side, center, |l| {
            for line in wrap(TITLE, l.width, 20.0) {
                l.centered(&line, 20.0, true, Rgb::BLACK);
            }
            l.centered(SUBTITLE, 12.0, false, Rgb::DARK_GREY);
            l.centered("Professional Psychological Evaluation", 10.0, false, Rgb::DARK_GREY);
        });
        let right_end = self.column(left + side + center, side, |l| {
            badge(l, "RECORD #", record_number)
        });

        self.cursor = left_end.max(center_end).max(right_end).max(top) + 20.0;
        self.rule(3.0);
        self.gap(SECTION_GAP);
    }

    fn patient_identification(&mut self, assessment: &CompleteAssessment) {
        let info = &assessment.user_info;
        self.section("PATIENT IDENTIFICATION");

        let age = format!("Age: {} years", info.age);
        let occupation = provided(&info.occupation).unwrap_or("Not specified");
        let contact = provided(&info.contact_info).unwrap_or("Not provided");
        let emergency = provided(&info.emergency_contact).unwrap_or("Not provided");

        self.table_row(&[
            ("Full Name:", info.name.as_str()),
            ("Date of Birth:", age.as_str()),
        ]);
        self.table_row(&[("Gender:", info.gender.as_str()), ("Occupation:", occupation)]);
        self.table_row(&[
            ("Assessment Date:", info.assessment_date.as_str()),
            ("Contact Info:", contact),
        ]);
        self.table_row(&[("Emergency Contact:", emergency)]);
        self.gap(SECTION_GAP);
    }

    /// A row of label/value cell pairs. Each label takes a quarter of the
    /// width; the values share the rest.
    fn table_row(&mut self, pairs: &[(&str, &str)]) {
        let size = self.body_size();
        let pad = 8.0;
        let label_width = self.width / 4.0;
        let value_width =
            (self.width - label_width * pairs.len() as f32) / pairs.len() as f32;

        let mut cells = Vec::new();
        let mut x = self.left;
        for (label, value) in pairs {
            cells.push((x, label_width, wrap(label, label_width - 2.0 * pad, size), true));
            x += label_width;
            cells.push((x, value_width, wrap(value, value_width - 2.0 * pad, size), false));
            x += value_width;
        }

        let lines = cells.iter().map(|(_, _, l, _)| l.len()).max().unwrap_or(1);
        let height = lines as f32 * self.advance(size) + 2.0 * pad;
        let top = self.cursor;

        for (x, width, lines, is_label) in cells {
            let fill = is_label.then_some(Rgb::LIGHT_GREY);
            self.rect(x, top, width, height, fill, Some(1.0));
            self.cursor = top + pad;
            for line in lines {
                self.put(x + pad, &line, size, is_label, Rgb::BLACK);
                self.cursor += self.advance(size);
            }
        }
        self.cursor = top + height;
    }

    fn overall_score(&mut self, overall_score: u32) {
        self.section("OVERALL ASSESSMENT SCORE");
        self.panel(Some(Rgb::LIGHT_GREY), 2.0, 0.0, |l| {
            l.gap(5.0);
            l.centered(&format!("{overall_score}%"), 36.0, true, Rgb::BLACK);
            l.centered(
                "Overall Psychological Well-being Score",
                l.body_size(),
                true,
                Rgb::DARK_GREY,
            );
        });
    }

    fn category_block(&mut self, result: &AssessmentResult) {
        let size = self.body_size();
        let name = get_category(result.category).name().to_string();
        let (badge_fill, badge_text) = severity_colors(result.severity);
        let severity = result.severity.as_str().to_uppercase();

        self.panel(Some(Rgb::PANEL), 1.0, 0.0, |l| {
            // name on the left, severity badge on the right
            let badge_size = 10.0;
            let badge_width = text_width(&severity, badge_size) + 16.0;
            let badge_x = l.left + l.width - badge_width;
            l.rect(
                badge_x,
                l.cursor,
                badge_width,
                l.advance(badge_size) + 4.0,
                Some(badge_fill),
                Some(1.0),
            );
            l.cursor += 2.0;
            l.put(badge_x + 8.0, &severity, badge_size, true, badge_text);
            l.cursor -= 2.0;
            l.put(l.left, &name, 14.0, true, Rgb::BLACK);
            l.cursor += l.advance(14.0);

            let fraction = format!("Score: {}/{}", result.score, result.max_score);
            let pct = format!("{}%", result.percentage);
            l.put(l.left, &fraction, size, true, Rgb::BLACK);
            l.put(l.left + l.width - text_width(&pct, size), &pct, size, true, Rgb::BLACK);
            l.cursor += l.advance(size);

            let bar_height = 8.0;
            let filled = l.width * result.percentage.min(100) as f32 / 100.0;
            l.rect(l.left, l.cursor, l.width, bar_height, Some(Rgb::TRACK), Some(1.0));
            if filled > 0.0 {
                l.rect(l.left, l.cursor, filled, bar_height, Some(Rgb::BLACK), None);
            }
            l.cursor += bar_height + 10.0;

            l.text("Recommendations:", size, true, Rgb::BLACK);
            l.bullets(&result.recommendations, size);
        });
        // panels already leave a section gap; category blocks sit closer
        self.cursor -= 5.0;
    }

    fn disclaimer(&mut self) {
        self.panel(Some(Rgb::WARNING_PANEL), 2.0, 0.0, |l| {
            l.text("IMPORTANT MEDICAL DISCLAIMER", 14.0, true, Rgb::RED);
            l.gap(4.0);
            l.text(DISCLAIMER, 11.0, false, Rgb::RED);
        });
    }

    fn signature_footer(&mut self, assessment: &CompleteAssessment) {
        self.gap(15.0);
        self.rule(2.0);
        self.gap(20.0);

        let half = self.width * 0.45;
        let left = self.left;
        let signatory = self.styles.signatory_name.clone();
        let organisation = self.styles.organisation.clone();
        let issued = assessment.created_at.strftime("%Y-%m-%d").to_string();

        let signature_end = self.column(left, half, |l| {
            l.gap(50.0);
            l.rule(1.0);
            l.gap(10.0);
            l.centered("Psychologist Signature", l.body_size(), true, Rgb::BLACK);
            l.gap(30.0);
            match signatory.as_deref() {
                Some(name) => l.centered(name, 14.0, true, Rgb::BLACK),
                None => l.gap(l.advance(14.0)),
            }
            l.rule(1.0);
            l.gap(5.0);
            l.centered("Licensed Psychologist", 10.0, false, Rgb::BLACK);
        });

        let stamp_end = self.column(left + self.width - half, half, |l| {
            l.gap(20.0);
            let stamp_top = l.cursor;
            l.gap(10.0);
            l.centered("OFFICIAL STAMP", l.body_size(), true, Rgb::BLACK);
            l.centered(&organisation, 10.0, true, Rgb::BLACK);
            l.centered(&format!("Date: {issued}"), 8.0, true, Rgb::BLACK);
            l.gap(10.0);
            let height = l.cursor - stamp_top;
            l.rect(l.left, stamp_top, l.width, height, None, Some(2.0));
        });

        self.cursor = signature_end.max(stamp_end) + 30.0;
        self.rule(1.0);
        self.gap(15.0);

        let generated = assessment
            .created_at
            .strftime("Report generated on %Y-%m-%d at %H:%M:%S UTC")
            .to_string();
        self.centered(&generated, 10.0, false, Rgb::DARK_GREY);
        self.centered(FOOTER, 10.0, false, Rgb::DARK_GREY);
    }
}
