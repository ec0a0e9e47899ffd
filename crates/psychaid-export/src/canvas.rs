//! A tall, fixed-width drawing surface and its pagination.
//!
//! The report is first laid out onto a single [`Canvas`] whose width is one
//! page and whose height grows with the content. Pagination then cuts the
//! canvas into A4-proportioned slices. An element is drawn on every slice its
//! vertical extent touches, so content crossing a page boundary is continued
//! on the next page instead of being cropped.

/// Height / width of an A4 sheet.
pub const A4_ASPECT: f32 = 297.0 / 210.0;

/// Approximate advance of one character, as a fraction of the font size.
const CHAR_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::hex(0x000000);
    pub const WHITE: Rgb = Rgb::hex(0xffffff);
    pub const DARK_GREY: Rgb = Rgb::hex(0x333333);
    pub const LIGHT_GREY: Rgb = Rgb::hex(0xf0f0f0);
    pub const PANEL: Rgb = Rgb::hex(0xfafafa);
    pub const TRACK: Rgb = Rgb::hex(0xe0e0e0);
    pub const RED: Rgb = Rgb::hex(0xff0000);
    pub const WARNING_PANEL: Rgb = Rgb::hex(0xfff0f0);

    pub const fn hex(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Components scaled to 0.0–1.0.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

/// One drawing primitive. Coordinates are layout units from the canvas'
/// top-left corner; `y` grows downwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A single line of text whose line box starts at `y` and is
    /// `size * line_height` tall.
    Text {
        x: f32,
        y: f32,
        size: f32,
        line_height: f32,
        bold: bool,
        color: Rgb,
        text: String,
    },
    /// A horizontal rule.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
    },
    /// A rectangle, filled and/or outlined.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        stroke: Option<f32>,
    },
}

impl Element {
    pub fn top(&self) -> f32 {
        match self {
            Element::Text { y, .. } | Element::Rule { y, .. } | Element::Rect { y, .. } => *y,
        }
    }

    pub fn bottom(&self) -> f32 {
        match self {
            Element::Text {
                y,
                size,
                line_height,
                ..
            } => y + size * line_height,
            Element::Rule { y, thickness, .. } => y + thickness,
            Element::Rect { y, height, .. } => y + height,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: f32,
    height: f32,
    elements: Vec<Element>,
}

/// The part of the canvas that lands on one page.
#[derive(Debug)]
pub struct PageSlice<'a> {
    pub index: usize,
    /// Canvas y of the page's top edge.
    pub top: f32,
    pub height: f32,
    pub elements: Vec<&'a Element>,
}

impl Canvas {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            height: 0.0,
            elements: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Height of one page slice at this canvas width.
    pub fn page_height(&self) -> f32 {
        self.width * A4_ASPECT
    }

    pub fn push(&mut self, element: Element) {
        self.height = self.height.max(element.bottom());
        self.elements.push(element);
    }

    /// Insert an element before those already at `index`, so it paints
    /// underneath them.
    pub fn insert(&mut self, index: usize, element: Element) {
        self.height = self.height.max(element.bottom());
        self.elements.insert(index, element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Grow the canvas to at least `height`, e.g. for trailing padding.
    pub fn extend_to(&mut self, height: f32) {
        self.height = self.height.max(height);
    }

    /// `ceil(height / page_height)`, and never less than one page.
    pub fn page_count(&self, page_height: f32) -> usize {
        ((self.height / page_height).ceil() as usize).max(1)
    }

    /// Cut the canvas into consecutive slices of `page_height`.
    pub fn pages(&self, page_height: f32) -> Vec<PageSlice<'_>> {
        (0..self.page_count(page_height))
            .map(|index| {
                let top = index as f32 * page_height;
                let bottom = top + page_height;
                PageSlice {
                    index,
                    top,
                    height: page_height,
                    elements: self
                        .elements
                        .iter()
                        .filter(|e| e.top() < bottom && e.bottom() > top)
                        .collect(),
                }
            })
            .collect()
    }

    /// Every text line in paint order.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Estimated rendered width of `text` at `size`.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * CHAR_WIDTH
}

/// Greedy word wrap to `max_width`. Words wider than a whole line are split.
pub fn wrap(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let max_chars = ((max_width / (size * CHAR_WIDTH)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(max_chars) {
            let piece: String = chunk.iter().collect();
            let current_len = current.chars().count();
            if current.is_empty() {
                current = piece;
            } else if current_len + 1 + chunk.len() <= max_chars {
                current.push(' ');
                current.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(y: f32, height: f32) -> Element {
        Element::Rect {
            x: 0.0,
            y,
            width: 10.0,
            height,
            fill: None,
            stroke: Some(1.0),
        }
    }

    #[test]
    fn empty_canvas_is_one_page() {
        let canvas = Canvas::new(800.0);
        assert_eq!(canvas.page_count(canvas.page_height()), 1);
        assert_eq!(canvas.pages(canvas.page_height()).len(), 1);
    }

    #[test]
    fn page_count_is_ceiling_of_height() {
        let mut canvas = Canvas::new(100.0);
        canvas.push(block(0.0, 250.0));
        assert_eq!(canvas.page_count(100.0), 3);

        canvas.extend_to(300.0);
        assert_eq!(canvas.page_count(100.0), 3);

        canvas.extend_to(300.5);
        assert_eq!(canvas.page_count(100.0), 4);
    }

    #[test]
    fn straddling_element_is_drawn_on_both_pages() {
        let mut canvas = Canvas::new(100.0);
        canvas.push(block(10.0, 20.0));
        canvas.push(block(90.0, 20.0));
        canvas.push(block(150.0, 10.0));

        let pages = canvas.pages(100.0);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].elements.len(), 2);
        assert_eq!(pages[1].elements.len(), 2);
        assert_eq!(pages[1].top, 100.0);
    }

    #[test]
    fn every_element_lands_on_some_page() {
        let mut canvas = Canvas::new(100.0);
        for i in 0..57 {
            canvas.push(block(i as f32 * 13.0, 9.0));
        }
        let pages = canvas.pages(canvas.page_height());
        for element in canvas.elements() {
            assert!(
                pages.iter().any(|p| p.elements.contains(&element)),
                "element at {} was dropped",
                element.top()
            );
        }
        let last = pages.last().unwrap();
        assert!(last.top < canvas.height());
        assert!(last.top + last.height >= canvas.height());
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 50.0, 10.0);
        // 10 characters per line
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        for line in &lines {
            assert!(text_width(line, 10.0) <= 50.0);
        }
    }

    #[test]
    fn wrap_splits_long_words_and_keeps_empty_text() {
        assert_eq!(wrap("abcdefghij", 20.0, 10.0), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 100.0, 10.0), vec![String::new()]);
    }

    #[test]
    fn hex_colours_decode() {
        let c = Rgb::hex(0xff6347);
        assert_eq!((c.r, c.g, c.b), (0xff, 0x63, 0x47));
    }
}
