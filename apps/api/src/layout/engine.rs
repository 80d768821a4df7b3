//! Layout engine — places a `ParsedDocument` onto fixed-size pages.
//!
//! # Rules
//! - Header block first: line 1 is the name (largest, bold, centered, primary color),
//!   lines with `@` or `|` are contact text, anything else is an accent subtitle.
//! - Each section: bold title + short underline rule, then its lines classified as
//!   bullet / job-title / regular.
//! - Before every placed line the cursor is checked against `page_height - reserve`
//!   (body reserve for lines, section reserve for titles); past it, a new page starts
//!   at the top margin. No run is ever placed below `geometry.body_limit()`.
//!
//! The pass is a pure function of its inputs: same document, theme and geometry give
//! an identical `PageLayout`.

use tracing::debug;

use crate::catalog::{Rgb, Theme};
use crate::document::{Line, ParsedDocument, Section};
use crate::layout::font_metrics::get_metrics;
use crate::layout::model::{Page, PageGeometry, PageLayout, PlacedRule, PlacedRun, RunStyle};
use crate::layout::wrap::wrap_text;

const NAME_SIZE: f32 = 24.0;
const SUBTITLE_SIZE: f32 = 14.0;
const SECTION_TITLE_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const CONTACT_SIZE: f32 = 10.0;

const CONTACT_COLOR: Rgb = Rgb::new(80, 80, 80);
const BODY_COLOR: Rgb = Rgb::new(60, 60, 60);

/// Extra advance after a name line, on top of the line height.
const NAME_GAP: f32 = 2.0;
/// Extra advance after a job-title line.
const JOB_TITLE_GAP: f32 = 1.0;
/// Space between the name block's rule and the next line.
const NAME_RULE_GAP: f32 = 8.0;
const SECTION_TITLE_ADVANCE: f32 = 8.0;
const SECTION_RULE_LENGTH: f32 = 40.0;
const SECTION_RULE_OFFSET: f32 = 2.0;
const SECTION_RULE_GAP: f32 = 2.0;
const SECTION_TRAILING_GAP: f32 = 6.0;

const BULLET_MARKER: &str = "•";
const BULLET_MARKER_INDENT: f32 = 5.0;
const BULLET_TEXT_INDENT: f32 = 10.0;

/// Lines at or above this length are never treated as job titles by length alone.
const JOB_TITLE_MAX_CHARS: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Line classification
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLineKind {
    Name,
    Contact,
    Subtitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLineKind {
    Bullet,
    JobTitle,
    Regular,
}

pub fn classify_header_line(index: usize, line: &str) -> HeaderLineKind {
    if index == 0 {
        HeaderLineKind::Name
    } else if line.contains('@') || line.contains('|') {
        HeaderLineKind::Contact
    } else {
        HeaderLineKind::Subtitle
    }
}

pub fn classify_content_line(line: &str) -> ContentLineKind {
    if is_bullet(line) {
        ContentLineKind::Bullet
    } else if line.contains('|')
        || contains_year(line)
        || line.contains("Present")
        || line.chars().count() < JOB_TITLE_MAX_CHARS
    {
        ContentLineKind::JobTitle
    } else {
        ContentLineKind::Regular
    }
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(['•', '-', '*'])
}

/// Strips exactly one leading bullet glyph and the whitespace after it.
pub fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['•', '-', '*'])
        .unwrap_or(line)
        .trim_start()
}

/// Four consecutive ASCII digits anywhere in the line.
fn contains_year(line: &str) -> bool {
    line.as_bytes()
        .windows(4)
        .any(|w| w.iter().all(u8::is_ascii_digit))
}

// ────────────────────────────────────────────────────────────────────────────
// Page cursor
// ────────────────────────────────────────────────────────────────────────────

/// Accumulates pages while walking the document top to bottom.
struct PageCursor<'a> {
    geometry: &'a PageGeometry,
    theme: &'a Theme,
    finished: Vec<Page>,
    page: Page,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(geometry: &'a PageGeometry, theme: &'a Theme) -> Self {
        Self {
            geometry,
            theme,
            finished: Vec::new(),
            page: Page::default(),
            y: geometry.margin,
        }
    }

    /// Starts a new page when the cursor has passed `limit`.
    fn ensure_room(&mut self, limit: f32) {
        if self.y > limit {
            self.break_page();
        }
    }

    /// An empty page is never closed; the cursor just returns to the top margin.
    fn break_page(&mut self) {
        if !self.page.is_empty() {
            let full = std::mem::take(&mut self.page);
            self.finished.push(full);
        }
        self.y = self.geometry.margin;
    }

    fn style(&self, bold: bool, color: Rgb, size: f32) -> RunStyle {
        RunStyle {
            bold,
            color,
            size,
            font: self.theme.font_family,
        }
    }

    fn place(&mut self, text: impl Into<String>, style: RunStyle, x: f32) {
        self.page.runs.push(PlacedRun {
            text: text.into(),
            style,
            x,
            y: self.y,
        });
    }

    fn rule(&mut self, x_start: f32, x_end: f32, y: f32, thickness: f32) {
        self.page.rules.push(PlacedRule {
            x_start,
            x_end,
            y,
            thickness,
            color: self.theme.accent_color,
        });
    }

    fn wrap(&self, text: &str, style: &RunStyle, max_width: f32) -> Vec<String> {
        let metrics = get_metrics(style.font, style.bold);
        wrap_text(text, metrics, style.size, max_width)
    }

    fn centered_x(&self, text: &str, style: &RunStyle) -> f32 {
        let width = get_metrics(style.font, style.bold).text_width(text, style.size);
        ((self.geometry.page_width - width) / 2.0).max(self.geometry.margin)
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.page.is_empty() || self.finished.is_empty() {
            self.finished.push(self.page);
        }
        self.finished
    }

    // ── header block ────────────────────────────────────────────────────────

    fn header_line(&mut self, index: usize, line: &Line) {
        let kind = classify_header_line(index, line.as_str());
        let (style, advance) = match kind {
            HeaderLineKind::Name => (
                self.style(true, self.theme.primary_color, NAME_SIZE),
                self.geometry.line_height + NAME_GAP,
            ),
            HeaderLineKind::Contact => (
                self.style(false, CONTACT_COLOR, CONTACT_SIZE),
                self.geometry.line_height,
            ),
            HeaderLineKind::Subtitle => (
                self.style(false, self.theme.accent_color, SUBTITLE_SIZE),
                self.geometry.line_height,
            ),
        };

        let limit = self.geometry.body_limit();
        for sub_line in self.wrap(line.as_str(), &style, self.geometry.content_width()) {
            self.ensure_room(limit);
            let x = self.centered_x(&sub_line, &style);
            self.place(sub_line, style, x);
            self.y += advance;
        }

        if kind == HeaderLineKind::Name {
            let margin = self.geometry.margin;
            let right = self.geometry.page_width - margin;
            self.rule(margin, right, self.y, 0.5);
            self.y += NAME_RULE_GAP;
        }
    }

    // ── sections ────────────────────────────────────────────────────────────

    fn section(&mut self, section: &Section) {
        self.ensure_room(self.geometry.section_limit());

        let margin = self.geometry.margin;
        let title_style = self.style(true, self.theme.primary_color, SECTION_TITLE_SIZE);
        self.place(section.title.clone(), title_style, margin);
        self.y += SECTION_TITLE_ADVANCE;
        self.rule(
            margin,
            margin + SECTION_RULE_LENGTH,
            self.y - SECTION_RULE_OFFSET,
            0.3,
        );
        self.y += SECTION_RULE_GAP;

        for line in &section.lines {
            match classify_content_line(line.as_str()) {
                ContentLineKind::Bullet => self.bullet(strip_bullet(line.as_str())),
                ContentLineKind::JobTitle => self.job_title(line.as_str()),
                ContentLineKind::Regular => self.regular(line.as_str()),
            }
        }

        self.y += SECTION_TRAILING_GAP;
    }

    fn bullet(&mut self, text: &str) {
        let style = self.style(false, BODY_COLOR, BODY_SIZE);
        let margin = self.geometry.margin;
        let width = (self.geometry.content_width() - BULLET_TEXT_INDENT).max(0.0);
        let limit = self.geometry.body_limit();

        for (i, sub_line) in self.wrap(text, &style, width).into_iter().enumerate() {
            self.ensure_room(limit);
            if i == 0 {
                self.place(BULLET_MARKER, style, margin + BULLET_MARKER_INDENT);
            }
            self.place(sub_line, style, margin + BULLET_TEXT_INDENT);
            self.y += self.geometry.line_height;
        }
    }

    fn job_title(&mut self, text: &str) {
        let style = self.style(true, self.theme.primary_color, BODY_SIZE);
        self.flush_lines(text, style, self.geometry.line_height + JOB_TITLE_GAP);
    }

    fn regular(&mut self, text: &str) {
        let style = self.style(false, BODY_COLOR, BODY_SIZE);
        self.flush_lines(text, style, self.geometry.line_height);
    }

    fn flush_lines(&mut self, text: &str, style: RunStyle, advance: f32) {
        let margin = self.geometry.margin;
        let limit = self.geometry.body_limit();
        for sub_line in self.wrap(text, &style, self.geometry.content_width()) {
            self.ensure_room(limit);
            self.place(sub_line, style, margin);
            self.y += advance;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays `doc` out on pages of `geometry` using `theme`. Always returns at least one page.
pub fn layout(doc: &ParsedDocument, theme: &Theme, geometry: &PageGeometry) -> PageLayout {
    let mut cursor = PageCursor::new(geometry, theme);

    for (index, line) in doc.header_lines.iter().enumerate() {
        cursor.header_line(index, line);
    }
    for section in &doc.sections {
        cursor.section(section);
    }

    let pages = cursor.finish();
    debug!(
        theme = theme.id,
        pages = pages.len(),
        sections = doc.sections.len(),
        "Laid out document"
    );

    PageLayout {
        theme_id: theme.id.to_string(),
        geometry: *geometry,
        pages,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ThemeCatalog;
    use crate::document::parse;

    fn a4() -> PageGeometry {
        PageGeometry::default()
    }

    fn long_section(lines: usize, line: &str) -> String {
        let mut text = String::from("EXPERIENCE\n");
        for _ in 0..lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_document_yields_one_empty_page() {
        let layout = layout(&ParsedDocument::default(), ThemeCatalog::default_theme(), &a4());
        assert_eq!(layout.page_count(), 1);
        assert!(layout.pages[0].is_empty());
    }

    #[test]
    fn test_name_is_centered_bold_primary() {
        let theme = ThemeCatalog::get("tech-green");
        let doc = parse("Jane Doe\njane@example.com | 555-123-4567\nBackend Engineer");
        let layout = layout(&doc, theme, &a4());
        let runs: Vec<&PlacedRun> = layout.runs().collect();

        let name = runs[0];
        assert_eq!(name.text, "Jane Doe");
        assert!(name.style.bold);
        assert_eq!(name.style.color, theme.primary_color);
        assert_eq!(name.style.size, NAME_SIZE);
        let width = get_metrics(theme.font_family, true).text_width("Jane Doe", NAME_SIZE);
        assert!((name.x - (210.0 - width) / 2.0).abs() < 1e-3);

        let contact = runs[1];
        assert_eq!(contact.style.color, CONTACT_COLOR);
        assert_eq!(contact.style.size, CONTACT_SIZE);
        // name advance + rule gap
        assert!((contact.y - (20.0 + 8.0 + 8.0)).abs() < 1e-4);

        let subtitle = runs[2];
        assert_eq!(subtitle.style.color, theme.accent_color);
        assert_eq!(subtitle.style.size, SUBTITLE_SIZE);

        assert_eq!(layout.pages[0].rules.len(), 1);
    }

    #[test]
    fn test_section_title_and_line_kinds() {
        let theme = ThemeCatalog::default_theme();
        let regular = "word ".repeat(30);
        let text = format!(
            "EXPERIENCE\nEngineer | Acme | 2020 - Present\n• Shipped the billing service\n{regular}"
        );
        let layout = layout(&parse(&text), theme, &a4());
        let runs: Vec<&PlacedRun> = layout.runs().collect();

        assert_eq!(runs[0].text, "EXPERIENCE");
        assert!(runs[0].style.bold);
        assert_eq!(runs[0].style.size, SECTION_TITLE_SIZE);

        assert_eq!(runs[1].text, "Engineer | Acme | 2020 - Present");
        assert!(runs[1].style.bold);
        assert_eq!(runs[1].style.color, theme.primary_color);

        assert_eq!(runs[2].text, BULLET_MARKER);
        assert!((runs[2].x - 25.0).abs() < 1e-4);
        assert_eq!(runs[3].text, "Shipped the billing service");
        assert!((runs[3].x - 30.0).abs() < 1e-4);
        assert_eq!(runs[2].y, runs[3].y);

        assert!(!runs[4].style.bold);
        assert_eq!(runs[4].style.color, BODY_COLOR);

        let rule = layout.pages[0].rules[0];
        assert!((rule.x_end - rule.x_start - SECTION_RULE_LENGTH).abs() < 1e-4);
    }

    #[test]
    fn test_classify_content_line() {
        assert_eq!(classify_content_line("- did things"), ContentLineKind::Bullet);
        assert_eq!(classify_content_line("* did things"), ContentLineKind::Bullet);
        assert_eq!(classify_content_line("Staff Engineer"), ContentLineKind::JobTitle);
        let long_with_year = format!("{} 2019", "a".repeat(120));
        assert_eq!(classify_content_line(&long_with_year), ContentLineKind::JobTitle);
        let long_plain = "a ".repeat(60);
        assert_eq!(classify_content_line(long_plain.trim()), ContentLineKind::Regular);
    }

    #[test]
    fn test_strip_bullet_removes_a_single_glyph() {
        assert_eq!(strip_bullet("• Shipped it"), "Shipped it");
        assert_eq!(strip_bullet("--dry-run flag"), "-dry-run flag");
        assert_eq!(strip_bullet("** note"), "* note");
        assert_eq!(strip_bullet("-tight"), "tight");
    }

    #[test]
    fn test_oversized_section_reserve_never_emits_blank_page() {
        let geometry = PageGeometry {
            section_reserve: 280.0,
            ..a4()
        };
        let doc = parse("SKILLS\nRust\nEDUCATION\nState University");
        let layout = layout(&doc, ThemeCatalog::default_theme(), &geometry);

        assert!(layout.pages.iter().all(|p| !p.is_empty()));
        assert_eq!(layout.pages[0].runs[0].text, "SKILLS");
    }

    #[test]
    fn test_overflow_moves_line_to_top_of_next_page() {
        let geometry = PageGeometry {
            page_height: 297.0,
            margin: 20.0,
            ..a4()
        };
        let doc = parse(&long_section(60, "Built and operated payment services"));
        let layout = layout(&doc, ThemeCatalog::default_theme(), &geometry);

        assert!(layout.page_count() >= 2, "expected overflow onto a second page");
        let first_on_second = &layout.pages[1].runs[0];
        assert!((first_on_second.y - geometry.margin).abs() < 1e-4);
        assert_eq!(first_on_second.text, "Built and operated payment services");
    }

    #[test]
    fn test_no_run_below_body_limit() {
        let geometry = a4();
        let bullets = long_section(200, "- Reduced p99 latency by 40% across the fleet while migrating to a new scheduler and retiring legacy cron jobs");
        let layout = layout(&parse(&bullets), ThemeCatalog::default_theme(), &geometry);
        assert!(layout.page_count() > 2);
        for run in layout.runs() {
            assert!(run.y <= geometry.body_limit() + 1e-4, "run at {} overflows", run.y);
        }
    }

    #[test]
    fn test_section_title_near_bottom_starts_new_page() {
        let geometry = a4();
        // Fill the first page until the cursor is past the section limit.
        let mut text = long_section(34, "Line");
        text.push_str("EDUCATION\nState University\n");
        let layout = layout(&parse(&text), ThemeCatalog::default_theme(), &geometry);

        let title_page = layout
            .pages
            .iter()
            .position(|p| p.runs.iter().any(|r| r.text == "EDUCATION"))
            .unwrap();
        let title = layout.pages[title_page]
            .runs
            .iter()
            .find(|r| r.text == "EDUCATION")
            .unwrap();
        assert!(title.y <= geometry.section_limit() + 1e-4);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let text = "Jane Doe\njane@example.com\nSUMMARY\nEngineer.\nSKILLS\n- Rust\n- Go";
        let doc = parse(text);
        let theme = ThemeCatalog::get("classic-serif");
        let first = layout(&doc, theme, &a4());
        let second = layout(&doc, theme, &a4());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_theme_font_flows_into_every_run() {
        let theme = ThemeCatalog::get("classic-serif");
        let layout = layout(&parse("Jane\nSKILLS\nRust"), theme, &a4());
        assert!(layout.runs().all(|r| r.style.font == theme.font_family));
    }
}
