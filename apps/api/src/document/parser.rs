//! Resume text parser — a two-state fold over trimmed, non-blank lines.
//!
//! States: `BeforeFirstHeader` collects the name/contact block, `InSection` appends
//! content to the open section. A recognised header closes the open section (if any)
//! and opens a new one. Parsing never fails; any string yields a `ParsedDocument`.

use tracing::debug;

use crate::document::model::{Line, ParsedDocument, Section};

/// Known section names, matched as substrings of the upper-cased line.
pub const SECTION_VOCABULARY: &[&str] = &[
    "PROFESSIONAL SUMMARY",
    "SUMMARY",
    "OBJECTIVE",
    "PROFESSIONAL EXPERIENCE",
    "WORK EXPERIENCE",
    "EXPERIENCE",
    "EDUCATION",
    "TECHNICAL SKILLS",
    "SKILLS",
    "PROJECTS",
    "CERTIFICATIONS",
    "ACHIEVEMENTS",
];

/// Vocabulary matches only count on heading-sized lines.
const MAX_VOCABULARY_HEADER_WORDS: usize = 4;
/// All-caps lines are headings only strictly inside this character-length window.
const CAPS_HEADER_MIN_EXCLUSIVE: usize = 3;
const CAPS_HEADER_MAX_EXCLUSIVE: usize = 50;

const BULLET_GLYPHS: &[char] = &['•', '-', '*'];
/// An all-caps line containing any of these is content, not a heading.
const LIST_SEPARATORS: [char; 3] = [',', '|', ';'];

// ────────────────────────────────────────────────────────────────────────────
// Line classification
// ────────────────────────────────────────────────────────────────────────────

/// What a single trimmed line is, independent of parser state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Opens a section with the given cleaned, upper-cased title.
    Header(String),
    /// A line made only of `-`/`=` filler. Separates, never carries content.
    Rule,
    Content,
}

pub fn classify_line(line: &str) -> LineKind {
    if is_filler_only(line) {
        return LineKind::Rule;
    }
    if starts_with_bullet(line) {
        return LineKind::Content;
    }

    let title = clean_section_title(line);
    if title.is_empty() {
        return LineKind::Content;
    }

    let word_count = title.split_whitespace().count();
    let in_vocabulary = word_count <= MAX_VOCABULARY_HEADER_WORDS
        && SECTION_VOCABULARY.iter().any(|s| title.contains(s));
    let decorated = line.starts_with("---") || line.starts_with("===");

    if in_vocabulary || decorated || is_caps_heading(line) {
        LineKind::Header(title)
    } else {
        LineKind::Content
    }
}

/// Strips leading/trailing `-`/`=` filler, whitespace and a trailing colon, then upper-cases.
pub fn clean_section_title(line: &str) -> String {
    line.trim_matches(|c: char| c == '-' || c == '=' || c.is_whitespace())
        .trim_end_matches(':')
        .trim()
        .to_uppercase()
}

fn is_filler_only(line: &str) -> bool {
    line.chars().any(|c| c == '-' || c == '=')
        && line
            .chars()
            .all(|c| c == '-' || c == '=' || c.is_whitespace())
}

/// `• item`, `- item`, `* item`. A lone glyph run like `---` is not a bullet.
fn starts_with_bullet(line: &str) -> bool {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('•'), _) => true,
        (Some(c), Some(next)) if BULLET_GLYPHS.contains(&c) => next.is_whitespace(),
        _ => false,
    }
}

/// All-caps line of heading length that contains at least one letter and reads as a
/// single label rather than a list (`AWS, SQL`, `CKA | CNCF`, `GPA: 3.8`).
fn is_caps_heading(line: &str) -> bool {
    let len = line.chars().count();
    line.chars().any(char::is_alphabetic)
        && line == line.to_uppercase()
        && len > CAPS_HEADER_MIN_EXCLUSIVE
        && len < CAPS_HEADER_MAX_EXCLUSIVE
        && !is_list_shaped(line)
}

/// Contains a list separator, or a colon anywhere but the end.
fn is_list_shaped(line: &str) -> bool {
    line.contains(LIST_SEPARATORS) || line.trim_end_matches(':').contains(':')
}

// ────────────────────────────────────────────────────────────────────────────
// State machine
// ────────────────────────────────────────────────────────────────────────────

enum ParserState {
    BeforeFirstHeader {
        header_lines: Vec<Line>,
    },
    InSection {
        header_lines: Vec<Line>,
        closed: Vec<Section>,
        open: Section,
    },
}

impl ParserState {
    fn start() -> Self {
        ParserState::BeforeFirstHeader {
            header_lines: Vec::new(),
        }
    }

    fn step(self, line: Line) -> Self {
        match (self, classify_line(line.as_str())) {
            (state, LineKind::Rule) => state,

            (ParserState::BeforeFirstHeader { header_lines }, LineKind::Header(title)) => {
                ParserState::InSection {
                    header_lines,
                    closed: Vec::new(),
                    open: empty_section(title),
                }
            }

            (ParserState::BeforeFirstHeader { mut header_lines }, LineKind::Content) => {
                header_lines.push(line);
                ParserState::BeforeFirstHeader { header_lines }
            }

            (
                ParserState::InSection {
                    header_lines,
                    mut closed,
                    open,
                },
                LineKind::Header(title),
            ) => {
                closed.push(open);
                ParserState::InSection {
                    header_lines,
                    closed,
                    open: empty_section(title),
                }
            }

            (
                ParserState::InSection {
                    header_lines,
                    closed,
                    mut open,
                },
                LineKind::Content,
            ) => {
                open.lines.push(line);
                ParserState::InSection {
                    header_lines,
                    closed,
                    open,
                }
            }
        }
    }

    fn finish(self) -> ParsedDocument {
        match self {
            ParserState::BeforeFirstHeader { header_lines } => ParsedDocument {
                header_lines,
                sections: Vec::new(),
            },
            ParserState::InSection {
                header_lines,
                mut closed,
                open,
            } => {
                closed.push(open);
                ParsedDocument {
                    header_lines,
                    sections: closed,
                }
            }
        }
    }
}

fn empty_section(title: String) -> Section {
    Section {
        title,
        lines: Vec::new(),
    }
}

/// Parses free-form resume text into header lines and ordered sections.
pub fn parse(raw_text: &str) -> ParsedDocument {
    let doc = raw_text
        .lines()
        .filter_map(Line::new)
        .fold(ParserState::start(), ParserState::step)
        .finish();

    debug!(
        header_lines = doc.header_lines.len(),
        sections = doc.sections.len(),
        "Parsed resume text"
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(section: &Section) -> Vec<&str> {
        section.lines.iter().map(Line::as_str).collect()
    }

    #[test]
    fn test_two_sections_round_trip() {
        let text = "EXPERIENCE\nBuilt APIs\nRan on-call\nEDUCATION\nBSc Computer Science\nState University";
        let doc = parse(text);

        assert!(doc.header_lines.is_empty());
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].title, "EXPERIENCE");
        assert_eq!(lines(&doc.sections[0]), vec!["Built APIs", "Ran on-call"]);
        assert_eq!(doc.sections[1].title, "EDUCATION");
        assert_eq!(
            lines(&doc.sections[1]),
            vec!["BSc Computer Science", "State University"]
        );
    }

    #[test]
    fn test_header_block_precedes_sections() {
        let text = "Jane Doe\njane@example.com | 555-123-4567\n\n--- PROFESSIONAL SUMMARY ---\nBackend engineer.";
        let doc = parse(text);

        let header: Vec<&str> = doc.header_lines.iter().map(Line::as_str).collect();
        assert_eq!(header, vec!["Jane Doe", "jane@example.com | 555-123-4567"]);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "PROFESSIONAL SUMMARY");
        assert_eq!(lines(&doc.sections[0]), vec!["Backend engineer."]);
    }

    #[test]
    fn test_empty_string_yields_empty_document() {
        let doc = parse("");
        assert!(doc.is_empty());
        assert!(doc.is_missing_sections());
    }

    #[test]
    fn test_blank_lines_discarded() {
        let doc = parse("\n\n   \n\t\n");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_no_headers_gives_header_only_document() {
        let doc = parse("Jane Doe\nSoftware engineer with a love of compilers");
        assert_eq!(doc.header_lines.len(), 2);
        assert!(doc.sections.is_empty());
        assert!(doc.is_missing_sections());
    }

    #[test]
    fn test_filler_rule_under_title_keeps_section_open() {
        let doc = parse("SKILLS\n==========\nRust, Go");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(lines(&doc.sections[0]), vec!["Rust, Go"]);
    }

    #[test]
    fn test_title_is_cleaned_and_uppercased() {
        assert_eq!(
            classify_line("=== Technical Skills ==="),
            LineKind::Header("TECHNICAL SKILLS".to_string())
        );
        assert_eq!(
            classify_line("Work Experience:"),
            LineKind::Header("WORK EXPERIENCE".to_string())
        );
    }

    #[test]
    fn test_sentence_mentioning_a_section_word_is_content() {
        assert_eq!(
            classify_line("Five years of experience shipping distributed systems"),
            LineKind::Content
        );
    }

    #[test]
    fn test_caps_heading_length_window() {
        assert_eq!(classify_line("AWS"), LineKind::Content);
        assert_eq!(
            classify_line("VOLUNTEERING"),
            LineKind::Header("VOLUNTEERING".to_string())
        );
        let long_caps = "A".repeat(50);
        assert_eq!(classify_line(&long_caps), LineKind::Content);
    }

    #[test]
    fn test_caps_lists_are_content() {
        assert_eq!(classify_line("AWS, SQL, GCP"), LineKind::Content);
        assert_eq!(classify_line("CKA | CNCF | 2023"), LineKind::Content);
        assert_eq!(classify_line("GPA: 3.8"), LineKind::Content);
        assert_eq!(classify_line("AWS; GCP"), LineKind::Content);
        assert_eq!(classify_line("AWARDS:"), LineKind::Header("AWARDS".to_string()));
    }

    #[test]
    fn test_caps_skill_list_stays_in_its_section() {
        let doc = parse("SKILLS\nAWS, SQL, GCP\nCERTIFICATIONS\nCKA | CNCF | 2023");
        let titles: Vec<&str> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["SKILLS", "CERTIFICATIONS"]);
        assert_eq!(lines(&doc.sections[0]), vec!["AWS, SQL, GCP"]);
        assert_eq!(lines(&doc.sections[1]), vec!["CKA | CNCF | 2023"]);
    }

    #[test]
    fn test_numeric_line_is_not_a_heading() {
        assert_eq!(classify_line("2019 - 2021"), LineKind::Content);
        assert_eq!(classify_line("(555) 123-4567"), LineKind::Content);
    }

    #[test]
    fn test_bullets_are_never_headers() {
        assert_eq!(classify_line("• AWS LAMBDA"), LineKind::Content);
        assert_eq!(classify_line("- SKILLS AUDIT"), LineKind::Content);
        assert_eq!(classify_line("------"), LineKind::Rule);
    }

    #[test]
    fn test_header_line_not_included_in_section_lines() {
        let doc = parse("PROJECTS\nCompiler in Rust");
        assert!(doc.sections[0]
            .lines
            .iter()
            .all(|l| l.as_str() != "PROJECTS"));
    }

    #[test]
    fn test_crlf_input() {
        let doc = parse("Jane\r\nSKILLS\r\nRust\r\n");
        assert_eq!(doc.header_lines.len(), 1);
        assert_eq!(lines(&doc.sections[0]), vec!["Rust"]);
    }

    #[test]
    fn test_parse_is_total_on_odd_input() {
        for text in ["-", "•", "::::", "=\n=\n=", "ÉCOLE", "\u{0}"] {
            let _ = parse(text);
        }
    }
}
