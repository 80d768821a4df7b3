use std::fmt;

use serde::{Deserialize, Serialize};

/// One non-empty, trimmed line of resume text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(String);

impl Line {
    /// Trims `raw`; returns `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Line> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Line(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled group of content lines. The title is upper-cased and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
}

impl Section {
    /// True when the title contains any of `keywords` (upper-case).
    pub fn title_matches(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.title.contains(k))
    }
}

/// A resume split into its leading header block and ordered sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub header_lines: Vec<Line>,
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    pub fn is_empty(&self) -> bool {
        self.header_lines.is_empty() && self.sections.is_empty()
    }

    /// No section header was recognised. Scoring reports this as missing sections.
    pub fn is_missing_sections(&self) -> bool {
        self.sections.is_empty()
    }

    /// First section whose title contains any of `keywords`.
    pub fn find_section(&self, keywords: &[&str]) -> Option<&Section> {
        self.sections.iter().find(|s| s.title_matches(keywords))
    }

    pub fn has_section(&self, keywords: &[&str]) -> bool {
        self.find_section(keywords).is_some()
    }

    /// Every section content line, in document order.
    pub fn content_lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(|s| s.lines.iter())
    }

    pub fn name(&self) -> Option<&Line> {
        self.header_lines.first()
    }
}
