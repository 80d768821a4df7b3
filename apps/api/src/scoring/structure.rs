//! Scores computed from the parsed structure rather than the raw text.

use crate::catalog::KeywordCatalog;
use crate::document::{Line, ParsedDocument};

use super::formatting::{has_email, has_phone};
use super::report::clamp_score;

pub const SUMMARY_TITLES: &[&str] = &["SUMMARY", "OBJECTIVE", "PROFILE"];
pub const EXPERIENCE_TITLES: &[&str] = &["EXPERIENCE", "EMPLOYMENT"];
pub const EDUCATION_TITLES: &[&str] = &["EDUCATION"];
pub const SKILLS_TITLES: &[&str] = &["SKILLS"];

const COMPLETENESS_POINTS: u32 = 20;
const WEAK_PHRASE_PENALTY: u32 = 10;

/// The header block carries an email address or a phone number.
pub fn has_contact_header(doc: &ParsedDocument) -> bool {
    doc.header_lines
        .iter()
        .any(|l| has_email(l.as_str()) || has_phone(l.as_str()))
}

/// 20 points each for a contact header and the summary, experience, education and
/// skills sections.
pub fn completeness(doc: &ParsedDocument) -> u32 {
    let parts = [
        has_contact_header(doc),
        doc.has_section(SUMMARY_TITLES),
        doc.has_section(EXPERIENCE_TITLES),
        doc.has_section(EDUCATION_TITLES),
        doc.has_section(SKILLS_TITLES),
    ];
    parts.iter().filter(|&&present| present).count() as u32 * COMPLETENESS_POINTS
}

pub fn is_bullet_line(line: &Line) -> bool {
    line.as_str().starts_with(['•', '-', '*'])
}

/// First word of a line with any bullet glyph and surrounding punctuation removed.
pub fn first_word(line: &str) -> Option<&str> {
    line.trim_start_matches(['•', '-', '*'])
        .split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

/// Share of bullet lines (every section line when there are none) that open with a
/// strong verb, minus 10 per weak phrasing anywhere in the sections.
pub fn action_verb_strength(doc: &ParsedDocument, catalog: &KeywordCatalog) -> u32 {
    let bullets: Vec<&Line> = doc.content_lines().filter(|l| is_bullet_line(l)).collect();
    let candidates: Vec<&Line> = if bullets.is_empty() {
        doc.content_lines().collect()
    } else {
        bullets
    };

    if candidates.is_empty() {
        return 0;
    }

    let strong = candidates
        .iter()
        .filter(|l| first_word(l.as_str()).is_some_and(|w| catalog.is_strong_verb(w)))
        .count();
    let share = clamp_score(100.0 * strong as f64 / candidates.len() as f64);

    let weak = doc
        .content_lines()
        .map(|l| catalog.weak_phrase_count(l.as_str()))
        .sum::<usize>() as u32;

    share.saturating_sub(weak.saturating_mul(WEAK_PHRASE_PENALTY))
}
