//! Greedy word wrap against a font metric table.
//!
//! Same greedy algorithm the line simulator always used, but it returns the sub-lines
//! themselves and splits words that alone exceed the available width, so no produced
//! line is wider than `max_width` (unless a single glyph is, on degenerate geometry).

use crate::layout::font_metrics::{FontMetricTable, PT_TO_UNITS};

/// Wraps `text` into lines no wider than `max_width` page units at `size_pt`.
/// Whitespace runs collapse to single spaces. Empty input yields no lines.
pub fn wrap_text(text: &str, metrics: &FontMetricTable, size_pt: f32, max_width: f32) -> Vec<String> {
    let space_w = metrics.space_width * size_pt * PT_TO_UNITS;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.text_width(word, size_pt);

        if word_w > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_long_word(word, metrics, size_pt, max_width);
            // The last fragment stays open so following words can join it.
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_w = metrics.text_width(&last, size_pt);
                current = last;
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_w = word_w;
        } else if current_w + space_w + word_w <= max_width {
            current.push(' ');
            current.push_str(word);
            current_w += space_w + word_w;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_w = word_w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a single word into fragments that each fit `max_width`; every fragment
/// holds at least one character.
fn split_long_word(word: &str, metrics: &FontMetricTable, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_w = 0.0_f32;

    for c in word.chars() {
        let char_w = metrics.char_width(c) * size_pt * PT_TO_UNITS;
        if !piece.is_empty() && piece_w + char_w > max_width {
            pieces.push(std::mem::take(&mut piece));
            piece_w = 0.0;
        }
        piece.push(c);
        piece_w += char_w;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
