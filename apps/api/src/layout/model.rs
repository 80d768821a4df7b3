use serde::{Deserialize, Serialize};

use crate::catalog::Rgb;
use crate::layout::font_metrics::FontFamily;

/// Page size, margins and vertical rhythm, all in page units (millimetres by default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub line_height: f32,
    /// Body lines start a new page once the cursor passes `page_height - body_reserve`.
    pub body_reserve: f32,
    /// Section titles start a new page once the cursor passes `page_height - section_reserve`.
    pub section_reserve: f32,
}

impl Default for PageGeometry {
    /// A4 portrait, 20 mm margins, 6 mm line height.
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            line_height: 6.0,
            body_reserve: 20.0,
            section_reserve: 40.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        (self.page_width - 2.0 * self.margin).max(0.0)
    }

    /// Lowest baseline any run may be placed at.
    pub fn body_limit(&self) -> f32 {
        self.page_height - self.body_reserve
    }

    pub fn section_limit(&self) -> f32 {
        self.page_height - self.section_reserve
    }
}

/// Visual style of a placed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStyle {
    pub bold: bool,
    pub color: Rgb,
    /// Font size in points.
    pub size: f32,
    pub font: FontFamily,
}

/// A single line of text at a fixed baseline position on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRun {
    pub text: String,
    pub style: RunStyle,
    pub x: f32,
    pub y: f32,
}

/// A horizontal rule (name underline, section underline).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedRule {
    pub x_start: f32,
    pub x_end: f32,
    pub y: f32,
    pub thickness: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub runs: Vec<PlacedRun>,
    pub rules: Vec<PlacedRule>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() && self.rules.is_empty()
    }
}

/// The fully paginated, styled placement of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub theme_id: String,
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl PageLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All runs in page order.
    pub fn runs(&self) -> impl Iterator<Item = &PlacedRun> {
        self.pages.iter().flat_map(|p| p.runs.iter())
    }
}
