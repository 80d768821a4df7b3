//! Theme catalog — the fixed set of resume color/font themes.
//!
//! The layout engine reads every styling decision from a `Theme`; nothing downstream
//! branches on a theme id.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFamily;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, lower-case.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An immutable resume theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Name, section titles, job-title lines.
    pub primary_color: Rgb,
    /// Page tint used by renderers that paint a background.
    pub secondary_color: Rgb,
    /// Subtitles and rules.
    pub accent_color: Rgb,
    pub font_family: FontFamily,
}

/// Id of the theme returned for unknown lookups.
pub const DEFAULT_THEME_ID: &str = "modern-blue";

static THEMES: [Theme; 6] = [
    Theme {
        id: "modern-blue",
        name: "Modern Blue",
        primary_color: Rgb::new(37, 99, 235),
        secondary_color: Rgb::new(239, 246, 255),
        accent_color: Rgb::new(59, 130, 246),
        font_family: FontFamily::Helvetica,
    },
    Theme {
        id: "minimal-black",
        name: "Minimal Black & White",
        primary_color: Rgb::new(31, 41, 55),
        secondary_color: Rgb::new(249, 250, 251),
        accent_color: Rgb::new(107, 114, 128),
        font_family: FontFamily::Helvetica,
    },
    Theme {
        id: "creative-gradient",
        name: "Creative Gradient",
        primary_color: Rgb::new(124, 58, 237),
        secondary_color: Rgb::new(253, 244, 255),
        accent_color: Rgb::new(147, 51, 234),
        font_family: FontFamily::Helvetica,
    },
    Theme {
        id: "classic-serif",
        name: "Classic Serif",
        primary_color: Rgb::new(180, 83, 9),
        secondary_color: Rgb::new(255, 251, 235),
        accent_color: Rgb::new(217, 119, 6),
        font_family: FontFamily::Times,
    },
    Theme {
        id: "tech-green",
        name: "Tech Green",
        primary_color: Rgb::new(5, 150, 105),
        secondary_color: Rgb::new(236, 253, 245),
        accent_color: Rgb::new(16, 185, 129),
        font_family: FontFamily::Helvetica,
    },
    Theme {
        id: "corporate-navy",
        name: "Corporate Navy",
        primary_color: Rgb::new(51, 65, 85),
        secondary_color: Rgb::new(248, 250, 252),
        accent_color: Rgb::new(71, 85, 105),
        font_family: FontFamily::Helvetica,
    },
];

/// Lookup table over the static themes.
pub struct ThemeCatalog;

impl ThemeCatalog {
    /// Returns the theme with `id`, or the default theme when `id` is unknown.
    pub fn get(id: &str) -> &'static Theme {
        Self::find(id).unwrap_or_else(Self::default_theme)
    }

    /// Exact lookup without fallback.
    pub fn find(id: &str) -> Option<&'static Theme> {
        let id = id.trim();
        THEMES.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    pub fn default_theme() -> &'static Theme {
        &THEMES[0]
    }

    pub fn all() -> &'static [Theme] {
        &THEMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let theme = ThemeCatalog::get("nonexistent-theme");
        assert_eq!(theme.id, DEFAULT_THEME_ID);
        assert_eq!(theme, ThemeCatalog::default_theme());
    }

    #[test]
    fn test_lookup_is_trimmed_and_case_insensitive() {
        assert_eq!(ThemeCatalog::get("  Classic-Serif ").id, "classic-serif");
    }

    #[test]
    fn test_classic_serif_uses_times() {
        assert_eq!(ThemeCatalog::get("classic-serif").font_family, FontFamily::Times);
    }

    #[test]
    fn test_all_ids_unique() {
        let mut ids: Vec<&str> = ThemeCatalog::all().iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ThemeCatalog::all().len());
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(37, 99, 235).to_hex(), "#2563eb");
    }
}
