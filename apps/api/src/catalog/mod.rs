// Static lookup tables: skill/verb keywords and resume themes.

pub mod keywords;
pub mod themes;

pub use keywords::{KeywordCatalog, SkillCategory};
pub use themes::{Rgb, Theme, ThemeCatalog, DEFAULT_THEME_ID};
