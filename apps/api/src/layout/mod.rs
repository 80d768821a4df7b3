// Page layout: font metrics, word wrap, and the paginating layout engine.
// Layout is pure CPU work on small inputs; handlers call it inline.

pub mod engine;
pub mod font_metrics;
pub mod handlers;
pub mod model;
pub mod wrap;

pub use engine::layout;
pub use font_metrics::{get_metrics, FontFamily};
pub use model::{Page, PageGeometry, PageLayout, PlacedRule, PlacedRun, RunStyle};
