// Document model and the line-level resume parser.

pub mod handlers;
pub mod model;
pub mod parser;

pub use model::{Line, ParsedDocument, Section};
pub use parser::parse;
