pub mod io;
pub mod models;
pub mod parsing;
pub mod quiz;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{Topic, TopicFile};
pub use parsing::{blocks::Block, parse_theory, parse_theory_str, table::TableModel};
pub use quiz::{Catalog, Category, Filter, FlashCard, QuizKey, QuizReport, QuizSession};
pub use render::{RenderedBlock, render_block, render_html, render_theory};
