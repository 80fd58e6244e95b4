//! # Quiz
//!
//! Flashcard catalog and the session state machine that walks a shuffled
//! deck: `Answering` → `Revealed` → `Answering` | `Complete`.
//!
//! Misuse (answering twice, advancing before answering, out-of-range
//! choices) is a no-op rather than an error, so repeated key presses are
//! harmless.

pub mod catalog;
pub mod input;
pub mod models;
pub mod report;
pub mod session;

pub use catalog::{Catalog, CatalogError};
pub use input::QuizKey;
pub use models::{Accent, Category, Filter, FlashCard};
pub use report::{CategoryScore, QuizReport};
pub use session::{Answer, Phase, QuizSession, Tally, Transition};
