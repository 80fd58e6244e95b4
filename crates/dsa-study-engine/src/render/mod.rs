//! # Rendering
//!
//! Turns classified [`Block`](crate::parsing::blocks::Block)s into something
//! a front end can show:
//!
//! - **`view`**: a typed `RenderedBlock` tree of styled segments, for terminals
//! - **`html`**: an HTML string, for web front ends
//!
//! Both detect the standalone heading case: a paragraph whose whole text is
//! one `**…**` pair renders as a heading, not as bold body text.

pub mod html;
pub mod view;

pub use html::render_html;
pub use view::{RenderedBlock, TableView, render_block, render_theory};
