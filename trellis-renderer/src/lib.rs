//! # trellis-renderer
//!
//! Tera-based template engine that renders the project board from store
//! snapshots.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trellis_core::Project;
//! use trellis_renderer::BoardRenderer;
//!
//! fn print_board(snapshot: &[Project]) {
//!     if let Ok(renderer) = BoardRenderer::new() {
//!         if let Ok(board) = renderer.render_board(snapshot) {
//!             print!("{board}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{BoardContext, ListContext, ProjectItemContext};
pub use engine::{BoardRenderer, TemplateEngine, BOARD_TEMPLATE, LIST_TEMPLATE};
pub use error::RenderError;
