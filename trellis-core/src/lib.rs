//! Trellis core — project records, the observer store, and the form
//! validation gate.
//!
//! Public API surface:
//! - [`types`] — [`Project`], [`ProjectId`], [`ProjectStatus`]
//! - [`store`] — [`ProjectStore`] and the [`Subscriber`] callback contract
//! - [`validate`] — [`ProjectDraft`] and the form rule table
//! - [`error`] — [`ValidationError`]

pub mod error;
pub mod store;
pub mod types;
pub mod validate;

pub use error::ValidationError;
pub use store::{ProjectStore, Subscriber};
pub use types::{Project, ProjectId, ProjectStatus};
pub use validate::ProjectDraft;
