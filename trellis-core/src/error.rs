//! Error types for trellis-core.

use thiserror::Error;

/// All ways a project draft can fail the form's validation gate.
///
/// The store itself defines no error kinds: unknown ids and no-op status
/// changes are silent by contract, so validation is the only failure path
/// this crate surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty once trimmed.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A text field fell short of its minimum length.
    #[error("{field} must be at least {min} characters (got {len})")]
    TooShort {
        field: &'static str,
        min: usize,
        len: usize,
    },

    /// A text field exceeded its maximum length.
    #[error("{field} must be at most {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// A count fell below its minimum.
    #[error("{field} must be at least {min} (got {value})")]
    TooFew {
        field: &'static str,
        min: u32,
        value: u32,
    },

    /// A count exceeded its maximum.
    #[error("{field} must be at most {max} (got {value})")]
    TooMany {
        field: &'static str,
        max: u32,
        value: u32,
    },
}
