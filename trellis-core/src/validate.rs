//! Caller-side validation for the add-project form.
//!
//! The store takes input as-is; this module is the gate a draft must clear
//! before `add_project` is ever called. Checks report the first violated
//! rule so the form can show a single, concrete rejection.

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Constraint set for a text field.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub field: &'static str,
    /// Reject values that are empty once trimmed.
    pub required: bool,
    /// Inclusive lower bound, counted in characters.
    pub min_len: Option<usize>,
    /// Inclusive upper bound, counted in characters.
    pub max_len: Option<usize>,
}

impl TextRule {
    /// Check `value`, reporting the first violated bound.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(ValidationError::Required { field: self.field });
        }
        let len = value.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                return Err(ValidationError::TooShort {
                    field: self.field,
                    min,
                    len,
                });
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                return Err(ValidationError::TooLong {
                    field: self.field,
                    max,
                    len,
                });
            }
        }
        Ok(())
    }
}

/// Constraint set for a numeric field. Bounds are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct CountRule {
    pub field: &'static str,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl CountRule {
    /// Check `value` against both bounds, lower bound first.
    pub fn check(&self, value: u32) -> Result<(), ValidationError> {
        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::TooFew {
                    field: self.field,
                    min,
                    value,
                });
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationError::TooMany {
                    field: self.field,
                    max,
                    value,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// The form's rule table
// ---------------------------------------------------------------------------

/// Title: any non-empty text.
pub const TITLE_RULE: TextRule = TextRule {
    field: "title",
    required: true,
    min_len: None,
    max_len: None,
};

/// Description: non-empty and at least five characters.
pub const DESCRIPTION_RULE: TextRule = TextRule {
    field: "description",
    required: true,
    min_len: Some(5),
    max_len: None,
};

/// People: one to four assignees.
pub const PEOPLE_RULE: CountRule = CountRule {
    field: "people",
    min: Some(1),
    max: Some(4),
};

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Gathered form input for one project, not yet admitted to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectDraft {
    /// Apply the form's rule table, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        TITLE_RULE.check(&self.title)?;
        DESCRIPTION_RULE.check(&self.description)?;
        PEOPLE_RULE.check(self.people)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
