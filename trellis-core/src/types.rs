//! Domain types for the Trellis board.
//!
//! A [`Project`] is created once by the store and never destroyed; every
//! field except `status` is immutable from that point on. Ids are random
//! and process-unique, statuses are the two board lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Unique identifier for a project, assigned once at creation.
///
/// Serializes as the plain hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generate a fresh random (v4) id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight characters of the hyphenated form.
    ///
    /// Shown wherever a full UUID would drown the listing; the full form
    /// stays authoritative.
    pub fn short(&self) -> String {
        let full = self.0.to_string();
        full[..8].to_string()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProjectId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The board list a project belongs to. The only aspect of a project the
/// store will ever change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Newly added projects always start here.
    #[default]
    Active,
    Finished,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Finished => write!(f, "finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Head count assigned to the project. The validation gate keeps this
    /// at 1 or more; the store itself does not check it.
    pub people: u32,
    pub status: ProjectStatus,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
