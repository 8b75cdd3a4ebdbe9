//! In-memory subject/observer store for the board.
//!
//! # Contract
//!
//! - The store owns the ordered project sequence. External code never holds
//!   a reference into it; state only leaves through snapshot slices handed
//!   to subscriber callbacks.
//! - Every effective mutation takes exactly one snapshot and lends the same
//!   slice to every subscriber, synchronously, in registration order.
//! - Unknown ids and status changes that change nothing are silent: no
//!   error, no notification round.
//!
//! There is deliberately no global instance: the composition root builds a
//! [`ProjectStore`] and wires every view to it, and tests build their own.

use std::fmt;

use crate::types::{Project, ProjectId, ProjectStatus};

/// Callback invoked with the full post-mutation snapshot.
///
/// Subscribers clone whatever they retain; the borrowed slice is only valid
/// for the duration of the call.
pub type Subscriber = Box<dyn FnMut(&[Project])>;

/// Ordered project sequence plus registered subscribers.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    subscribers: Vec<Subscriber>,
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` for every future mutation round.
    ///
    /// Registration order is notification order. No dedup, no unsubscribe:
    /// the store and its views share the session lifetime.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Project]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Append a new project with a fresh id and `Active` status, then
    /// notify all subscribers.
    ///
    /// Input is taken as-is; callers run
    /// [`ProjectDraft::validate`](crate::validate::ProjectDraft::validate)
    /// first. Returns the generated id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = ProjectId::generate();
        self.projects.push(Project {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        });
        self.notify_all();
        id
    }

    /// Move the first project matching `id` to `status`, then notify.
    ///
    /// A miss, or a move to the status the project already has, leaves the
    /// sequence untouched and triggers no notification round.
    pub fn change_status(&mut self, id: ProjectId, status: ProjectStatus) {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return;
        };
        if self.projects[index].status == status {
            return;
        }
        // Whole-record replacement; status never mutates in place.
        let updated = Project {
            status,
            ..self.projects[index].clone()
        };
        self.projects[index] = updated;
        self.notify_all();
    }

    fn notify_all(&mut self) {
        // One snapshot per round; every subscriber borrows the same slice.
        let snapshot = self.projects.clone();
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
