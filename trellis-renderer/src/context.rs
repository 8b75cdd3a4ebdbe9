//! Template context — serializable rendering payload built from a board snapshot.

use serde::{Deserialize, Serialize};

use trellis_core::{Project, ProjectStatus};

use crate::error::RenderError;

/// Rendering payload for the whole board: one section per status plus a footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardContext {
    /// Section for projects still in flight.
    pub active: ListContext,
    /// Section for projects that shipped.
    pub finished: ListContext,
    /// Footer label, e.g. `3 projects`.
    pub total_label: String,
}

/// Rendering payload for a single status section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListContext {
    /// Section heading, e.g. `ACTIVE PROJECTS`.
    pub heading: String,
    /// Dashes underlining the heading.
    pub rule: String,
    /// Entries in snapshot order.
    pub projects: Vec<ProjectItemContext>,
}

/// One project entry inside a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItemContext {
    pub short_id: String,
    pub title: String,
    pub persons: String,
    pub description: String,
}

impl BoardContext {
    /// Build a [`BoardContext`] from a full board snapshot.
    pub fn from_snapshot(snapshot: &[Project]) -> Self {
        BoardContext {
            active: ListContext::from_snapshot(ProjectStatus::Active, snapshot),
            finished: ListContext::from_snapshot(ProjectStatus::Finished, snapshot),
            total_label: count_label(snapshot.len(), "project"),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

impl ListContext {
    /// Build the section for `status` from a full board snapshot.
    ///
    /// Entries keep snapshot order, so projects appear in the order they were
    /// added to the store.
    pub fn from_snapshot(status: ProjectStatus, snapshot: &[Project]) -> Self {
        let heading = format!("{} PROJECTS", status.to_string().to_uppercase());
        let rule = "-".repeat(heading.chars().count());
        let projects = snapshot
            .iter()
            .filter(|p| p.status == status)
            .map(ProjectItemContext::from_project)
            .collect();
        ListContext { heading, rule, projects }
    }

    /// Convert to a [`tera::Context`] with the section under the `list` key.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        let mut ctx = tera::Context::new();
        ctx.insert("list", &serde_json::to_value(self)?);
        Ok(ctx)
    }
}

impl ProjectItemContext {
    fn from_project(project: &Project) -> Self {
        ProjectItemContext {
            short_id: project.id.short(),
            title: project.title.clone(),
            persons: count_label(project.people as usize, "person"),
            description: project.description.clone(),
        }
    }
}

/// `1 person` / `3 persons`, `1 project` / `3 projects`.
fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
