//! `trellis demo` — seeded board walkthrough.
//!
//! Adds three projects through the validation gate, moves the first one to
//! finished, and prints the resulting board.

use anyhow::{Context, Result};
use clap::Args;

use trellis_core::{ProjectDraft, ProjectStatus, ProjectStore};
use trellis_renderer::BoardRenderer;

use crate::session;
use crate::views::SnapshotView;

/// Arguments for `trellis demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Emit the final board as machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl DemoArgs {
    pub fn run(self) -> Result<()> {
        let mut store = ProjectStore::new();
        let board = SnapshotView::new();
        board.attach(&mut store);

        let mut first = None;
        for draft in seed_drafts() {
            draft
                .validate()
                .with_context(|| format!("seed project '{}' failed validation", draft.title))?;
            let ProjectDraft { title, description, people } = draft;
            let id = store.add_project(title, description, people);
            first.get_or_insert(id);
        }
        if let Some(id) = first {
            store.change_status(id, ProjectStatus::Finished);
        }

        let projects = board.projects();
        if self.json {
            println!("{}", session::board_json(&projects)?);
            return Ok(());
        }

        let renderer = BoardRenderer::new().context("failed to load board templates")?;
        let rendered = renderer
            .render_board(&projects)
            .context("failed to render board")?;
        print!("{rendered}");
        Ok(())
    }
}

fn seed_drafts() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft {
            title: "Website relaunch".to_string(),
            description: "New landing page and docs".to_string(),
            people: 3,
        },
        ProjectDraft {
            title: "Billing audit".to_string(),
            description: "Quarterly access review".to_string(),
            people: 1,
        },
        ProjectDraft {
            title: "Mobile spike".to_string(),
            description: "Prototype the companion app".to_string(),
            people: 4,
        },
    ]
}
