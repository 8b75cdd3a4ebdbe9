//! Tera rendering engine — [`TemplateEngine`] and the [`BoardRenderer`] facade.
//!
//! # Template layout
//!
//! | Name                | Renders                                      |
//! |---------------------|----------------------------------------------|
//! | `board/board.tera`  | both status sections plus a totals footer    |
//! | `shared/_list.tera` | one status section (heading + entries)       |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use trellis_core::{Project, ProjectStatus};

use crate::context::{BoardContext, ListContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

/// Template name for the full two-section board.
pub const BOARD_TEMPLATE: &str = "board/board.tera";
/// Template name for a single status section.
pub const LIST_TEMPLATE: &str = "shared/_list.tera";

const TPLS: &[(&str, &str)] = &[
    (LIST_TEMPLATE, include_str!("templates/shared/_list.tera")),
    (BOARD_TEMPLATE, include_str!("templates/board/board.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path
            .strip_prefix(dir)
            .unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering board output with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded defaults.
/// Template names are normalised to lowercase and relative paths, so a file at
/// `<dir>/board/board.tera` replaces the embedded board template.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the full board from a pre-built context.
    pub fn render_board(&self, ctx: &BoardContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(BOARD_TEMPLATE, &tera_ctx)?)
    }

    /// Render a single status section from a pre-built context.
    pub fn render_list(&self, ctx: &ListContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(LIST_TEMPLATE, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// BoardRenderer
// ---------------------------------------------------------------------------

/// Snapshot-facing renderer that builds contexts from raw [`Project`] slices.
///
/// Create once and reuse across notification rounds; the tera instance parses
/// its templates up front.
pub struct BoardRenderer {
    engine: TemplateEngine,
}

impl BoardRenderer {
    /// Construct a renderer with embedded templates only.
    pub fn new() -> Result<Self, RenderError> {
        Ok(BoardRenderer { engine: TemplateEngine::new(None)? })
    }

    /// Construct a renderer with user overrides from `template_dir`, when given.
    pub fn with_template_dir(template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(BoardRenderer { engine: TemplateEngine::new(template_dir)? })
    }

    /// Render both sections of the board from a snapshot.
    pub fn render_board(&self, snapshot: &[Project]) -> Result<String, RenderError> {
        self.engine.render_board(&BoardContext::from_snapshot(snapshot))
    }

    /// Render only the section for `status` from a snapshot.
    pub fn render_list(
        &self,
        status: ProjectStatus,
        snapshot: &[Project],
    ) -> Result<String, RenderError> {
        self.engine.render_list(&ListContext::from_snapshot(status, snapshot))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ProjectId;

    fn project(title: &str, description: &str, people: u32, status: ProjectStatus) -> Project {
        Project {
            id: ProjectId::generate(),
            title: title.to_string(),
            description: description.to_string(),
            people,
            status,
        }
    }

    #[test]
    fn renderer_new_succeeds() {
        BoardRenderer::new().expect("BoardRenderer::new should succeed with embedded templates");
    }

    #[test]
    fn empty_board_renders_both_placeholders() {
        let renderer = BoardRenderer::new().unwrap();
        let content = renderer.render_board(&[]).unwrap();
        assert!(content.contains("ACTIVE PROJECTS"));
        assert!(content.contains("FINISHED PROJECTS"));
        assert_eq!(content.matches("(no projects)").count(), 2);
        assert!(content.contains("0 projects on the board"));
    }

    #[test]
    fn board_splits_entries_by_status() {
        let renderer = BoardRenderer::new().unwrap();
        let snapshot = vec![
            project("Relaunch", "New landing page", 3, ProjectStatus::Active),
            project("Audit", "Access review", 1, ProjectStatus::Finished),
        ];
        let content = renderer.render_board(&snapshot).unwrap();

        let active_at = content.find("ACTIVE PROJECTS").unwrap();
        let finished_at = content.find("FINISHED PROJECTS").unwrap();
        let relaunch_at = content.find("Relaunch").unwrap();
        let audit_at = content.find("Audit").unwrap();
        assert!(active_at < relaunch_at && relaunch_at < finished_at);
        assert!(finished_at < audit_at);
        assert!(content.contains("2 projects on the board"));
    }

    #[test]
    fn persons_wording_matches_assignment_counts() {
        let renderer = BoardRenderer::new().unwrap();
        let snapshot = vec![
            project("Solo", "One pair of hands", 1, ProjectStatus::Active),
            project("Crew", "All hands on deck", 4, ProjectStatus::Active),
        ];
        let content = renderer.render_board(&snapshot).unwrap();
        assert!(content.contains("1 person assigned"));
        assert!(content.contains("4 persons assigned"));
    }

    #[test]
    fn entries_keep_snapshot_order() {
        let renderer = BoardRenderer::new().unwrap();
        let snapshot = vec![
            project("First", "Added first", 2, ProjectStatus::Active),
            project("Second", "Added second", 2, ProjectStatus::Active),
        ];
        let content = renderer.render_board(&snapshot).unwrap();
        assert!(content.find("First").unwrap() < content.find("Second").unwrap());
    }

    #[test]
    fn list_renders_only_the_requested_status() {
        let renderer = BoardRenderer::new().unwrap();
        let snapshot = vec![
            project("Relaunch", "New landing page", 3, ProjectStatus::Active),
            project("Audit", "Access review", 1, ProjectStatus::Finished),
        ];
        let content = renderer.render_list(ProjectStatus::Finished, &snapshot).unwrap();
        assert!(content.contains("FINISHED PROJECTS"));
        assert!(content.contains("Audit"));
        assert!(!content.contains("ACTIVE PROJECTS"));
        assert!(!content.contains("Relaunch"));
    }

    #[test]
    fn entries_carry_the_short_id() {
        let renderer = BoardRenderer::new().unwrap();
        let snapshot = vec![project("Tagged", "Id visible", 2, ProjectStatus::Active)];
        let content = renderer.render_board(&snapshot).unwrap();
        assert!(content.contains(&format!("[{}]", snapshot[0].id.short())));
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let renderer = BoardRenderer::new().unwrap();
        let snapshot = vec![project("Lines", "Unix endings", 2, ProjectStatus::Active)];
        let content = renderer.render_board(&snapshot).unwrap();
        assert!(
            !content.contains('\r'),
            "rendered board contains CR char — line endings not normalised"
        );
    }
}
