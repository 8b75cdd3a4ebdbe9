use tempfile::TempDir;
use trellis_core::{Project, ProjectId, ProjectStatus};
use trellis_renderer::{BoardContext, BoardRenderer, TemplateEngine};

fn project(title: &str, description: &str, people: u32, status: ProjectStatus) -> Project {
    Project {
        id: ProjectId::generate(),
        title: title.to_string(),
        description: description.to_string(),
        people,
        status,
    }
}

fn make_snapshot() -> Vec<Project> {
    vec![
        project("Relaunch", "New landing page", 3, ProjectStatus::Active),
        project("Audit", "Access review", 1, ProjectStatus::Finished),
    ]
}

#[test]
fn user_template_override_wins() {
    let dir = TempDir::new().expect("tempdir");
    let custom_path = dir.path().join("board").join("board.tera");
    std::fs::create_dir_all(custom_path.parent().expect("parent")).expect("mkdir");
    std::fs::write(custom_path, "CUSTOM BOARD: {{ total_label }}\n").expect("write custom template");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let ctx = BoardContext::from_snapshot(&make_snapshot());
    let content = engine.render_board(&ctx).expect("render");

    assert!(content.contains("CUSTOM BOARD: 2 projects"), "custom template not used");
    assert!(!content.contains("ACTIVE PROJECTS"), "embedded template leaked through");
}

#[test]
fn list_partial_override_flows_into_the_board() {
    let dir = TempDir::new().expect("tempdir");
    let partial_path = dir.path().join("shared").join("_list.tera");
    std::fs::create_dir_all(partial_path.parent().expect("parent")).expect("mkdir");
    std::fs::write(partial_path, ">> {{ list.heading }}\n").expect("write partial override");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let ctx = BoardContext::from_snapshot(&make_snapshot());
    let content = engine.render_board(&ctx).expect("render");

    assert!(content.contains(">> ACTIVE PROJECTS"));
    assert!(content.contains(">> FINISHED PROJECTS"));
    assert!(!content.contains("Relaunch"), "overridden partial should drop entries");
}

#[test]
fn missing_override_dir_falls_back_to_embedded() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("does-not-exist");

    let renderer = BoardRenderer::with_template_dir(Some(&missing)).expect("renderer");
    let content = renderer.render_board(&[]).expect("render");
    assert!(content.contains("ACTIVE PROJECTS"));
    assert!(content.contains("FINISHED PROJECTS"));
}

#[test]
fn non_tera_files_are_ignored() {
    let dir = TempDir::new().expect("tempdir");
    let stray = dir.path().join("board").join("board.txt");
    std::fs::create_dir_all(stray.parent().expect("parent")).expect("mkdir");
    // Deliberately broken template syntax; must never reach the parser.
    std::fs::write(stray, "{% bogus").expect("write stray file");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let ctx = BoardContext::from_snapshot(&make_snapshot());
    let content = engine.render_board(&ctx).expect("render");
    assert!(content.contains("ACTIVE PROJECTS"), "embedded board template should still render");
}

#[test]
fn unusual_titles_render_cleanly() {
    let titles = [
        "emoji-rocket-🚀",
        "quotes-'\"`",
        "braces-{}[]()",
        "japanese-日本語",
        "accents-éèà",
    ];
    let snapshot: Vec<Project> = titles
        .iter()
        .map(|t| project(t, "shape check", 2, ProjectStatus::Active))
        .collect();

    let renderer = BoardRenderer::new().expect("renderer");
    let content = renderer.render_board(&snapshot).expect("render");
    for title in titles {
        assert!(content.contains(title), "title {title:?} missing from rendered board");
    }
}
