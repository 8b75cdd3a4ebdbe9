//! Interactive board session — a line-oriented command loop over stdin/stdout.
//!
//! The session owns the store for its lifetime and never reads board state
//! directly; list output comes from the attached views and lookups go through
//! the [`SnapshotView`] cache.

use std::io::{self, BufRead, Lines, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use trellis_core::{Project, ProjectDraft, ProjectStatus, ProjectStore};
use trellis_renderer::BoardRenderer;

use crate::views::{wire_board, SnapshotView};
use crate::StatusArg;

const MOVE_USAGE: &str = "usage: move <id|title> <active|finished>";

// ---------------------------------------------------------------------------
// Command parsing
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
enum SessionCommand {
    Add,
    Move { reference: String, status: ProjectStatus },
    List,
    Export,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`; malformed input returns
/// a message for the user.
fn parse_command(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "add" => SessionCommand::Add,
        "move" => {
            // Last word is the status; everything before it is the reference,
            // so multi-word titles work without quoting.
            let rest: Vec<&str> = words.by_ref().collect();
            let Some((status_word, reference_words)) = rest.split_last() else {
                return Err(MOVE_USAGE.to_string());
            };
            if reference_words.is_empty() {
                return Err(MOVE_USAGE.to_string());
            }
            let status = status_word.parse::<StatusArg>()?.into();
            SessionCommand::Move {
                reference: reference_words.join(" "),
                status,
            }
        }
        "list" | "ls" => SessionCommand::List,
        "export" => SessionCommand::Export,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => {
            return Err(format!("unknown command '{other}'; type 'help' for commands"));
        }
    };
    if words.next().is_some() {
        return Err(format!(
            "too many arguments for '{}'",
            head.to_ascii_lowercase()
        ));
    }
    Ok(Some(command))
}

// ---------------------------------------------------------------------------
// Reference resolution — id prefix first, exact title as fallback
// ---------------------------------------------------------------------------

enum RefMatch<'a> {
    None,
    One(&'a Project),
    Many(usize),
}

fn resolve_reference<'a>(projects: &'a [Project], reference: &str) -> RefMatch<'a> {
    let needle = reference.to_ascii_lowercase();
    let by_id: Vec<&Project> = projects
        .iter()
        .filter(|p| p.id.to_string().starts_with(&needle))
        .collect();
    match by_id.as_slice() {
        &[one] => return RefMatch::One(one),
        &[] => {}
        many => return RefMatch::Many(many.len()),
    }

    let by_title: Vec<&Project> = projects
        .iter()
        .filter(|p| p.title.eq_ignore_ascii_case(reference))
        .collect();
    match by_title.as_slice() {
        &[one] => RefMatch::One(one),
        &[] => RefMatch::None,
        many => RefMatch::Many(many.len()),
    }
}

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

/// Run a board session until `quit` or end of input.
pub fn run<R: BufRead>(input: R, renderer: Rc<BoardRenderer>) -> Result<()> {
    let (mut store, board) = wire_board(&renderer);
    print_banner();

    let mut lines = input.lines();
    loop {
        prompt()?;
        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read from stdin")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };
        match command {
            SessionCommand::Add => run_add(&mut lines, &mut store)?,
            SessionCommand::Move { reference, status } => {
                run_move(&reference, status, &mut store, &board);
            }
            SessionCommand::List => run_list(&board),
            SessionCommand::Export => run_export(&board)?,
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => break,
        }
    }
    println!("bye");
    Ok(())
}

fn run_add<R: BufRead>(lines: &mut Lines<R>, store: &mut ProjectStore) -> Result<()> {
    let Some(title) = read_field(lines, "title")? else {
        return Ok(());
    };
    let Some(description) = read_field(lines, "description")? else {
        return Ok(());
    };
    let Some(people_raw) = read_field(lines, "people")? else {
        return Ok(());
    };

    let Ok(people) = people_raw.trim().parse::<u32>() else {
        println!("{}", "people must be a whole number".red());
        return Ok(());
    };

    let draft = ProjectDraft { title, description, people };
    if let Err(err) = draft.validate() {
        println!("{}", format!("invalid input: {err}").red());
        return Ok(());
    }

    let ProjectDraft { title, description, people } = draft;
    let id = store.add_project(title.clone(), description, people);
    println!("added [{}] {}", id.short(), title);
    Ok(())
}

fn run_move(reference: &str, status: ProjectStatus, store: &mut ProjectStore, board: &SnapshotView) {
    let projects = board.projects();
    match resolve_reference(&projects, reference) {
        RefMatch::None => {
            println!("{}", format!("no project matches '{reference}'").red());
        }
        RefMatch::Many(count) => {
            println!("{}", format!("'{reference}' is ambiguous ({count} matches)").red());
        }
        RefMatch::One(project) => {
            if project.status == status {
                println!(
                    "no change: [{}] {} is already {}",
                    project.id.short(),
                    project.title,
                    status
                );
                return;
            }
            store.change_status(project.id, status);
            println!("moved [{}] {} to {}", project.id.short(), project.title, status);
        }
    }
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "people")]
    people: u32,
    #[tabled(rename = "status")]
    status: String,
}

fn run_list(board: &SnapshotView) {
    let projects = board.projects();
    if projects.is_empty() {
        println!("No projects on the board. Type 'add' to create one.");
        return;
    }
    let rows: Vec<ProjectRow> = projects
        .iter()
        .map(|p| ProjectRow {
            id: p.id.short(),
            title: p.title.clone(),
            people: p.people,
            status: p.status.to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

// ---------------------------------------------------------------------------
// JSON export
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct BoardExport {
    exported_at: chrono::DateTime<Utc>,
    total: usize,
    projects: Vec<Project>,
}

/// Pretty JSON for the whole board, wrapped with export metadata.
pub fn board_json(projects: &[Project]) -> Result<String> {
    let payload = BoardExport {
        exported_at: Utc::now(),
        total: projects.len(),
        projects: projects.to_vec(),
    };
    serde_json::to_string_pretty(&payload).context("failed to serialize board JSON")
}

fn run_export(board: &SnapshotView) -> Result<()> {
    println!("{}", board_json(&board.projects())?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Prompts and chrome
// ---------------------------------------------------------------------------

fn print_banner() {
    println!(
        "{} v{} — board session started {}",
        "Trellis".bold(),
        env!("CARGO_PKG_VERSION"),
        Utc::now().format("%Y-%m-%d %H:%M"),
    );
    println!("Type 'help' for commands.");
}

fn print_help() {
    println!("Commands:");
    println!("  add                            create a project (prompts for title, description, people)");
    println!("  move <id|title> <active|finished>  move a project between lists");
    println!("  list                           show all projects as a table");
    println!("  export                         print the board as JSON");
    println!("  help                           show this message");
    println!("  quit                           leave the session");
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("failed to flush prompt")
}

fn read_field<R: BufRead>(lines: &mut Lines<R>, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("failed to flush prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read from stdin")?)),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ProjectId;

    fn project(title: &str, status: ProjectStatus) -> Project {
        Project {
            id: ProjectId::generate(),
            title: title.to_string(),
            description: "placeholder text".to_string(),
            people: 2,
            status,
        }
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!(parse_command("ADD"), Ok(Some(SessionCommand::Add)));
        assert_eq!(
            parse_command("Move ab12 Finished"),
            Ok(Some(SessionCommand::Move {
                reference: "ab12".to_string(),
                status: ProjectStatus::Finished,
            }))
        );
    }

    #[test]
    fn move_requires_a_reference_and_a_known_status() {
        assert!(parse_command("move").is_err());
        assert!(parse_command("move ab12").is_err());
        assert!(parse_command("move ab12 shipped").is_err());
    }

    #[test]
    fn move_accepts_multi_word_titles_without_quoting() {
        assert_eq!(
            parse_command("move Website relaunch finished"),
            Ok(Some(SessionCommand::Move {
                reference: "Website relaunch".to_string(),
                status: ProjectStatus::Finished,
            }))
        );
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(parse_command("list please").is_err());
        // The trailing word is taken as the status and fails to parse.
        assert!(parse_command("move ab12 finished now").is_err());
    }

    #[test]
    fn unknown_commands_surface_a_hint() {
        let err = parse_command("banana").unwrap_err();
        assert!(err.contains("unknown command 'banana'"));
        assert!(err.contains("help"));
    }

    #[test]
    fn quit_has_aliases() {
        for line in ["quit", "exit", "q"] {
            assert_eq!(parse_command(line), Ok(Some(SessionCommand::Quit)));
        }
    }

    #[test]
    fn references_resolve_by_id_prefix() {
        let projects = vec![
            project("One", ProjectStatus::Active),
            project("Two", ProjectStatus::Active),
        ];
        let prefix = projects[0].id.short();
        match resolve_reference(&projects, &prefix) {
            RefMatch::One(found) => assert_eq!(found.id, projects[0].id),
            _ => panic!("expected a unique id-prefix match"),
        }
    }

    #[test]
    fn references_fall_back_to_exact_title() {
        let projects = vec![project("Relaunch", ProjectStatus::Active)];
        match resolve_reference(&projects, "relaunch") {
            RefMatch::One(found) => assert_eq!(found.title, "Relaunch"),
            _ => panic!("expected a title match"),
        }
    }

    #[test]
    fn duplicate_titles_are_ambiguous() {
        let projects = vec![
            project("Twin", ProjectStatus::Active),
            project("Twin", ProjectStatus::Finished),
        ];
        match resolve_reference(&projects, "twin") {
            RefMatch::Many(count) => assert_eq!(count, 2),
            _ => panic!("expected an ambiguous match"),
        }
    }

    #[test]
    fn unmatched_references_resolve_to_none() {
        let projects = vec![project("One", ProjectStatus::Active)];
        assert!(matches!(resolve_reference(&projects, "zzzz"), RefMatch::None));
        assert!(matches!(resolve_reference(&[], "anything"), RefMatch::None));
    }

    #[test]
    fn board_json_wraps_projects_with_metadata() {
        let projects = vec![project("Exported", ProjectStatus::Active)];
        let json = board_json(&projects).expect("export JSON");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse export");
        assert_eq!(value["total"], 1);
        assert_eq!(value["projects"][0]["title"], "Exported");
        assert_eq!(value["projects"][0]["status"], "active");
        assert!(value["exported_at"].is_string());
    }
}
