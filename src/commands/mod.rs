//! Command implementations for the triage CLI.
//!
//! The interactive session owns a `Session` and drives intake, analysis, and
//! rendering; the one-shot analyze command reuses the same dispatcher path.
//! Command failures inside the session are reported inline and keep the loop
//! alive; the session always stays in its prior valid state.

use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;

use crate::api;
use crate::cli::{AddArgs, AnalyzeArgs, SessionCli, SessionCommand};
use crate::config::{self, Resolved, TriageConfig};
use crate::models::TaskDraft;
use crate::render::{
    CommandResult, ConfigShowResult, MatrixResult, Notice, RankedListResult, TaskListResult,
};
use crate::session::Session;
use crate::{Error, Result};

/// Print a command result in the selected output format.
pub fn output(result: &dyn CommandResult, human: bool) {
    if human {
        println!("{}", result.to_human().trim_end());
    } else {
        println!("{}", result.to_json());
    }
}

/// Report an error inline without ending the session.
fn report_error(err: &Error, human: bool) {
    if human {
        eprintln!("Error: {err}");
    } else {
        eprintln!("{}", serde_json::json!({ "error": err.to_string() }));
    }
}

/// Run the interactive session loop: read a line, dispatch, repeat until
/// `quit` or end of input.
pub fn run_session(settings: &Resolved) -> Result<()> {
    let mut session = Session::new(&settings.default_strategy);
    let human = settings.human;

    if human {
        println!("triage session - type 'help' for commands, 'quit' to leave");
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Bulk JSON is captured verbatim; shell splitting would eat quotes.
        if let Some(raw) = line.strip_prefix("paste ") {
            session.set_pending_bulk(raw.to_string());
            output(
                &Notice::new("Bulk JSON staged; it will replace the task list on analyze"),
                human,
            );
            continue;
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                report_error(&Error::InvalidInput(e.to_string()), human);
                continue;
            }
        };
        if words.is_empty() {
            continue;
        }

        let parsed = match SessionCli::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        if matches!(parsed.command, SessionCommand::Quit) {
            break;
        }
        if let Err(e) = run_session_command(parsed.command, &mut session, settings) {
            report_error(&e, human);
        }
    }
    Ok(())
}

fn run_session_command(
    command: SessionCommand,
    session: &mut Session,
    settings: &Resolved,
) -> Result<()> {
    let human = settings.human;
    match command {
        SessionCommand::Add(args) => {
            add_task(args, session)?;
            output(&TaskListResult { tasks: session.tasks() }, human);
        }
        SessionCommand::List => {
            output(&TaskListResult { tasks: session.tasks() }, human);
        }
        SessionCommand::Load { path } => {
            load_bulk(&path, session)?;
            output(
                &Notice::new(format!("Loaded bulk JSON from {}", path.display())),
                human,
            );
        }
        SessionCommand::Clear => {
            session.clear_pending_bulk();
            output(&Notice::new("Pending bulk JSON cleared"), human);
        }
        SessionCommand::Strategy { name } => {
            session.strategy = name;
            output(
                &Notice::new(format!("Strategy set to {}", session.strategy)),
                human,
            );
        }
        SessionCommand::Analyze { strategy } => {
            let strategy = strategy.unwrap_or_else(|| session.strategy.clone());
            analyze(session, &settings.service_url, &strategy, human)?;
        }
        SessionCommand::Matrix => {
            if session.last_scored().is_empty() {
                return Err(Error::InvalidInput(
                    "Analyze tasks first, then open the matrix.".to_string(),
                ));
            }
            output(&MatrixResult { tasks: session.last_scored() }, human);
        }
        SessionCommand::Reset => {
            session.reset();
            output(&Notice::new("Session reset"), human);
        }
        // Handled by the loop before dispatch.
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn add_task(args: AddArgs, session: &mut Session) -> Result<()> {
    let draft = TaskDraft {
        title: args.title,
        due_date: args.due,
        estimated_hours: args.hours,
        importance: args.importance,
        dependencies: args.deps,
    };
    session.add_task(&draft)?;
    Ok(())
}

fn load_bulk(path: &Path, session: &mut Session) -> Result<()> {
    let raw = fs::read_to_string(path)?;
    session.set_pending_bulk(raw);
    Ok(())
}

/// The analyze dispatcher: apply the bulk override, require a non-empty
/// store, POST to the service, retain the scored result, render the ranked
/// list. Any failure leaves `last_scored` and the store untouched.
fn analyze(session: &mut Session, url: &str, strategy: &str, human: bool) -> Result<()> {
    if let Some(raw) = session.pending_bulk().map(|s| s.trim().to_string()) {
        if !raw.is_empty() {
            session.replace_all(&raw)?;
        }
    }
    if session.tasks().is_empty() {
        return Err(Error::EmptyTasks);
    }

    let scored = api::analyze(url, session.tasks(), strategy)?;
    session.set_last_scored(scored);
    output(&RankedListResult { tasks: session.last_scored() }, human);
    Ok(())
}

/// One-shot analysis of a bulk JSON file (or stdin) without a session.
pub fn analyze_once(args: &AnalyzeArgs, settings: &Resolved) -> Result<()> {
    let raw = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut session = Session::new(&settings.default_strategy);
    session.set_pending_bulk(raw);
    let strategy = args
        .strategy
        .clone()
        .unwrap_or_else(|| settings.default_strategy.clone());

    analyze(&mut session, &settings.service_url, &strategy, settings.human)?;
    if args.matrix {
        output(&MatrixResult { tasks: session.last_scored() }, settings.human);
    }
    Ok(())
}

/// Show the resolved configuration.
pub fn config_show(settings: &Resolved) -> Result<()> {
    let path = config::config_path()?;
    output(
        &ConfigShowResult {
            service_url: settings.service_url.clone(),
            default_strategy: settings.default_strategy.clone(),
            human: settings.human,
            action_log: settings.action_log,
            path: path.display().to_string(),
        },
        settings.human,
    );
    Ok(())
}

/// Set one config key and persist the file.
pub fn config_set(key: &str, value: &str, settings: &Resolved) -> Result<()> {
    let mut config = TriageConfig::load()?;
    config.set(key, value)?;
    let path = config.save()?;
    output(
        &Notice::new(format!("Set {key} in {}", path.display())),
        settings.human,
    );
    Ok(())
}

/// Print the config file path.
pub fn config_path(settings: &Resolved) -> Result<()> {
    let path = config::config_path()?;
    output(&Notice::new(path.display().to_string()), settings.human);
    Ok(())
}
