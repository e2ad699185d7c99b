//! CLI argument definitions for triage.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Triage - score tasks with a remote service and rank them for action.
///
/// Start `tg` with no arguments for an interactive session, then `analyze`
/// to fetch scores and `matrix` for the Eisenhower view.
#[derive(Parser, Debug)]
#[command(name = "tg")]
#[command(author, version, about = "A CLI client for task scoring and Eisenhower triage", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Analyze endpoint of the scoring service.
    /// Can also be set via TG_SERVICE_URL or the config file.
    #[arg(long = "service-url", global = true, env = "TG_SERVICE_URL")]
    pub service_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive triage session (default when no command is given)
    Session,

    /// One-shot analysis of a bulk JSON task file
    Analyze(AnalyzeArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// One-shot analyze inputs.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to a JSON array of tasks (reads stdin when omitted)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Scoring strategy to request. The set is owned by the service;
    /// known names: smart_balance, fastest, high_impact, deadline
    #[arg(long, short = 's')]
    pub strategy: Option<String>,

    /// Also render the Eisenhower matrix after the ranked list
    #[arg(long)]
    pub matrix: bool,
}

/// Configuration management commands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,

    /// Set a config value (service_url, default_strategy, human, action_log)
    Set { key: String, value: String },

    /// Print the config file path
    Path,
}

/// Line commands accepted inside an interactive session.
///
/// Each input line is shell-split and parsed as one of these, except for
/// `paste`, which the loop captures verbatim so bulk JSON survives unquoted.
#[derive(Parser, Debug)]
#[command(multicall = true)]
#[command(after_help = "Additional:\n  paste <raw json>  Stage bulk JSON that replaces the task list on analyze")]
pub struct SessionCli {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a task to the local store
    Add(AddArgs),

    /// List the un-scored task store
    List,

    /// Load a bulk JSON file that will replace the store on analyze
    Load {
        /// Path to a JSON array of tasks
        path: PathBuf,
    },

    /// Drop the pending bulk JSON override
    Clear,

    /// Select the scoring strategy sent on analyze
    Strategy {
        /// Strategy name (service-owned set, e.g. smart_balance, deadline)
        name: String,
    },

    /// Send the task set to the scoring service and show the ranked list
    Analyze {
        /// Override the session strategy for this call
        #[arg(long, short = 's')]
        strategy: Option<String>,
    },

    /// Show the Eisenhower matrix of the last analysis
    Matrix,

    /// Start over: clears tasks, scores, and the pending bulk override
    Reset,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Single-task intake fields.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: String,

    /// Estimated effort in hours
    #[arg(long)]
    pub hours: f64,

    /// Importance (the service scores 1-10; 7 and above counts as important)
    #[arg(long)]
    pub importance: i64,

    /// Comma-separated ids of tasks this one depends on
    #[arg(long, default_value = "")]
    pub deps: String,
}
