//! Triage CLI - a client for a remote task-scoring service.

use clap::Parser;
use std::process;
use std::time::Instant;

use triage::action_log;
use triage::cli::{Cli, Commands, ConfigCommands};
use triage::commands;
use triage::config::{self, TriageConfig};

fn main() {
    let cli = Cli::parse();

    let file_config = match TriageConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            TriageConfig::default()
        }
    };
    let settings = config::resolve(&file_config, cli.service_url.as_deref(), cli.human_readable);

    let cmd_name = command_name(&cli.command);
    let start = Instant::now();

    let result = match cli.command {
        None | Some(Commands::Session) => commands::run_session(&settings),
        Some(Commands::Analyze(args)) => commands::analyze_once(&args, &settings),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => commands::config_show(&settings),
            ConfigCommands::Set { key, value } => commands::config_set(&key, &value, &settings),
            ConfigCommands::Path => commands::config_path(&settings),
        },
    };

    let duration = start.elapsed().as_millis() as u64;
    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };
    action_log::log_action(settings.action_log, cmd_name, success, error, duration);

    if let Err(e) = result {
        if settings.human {
            eprintln!("Error: {e}");
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

fn command_name(command: &Option<Commands>) -> &'static str {
    match command {
        None | Some(Commands::Session) => "session",
        Some(Commands::Analyze(_)) => "analyze",
        Some(Commands::Config { .. }) => "config",
    }
}
