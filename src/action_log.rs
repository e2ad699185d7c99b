//! Action logging for triage commands.
//!
//! Appends one JSONL entry per top-level command to
//! `<data_dir>/triage/action.log` (`TG_DATA_DIR` overrides the directory).
//! Logging never fails the calling command; failures degrade to a stderr
//! warning. Disable it with `action_log = false` in the config file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// A single action log entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionLog {
    /// ISO 8601 timestamp when the command finished
    pub timestamp: DateTime<Utc>,

    /// Command name (e.g. "session", "analyze", "config")
    pub command: String,

    /// Whether the command succeeded
    pub success: bool,

    /// Error message if the command failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Command execution duration in milliseconds
    pub duration_ms: u64,
}

/// Append an entry to the action log.
pub fn log_action(enabled: bool, command: &str, success: bool, error: Option<String>, duration_ms: u64) {
    if !enabled {
        return;
    }
    let entry = ActionLog {
        timestamp: Utc::now(),
        command: command.to_string(),
        success,
        error,
        duration_ms,
    };
    if let Err(e) = write_entry(&entry) {
        eprintln!("Warning: failed to write action log: {e}");
    }
}

fn write_entry(entry: &ActionLog) -> std::io::Result<()> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(entry)?;
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{json}")?;
    Ok(())
}

/// Log file path: `$TG_DATA_DIR/action.log` when set, otherwise
/// `<data_dir>/triage/action.log`.
fn log_path() -> std::io::Result<PathBuf> {
    if let Ok(dir) = std::env::var("TG_DATA_DIR") {
        return Ok(PathBuf::from(dir).join("action.log"));
    }
    let base = dirs::data_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine data directory",
        )
    })?;
    Ok(base.join("triage").join("action.log"))
}
