//! Configuration for triage.
//!
//! User preferences live in a TOML file at `<config_dir>/triage/config.toml`;
//! set `TG_CONFIG_DIR` to relocate it (tests use this for isolation).
//!
//! Resolution precedence for each setting, highest first:
//! 1. CLI flag (`--service-url`, `-H`)
//! 2. Environment (`TG_SERVICE_URL`, applied through clap)
//! 3. Config file
//! 4. Built-in default

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::api::DEFAULT_SERVICE_URL;
use crate::{Error, Result};

/// Strategy requested when neither the session nor the config names one.
pub const DEFAULT_STRATEGY: &str = "smart_balance";

/// On-disk config file shape. Absent fields mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Analyze endpoint of the scoring service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    /// Strategy sent when none is selected explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_strategy: Option<String>,

    /// Default to human-readable output instead of JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human: Option<bool>,

    /// Append command entries to the action log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_log: Option<bool>,
}

impl TriageConfig {
    /// Load the config file, treating a missing file as empty config.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("parse {}: {e}", path.display())))
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(&path, raw)?;
        Ok(path)
    }

    /// Set one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "service_url" => self.service_url = Some(value.to_string()),
            "default_strategy" => self.default_strategy = Some(value.to_string()),
            "human" => self.human = Some(parse_bool(key, value)?),
            "action_log" => self.action_log = Some(parse_bool(key, value)?),
            other => return Err(Error::Config(format!("unknown config key: {other}"))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(Error::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

/// Settings after applying precedence, consumed by every command.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub service_url: String,
    pub default_strategy: String,
    pub human: bool,
    pub action_log: bool,
}

/// Apply precedence over the file config. `cli_service_url` already folds in
/// the `TG_SERVICE_URL` environment variable via clap.
pub fn resolve(config: &TriageConfig, cli_service_url: Option<&str>, cli_human: bool) -> Resolved {
    Resolved {
        service_url: cli_service_url
            .map(str::to_string)
            .or_else(|| config.service_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
        default_strategy: config
            .default_strategy
            .clone()
            .unwrap_or_else(|| DEFAULT_STRATEGY.to_string()),
        human: cli_human || config.human.unwrap_or(false),
        action_log: config.action_log.unwrap_or(true),
    }
}

/// Config file path: `$TG_CONFIG_DIR/config.toml` when set, otherwise
/// `<config_dir>/triage/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TG_CONFIG_DIR") {
        return Ok(PathBuf::from(dir).join("config.toml"));
    }
    let base = dirs::config_dir()
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
    Ok(base.join("triage").join("config.toml"))
}
