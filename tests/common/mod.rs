//! Shared helpers for CLI integration tests.

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment for an isolated `tg` invocation: temp config and data
/// directories so tests never touch the user's real files.
pub struct TestEnv {
    pub config_dir: TempDir,
    pub data_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().unwrap(),
            data_dir: TempDir::new().unwrap(),
        }
    }

    /// Command for the tg binary wired to this environment.
    pub fn tg(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tg"));
        cmd.env("TG_CONFIG_DIR", self.config_dir.path());
        cmd.env("TG_DATA_DIR", self.data_dir.path());
        cmd.env_remove("TG_SERVICE_URL");
        cmd
    }

    /// Contents of the action log, empty string if it was never written.
    pub fn action_log(&self) -> String {
        std::fs::read_to_string(self.data_dir.path().join("action.log")).unwrap_or_default()
    }
}
