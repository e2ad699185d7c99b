//! Triage - a CLI client for a remote task-scoring service.
//!
//! This library provides the core functionality for the `tg` CLI tool:
//! local task intake with stable identity assignment, request dispatch to
//! the scoring service, score/urgency classification, and ranked-list and
//! Eisenhower-matrix rendering.

pub mod action_log;
pub mod api;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod render;
pub mod session;

/// Library-level error type for triage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Add at least one task before analyzing")]
    EmptyTasks,

    #[error("Invalid JSON format. Please check and try again.")]
    InvalidBulkJson(#[source] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Api(#[from] api::ApiError),
}

/// Result type alias for triage operations.
pub type Result<T> = std::result::Result<T, Error>;
