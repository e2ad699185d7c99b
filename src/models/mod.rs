//! Data models for triage entities.
//!
//! This module defines the core data structures:
//! - `Task` - un-scored work items accumulated locally before analysis
//! - `ScoredTask` - tasks enriched with a score and explanation by the service
//! - `Dependencies` - scalar-or-sequence dependency field from the wire
//! - `TaskDraft` - raw single-task form input before validation

use serde::{Deserialize, Serialize};

/// Dependency references as they appear on the wire.
///
/// The scoring service may hand back a single task id where the request
/// carried a sequence. Both forms deserialize here; callers use
/// [`Dependencies::normalized`] to collapse them into one canonical sequence
/// before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependencies {
    One(i64),
    Many(Vec<i64>),
}

impl Dependencies {
    /// Canonical sequence form: a scalar becomes a one-element sequence.
    pub fn normalized(&self) -> Vec<i64> {
        match self {
            Dependencies::One(id) => vec![*id],
            Dependencies::Many(ids) => ids.clone(),
        }
    }

    /// True when the normalized sequence would be empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Dependencies::Many(ids) if ids.is_empty())
    }
}

impl Default for Dependencies {
    fn default() -> Self {
        Dependencies::Many(Vec::new())
    }
}

/// A task awaiting analysis.
///
/// Tasks built through intake always carry every field. Tasks arriving via a
/// bulk JSON replace may be sparse; missing fields fall back to defaults and
/// fields we do not model are forwarded to the service untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Locally assigned identifier, unique within a session
    pub id: i64,

    /// Task title
    #[serde(default)]
    pub title: String,

    /// Due date (YYYY-MM-DD)
    #[serde(default)]
    pub due_date: String,

    /// Estimated effort in hours
    #[serde(default)]
    pub estimated_hours: f64,

    /// Importance on the service's 1-10 scale
    #[serde(default)]
    pub importance: i64,

    /// Ids of tasks this one depends on
    #[serde(default)]
    pub dependencies: Dependencies,

    /// Unmodeled fields, passed through to the service as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A task enriched with a score and explanation by the service.
///
/// Every field is defaulted: the service owns this shape and the client
/// renders whatever comes back rather than rejecting sparse entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub due_date: String,

    #[serde(default)]
    pub estimated_hours: f64,

    #[serde(default)]
    pub importance: i64,

    #[serde(default)]
    pub dependencies: Dependencies,

    /// Numeric priority score; higher means work on it sooner
    #[serde(default)]
    pub score: f64,

    /// Free-text rationale from the service, may be empty
    #[serde(default)]
    pub explanation: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Raw single-task form input before validation.
///
/// Numeric fields are already parsed by the line parser; the dependency list
/// stays a raw comma-separated string until the store accepts the draft.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: String,
    pub estimated_hours: f64,
    pub importance: i64,
    pub dependencies: String,
}
