//! Session state for the interactive triage loop.
//!
//! A `Session` owns the un-scored task store, the monotonic id counter, the
//! pending bulk JSON override, the selected strategy, and the last scored
//! result. One session lives for the duration of one interactive run;
//! `reset` (or dropping the session) is the fresh-start analog.

use chrono::NaiveDate;

use crate::models::{Dependencies, ScoredTask, Task, TaskDraft};
use crate::{Error, Result};

pub struct Session {
    tasks: Vec<Task>,
    next_id: i64,
    /// Strategy sent on analyze unless overridden per call
    pub strategy: String,
    default_strategy: String,
    pending_bulk: Option<String>,
    last_scored: Vec<ScoredTask>,
}

impl Session {
    pub fn new(default_strategy: &str) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            strategy: default_strategy.to_string(),
            default_strategy: default_strategy.to_string(),
            pending_bulk: None,
            last_scored: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn last_scored(&self) -> &[ScoredTask] {
        &self.last_scored
    }

    pub fn pending_bulk(&self) -> Option<&str> {
        self.pending_bulk.as_deref()
    }

    pub fn set_pending_bulk(&mut self, raw: String) {
        self.pending_bulk = Some(raw);
    }

    pub fn clear_pending_bulk(&mut self) {
        self.pending_bulk = None;
    }

    /// Record the result of a successful analyze call. The dispatcher is the
    /// only caller; the matrix view reads this without re-contacting the
    /// service.
    pub fn set_last_scored(&mut self, scored: Vec<ScoredTask>) {
        self.last_scored = scored;
    }

    /// Validate a draft and append it to the store.
    ///
    /// On any validation failure the store is left untouched and the id
    /// counter does not advance. Ids are assigned once and never reused.
    pub fn add_task(&mut self, draft: &TaskDraft) -> Result<Task> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        let due = draft.due_date.trim();
        if due.is_empty() {
            return Err(Error::InvalidInput("due date is required".to_string()));
        }
        if NaiveDate::parse_from_str(due, "%Y-%m-%d").is_err() {
            return Err(Error::InvalidInput(format!(
                "due date must be YYYY-MM-DD, got '{due}'"
            )));
        }

        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            due_date: due.to_string(),
            estimated_hours: draft.estimated_hours,
            importance: draft.importance,
            dependencies: Dependencies::Many(parse_dependency_list(&draft.dependencies)),
            extra: serde_json::Map::new(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace the whole store from a bulk JSON array.
    ///
    /// Ids present in the input are kept; missing ids are assigned by
    /// 1-based position. Unmodeled fields pass through to the service
    /// unchanged. On any parse failure the store keeps its prior contents.
    pub fn replace_all(&mut self, raw: &str) -> Result<usize> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(raw).map_err(Error::InvalidBulkJson)?;

        let mut tasks = Vec::with_capacity(values.len());
        for (idx, mut value) in values.into_iter().enumerate() {
            if let Some(obj) = value.as_object_mut() {
                if !obj.contains_key("id") {
                    obj.insert("id".to_string(), serde_json::Value::from(idx as i64 + 1));
                }
            }
            let task: Task = serde_json::from_value(value).map_err(Error::InvalidBulkJson)?;
            tasks.push(task);
        }

        // Keep the never-reused id invariant across a bulk replace.
        let max_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        let count = tasks.len();
        self.tasks = tasks;
        Ok(count)
    }

    /// Back to a pristine session: empty store, id counter at 1, no pending
    /// bulk override, no scored result, default strategy.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.next_id = 1;
        self.strategy = self.default_strategy.clone();
        self.pending_bulk = None;
        self.last_scored.clear();
    }
}

/// Parse a comma-separated dependency string, silently dropping segments
/// that are not integers. `"1, 2, x, 3"` parses to `[1, 2, 3]`.
pub fn parse_dependency_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|segment| segment.trim().parse::<i64>().ok())
        .collect()
}
