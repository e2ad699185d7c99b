//! HTTP client for the remote task-scoring service.
//!
//! The contract is consumed, not owned: POST a task list plus a strategy
//! selector, get each task back with a numeric score and a free-text
//! explanation. A missing `tasks` field in the response is an empty result,
//! not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ScoredTask, Task};

/// Default analyze endpoint of the reference scoring service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000/api/tasks/analyze/";

/// Errors from the analyze call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Service answered with a non-success status
    #[error("API error: HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// Request never completed (connection refused, DNS failure, timeout)
    #[error("API error: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape
    #[error("API error: failed to parse service response: {0}")]
    Parse(String),
}

/// Request body for the analyze endpoint.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub tasks: &'a [Task],
    pub strategy: &'a str,
}

/// Response body of the analyze endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub tasks: Vec<ScoredTask>,
}

/// POST the current task set to the scoring service and return the scored
/// list. Blocking; the caller owns retry policy (there is none).
pub fn analyze(url: &str, tasks: &[Task], strategy: &str) -> Result<Vec<ScoredTask>, ApiError> {
    let request = AnalyzeRequest { tasks, strategy };

    let response = ureq::post(url)
        .set("Accept", "application/json")
        .send_json(&request);

    match response {
        Ok(resp) => {
            let body: AnalyzeResponse = resp
                .into_json()
                .map_err(|e| ApiError::Parse(e.to_string()))?;
            Ok(body.tasks)
        }
        Err(ureq::Error::Status(code, resp)) => Err(ApiError::Status {
            code,
            message: decode_error_body(resp),
        }),
        Err(e) => Err(ApiError::Transport(e.to_string())),
    }
}

/// Best-effort decode of an error body. The reference service returns
/// `{"errors": ...}` on validation failures; anything undecodable collapses
/// to a generic message.
fn decode_error_body(resp: ureq::Response) -> String {
    match resp.into_json::<serde_json::Value>() {
        Ok(value) => value.to_string(),
        Err(_) => "Unknown error".to_string(),
    }
}
