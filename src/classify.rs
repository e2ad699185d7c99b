//! Pure classification rules over scored tasks.
//!
//! Everything here is stateless: tier from the numeric score, badges from the
//! dependency list and explanation text, and the Eisenhower quadrant from the
//! urgency/importance pair.
//!
//! The urgency and cycle checks match substrings of the service's free-text
//! explanation. That wording is a cross-system contract; do not broaden the
//! matching without confirming the service's actual output format.

use serde::Serialize;

use crate::models::ScoredTask;

/// Visual bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// `>= 30` is high, `15..30` is medium, anything below is low.
    pub fn from_score(score: f64) -> Self {
        if score >= 30.0 {
            Tier::High
        } else if score >= 15.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

/// One cell of the Eisenhower matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quadrant {
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Q1 => "Do First",
            Quadrant::Q2 => "Schedule",
            Quadrant::Q3 => "Delegate",
            Quadrant::Q4 => "Eliminate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::Q1 => "urgent, important",
            Quadrant::Q2 => "not urgent, important",
            Quadrant::Q3 => "urgent, not important",
            Quadrant::Q4 => "not urgent, not important",
        }
    }
}

/// Score tier of a scored task.
pub fn tier(task: &ScoredTask) -> Tier {
    Tier::from_score(task.score)
}

/// Urgency is signaled by the word "urgent" in the explanation.
pub fn is_urgent(task: &ScoredTask) -> bool {
    task.explanation.to_lowercase().contains("urgent")
}

/// Importance uses the service's 1-10 scale; 7 and above counts.
pub fn is_important(task: &ScoredTask) -> bool {
    task.importance >= 7
}

/// Eisenhower quadrant assignment. Total: every task lands in exactly one
/// quadrant because the two predicates are independent booleans.
pub fn quadrant(task: &ScoredTask) -> Quadrant {
    match (is_urgent(task), is_important(task)) {
        (true, true) => Quadrant::Q1,
        (false, true) => Quadrant::Q2,
        (true, false) => Quadrant::Q3,
        (false, false) => Quadrant::Q4,
    }
}

/// A dependency cycle is signaled by "circular" in the explanation.
pub fn has_cycle(task: &ScoredTask) -> bool {
    task.explanation.to_lowercase().contains("circular")
}
