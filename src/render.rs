//! Presentation surfaces for scored and un-scored tasks.
//!
//! Every command produces a result that renders two ways: compact JSON
//! (default, machine-readable) and human-readable text (`-H`). The ranked
//! list and the matrix are driven entirely by the classifier; nothing here
//! re-sorts the service's ordering.

use serde_json::json;

use crate::classify;
use crate::models::{ScoredTask, Task};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult {
    /// Serialize to a JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// A plain acknowledgment message.
pub struct Notice {
    message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl CommandResult for Notice {
    fn to_json(&self) -> String {
        json!({ "ok": true, "message": self.message }).to_string()
    }

    fn to_human(&self) -> String {
        self.message.clone()
    }
}

/// Plain enumeration of the un-scored task store.
pub struct TaskListResult<'a> {
    pub tasks: &'a [Task],
}

impl CommandResult for TaskListResult<'_> {
    fn to_json(&self) -> String {
        json!({ "count": self.tasks.len(), "tasks": self.tasks }).to_string()
    }

    fn to_human(&self) -> String {
        let mut out = String::from("Current tasks (not yet analyzed):\n");
        if self.tasks.is_empty() {
            out.push_str("  (none)\n");
        }
        for t in self.tasks {
            out.push_str(&format!(
                "  {}. {} (due: {}, imp: {}, hrs: {})\n",
                t.id, t.title, t.due_date, t.importance, t.estimated_hours
            ));
        }
        out
    }
}

/// Ranked list of scored tasks with the top-3 summary.
///
/// The service returns tasks pre-sorted by priority; input order is kept.
pub struct RankedListResult<'a> {
    pub tasks: &'a [ScoredTask],
}

impl RankedListResult<'_> {
    fn top_titles(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .take(3)
            .map(|t| t.title.as_str())
            .collect()
    }

    fn scored_json(task: &ScoredTask) -> serde_json::Value {
        json!({
            "id": task.id,
            "title": task.title,
            "due_date": task.due_date,
            "estimated_hours": task.estimated_hours,
            "importance": task.importance,
            "dependencies": task.dependencies.normalized(),
            "score": task.score,
            "explanation": task.explanation,
            "tier": classify::tier(task),
            "cycle": classify::has_cycle(task),
        })
    }
}

impl CommandResult for RankedListResult<'_> {
    fn to_json(&self) -> String {
        if self.tasks.is_empty() {
            return json!({
                "count": 0,
                "message": "No tasks returned from API.",
                "tasks": [],
            })
            .to_string();
        }
        let tasks: Vec<serde_json::Value> = self.tasks.iter().map(Self::scored_json).collect();
        json!({
            "count": self.tasks.len(),
            "top": self.top_titles(),
            "tasks": tasks,
        })
        .to_string()
    }

    fn to_human(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks returned from API.\n".to_string();
        }

        let mut out = String::from("Analyzed tasks\n\n");
        out.push_str(&format!(
            "Top 3 to work on today: {}\n\n",
            self.top_titles().join(", ")
        ));

        for task in self.tasks {
            out.push_str(&format!(
                "[{}] {} (score: {})\n",
                classify::tier(task).as_str(),
                task.title,
                task.score
            ));
            out.push_str(&format!(
                "    due: {}, importance: {}, estimated: {}h\n",
                task.due_date, task.importance, task.estimated_hours
            ));
            let deps = task.dependencies.normalized();
            if !deps.is_empty() {
                let ids: Vec<String> = deps.iter().map(i64::to_string).collect();
                out.push_str(&format!("    depends on: {}\n", ids.join(", ")));
            }
            if classify::has_cycle(task) {
                out.push_str("    ⚠ cycle detected\n");
            }
            if !task.explanation.is_empty() {
                out.push_str(&format!("    {}\n", task.explanation));
            }
            out.push('\n');
        }
        out
    }
}

/// 2x2 Eisenhower matrix of the last scored result. The caller guarantees a
/// non-empty task list; the empty case is surfaced as an error upstream.
pub struct MatrixResult<'a> {
    pub tasks: &'a [ScoredTask],
}

impl MatrixResult<'_> {
    /// Bucket titles by quadrant, input order preserved within each.
    fn buckets(&self) -> [Vec<&str>; 4] {
        let mut q1 = Vec::new();
        let mut q2 = Vec::new();
        let mut q3 = Vec::new();
        let mut q4 = Vec::new();
        for task in self.tasks {
            let title = task.title.as_str();
            match classify::quadrant(task) {
                classify::Quadrant::Q1 => q1.push(title),
                classify::Quadrant::Q2 => q2.push(title),
                classify::Quadrant::Q3 => q3.push(title),
                classify::Quadrant::Q4 => q4.push(title),
            }
        }
        [q1, q2, q3, q4]
    }
}

impl CommandResult for MatrixResult<'_> {
    fn to_json(&self) -> String {
        use crate::classify::Quadrant::*;
        let [q1, q2, q3, q4] = self.buckets();
        json!({
            "q1": { "label": Q1.label(), "tasks": q1 },
            "q2": { "label": Q2.label(), "tasks": q2 },
            "q3": { "label": Q3.label(), "tasks": q3 },
            "q4": { "label": Q4.label(), "tasks": q4 },
        })
        .to_string()
    }

    fn to_human(&self) -> String {
        use crate::classify::Quadrant::*;
        let buckets = self.buckets();
        let mut out = String::from("Eisenhower matrix\n");
        for (quadrant, titles) in [Q1, Q2, Q3, Q4].iter().zip(buckets.iter()) {
            out.push_str(&format!(
                "\n{:?} {} ({}):\n",
                quadrant,
                quadrant.label(),
                quadrant.description()
            ));
            if titles.is_empty() {
                out.push_str("  (none)\n");
            }
            for title in titles {
                out.push_str(&format!("  - {title}\n"));
            }
        }
        out
    }
}

/// Resolved configuration summary for `tg config show`.
pub struct ConfigShowResult {
    pub service_url: String,
    pub default_strategy: String,
    pub human: bool,
    pub action_log: bool,
    pub path: String,
}

impl CommandResult for ConfigShowResult {
    fn to_json(&self) -> String {
        json!({
            "service_url": self.service_url,
            "default_strategy": self.default_strategy,
            "human": self.human,
            "action_log": self.action_log,
            "path": self.path,
        })
        .to_string()
    }

    fn to_human(&self) -> String {
        format!(
            "Service URL: {}\nDefault strategy: {}\nHuman output: {}\nAction log: {}\nConfig file: {}\n",
            self.service_url, self.default_strategy, self.human, self.action_log, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dependencies;

    fn scored(title: &str, importance: i64, score: f64, explanation: &str) -> ScoredTask {
        ScoredTask {
            id: 1,
            title: title.to_string(),
            due_date: "2024-01-01".to_string(),
            estimated_hours: 2.0,
            importance,
            dependencies: Default::default(),
            score,
            explanation: explanation.to_string(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_ranked_list_empty_notice() {
        let result = RankedListResult { tasks: &[] };
        assert!(result.to_human().contains("No tasks returned"));
        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(json["count"], 0);
    }

    #[test]
    fn test_ranked_list_top_three_in_input_order() {
        let tasks = vec![
            scored("A", 5, 40.0, ""),
            scored("B", 5, 20.0, ""),
            scored("C", 5, 10.0, ""),
            scored("D", 5, 5.0, ""),
        ];
        let result = RankedListResult { tasks: &tasks };
        let human = result.to_human();
        assert!(human.contains("Top 3 to work on today: A, B, C"));

        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(json["top"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(json["count"], 4);
    }

    #[test]
    fn test_ranked_card_carries_tier_and_badges() {
        let mut task = scored("A", 9, 35.0, "Circular dependency found");
        task.dependencies = Dependencies::One(5);
        let tasks = vec![task];
        let result = RankedListResult { tasks: &tasks };

        let human = result.to_human();
        assert!(human.contains("[high] A (score: 35)"));
        assert!(human.contains("depends on: 5"));
        assert!(human.contains("cycle detected"));

        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(json["tasks"][0]["tier"], "high");
        assert_eq!(json["tasks"][0]["cycle"], true);
        assert_eq!(json["tasks"][0]["dependencies"], serde_json::json!([5]));
    }

    #[test]
    fn test_no_dependency_badge_without_dependencies() {
        let tasks = vec![scored("A", 5, 10.0, "no issues")];
        let result = RankedListResult { tasks: &tasks };
        let human = result.to_human();
        assert!(!human.contains("depends on"));
        assert!(!human.contains("cycle detected"));
    }

    #[test]
    fn test_matrix_buckets_by_quadrant() {
        let tasks = vec![
            scored("do-first", 9, 30.0, "urgent"),
            scored("schedule", 9, 20.0, "steady"),
            scored("delegate", 3, 20.0, "urgent"),
            scored("eliminate", 3, 5.0, "meh"),
        ];
        let result = MatrixResult { tasks: &tasks };
        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(json["q1"]["tasks"], serde_json::json!(["do-first"]));
        assert_eq!(json["q2"]["tasks"], serde_json::json!(["schedule"]));
        assert_eq!(json["q3"]["tasks"], serde_json::json!(["delegate"]));
        assert_eq!(json["q4"]["tasks"], serde_json::json!(["eliminate"]));

        let human = result.to_human();
        assert!(human.contains("Q1 Do First"));
        assert!(human.contains("- do-first"));
    }

    #[test]
    fn test_matrix_preserves_input_order_within_quadrant() {
        let tasks = vec![
            scored("first", 9, 30.0, "urgent"),
            scored("second", 8, 25.0, "also urgent"),
        ];
        let result = MatrixResult { tasks: &tasks };
        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(json["q1"]["tasks"], serde_json::json!(["first", "second"]));
    }

    #[test]
    fn test_task_list_human_enumeration() {
        let tasks = vec![crate::models::Task {
            id: 1,
            title: "A".to_string(),
            due_date: "2024-01-01".to_string(),
            estimated_hours: 2.0,
            importance: 9,
            dependencies: Default::default(),
            extra: Default::default(),
        }];
        let result = TaskListResult { tasks: &tasks };
        assert!(
            result
                .to_human()
                .contains("1. A (due: 2024-01-01, imp: 9, hrs: 2)")
        );
    }
}
