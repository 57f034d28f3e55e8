//! Task Status
//!
//! Canonical status taxonomy plus the labels older iterations of the app
//! wrote into task records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::wire;

/// Status of a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Assigned,
    InProgress,
    Blocked,
    Completed,
    Cancelled,
    /// Any label outside the canonical taxonomy, kept verbatim (lowercased)
    Other(String),
}

/// Canonical statuses in display order
pub const CANONICAL_STATUSES: [TaskStatus; 5] = [
    TaskStatus::Assigned,
    TaskStatus::InProgress,
    TaskStatus::Blocked,
    TaskStatus::Completed,
    TaskStatus::Cancelled,
];

/// Labels `POST /status` accepts
pub const STATUS_UPDATE_LABELS: [&str; 5] = ["open", "in_progress", "blocked", "done", "cancelled"];

impl TaskStatus {
    /// Parse a status label, folding legacy spellings onto the canonical set.
    pub fn parse(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "" | "unknown" => TaskStatus::Other("unknown".to_string()),
            "assigned" | "open" | "not_yet_started" => TaskStatus::Assigned,
            "in_progress" => TaskStatus::InProgress,
            "blocked" => TaskStatus::Blocked,
            "completed" | "done" | "finished" => TaskStatus::Completed,
            "cancelled" | "canceled" | "abolished" => TaskStatus::Cancelled,
            _ => TaskStatus::Other(label.trim().to_lowercase()),
        }
    }

    /// Wire label
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Other(label) => label,
        }
    }

    /// Label written to `POST /status`, which still speaks the older vocabulary.
    pub fn update_label(&self) -> &str {
        match self {
            TaskStatus::Assigned => "open",
            TaskStatus::Completed => "done",
            other => other.as_str(),
        }
    }

    /// Human label for buttons and badges
    pub fn display_label(&self) -> &str {
        match self {
            TaskStatus::Assigned => "Assigned",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
            TaskStatus::Other(label) => label,
        }
    }

    /// Closed statuses count towards `closed_tasks`; everything else is open.
    pub fn is_closed(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }

    /// Closed-ness of an optional status; a missing status is open.
    pub fn closed(status: Option<&TaskStatus>) -> bool {
        status.is_some_and(TaskStatus::is_closed)
    }

    /// Report label of an optional status
    pub fn label_of(status: Option<&TaskStatus>) -> &str {
        status.map(TaskStatus::as_str).unwrap_or("unknown")
    }
}

impl From<String> for TaskStatus {
    fn from(label: String) -> Self {
        TaskStatus::parse(&label)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a task's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(default, deserialize_with = "wire::opt_string_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "wire::string_or_number")]
    pub task_id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_labels_fold_onto_canonical() {
        assert_eq!(TaskStatus::parse("Open"), TaskStatus::Assigned);
        assert_eq!(TaskStatus::parse("Not Yet Started"), TaskStatus::Assigned);
        assert_eq!(TaskStatus::parse("In Progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("Done"), TaskStatus::Completed);
        assert_eq!(TaskStatus::parse("Finished"), TaskStatus::Completed);
        assert_eq!(TaskStatus::parse("Abolished"), TaskStatus::Cancelled);
        assert_eq!(TaskStatus::parse("canceled"), TaskStatus::Cancelled);
    }

    #[test]
    fn test_unknown_label_is_kept() {
        assert_eq!(TaskStatus::parse("In Review"), TaskStatus::Other("in review".to_string()));
        assert!(!TaskStatus::parse("In Review").is_closed());
    }

    #[test]
    fn test_blank_label_reads_as_unknown() {
        assert_eq!(TaskStatus::parse(""), TaskStatus::Other("unknown".to_string()));
        assert_eq!(TaskStatus::parse("  "), TaskStatus::parse("Unknown"));
        assert_eq!(TaskStatus::parse("").as_str(), TaskStatus::label_of(None));
    }

    #[test]
    fn test_update_labels_are_accepted_by_status_endpoint() {
        let sent: Vec<_> = CANONICAL_STATUSES.iter().map(TaskStatus::update_label).collect();
        assert_eq!(sent, STATUS_UPDATE_LABELS);
        for label in STATUS_UPDATE_LABELS {
            assert!(CANONICAL_STATUSES.contains(&TaskStatus::parse(label)));
        }
    }

    #[test]
    fn test_closed_bucket() {
        let closed: Vec<_> = CANONICAL_STATUSES.iter().filter(|s| s.is_closed()).collect();
        assert_eq!(closed, vec![&TaskStatus::Completed, &TaskStatus::Cancelled]);
        assert!(!TaskStatus::closed(None));
    }

    #[test]
    fn test_serde_uses_wire_label() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let parsed: TaskStatus = serde_json::from_str("\"Finished\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
    }

    #[test]
    fn test_status_update_accepts_numeric_ids() {
        let update: StatusUpdate = serde_json::from_str(
            r#"{"id": 7, "task_id": 12, "status": "blocked", "note": null}"#,
        )
        .unwrap();
        assert_eq!(update.id.as_deref(), Some("7"));
        assert_eq!(update.task_id, "12");
        assert_eq!(update.status, TaskStatus::Blocked);
    }
}
