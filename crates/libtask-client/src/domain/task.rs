//! Task Entity
//!
//! A unit of library work assigned by an admin to a staff member.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::status::TaskStatus;
use super::wire;

pub const TITLE_MAX_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Task record as served by `/tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier
    #[serde(deserialize_with = "wire::string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Staff user id
    pub assigned_to: String,
    #[serde(default, with = "wire::calendar_day")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub created_by: Option<String>,
    /// Raw creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Tag names attached to the task
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Calendar day the task was created on
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(wire::parse_day)
    }

    pub fn is_closed(&self) -> bool {
        TaskStatus::closed(self.status.as_ref())
    }

    pub fn status_label(&self) -> &str {
        match &self.status {
            Some(status) => status.display_label(),
            None => "Unknown",
        }
    }
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for `POST /tasks`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub assigned_to: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::calendar_day::serialize"
    )]
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, assigned_to: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assigned_to: assigned_to.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Trim fields and reject input the backend would refuse.
    pub fn normalized(self) -> Result<Self, String> {
        let title = self.title.trim().to_string();
        let assigned_to = self.assigned_to.trim().to_string();
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if title.is_empty() {
            return Err("Title is required.".to_string());
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(format!("Title must be at most {} characters.", TITLE_MAX_CHARS));
        }
        if assigned_to.is_empty() {
            return Err("Choose a staff member to assign the task to.".to_string());
        }
        if description
            .as_ref()
            .is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_CHARS)
        {
            return Err(format!(
                "Description must be at most {} characters.",
                DESCRIPTION_MAX_CHARS
            ));
        }

        Ok(Self {
            title,
            description,
            assigned_to,
            due_date: self.due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_backend_row() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Shelve returns",
                "description": null,
                "assigned_to": "staff-1",
                "created_by": "admin-1",
                "due_date": "2026-02-06T00:00:00",
                "created_at": "2026-02-01T08:30:00+00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(task.id(), "42");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 2, 6));
        assert_eq!(task.created_on(), NaiveDate::from_ymd_opt(2026, 2, 1));
        assert!(task.status.is_none());
        assert!(task.tags.is_empty());
        assert!(!task.is_closed());
        assert_eq!(task.status_label(), "Unknown");
    }

    #[test]
    fn test_new_task_serializes_calendar_date() {
        let input = NewTask::new("Shelve returns", "staff-1")
            .with_due_date(NaiveDate::from_ymd_opt(2026, 2, 6).unwrap());
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Shelve returns",
                "assigned_to": "staff-1",
                "due_date": "2026-02-06"
            })
        );
    }

    #[test]
    fn test_normalized_trims_and_drops_blank_description() {
        let input = NewTask::new("  Inventory  ", " staff-2 ").with_description("   ");
        let normalized = input.normalized().unwrap();
        assert_eq!(normalized.title, "Inventory");
        assert_eq!(normalized.assigned_to, "staff-2");
        assert!(normalized.description.is_none());
    }

    #[test]
    fn test_normalized_rejects_bad_input() {
        assert!(NewTask::new("", "staff-1").normalized().is_err());
        assert!(NewTask::new("Title", "  ").normalized().is_err());
        let long_title = "x".repeat(TITLE_MAX_CHARS + 1);
        assert!(NewTask::new(long_title, "staff-1").normalized().is_err());
    }
}
