//! Frontend Models
//!
//! Data structures matching the backend's wire format.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Normal,
    Urgent,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Normal => "normal",
            TaskPriority::Urgent => "urgent",
        }
    }

    /// Strict parse; anything unrecognized yields `None`
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(TaskPriority::Normal),
            "urgent" => Some(TaskPriority::Urgent),
            _ => None,
        }
    }
}

/// Task status (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::Done => "done",
        }
    }

    /// Strict parse; anything unrecognized yields `None`
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "open" => Some(TaskStatus::Open),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Optional deadline, RFC 3339 on the wire
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

/// One page of the task list plus the total match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    #[serde(rename = "taskCount")]
    pub task_count: u32,
}

impl TaskPage {
    /// Drop a task from the in-memory page after a confirmed deletion.
    /// The reported total stays as-is until the next fetch.
    pub fn remove_task(&mut self, task_id: &str) {
        self.tasks.retain(|task| task.id != task_id);
    }
}

/// Message envelope the backend uses for mutation outcomes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse the value of an `<input type="date">` (empty or junk means no date)
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc())
}

/// Format a deadline back into `<input type="date">` form
pub fn format_date_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Human-readable deadline for table cells, e.g. "Mon Jun 10 2024"
pub fn format_date_human(value: &DateTime<Utc>) -> String {
    value.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> Task {
        Task {
            id: id.to_string(),
            name: format!("task {id}"),
            priority: TaskPriority::Normal,
            status: TaskStatus::Open,
            due: None,
        }
    }

    #[test]
    fn test_task_wire_format() {
        let json = r#"{
            "_id": "665f1c2e8b3e4a0012ab34cd",
            "name": "Write report",
            "priority": "urgent",
            "status": "open",
            "due": "2024-06-10T00:00:00.000Z",
            "userId": "665f1b9a8b3e4a0012ab34aa",
            "__v": 0
        }"#;
        let task: Task = serde_json::from_str(json).expect("task should deserialize");
        assert_eq!(task.id, "665f1c2e8b3e4a0012ab34cd");
        assert_eq!(task.priority, TaskPriority::Urgent);
        assert_eq!(task.status, TaskStatus::Open);
        assert!(task.due.is_some());
    }

    #[test]
    fn test_task_without_due() {
        let json = r#"{"_id":"a1","name":"No deadline","priority":"normal","status":"done"}"#;
        let task: Task = serde_json::from_str(json).expect("task should deserialize");
        assert_eq!(task.due, None);
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn test_user_wire_format() {
        let json = r#"{"_id":"u1","username":"ada","email":"ada@example.com","createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let user: User = serde_json::from_str(json).expect("user should deserialize");
        assert_eq!(user.id, "u1");
        assert_eq!(user.username, "ada");
    }

    #[test]
    fn test_task_page_wire_format() {
        let json = r#"{"tasks":[{"_id":"a1","name":"One","priority":"normal","status":"open"}],"taskCount":10}"#;
        let page: TaskPage = serde_json::from_str(json).expect("page should deserialize");
        assert_eq!(page.tasks.len(), 1);
        assert_eq!(page.task_count, 10);
    }

    #[test]
    fn test_remove_task_leaves_count_untouched() {
        let mut page = TaskPage {
            tasks: vec![sample("a"), sample("b")],
            task_count: 9,
        };
        page.remove_task("a");
        assert_eq!(page.tasks.len(), 1);
        assert_eq!(page.tasks[0].id, "b");
        assert_eq!(page.task_count, 9);
    }

    #[test]
    fn test_remove_missing_task_is_noop() {
        let mut page = TaskPage {
            tasks: vec![sample("a")],
            task_count: 1,
        };
        page.remove_task("zzz");
        assert_eq!(page.tasks.len(), 1);
    }

    #[test]
    fn test_param_parsing_is_strict() {
        assert_eq!(TaskStatus::from_param("open"), Some(TaskStatus::Open));
        assert_eq!(TaskStatus::from_param("done"), Some(TaskStatus::Done));
        assert_eq!(TaskStatus::from_param(""), None);
        assert_eq!(TaskStatus::from_param("banana"), None);
        assert_eq!(TaskPriority::from_param("urgent"), Some(TaskPriority::Urgent));
        assert_eq!(TaskPriority::from_param("high"), None);
    }

    #[test]
    fn test_date_input_round_trip() {
        let due = parse_date_input("2024-06-10").expect("date should parse");
        assert_eq!(format_date_input(&due), "2024-06-10");
        assert_eq!(format_date_human(&due), "Mon Jun 10 2024");
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("junk"), None);
    }
}
