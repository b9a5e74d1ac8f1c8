use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length, counted in characters. Enforced at the boundary,
/// not by the store.
pub const MAX_TITLE_LEN: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task status {:?}", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /tasks`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
}

/// Response of `DELETE /tasks/:id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn status_round_trips_through_from_str() {
        for status in [TaskStatus::Pending, TaskStatus::Completed] {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }

        assert!("archived".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn task_wire_shape() {
        let created = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let task = Task {
            id: 7,
            title: String::from("water the plants"),
            status: TaskStatus::Pending,
            created_at: created,
            updated_at: created,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "water the plants");
        assert_eq!(value["status"], "pending");
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());

        let back: Task = serde_json::from_value(value).unwrap();
        assert_eq!(back, task);
    }
}
