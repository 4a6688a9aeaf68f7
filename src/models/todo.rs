use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum accepted length for a task description.
pub const MIN_TASK_LEN: usize = 10;

/// A tracked to-do item.
///
/// Records live in memory for the lifetime of the process. The `id` is
/// assigned once at creation and never changes; every other field may be
/// overwritten by an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    /// What needs doing.
    pub task: String,
    pub deadline: DateTime<Utc>,
    pub is_done: bool,
}

/// Input for creating a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTodoRequest {
    pub task: String,
    pub deadline: DateTime<Utc>,
}

/// Input for replacing an existing task. The caller supplies the id and the
/// full set of replacement fields; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub id: Uuid,
    pub task: String,
    pub deadline: DateTime<Utc>,
    pub is_done: bool,
}

impl AddTodoRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_task(&self.task)
    }
}

impl UpdateTodoRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_task(&self.task)
    }
}

fn validate_task(task: &str) -> Result<(), String> {
    if task.chars().count() < MIN_TASK_LEN {
        return Err("Tasks must be longer than 10 characters.".to_string());
    }
    Ok(())
}
