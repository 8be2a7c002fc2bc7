//! Task list and task records.
//!
//! # Invariants
//! - `TaskList::tasks` keeps insertion order.
//! - `Task::complete` is the only field mutated after creation.

use super::id::next_id;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque list identifier.
pub type ListId = String;
/// Opaque task identifier.
pub type TaskId = String;

/// Name of the placeholder task every new list starts with.
pub const SEEDED_TASK_NAME: &str = "First task";

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace only.
    EmptyName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `name` and rejects blank input.
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// A checkable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub complete: bool,
}

impl Task {
    /// Creates an incomplete task with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            complete: false,
        }
    }
}

/// A named, ordered collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: ListId,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Creates a list seeded with one [`SEEDED_TASK_NAME`] placeholder task.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            tasks: vec![Task::new(SEEDED_TASK_NAME)],
        }
    }

    /// Number of tasks with `complete == false`.
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.complete).count()
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }
}
