//! Task Types
//!
//! A task is one to-do item on the board. Identity and content are fixed at
//! creation; only the completion flag changes afterwards, and only through
//! [`TaskBoard::toggle_task`](crate::TaskBoard::toggle_task).

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Task identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Create a task ID from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out unique task IDs for a single board
///
/// IDs look like `<unix-millis>-<sequence>`. The sequence never repeats for
/// the lifetime of the generator, so two tasks created within the same clock
/// tick (or across a clock step backwards) still get distinct IDs.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    next_seq: u64,
}

impl TaskIdGenerator {
    /// Create a generator starting at sequence zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next ID
    pub fn next_id(&mut self) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        TaskId(format!("{timestamp}-{seq}"))
    }
}

/// Completion state of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    /// Not done yet (every task starts here)
    Pending,
    /// Checked off
    Completed,
}

impl TaskState {
    /// The other state
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    /// Whether this is the completed state
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl From<bool> for TaskState {
    fn from(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    duration: String,
    completed: bool,
}

impl Task {
    /// Create a new pending task
    ///
    /// Values are stored exactly as given; callers are expected to have
    /// checked the title already.
    #[must_use]
    pub fn new(id: TaskId, title: String, description: String, duration: String) -> Self {
        Self {
            id,
            title,
            description,
            duration,
            completed: false,
        }
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Title as typed by the user
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description (may be empty)
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Duration in minutes as typed (may be empty, not validated)
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Whether the task has been checked off
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Completion as a two-state value
    #[must_use]
    pub fn state(&self) -> TaskState {
        TaskState::from(self.completed)
    }

    pub(crate) fn toggle(&mut self) -> TaskState {
        self.completed = !self.completed;
        self.state()
    }
}
