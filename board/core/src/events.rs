//! Board Events
//!
//! User gestures reported by a surface. Surfaces don't interpret gestures;
//! they forward them here and the board decides what changes.

use serde::{Deserialize, Serialize};

use crate::draft::DraftField;
use crate::task::TaskId;

/// Events from a surface to the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A draft input now holds a new value
    DraftChanged {
        /// Which input
        field: DraftField,
        /// Full new value
        value: String,
    },

    /// The add button was pressed
    AddTask,

    /// A task's checkbox was pressed
    ToggleTask {
        /// Task the checkbox belongs to
        id: TaskId,
    },

    /// A task's delete button was pressed
    DeleteTask {
        /// Task the button belongs to
        id: TaskId,
    },
}

impl BoardEvent {
    /// Short name for logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DraftChanged { .. } => "draft_changed",
            Self::AddTask => "add_task",
            Self::ToggleTask { .. } => "toggle_task",
            Self::DeleteTask { .. } => "delete_task",
        }
    }
}
