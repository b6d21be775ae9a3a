//! The Task Board
//!
//! [`TaskBoard`] owns the task collection and the draft input for one
//! session. Every mutation happens synchronously inside one of its methods;
//! afterwards registered [`BoardObserver`]s are told what changed so a
//! surface can redraw. Derived values (stats, view model) are always computed
//! from the current collection and never cached.

use crate::draft::{Draft, DraftField};
use crate::events::BoardEvent;
use crate::task::{Task, TaskId, TaskIdGenerator, TaskState};

/// Aggregate counts shown in the header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardStats {
    /// Tasks with `completed == true`
    pub completed: usize,
    /// All tasks
    pub total: usize,
}

impl BoardStats {
    /// Count over a slice of tasks
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|t| t.is_completed()).count(),
            total: tasks.len(),
        }
    }
}

/// What a successful mutation did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardChange {
    /// A task was created and prepended
    TaskAdded {
        /// The new task
        id: TaskId,
    },
    /// A task's completion flipped
    TaskToggled {
        /// The task
        id: TaskId,
        /// State after the flip
        state: TaskState,
    },
    /// A task was removed
    TaskDeleted {
        /// The removed task
        id: TaskId,
    },
    /// A draft input was edited
    DraftEdited {
        /// Which input
        field: DraftField,
    },
}

/// Read-only view of the board handed to observers
#[derive(Clone, Copy, Debug)]
pub struct BoardSnapshot<'a> {
    /// Tasks, newest first
    pub tasks: &'a [Task],
    /// Current draft
    pub draft: &'a Draft,
}

impl BoardSnapshot<'_> {
    /// Fresh stats for this snapshot
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tasks(self.tasks)
    }
}

/// Receives a callback after each successful board mutation
pub trait BoardObserver {
    /// Called once per change, after the board has been updated
    fn board_changed(&mut self, change: &BoardChange, snapshot: &BoardSnapshot<'_>);
}

impl<F> BoardObserver for F
where
    F: FnMut(&BoardChange, &BoardSnapshot<'_>),
{
    fn board_changed(&mut self, change: &BoardChange, snapshot: &BoardSnapshot<'_>) {
        self(change, snapshot);
    }
}

/// In-memory task list plus draft input for one session
#[derive(Default)]
pub struct TaskBoard {
    /// Tasks, newest first
    tasks: Vec<Task>,
    /// Pending input
    draft: Draft,
    /// ID source for new tasks
    ids: TaskIdGenerator,
    /// Change listeners
    observers: Vec<Box<dyn BoardObserver>>,
}

impl std::fmt::Debug for TaskBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskBoard")
            .field("tasks", &self.tasks)
            .field("draft", &self.draft)
            .field("ids", &self.ids)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TaskBoard {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ============================================
    // Operations
    // ============================================

    /// Create a task from the current draft
    ///
    /// Does nothing and returns `None` when the trimmed title is empty.
    /// Otherwise the new task (title stored untrimmed) goes to the front of
    /// the list and the draft is cleared.
    pub fn add_task(&mut self) -> Option<TaskId> {
        if !self.draft.is_submittable() {
            return None;
        }

        let id = self.ids.next_id();
        let Draft {
            title,
            description,
            duration,
        } = std::mem::take(&mut self.draft);

        self.tasks
            .insert(0, Task::new(id.clone(), title, description, duration));

        tracing::debug!(task_id = %id, total = self.tasks.len(), "Task added");
        self.notify(&BoardChange::TaskAdded { id: id.clone() });

        Some(id)
    }

    /// Flip completion of the task with this ID
    ///
    /// Returns the new state, or `None` (and changes nothing) for an unknown ID.
    pub fn toggle_task(&mut self, id: &TaskId) -> Option<TaskState> {
        let state = self.tasks.iter_mut().find(|t| t.id() == id)?.toggle();

        tracing::debug!(task_id = %id, %state, "Task toggled");
        self.notify(&BoardChange::TaskToggled {
            id: id.clone(),
            state,
        });

        Some(state)
    }

    /// Remove the task with this ID, keeping the others in order
    ///
    /// Returns the removed task, or `None` for an unknown ID.
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id() == id)?;
        let removed = self.tasks.remove(index);

        tracing::debug!(task_id = %id, total = self.tasks.len(), "Task deleted");
        self.notify(&BoardChange::TaskDeleted { id: id.clone() });

        Some(removed)
    }

    /// Replace a draft input's value
    pub fn set_draft(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
        self.notify(&BoardChange::DraftEdited { field });
    }

    /// Append one character to a draft input
    pub fn push_draft_char(&mut self, field: DraftField, c: char) {
        self.draft.get_mut(field).push(c);
        self.notify(&BoardChange::DraftEdited { field });
    }

    /// Remove the last character of a draft input
    ///
    /// Returns false (without notifying) when the input was already empty.
    pub fn pop_draft_char(&mut self, field: DraftField) -> bool {
        if self.draft.get_mut(field).pop().is_none() {
            return false;
        }
        self.notify(&BoardChange::DraftEdited { field });
        true
    }

    /// Apply a surface event
    ///
    /// Returns whether anything changed.
    pub fn handle_event(&mut self, event: BoardEvent) -> bool {
        tracing::trace!(kind = event.kind(), "Board event");

        match event {
            BoardEvent::DraftChanged { field, value } => {
                if self.draft.get(field) == value {
                    return false;
                }
                self.set_draft(field, value);
                true
            }
            BoardEvent::AddTask => self.add_task().is_some(),
            BoardEvent::ToggleTask { id } => self.toggle_task(&id).is_some(),
            BoardEvent::DeleteTask { id } => self.delete_task(&id).is_some(),
        }
    }

    // ============================================
    // Queries
    // ============================================

    /// All tasks, newest first
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Current draft input
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Completed/total counts, computed now
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tasks(&self.tasks)
    }

    /// Borrow the current state
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            tasks: &self.tasks,
            draft: &self.draft,
        }
    }

    fn notify(&mut self, change: &BoardChange) {
        let Self {
            tasks,
            draft,
            observers,
            ..
        } = self;

        let snapshot = BoardSnapshot {
            tasks: tasks.as_slice(),
            draft: &*draft,
        };
        for observer in observers.iter_mut() {
            observer.board_changed(change, &snapshot);
        }
    }
}
