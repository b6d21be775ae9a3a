//! View Model
//!
//! Data-only descriptions of everything a surface draws. A surface builds a
//! [`BoardView`] from the board after each change and binds it to whatever
//! widgets it has; nothing here knows about terminals or toolkits.
//!
//! Interactive elements carry the [`BoardEvent`] they emit, so a surface only
//! has to forward it when the user activates the element.

use crate::board::TaskBoard;
use crate::config::Labels;
use crate::draft::{DraftField, InputHint};
use crate::events::BoardEvent;
use crate::task::{Task, TaskId};

/// Small icons used by the form and task cards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// Add button
    Plus,
    /// Duration field and duration label
    Clock,
    /// Delete button
    Delete,
    /// Checked checkbox
    Check,
}

impl Icon {
    /// Glyph for this icon
    #[must_use]
    pub fn glyph(self, ascii: bool) -> &'static str {
        match (self, ascii) {
            (Self::Plus, _) => "+",
            (Self::Clock, false) => "⏱",
            (Self::Clock, true) => "@",
            (Self::Delete, false) => "🗑",
            (Self::Delete, true) => "del",
            (Self::Check, false) => "✓",
            (Self::Check, true) => "x",
        }
    }
}

/// Everything on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    /// Title, subtitle, optional summary
    pub header: HeaderView,
    /// Draft inputs and the add button
    pub form: FormView,
    /// Task cards or the empty state
    pub list: ListView,
}

impl BoardView {
    /// Derive the view from the board's current state
    #[must_use]
    pub fn build(board: &TaskBoard, labels: &Labels) -> Self {
        Self {
            header: HeaderView::build(board, labels),
            form: FormView::build(board, labels),
            list: ListView::build(board.tasks(), labels),
        }
    }
}

/// Header block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    /// Fixed title
    pub title: String,
    /// Fixed subtitle
    pub subtitle: String,
    /// "completed/total" line, only when tasks exist
    pub summary: Option<String>,
}

impl HeaderView {
    fn build(board: &TaskBoard, labels: &Labels) -> Self {
        let stats = board.stats();
        Self {
            title: labels.header_title.clone(),
            subtitle: labels.header_subtitle.clone(),
            summary: (stats.total > 0).then(|| labels.summary(stats.completed, stats.total)),
        }
    }
}

/// One text input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Draft input this field edits
    pub field: DraftField,
    /// Label above/around the input
    pub label: String,
    /// Text shown while the value is empty
    pub placeholder: String,
    /// Current value
    pub value: String,
    /// Whether newlines are allowed
    pub multiline: bool,
    /// Keyboard hint
    pub input_hint: InputHint,
    /// Leading icon
    pub icon: Option<Icon>,
}

impl FieldSpec {
    /// Event to emit when the user changes the value
    #[must_use]
    pub fn change_event(&self, value: impl Into<String>) -> BoardEvent {
        BoardEvent::DraftChanged {
            field: self.field,
            value: value.into(),
        }
    }

    /// Whether the placeholder should be shown instead of the value
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// A push button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Button text
    pub label: String,
    /// Leading icon
    pub icon: Option<Icon>,
    /// Always true: input is checked when the event is handled
    pub enabled: bool,
}

impl ButtonSpec {
    /// Event to emit on press
    #[must_use]
    pub fn press_event(&self) -> BoardEvent {
        BoardEvent::AddTask
    }
}

/// Input form card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    /// Card heading
    pub title: String,
    /// Title, description, duration (in that order)
    pub fields: Vec<FieldSpec>,
    /// Add button
    pub submit: ButtonSpec,
}

impl FormView {
    fn build(board: &TaskBoard, labels: &Labels) -> Self {
        let draft = board.draft();
        let fields = DraftField::ALL
            .iter()
            .map(|&field| {
                let (label, placeholder, icon) = match field {
                    DraftField::Title => (&labels.title_label, &labels.title_placeholder, None),
                    DraftField::Description => (
                        &labels.description_label,
                        &labels.description_placeholder,
                        None,
                    ),
                    DraftField::Duration => (
                        &labels.duration_label,
                        &labels.duration_placeholder,
                        Some(Icon::Clock),
                    ),
                };
                FieldSpec {
                    field,
                    label: label.clone(),
                    placeholder: placeholder.clone(),
                    value: draft.get(field).to_string(),
                    multiline: field.is_multiline(),
                    input_hint: field.input_hint(),
                    icon,
                }
            })
            .collect();

        Self {
            title: labels.form_title.clone(),
            fields,
            submit: ButtonSpec {
                label: labels.add_button.clone(),
                icon: Some(Icon::Plus),
                enabled: true,
            },
        }
    }

    /// Spec for one field
    #[must_use]
    pub fn field(&self, field: DraftField) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.field == field)
    }
}

/// One task in the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCard {
    /// Task the card shows
    pub id: TaskId,
    /// Title as typed
    pub title: String,
    /// Description, only when non-empty
    pub description: Option<String>,
    /// "<duration> <unit>", only when a duration was entered
    pub duration: Option<String>,
    /// Checkbox state
    pub checked: bool,
}

impl TaskCard {
    fn build(task: &Task, labels: &Labels) -> Self {
        let description = Some(task.description())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let duration = Some(task.duration())
            .filter(|d| !d.is_empty())
            .map(|d| format!("{d} {}", labels.duration_suffix));

        Self {
            id: task.id().clone(),
            title: task.title().to_string(),
            description,
            duration,
            checked: task.is_completed(),
        }
    }

    /// Event for the checkbox
    #[must_use]
    pub fn toggle_event(&self) -> BoardEvent {
        BoardEvent::ToggleTask {
            id: self.id.clone(),
        }
    }

    /// Event for the delete button
    #[must_use]
    pub fn delete_event(&self) -> BoardEvent {
        BoardEvent::DeleteTask {
            id: self.id.clone(),
        }
    }
}

/// The scrollable list area
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    /// No tasks yet
    Empty {
        /// Main message
        message: String,
        /// Secondary line
        hint: String,
    },
    /// Cards, newest first
    Tasks(Vec<TaskCard>),
}

impl ListView {
    fn build(tasks: &[Task], labels: &Labels) -> Self {
        if tasks.is_empty() {
            return Self::Empty {
                message: labels.empty_message.clone(),
                hint: labels.empty_hint.clone(),
            };
        }
        Self::Tasks(tasks.iter().map(|t| TaskCard::build(t, labels)).collect())
    }

    /// Cards (empty slice for the empty state)
    #[must_use]
    pub fn cards(&self) -> &[TaskCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Tasks(cards) => cards,
        }
    }
}
