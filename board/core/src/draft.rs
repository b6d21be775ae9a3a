//! Draft Input
//!
//! The not-yet-submitted task: three free-form strings the user is typing.
//! Nothing here is validated except the title check performed at submit time.

use serde::{Deserialize, Serialize};

/// One of the three draft inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    /// Task title (required on submit)
    Title,
    /// Free-form description (optional, multi-line)
    Description,
    /// Duration in minutes (optional, numeric-oriented)
    Duration,
}

/// Kind of input a field expects, for surfaces that can adapt their keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputHint {
    /// Any text
    Text,
    /// Numbers only
    Numeric,
}

impl InputHint {
    /// Whether a typed character fits this hint
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Text => true,
            Self::Numeric => c.is_ascii_digit() || c == '.' || c == ',',
        }
    }
}

impl DraftField {
    /// All fields in form order
    pub const ALL: [DraftField; 3] = [Self::Title, Self::Description, Self::Duration];

    /// Whether the field takes more than one line
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Description)
    }

    /// Keyboard hint for the field
    #[must_use]
    pub fn input_hint(self) -> InputHint {
        match self {
            Self::Duration => InputHint::Numeric,
            Self::Title | Self::Description => InputHint::Text,
        }
    }

    /// Next field in form order, `None` after the last one
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Title => Some(Self::Description),
            Self::Description => Some(Self::Duration),
            Self::Duration => None,
        }
    }

    /// Previous field in form order, `None` before the first one
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Title => None,
            Self::Description => Some(Self::Title),
            Self::Duration => Some(Self::Description),
        }
    }
}

/// Pending input for the next task
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Title as typed
    pub title: String,
    /// Description as typed
    pub description: String,
    /// Duration as typed
    pub duration: String,
}

impl Draft {
    /// Build a draft from three values
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration: duration.into(),
        }
    }

    /// Current value of a field
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Duration => &self.duration,
        }
    }

    /// Mutable access to a field
    pub fn get_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
            DraftField::Duration => &mut self.duration,
        }
    }

    /// Whether submitting this draft would create a task
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
