//! Keyboard Focus
//!
//! The focus ring walks the form top to bottom, then the task list:
//! title → description → duration → add button → list → title.
//! The list is skipped while it has no tasks.

use taskboard_core::DraftField;

/// Which element receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// One of the draft inputs
    Field(DraftField),
    /// The add button
    AddButton,
    /// The task list
    TaskList,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(DraftField::Title)
    }
}

impl Focus {
    /// Next element in the ring
    pub fn next(self, has_tasks: bool) -> Self {
        match self {
            Self::Field(field) => field.next().map_or(Self::AddButton, Self::Field),
            Self::AddButton if has_tasks => Self::TaskList,
            Self::AddButton | Self::TaskList => Self::Field(DraftField::Title),
        }
    }

    /// Previous element in the ring
    pub fn prev(self, has_tasks: bool) -> Self {
        match self {
            Self::Field(DraftField::Title) if has_tasks => Self::TaskList,
            Self::Field(DraftField::Title) => Self::AddButton,
            Self::Field(field) => field.prev().map_or(Self::AddButton, Self::Field),
            Self::AddButton => Self::Field(DraftField::Duration),
            Self::TaskList => Self::AddButton,
        }
    }

    /// The draft input under focus, if any
    pub fn field(self) -> Option<DraftField> {
        match self {
            Self::Field(field) => Some(field),
            Self::AddButton | Self::TaskList => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_with_tasks() {
        let mut focus = Focus::default();
        let mut seen = vec![focus];
        for _ in 0..5 {
            focus = focus.next(true);
            seen.push(focus);
        }

        assert_eq!(
            seen,
            vec![
                Focus::Field(DraftField::Title),
                Focus::Field(DraftField::Description),
                Focus::Field(DraftField::Duration),
                Focus::AddButton,
                Focus::TaskList,
                Focus::Field(DraftField::Title),
            ]
        );
    }

    #[test]
    fn test_ring_skips_empty_list() {
        assert_eq!(
            Focus::AddButton.next(false),
            Focus::Field(DraftField::Title)
        );
        assert_eq!(
            Focus::Field(DraftField::Title).prev(false),
            Focus::AddButton
        );
        assert_eq!(Focus::Field(DraftField::Title).prev(true), Focus::TaskList);
    }

    #[test]
    fn test_prev_undoes_next() {
        for start in [
            Focus::Field(DraftField::Title),
            Focus::Field(DraftField::Description),
            Focus::Field(DraftField::Duration),
            Focus::AddButton,
            Focus::TaskList,
        ] {
            assert_eq!(start.next(true).prev(true), start);
        }
    }
}
