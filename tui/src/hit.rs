//! Mouse Hit Testing
//!
//! Each frame records the screen regions of interactive elements. A click is
//! resolved against the most recently recorded region containing it, so
//! nested elements (a checkbox inside a card) must be pushed after their
//! container.

use ratatui::layout::{Position, Rect};

use taskboard_core::{DraftField, TaskId};

/// What a region does when clicked
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// Focus a draft input
    Field(DraftField),
    /// Press the add button
    AddButton,
    /// Select the card at this list index
    Card(usize),
    /// Toggle this task
    Checkbox(TaskId),
    /// Delete this task
    Delete(TaskId),
}

/// Regions recorded during the last draw
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    /// Forget the previous frame's regions
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Record a region; empty rectangles are ignored
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.area() > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target at a screen position
    pub fn target_at(&self, x: u16, y: u16) -> Option<&HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(x, y)))
            .map(|(_, target)| target)
    }

    /// All recorded regions, in draw order
    pub fn regions(&self) -> &[(Rect, HitTarget)] {
        &self.regions
    }
}
