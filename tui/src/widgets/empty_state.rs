//! Empty State Widget
//!
//! Friendly message shown in place of the list while there are no tasks.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::theme::{LIGHT_PINK, PLUM};

/// Centered message and hint
pub struct EmptyState<'a> {
    message: &'a str,
    hint: &'a str,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str, hint: &'a str) -> Self {
        Self { message, hint }
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = (area.height / 4).min(3);

        Paragraph::new(vec![
            Line::styled(
                self.message,
                Style::default().fg(LIGHT_PINK).add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.hint, Style::default().fg(PLUM)),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(top)))
        .render(area, buf);
    }
}
