//! Header Widget
//!
//! Pink banner with the title, subtitle and (when there are tasks) the
//! completed/total summary.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use taskboard_core::HeaderView;

use crate::theme::{LIGHT_PINK, WHITE};

/// Header banner
pub struct Header<'a> {
    view: &'a HeaderView,
}

impl<'a> Header<'a> {
    pub fn new(view: &'a HeaderView) -> Self {
        Self { view }
    }

    /// Rows needed, including one row of padding above and below
    pub fn height(view: &HeaderView) -> u16 {
        if view.summary.is_some() {
            5
        } else {
            4
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::styled(
                self.view.title.as_str(),
                Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.view.subtitle.as_str(), Style::default().fg(WHITE)),
        ];
        if let Some(summary) = &self.view.summary {
            lines.push(Line::styled(
                summary.as_str(),
                Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .padding(Padding::vertical(1))
                    .style(Style::default().bg(LIGHT_PINK)),
            )
            .render(area, buf);
    }
}
