//! Button Widget

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use taskboard_core::ButtonSpec;

use crate::theme::{DEEP_PINK, HOT_PINK, WHITE};

/// Filled, centered push button
pub struct Button<'a> {
    spec: &'a ButtonSpec,
    focused: bool,
    ascii: bool,
}

impl<'a> Button<'a> {
    pub fn new(spec: &'a ButtonSpec) -> Self {
        Self {
            spec,
            focused: false,
            ascii: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = match self.spec.icon {
            Some(icon) => format!("{} {}", icon.glyph(self.ascii), self.spec.label),
            None => self.spec.label.clone(),
        };

        let mut style = Style::default()
            .fg(WHITE)
            .bg(if self.focused { DEEP_PINK } else { HOT_PINK })
            .add_modifier(Modifier::BOLD);
        if self.focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}
