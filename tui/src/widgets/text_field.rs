//! TextField Widget
//!
//! An outlined input bound to a [`FieldSpec`]. The label sits in the top
//! border; the value (or a dim placeholder) fills the inside. Multi-line
//! fields wrap and keep the last lines in view, like a terminal prompt.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Widget};
use textwrap::wrap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use taskboard_core::FieldSpec;

use crate::theme::{self, HOT_PINK, TEXT_DARK, TEXT_FAINT, TEXT_SECONDARY, WHITE};

/// Cursor drawn after the value of the focused field
const CURSOR: &str = "_";

/// Outlined text input
pub struct TextField<'a> {
    spec: &'a FieldSpec,
    focused: bool,
    ascii: bool,
}

impl<'a> TextField<'a> {
    pub fn new(spec: &'a FieldSpec) -> Self {
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

    /// Rows needed: borders plus two text rows for multi-line fields
    pub fn height(spec: &FieldSpec) -> u16 {
        if spec.multiline {
            4
        } else {
            3
        }
    }

    /// Wrap the value into display lines, cursor included
    fn value_lines(&self, width: usize) -> Vec<String> {
        let mut content = self.spec.value.clone();
        if self.focused {
            content.push_str(CURSOR);
        }

        if !self.spec.multiline {
            return vec![tail_within(&content, width)];
        }

        content
            .split('\n')
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width)
                        .into_iter()
                        .map(|cow| cow.to_string())
                        .collect()
                }
            })
            .collect()
    }
}

/// Longest suffix of `text` that fits in `width` columns
///
/// Single-line inputs scroll horizontally, so the end of the value stays in view.
fn tail_within(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = Style::default().fg(if self.focused {
            HOT_PINK
        } else {
            TEXT_SECONDARY
        });

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::outline(self.focused))
            .title(Line::styled(format!(" {} ", self.spec.label), label_style))
            .style(Style::default().bg(WHITE));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height < 1 {
            return;
        }

        let mut x = inner.x;
        if let Some(icon) = self.spec.icon {
            let glyph = icon.glyph(self.ascii);
            buf.set_string(x, inner.y, glyph, Style::default().fg(HOT_PINK));
            x = x.saturating_add(glyph.width() as u16 + 1);
        }
        let text_width = inner.right().saturating_sub(x) as usize;
        if text_width == 0 {
            return;
        }

        if self.spec.shows_placeholder() {
            let placeholder: String = if self.focused {
                CURSOR.to_string()
            } else {
                self.spec.placeholder.clone()
            };
            buf.set_stringn(
                x,
                inner.y,
                &placeholder,
                text_width,
                Style::default().fg(TEXT_FAINT),
            );
            return;
        }

        let lines = self.value_lines(text_width);
        let visible = inner.height as usize;
        let skip = lines.len().saturating_sub(visible);

        for (i, line) in lines.iter().skip(skip).enumerate() {
            buf.set_stringn(
                x,
                inner.y + i as u16,
                line,
                text_width,
                Style::default().fg(TEXT_DARK),
            );
        }
    }
}
