//! TaskList Widget
//!
//! A scrollable column of task cards. Each card has a thick left edge, a
//! checkbox, the wrapped title/description/duration, and a delete icon on the
//! right. Cards are variable height, so scrolling works in whole cards and
//! the selected card is always kept in view.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, StatefulWidget, Widget};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use taskboard_core::{Icon, TaskCard, TaskId};

use crate::theme::{self, DEEP_PINK, HOT_PINK, LIGHT_PINK, PLUM};

/// Blank rows between cards
const CARD_GAP: u16 = 1;

/// Columns left of the text: edge, padding, checkbox, space
const TEXT_INSET: u16 = 6;

/// Columns right of the text: space, delete icon, padding
const DELETE_INSET: u16 = 4;

/// Narrowest list that still fits a card
const MIN_WIDTH: u16 = TEXT_INSET + DELETE_INSET + 4;

/// Screen regions of one drawn card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRegion {
    /// Position in the list
    pub index: usize,
    /// Task shown by the card
    pub id: TaskId,
    /// Whole card
    pub card: Rect,
    /// Checkbox
    pub checkbox: Rect,
    /// Delete icon
    pub delete: Rect,
}

/// Selection and scroll position of the list
#[derive(Debug, Default)]
pub struct TaskListState {
    /// Selected card index
    selected: usize,
    /// First visible card index
    offset: usize,
    /// Regions drawn in the last render
    regions: Vec<CardRegion>,
}

impl TaskListState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index;
        self.clamp(len);
    }

    /// Move selection by `delta` cards, stopping at either end
    pub fn move_by(&mut self, delta: isize, len: usize) {
        let target = self.selected.saturating_add_signed(delta);
        self.select(target, len);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside a list of `len` cards
    pub fn clamp(&mut self, len: usize) {
        let last = len.saturating_sub(1);
        self.selected = self.selected.min(last);
        self.offset = self.offset.min(last);
    }

    /// Card regions from the last render, top to bottom
    pub fn regions(&self) -> &[CardRegion] {
        &self.regions
    }
}

/// Column of task cards
pub struct TaskList<'a> {
    cards: &'a [TaskCard],
    focused: bool,
    ascii: bool,
}

impl<'a> TaskList<'a> {
    pub fn new(cards: &'a [TaskCard]) -> Self {
        Self {
            cards,
            focused: false,
            ascii: false,
        }
    }

    /// Highlight the selected card
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    /// Styled, wrapped lines of one card
    fn card_lines(&self, card: &TaskCard, width: usize) -> Vec<(String, Style)> {
        let mut lines: Vec<(String, Style)> = wrap(&card.title, width)
            .into_iter()
            .map(|l| (l.to_string(), theme::task_title(card.checked)))
            .collect();
        if lines.is_empty() {
            lines.push((String::new(), theme::task_title(card.checked)));
        }

        if let Some(description) = &card.description {
            let style = theme::task_description(card.checked);
            for line in description.split('\n') {
                if line.is_empty() {
                    lines.push((String::new(), style));
                    continue;
                }
                lines.extend(wrap(line, width).into_iter().map(|l| (l.to_string(), style)));
            }
        }

        if let Some(duration) = &card.duration {
            lines.push((
                format!("{} {duration}", Icon::Clock.glyph(self.ascii)),
                Style::default().fg(HOT_PINK).add_modifier(Modifier::BOLD),
            ));
        }

        lines
    }

    fn render_card(
        &self,
        card: &TaskCard,
        lines: &[(String, Style)],
        area: Rect,
        selected: bool,
        buf: &mut Buffer,
    ) -> (Rect, Rect) {
        let edge = if selected {
            DEEP_PINK
        } else if card.checked {
            PLUM
        } else {
            HOT_PINK
        };
        Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(edge))
            .style(theme::card_fill(card.checked))
            .render(area, buf);

        // Checkbox
        let box_x = area.x + 2;
        let (mark, mark_color) = if card.checked {
            (format!("[{}]", Icon::Check.glyph(self.ascii)), HOT_PINK)
        } else {
            ("[ ]".to_string(), LIGHT_PINK)
        };
        buf.set_string(
            box_x,
            area.y,
            &mark,
            Style::default().fg(mark_color).add_modifier(Modifier::BOLD),
        );
        let checkbox = Rect::new(box_x, area.y, mark.width() as u16, 1);

        // Text
        let text_x = area.x + TEXT_INSET;
        let text_width = area.width.saturating_sub(TEXT_INSET + DELETE_INSET) as usize;
        for (i, (line, style)) in lines.iter().take(area.height as usize).enumerate() {
            let mut style = *style;
            if selected && i == 0 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            buf.set_stringn(text_x, area.y + i as u16, line, text_width, style);
        }

        // Delete icon
        let glyph = Icon::Delete.glyph(self.ascii);
        let delete_x = area.right().saturating_sub(DELETE_INSET - 1);
        buf.set_string(delete_x, area.y, glyph, Style::default().fg(DEEP_PINK));
        let delete = Rect::new(delete_x, area.y, glyph.width() as u16, 1);

        (checkbox, delete)
    }
}

impl StatefulWidget for TaskList<'_> {
    type State = TaskListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.regions.clear();
        if self.cards.is_empty() || area.width < MIN_WIDTH || area.height == 0 {
            return;
        }
        state.clamp(self.cards.len());

        let text_width = area.width.saturating_sub(TEXT_INSET + DELETE_INSET) as usize;
        let all_lines: Vec<Vec<(String, Style)>> = self
            .cards
            .iter()
            .map(|card| self.card_lines(card, text_width))
            .collect();
        let heights: Vec<u16> = all_lines.iter().map(|l| l.len() as u16).collect();

        // Scroll so the selected card fits
        if state.selected < state.offset {
            state.offset = state.selected;
        }
        let span = |from: usize, to: usize| -> u32 {
            heights[from..=to].iter().map(|&h| u32::from(h)).sum::<u32>()
                + u32::from(CARD_GAP) * (to - from) as u32
        };
        while state.offset < state.selected && span(state.offset, state.selected) > u32::from(area.height)
        {
            state.offset += 1;
        }

        let mut y = area.y;
        for (index, (card, lines)) in self
            .cards
            .iter()
            .zip(&all_lines)
            .enumerate()
            .skip(state.offset)
        {
            if y >= area.bottom() {
                break;
            }

            let height = (lines.len() as u16).min(area.bottom() - y);
            let card_area = Rect::new(area.x, y, area.width, height);
            let selected = self.focused && index == state.selected;
            let (checkbox, delete) = self.render_card(card, lines, card_area, selected, buf);

            state.regions.push(CardRegion {
                index,
                id: card.id.clone(),
                card: card_area,
                checkbox,
                delete,
            });

            y = y.saturating_add(lines.len() as u16 + CARD_GAP);
        }
    }
}
