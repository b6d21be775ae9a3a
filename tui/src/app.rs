//! Main Application
//!
//! The App struct owns the board for the lifetime of the view and manages
//! the TUI lifecycle:
//! - Event loop (keyboard, mouse, resize)
//! - Translating gestures into `BoardEvent`s
//! - Redrawing from a freshly built `BoardView` whenever something changed
//!
//! Nothing is cached between frames: the header, form and list are derived
//! from the board on every draw. A board observer only raises the redraw flag.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, StatefulWidget, Widget};
use ratatui::{Frame, Terminal};

use taskboard_core::{
    BoardChange, BoardEvent, BoardSnapshot, BoardView, DraftField, FormView, Labels, ListView,
    TaskBoard, TaskId, TaskboardConfig,
};

use crate::focus::Focus;
use crate::hit::{HitMap, HitTarget};
use crate::theme::{self, BACKGROUND, HOT_PINK, TEXT_SECONDARY, WHITE};
use crate::widgets::{Button, EmptyState, Header, TaskList, TaskListState, TextField};

/// Cards skipped by PageUp/PageDown
const PAGE_CARDS: isize = 5;

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Tasks and draft input
    board: TaskBoard,
    /// Set by the board observer and by UI-only changes
    dirty: Rc<Cell<bool>>,

    // === Presentation ===
    /// User-facing strings
    labels: Labels,
    /// ASCII glyphs instead of unicode icons
    ascii: bool,

    // === Input State ===
    /// Element receiving key presses
    focus: Focus,
    /// List selection and scroll
    list: TaskListState,
    /// Click regions from the last draw
    hits: HitMap,
}

impl App {
    /// Create a new App instance with an empty board
    pub fn new(config: &TaskboardConfig) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut board = TaskBoard::new();

        let flag = Rc::clone(&dirty);
        board.subscribe(move |_: &BoardChange, _: &BoardSnapshot<'_>| flag.set(true));

        Self {
            running: true,
            board,
            dirty,
            labels: config.labels.clone(),
            ascii: config.ascii_icons,
            focus: Focus::default(),
            list: TaskListState::default(),
            hits: HitMap::default(),
        }
    }

    /// Main event loop
    ///
    /// Waits for terminal events and applies each one before drawing again.
    /// There is no frame timer: nothing changes unless the user does something.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        tracing::info!("TaskBoard started");
        self.render(terminal)?;

        while self.running {
            let Some(event) = event_stream.next().await else {
                tracing::warn!("Terminal event stream closed");
                break;
            };

            self.handle_event(event?);

            if self.dirty.replace(false) {
                self.render(terminal)?;
            }
        }

        let stats = self.board.stats();
        tracing::info!(
            completed = stats.completed,
            total = stats.total,
            "TaskBoard closed"
        );

        Ok(())
    }

    /// Draw one frame
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        terminal.draw(|frame| self.draw(frame))?;
        self.dirty.set(false);
        Ok(())
    }

    // ============================================
    // Event handling
    // ============================================

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),

            // Focus ring
            KeyCode::Tab => self.set_focus(self.focus.next(!self.board.is_empty())),
            KeyCode::BackTab => self.set_focus(self.focus.prev(!self.board.is_empty())),

            _ => match self.focus {
                Focus::Field(field) => self.handle_field_key(field, key),
                Focus::AddButton => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
                Focus::TaskList => self.handle_list_key(key),
            },
        }
    }

    /// Keys while a draft input has focus
    fn handle_field_key(&mut self, field: DraftField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if field.is_multiline() => self.board.push_draft_char(field, '\n'),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.board.pop_draft_char(field);
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if field.input_hint().accepts(c) {
                    self.board.push_draft_char(field, c);
                }
            }
            _ => {}
        }
    }

    /// Keys while the task list has focus
    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.board.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_CARDS),
            KeyCode::PageDown => self.move_selection(PAGE_CARDS),
            KeyCode::Home => {
                self.list.select_first();
                self.mark_dirty();
            }
            KeyCode::End => {
                self.list.select_last(len);
                self.mark_dirty();
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_task_id() {
                    self.board.handle_event(BoardEvent::ToggleTask { id });
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(id) = self.selected_task_id() {
                    self.delete(BoardEvent::DeleteTask { id });
                }
            }
            _ => {}
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(target) = self.hits.target_at(mouse.column, mouse.row).cloned() else {
                    return;
                };
                tracing::trace!(?target, "Click");

                match target {
                    HitTarget::Field(field) => self.set_focus(Focus::Field(field)),
                    HitTarget::AddButton => {
                        self.set_focus(Focus::AddButton);
                        self.submit();
                    }
                    HitTarget::Card(index) => {
                        self.list.select(index, self.board.len());
                        self.set_focus(Focus::TaskList);
                    }
                    HitTarget::Checkbox(id) => {
                        self.board.handle_event(BoardEvent::ToggleTask { id });
                    }
                    HitTarget::Delete(id) => self.delete(BoardEvent::DeleteTask { id }),
                }
            }
            MouseEventKind::ScrollUp => self.move_selection(-1),
            MouseEventKind::ScrollDown => self.move_selection(1),
            _ => {}
        }
    }

    // ============================================
    // Actions
    // ============================================

    /// Press the add button
    fn submit(&mut self) {
        if self.board.handle_event(BoardEvent::AddTask) {
            self.list.select_first();
            self.set_focus(Focus::Field(DraftField::Title));
        }
    }

    fn delete(&mut self, event: BoardEvent) {
        if !self.board.handle_event(event) {
            return;
        }
        self.list.clamp(self.board.len());
        if self.board.is_empty() && self.focus == Focus::TaskList {
            self.set_focus(Focus::Field(DraftField::Title));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.board.is_empty() {
            return;
        }
        self.list.move_by(delta, self.board.len());
        self.mark_dirty();
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        self.board
            .tasks()
            .get(self.list.selected())
            .map(|task| task.id().clone())
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    fn quit(&mut self) {
        self.running = false;
    }

    // ============================================
    // Rendering
    // ============================================

    /// Draw the whole screen into a frame
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let view = BoardView::build(&self.board, &self.labels);
        let buf = frame.buffer_mut();

        self.hits.clear();
        Block::default()
            .style(Style::default().bg(BACKGROUND))
            .render(area, buf);

        let [header_area, form_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(Header::height(&view.header)),
            Constraint::Length(Self::form_height(&view.form)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::new(&view.header).render(header_area, buf);
        self.draw_form(&view.form, form_area.inner(Margin::new(1, 0)), buf);
        self.draw_list(&view.list, list_area.inner(Margin::new(2, 1)), buf);
        self.draw_status(status_area, buf);
    }

    /// Rows needed by the form card
    fn form_height(form: &FormView) -> u16 {
        let fields: u16 = form.fields.iter().map(TextField::height).sum();
        // borders + heading + fields + button
        2 + 1 + fields + 1
    }

    /// Render the input form card
    fn draw_form(&mut self, form: &FormView, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::outline(false))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(WHITE));
        let inner = block.inner(area);
        block.render(area, buf);

        let constraints = std::iter::once(Constraint::Length(1))
            .chain(
                form.fields
                    .iter()
                    .map(|spec| Constraint::Length(TextField::height(spec))),
            )
            .chain(std::iter::once(Constraint::Length(1)));
        let rows = Layout::vertical(constraints).split(inner);

        buf.set_stringn(
            rows[0].x,
            rows[0].y,
            &form.title,
            rows[0].width as usize,
            Style::default().fg(HOT_PINK).add_modifier(Modifier::BOLD),
        );

        for (spec, &row) in form.fields.iter().zip(rows.iter().skip(1)) {
            TextField::new(spec)
                .focused(self.focus == Focus::Field(spec.field))
                .ascii(self.ascii)
                .render(row, buf);
            self.hits.push(row, HitTarget::Field(spec.field));
        }

        if let Some(&button_row) = rows.get(form.fields.len() + 1) {
            Button::new(&form.submit)
                .focused(self.focus == Focus::AddButton)
                .ascii(self.ascii)
                .render(button_row, buf);
            self.hits.push(button_row, HitTarget::AddButton);
        }
    }

    /// Render the task list or the empty state
    fn draw_list(&mut self, list: &ListView, area: Rect, buf: &mut Buffer) {
        match list {
            ListView::Empty { message, hint } => EmptyState::new(message, hint).render(area, buf),
            ListView::Tasks(cards) => {
                TaskList::new(cards)
                    .focused(self.focus == Focus::TaskList)
                    .ascii(self.ascii)
                    .render(area, buf, &mut self.list);

                for region in self.list.regions() {
                    self.hits.push(region.card, HitTarget::Card(region.index));
                    self.hits
                        .push(region.checkbox, HitTarget::Checkbox(region.id.clone()));
                    self.hits
                        .push(region.delete, HitTarget::Delete(region.id.clone()));
                }
            }
        }
    }

    /// Render the key hint bar
    fn draw_status(&self, area: Rect, buf: &mut Buffer) {
        let hint = match self.focus {
            Focus::Field(field) if field.is_multiline() => {
                " Tab next field | Enter new line | Esc quit"
            }
            Focus::Field(_) | Focus::AddButton => " Tab next field | Enter add task | Esc quit",
            Focus::TaskList => {
                " Up/Down select | Space toggle | Del delete | Tab next | Esc quit"
            }
        };

        buf.set_stringn(
            area.x,
            area.y,
            hint,
            area.width as usize,
            Style::default().fg(TEXT_SECONDARY),
        );
    }

    // ============================================
    // Accessors
    // ============================================

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The board this view owns
    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Element with keyboard focus
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the selected card
    pub fn selected(&self) -> usize {
        self.list.selected()
    }

    /// Whether a redraw is pending
    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    /// Click regions recorded by the last draw
    pub fn hit_regions(&self) -> &[(Rect, HitTarget)] {
        self.hits.regions()
    }
}
