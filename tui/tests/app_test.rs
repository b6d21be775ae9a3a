//! Integration Tests for the TaskBoard TUI
//!
//! These drive the App with synthetic crossterm events and render it into a
//! ratatui `TestBackend`, checking what a user would see.
//!
//! # Test Coverage
//!
//! 1. **First frame**: header, form and empty state
//! 2. **Keyboard**: typing, adding, focus ring, toggling and deleting from the list
//! 3. **Mouse**: clicking fields, the add button, checkboxes and delete icons
//! 4. **Redraw flag**: only raised by events that change something

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use taskboard_core::{DraftField, Task, TaskboardConfig};
use taskboard_tui::focus::Focus;
use taskboard_tui::hit::HitTarget;
use taskboard_tui::App;

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> (App, Terminal<TestBackend>) {
    let config = TaskboardConfig::default();
    let app = App::new(&config);
    let terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    (app, terminal)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

fn click(app: &mut App, x: u16, y: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }));
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn region_of(app: &App, wanted: impl Fn(&HitTarget) -> bool) -> Rect {
    app.hit_regions()
        .iter()
        .find(|(_, target)| wanted(target))
        .map(|(area, _)| *area)
        .expect("region should have been drawn")
}

fn titles(app: &App) -> Vec<&str> {
    app.board().tasks().iter().map(Task::title).collect()
}

fn add_via_keyboard(app: &mut App, title: &str) {
    type_text(app, title);
    app.handle_event(key(KeyCode::Enter));
}

// ============================================================================
// First frame
// ============================================================================

#[test]
fn first_frame_shows_header_form_and_empty_state() {
    let (mut app, mut terminal) = setup();
    app.render(&mut terminal).unwrap();

    let text = screen(&terminal);
    assert!(text.contains("Minhas Tarefas"));
    assert!(text.contains("Organize seu dia com carinho"));
    assert!(text.contains("Adicionar Nova Tarefa"));
    assert!(text.contains("Título da tarefa"));
    assert!(text.contains("Ainda não há tarefas!"));
    assert!(!text.contains("tarefas concluídas"));
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn typing_and_enter_adds_task() {
    let (mut app, mut terminal) = setup();

    add_via_keyboard(&mut app, "Run");
    app.render(&mut terminal).unwrap();

    assert_eq!(titles(&app), vec!["Run"]);
    assert_eq!(app.board().draft().title, "");
    assert_eq!(app.focus(), Focus::Field(DraftField::Title));

    let text = screen(&terminal);
    assert!(text.contains("Run"));
    assert!(text.contains("0 de 1 tarefas concluídas"));
    assert!(!text.contains("Ainda não há tarefas!"));
}

#[test]
fn blank_title_is_ignored() {
    let (mut app, _terminal) = setup();

    add_via_keyboard(&mut app, "   ");

    assert!(app.board().is_empty());
    assert_eq!(app.board().draft().title, "   ");
}

#[test]
fn description_and_duration_fields() {
    let (mut app, mut terminal) = setup();

    type_text(&mut app, "Yoga");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "mat");
    app.handle_event(key(KeyCode::Enter));
    type_text(&mut app, "blocks");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "3x0");
    assert_eq!(app.board().draft().description, "mat\nblocks");
    assert_eq!(app.board().draft().duration, "30");

    app.handle_event(key(KeyCode::Enter));
    app.render(&mut terminal).unwrap();

    let task = &app.board().tasks()[0];
    assert_eq!(task.description(), "mat\nblocks");
    assert_eq!(task.duration(), "30");
    assert!(screen(&terminal).contains("30 min"));
}

#[test]
fn add_button_via_focus_ring() {
    let (mut app, _terminal) = setup();

    type_text(&mut app, "Read");
    for _ in 0..3 {
        app.handle_event(key(KeyCode::Tab));
    }
    assert_eq!(app.focus(), Focus::AddButton);

    app.handle_event(key(KeyCode::Char(' ')));
    assert_eq!(titles(&app), vec!["Read"]);
}

#[test]
fn list_toggle_and_delete() {
    let (mut app, mut terminal) = setup();
    for title in ["A", "B", "C"] {
        add_via_keyboard(&mut app, title);
    }
    assert_eq!(titles(&app), vec!["C", "B", "A"]);

    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::BackTab,
        KeyModifiers::SHIFT,
    )));
    assert_eq!(app.focus(), Focus::TaskList);

    app.handle_event(key(KeyCode::Down));
    assert_eq!(app.selected(), 1);
    app.handle_event(key(KeyCode::Char(' ')));
    assert!(app.board().tasks()[1].is_completed());

    app.render(&mut terminal).unwrap();
    assert!(screen(&terminal).contains("1 de 3 tarefas concluídas"));

    app.handle_event(key(KeyCode::End));
    app.handle_event(key(KeyCode::Delete));
    assert_eq!(titles(&app), vec!["C", "B"]);
    assert_eq!(app.selected(), 1);

    app.handle_event(key(KeyCode::Char('d')));
    app.handle_event(key(KeyCode::Char('d')));
    assert!(app.board().is_empty());
    assert_eq!(app.focus(), Focus::Field(DraftField::Title));
}

#[test]
fn escape_quits() {
    let (mut app, _terminal) = setup();
    assert!(app.is_running());
    app.handle_event(key(KeyCode::Esc));
    assert!(!app.is_running());
}

#[test]
fn ctrl_c_quits_without_typing() {
    let (mut app, _terminal) = setup();
    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(!app.is_running());
    assert_eq!(app.board().draft().title, "");
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn mouse_add_toggle_delete() {
    let (mut app, mut terminal) = setup();
    app.render(&mut terminal).unwrap();

    let duration = region_of(&app, |t| *t == HitTarget::Field(DraftField::Duration));
    click(&mut app, duration.x + 2, duration.y + 1);
    assert_eq!(app.focus(), Focus::Field(DraftField::Duration));

    let title = region_of(&app, |t| *t == HitTarget::Field(DraftField::Title));
    click(&mut app, title.x + 2, title.y + 1);
    type_text(&mut app, "Walk");

    let button = region_of(&app, |t| *t == HitTarget::AddButton);
    click(&mut app, button.x + 1, button.y);
    assert_eq!(titles(&app), vec!["Walk"]);

    app.render(&mut terminal).unwrap();
    let checkbox = region_of(&app, |t| matches!(t, HitTarget::Checkbox(_)));
    click(&mut app, checkbox.x + 1, checkbox.y);
    assert!(app.board().tasks()[0].is_completed());

    app.render(&mut terminal).unwrap();
    let delete = region_of(&app, |t| matches!(t, HitTarget::Delete(_)));
    click(&mut app, delete.x, delete.y);
    assert!(app.board().is_empty());
}

#[test]
fn clicking_nowhere_does_nothing() {
    let (mut app, mut terminal) = setup();
    app.render(&mut terminal).unwrap();

    click(&mut app, 0, 39);

    assert!(!app.needs_redraw());
    assert_eq!(app.focus(), Focus::Field(DraftField::Title));
}

// ============================================================================
// Redraw flag
// ============================================================================

#[test]
fn redraw_only_after_changes() {
    let (mut app, mut terminal) = setup();
    app.render(&mut terminal).unwrap();
    assert!(!app.needs_redraw());

    // Letters are not accepted by the numeric duration field
    app.handle_event(key(KeyCode::Tab));
    app.render(&mut terminal).unwrap();
    app.handle_event(key(KeyCode::Tab));
    app.render(&mut terminal).unwrap();
    app.handle_event(key(KeyCode::Char('x')));
    assert!(!app.needs_redraw());

    app.handle_event(key(KeyCode::Char('5')));
    assert!(app.needs_redraw());
}

#[test]
fn ascii_mode_glyphs() {
    let mut config = TaskboardConfig::default();
    config.ascii_icons = true;
    let mut app = App::new(&config);
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();

    add_via_keyboard(&mut app, "Swim");
    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::BackTab,
        KeyModifiers::SHIFT,
    )));
    app.handle_event(key(KeyCode::Enter));
    app.render(&mut terminal).unwrap();

    let text = screen(&terminal);
    let card_row = text
        .lines()
        .find(|line| line.contains("[x] Swim"))
        .expect("completed card should be drawn");
    assert!(card_row.trim_end().ends_with("del"));
}
