//! TaskBoard TUI - Terminal interface for taskboard
//!
//! A single full-screen view: a pink header with the completed/total
//! summary, a form for the next task, and a scrollable list of task cards.
//!
//! # Architecture
//!
//! - **App**: Owns the `TaskBoard`, turns key/mouse events into board events,
//!   redraws when the board reports a change
//! - **Widgets**: ratatui widgets bound to the core view model
//! - **Focus**: Keyboard focus ring over the form and the list
//! - **Hit**: Mouse hit testing against regions recorded each frame

pub mod app;
pub mod focus;
pub mod hit;
pub mod theme;
pub mod widgets;

pub use app::App;
