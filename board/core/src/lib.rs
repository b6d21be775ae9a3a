//! TaskBoard Core - Headless task list state for taskboard
//!
//! This crate holds everything about the task board that isn't drawing:
//! the task collection, the draft input, identity generation, the view model
//! surfaces render from, and configuration loading. It can drive the TUI or
//! any other surface, or run headless in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Surface                     │
//! │   (taskboard-tui: ratatui + crossterm)        │
//! └──────────┬───────────────────────▲───────────┘
//!            │ BoardEvent (up)       │ BoardView (pull)
//!            │                       │ BoardChange (observer)
//! ┌──────────▼───────────────────────┴───────────┐
//! │                  TaskBoard                    │
//! │   tasks (newest first) · draft · id source    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use taskboard_core::{BoardView, DraftField, Labels, TaskBoard};
//!
//! let mut board = TaskBoard::new();
//! board.set_draft(DraftField::Title, "Run");
//! let id = board.add_task().unwrap();
//! board.toggle_task(&id);
//!
//! let view = BoardView::build(&board, &Labels::default());
//! assert_eq!(view.header.summary.as_deref(), Some("1 de 1 tarefas concluídas 💕"));
//! ```
//!
//! # Module Overview
//!
//! - [`task`]: Task, task IDs and their generator
//! - [`draft`]: The three pending input fields
//! - [`board`]: The board itself, stats and change notification
//! - [`events`]: Events from surfaces to the board
//! - [`view`]: Data-driven view model
//! - [`config`]: TOML configuration and labels
//!
//! # Synchronous Only
//!
//! Nothing in this crate spawns, sleeps or awaits. Every operation completes
//! before it returns; the `architectural-enforcement` tests keep it that way.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod config;
pub mod draft;
pub mod events;
pub mod task;
pub mod view;

pub use board::{BoardChange, BoardObserver, BoardSnapshot, BoardStats, TaskBoard};
pub use config::{
    default_config_path, load_config, load_config_from_path, load_config_with_env, ConfigError,
    ConfigSource, Labels, TaskboardConfig, TaskboardToml,
};
pub use draft::{Draft, DraftField, InputHint};
pub use events::BoardEvent;
pub use task::{Task, TaskId, TaskIdGenerator, TaskState};
pub use view::{BoardView, ButtonSpec, FieldSpec, FormView, HeaderView, Icon, ListView, TaskCard};
