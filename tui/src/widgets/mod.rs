//! Widgets
//!
//! ratatui widgets bound to the core view model. Each takes a data-only spec
//! from `taskboard_core::view` and knows nothing about the board itself.

mod button;
mod empty_state;
mod header;
mod task_list;
mod text_field;

pub use button::Button;
pub use empty_state::EmptyState;
pub use header::Header;
pub use task_list::{CardRegion, TaskList, TaskListState};
pub use text_field::TextField;
