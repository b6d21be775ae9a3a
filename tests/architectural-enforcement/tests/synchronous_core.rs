//! Integration Test: Synchronous, UI-free Board Core
//!
//! **Policy**: `taskboard-core` completes every operation before returning.
//! It must not spawn tasks or threads, await, touch the network, or depend
//! on a terminal library. Reading a file is allowed in `config.rs` only.

use architectural_enforcement::{check_directory, report, Rule};

const CORE_SRC: &str = "board/core/src";

const ASYNC_RULES: &[Rule] = &[
    Rule::new("async fn", "Async function"),
    Rule::new(".await", "Await point"),
    Rule::new("tokio", "Async runtime"),
    Rule::new("futures::", "Async combinators"),
    Rule::new("std::thread", "Thread spawn"),
    Rule::new("std::net", "Network I/O"),
    Rule::new("std::process", "Process spawn"),
];

const UI_RULES: &[Rule] = &[
    Rule::new("ratatui", "Terminal UI dependency"),
    Rule::new("crossterm", "Terminal backend dependency"),
];

const FS_RULES: &[Rule] = &[
    Rule::new("std::fs", "File system access"),
    Rule::new("File::", "File handle"),
];

#[test]
fn test_core_is_synchronous() {
    let violations = check_directory(CORE_SRC, ASYNC_RULES, &[]);
    report("Async or concurrent code found in the board core", &violations);
}

#[test]
fn test_core_is_ui_free() {
    let violations = check_directory(CORE_SRC, UI_RULES, &[]);
    report("Terminal code found in the board core", &violations);
}

#[test]
fn test_core_file_access_only_in_config() {
    let violations = check_directory(CORE_SRC, FS_RULES, &["config.rs"]);
    report("File access outside config loading", &violations);
}
