//! Integration Test: Event-driven Redraw
//!
//! **Policy**: The TUI draws after an input event changed something and at
//! no other time. No sleeps, tickers or frame timers in production code.

use architectural_enforcement::{check_directory, report, Rule};

const TIMER_RULES: &[Rule] = &[
    Rule::new("sleep(", "Sleep call"),
    Rule::new("interval(", "Ticker"),
    Rule::new("tokio::time", "Timer"),
    Rule::new("std::thread", "Background thread"),
    Rule::new("Instant::now", "Frame timing"),
];

#[test]
fn test_no_timers_in_tui() {
    let violations = check_directory("tui/src", TIMER_RULES, &[]);
    report("Timer-driven code found in the TUI", &violations);
}

#[test]
fn test_no_timers_in_core() {
    let violations = check_directory("board/core/src", TIMER_RULES, &[]);
    report("Timer-driven code found in the board core", &violations);
}
