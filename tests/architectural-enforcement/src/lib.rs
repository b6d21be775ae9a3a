//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The board core is synchronous and knows nothing about terminals
//! - File access in the core is confined to config loading
//! - The TUI redraws on events only, never on a timer
//!
//! The helpers here scan production source text. Everything from the first
//! `#[cfg(test)]` line to the end of a file is treated as test code, and
//! `//` comments are ignored.

use std::fs;
use std::path::{Path, PathBuf};

/// A forbidden pattern and the reason it is forbidden
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Substring that must not appear in production code
    pub pattern: &'static str,
    /// Shown next to each violation
    pub reason: &'static str,
}

impl Rule {
    /// Shorthand constructor for rule tables
    pub const fn new(pattern: &'static str, reason: &'static str) -> Self {
        Self { pattern, reason }
    }
}

/// Root of the workspace, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// All `.rs` files under `dir`, sorted for stable output
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Production lines of a source file as `(line_number, code)` pairs
///
/// Comments are stripped and scanning stops at the test module.
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .map(|(idx, line)| (idx + 1, strip_comment(line)))
        .filter(|(_, code)| !code.trim().is_empty())
        .collect()
}

/// Code part of a line: everything before a `//` that is outside a string
///
/// Tracks plain `"..."` literals with backslash escapes and the `'"'` char
/// literal. Raw strings spanning lines are not tracked.
pub fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_string => i += 1,
            b'"' => in_string = !in_string,
            b'\'' if !in_string && bytes[i + 1..].starts_with(b"\"'") => i += 2,
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return &line[..i],
            _ => {}
        }
        i += 1;
    }

    line
}

/// Check one file's text against `rules`, appending violations
pub fn check_source(path: &Path, content: &str, rules: &[Rule], violations: &mut Vec<String>) {
    for (line_number, code) in production_lines(content) {
        for rule in rules {
            if code.contains(rule.pattern) {
                violations.push(format!(
                    "{}:{} - {}: {}",
                    path.display(),
                    line_number,
                    rule.reason,
                    code.trim()
                ));
            }
        }
    }
}

/// Check every Rust file under `dir` (relative to the workspace root)
///
/// Files whose name is in `exempt` are skipped.
pub fn check_directory(dir: &str, rules: &[Rule], exempt: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    let root = workspace_root().join(dir);
    if !root.exists() {
        violations.push(format!("{} - directory not found", root.display()));
        return violations;
    }

    for path in rust_files(&root) {
        let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if exempt.contains(&name) {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        check_source(&path, &content, rules, &mut violations);
    }

    violations
}

/// Print violations and fail the test if there are any
pub fn report(title: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n❌ {title}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }

    panic!(
        "\nFound {} violation(s): {title}.\nFix these before merging!",
        violations.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_test_module_are_skipped() {
        let source = "\
use std::fs; // allowed? no
// tokio::spawn in a comment
fn load() {}

#[cfg(test)]
mod tests {
    use tokio;
}
";
        let lines = production_lines(source);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (1, "use std::fs; "));
        assert_eq!(lines[1].0, 3);
    }

    #[test]
    fn test_comment_inside_string_is_code() {
        assert_eq!(
            strip_comment(r#"let url = "https://example.com"; tokio::spawn(x); // note"#),
            r#"let url = "https://example.com"; tokio::spawn(x); "#
        );
        assert_eq!(strip_comment(r#"let s = "a \" // b"; // c"#), r#"let s = "a \" // b"; "#);
        assert_eq!(strip_comment(r#"if c == '"' { x } // q"#), r#"if c == '"' { x } "#);
        assert_eq!(strip_comment("/// docs"), "");

        let rules = [Rule::new("tokio", "Async runtime")];
        let mut violations = Vec::new();
        check_source(
            Path::new("net.rs"),
            "fn a() { let u = \"http://x\"; tokio::spawn(u); }\n",
            &rules,
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_violation_detection() {
        let rules = [Rule::new("tokio", "Async runtime")];
        let mut violations = Vec::new();
        check_source(
            Path::new("board.rs"),
            "fn a() {}\nfn b() { tokio::spawn(x); }\n",
            &rules,
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].starts_with("board.rs:2 - Async runtime"));
    }
}
