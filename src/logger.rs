//! Terminal logging with colored module prefixes.
//!
//! ```ignore
//! log!("doxygen"; "resolved {}", doxyfile.display());
//! log!("warn"; "extraction failed: {}", reason);
//! ```
//!
//! Single-line messages are cut to the terminal width. Multi-line messages
//! (child process output, failure reasons) are written in full with the
//! `[module]` prefix on every line.

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Columns assumed when the terminal cannot be queried (CI, pipes).
const FALLBACK_WIDTH: u16 = 120;

/// Log a formatted message under a module prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Write `message` under a `[module]` prefix.
pub fn log(module: &str, message: &str) {
    let tag = prefix(module);
    let room = usize::from(width()).saturating_sub(prefix_width(module));

    let mut out = stdout().lock();
    for line in fit_lines(message, room) {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
        writeln!(out, "{tag} {line}").ok();
    }
    out.flush().ok();
}

/// Lines to print for `message`; only a single-line message is truncated.
fn fit_lines(message: &str, room: usize) -> Vec<&str> {
    if message.contains('\n') {
        message.lines().collect()
    } else {
        vec![truncate_str(message, room)]
    }
}

fn width() -> u16 {
    static WIDTH: OnceLock<u16> = OnceLock::new();
    *WIDTH.get_or_init(|| size().map_or(FALLBACK_WIDTH, |(columns, _)| columns))
}

/// Columns taken by `[module] `.
const fn prefix_width(module: &str) -> usize {
    module.len() + "[] ".len()
}

fn prefix(module: &str) -> ColoredString {
    let text = format!("[{module}]");
    let colored = match module.to_ascii_lowercase().as_str() {
        "doxygen" => text.bright_blue(),
        "xref" => text.bright_green(),
        "warn" => text.bright_magenta(),
        "error" => text.bright_red(),
        _ => text.bright_yellow(),
    };
    colored.bold()
}

/// Longest prefix of `s` within `max_len` bytes that ends on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let end = (0..=max_len).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_width() {
        assert_eq!(prefix_width("doxygen"), "[doxygen] ".len());
        assert_eq!(prefix_width(""), 3);
    }

    #[test]
    fn test_truncate_keeps_short_lines() {
        assert_eq!(truncate_str("doxygen", 10), "doxygen");
        assert_eq!(truncate_str("doxygen", 7), "doxygen");
    }

    #[test]
    fn test_truncate_cuts_long_lines() {
        assert_eq!(truncate_str("warning: unknown tag", 7), "warning");
        assert_eq!(truncate_str("xref", 0), "");
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        // "é" is two bytes
        assert_eq!(truncate_str("café", 4), "caf");
        assert_eq!(truncate_str("a→b", 2), "a");
    }

    #[test]
    fn test_fit_lines_truncates_single_line() {
        assert_eq!(fit_lines("resolved docs/Doxyfile", 8), vec!["resolved"]);
    }

    #[test]
    fn test_fit_lines_keeps_long_failure_reason() {
        let error = format!(
            "error: tag INPUT: input source {}/Interface does not exist END_OF_MESSAGE",
            "Interface/external/UnityNativeTool".repeat(5)
        );
        let reason = format!("doxygen failed, native API docs may be missing\n{error}");

        let lines = fit_lines(&reason, 80);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], error);
        assert!(lines[1].ends_with("END_OF_MESSAGE"));
    }

    #[test]
    fn test_prefix_keeps_module_name() {
        colored::control::set_override(false);
        assert_eq!(prefix("xref").to_string(), "[xref]");
        assert_eq!(prefix("Build").to_string(), "[Build]");
    }
}
