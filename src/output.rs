//! Terminal output formatting for the flipbook CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. All status
//! output goes to stderr; stdout is reserved for machine-readable output.

use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "    Loading frames/frame-01.png (640x480)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "frame", "frames")` → "1 frame".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "frame", "frames"), "1 frame");
    }

    #[test]
    fn test_plural_zero() {
        assert_eq!(plural(0, "frame", "frames"), "0 frames");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(3, "image", "images"), "3 images");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        let p = Path::new("/nonexistent/path/to/frame.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/frame.png");
    }
}
