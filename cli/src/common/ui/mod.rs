//! # PhpDev UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module centralizes the user-facing console output of PhpDev: banners,
//! rules and colored status lines. Command handlers never call `println!`
//! with raw ANSI codes themselves; they describe *what* happened (a heading,
//! a success, an error) and this module decides how it looks.
//!
//! Output is rendered against a fixed 80-column console. Widths are computed
//! with `unicode-width` so centered banners stay centered even when a project
//! name or message contains emoji or wide characters. Colors come from the
//! `colored` crate, which honors `NO_COLOR` and disables styling when the
//! stream is not a terminal.
//!
//! ## Architecture
//!
//! - **`heading`**: Prominent green banner between heavy rules, used when a
//!   command starts a phase ("Starting ... development environment...").
//! - **`rule`**: A thin green horizontal rule.
//! - **`success` / `info`**: Green and blue status lines on stdout.
//! - **`error`**: Red lines on stderr, used for user-facing failures.
//! - **`wrap`**: Word-wraps text to the console width; long words are kept
//!   whole on their own line rather than split mid-word.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui;
//!
//! ui::heading("Starting runopencode/phplib development environment...");
//! ui::info("Installing project dependencies...");
//! ui::success("Project dependencies successfully installed.");
//! ui::rule();
//! ```
//!
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Rendering width of the console, in display columns.
pub const CONSOLE_WIDTH: usize = 80;

/// Prints a prominent banner: the text centered in bold green between two
/// heavy rules.
pub fn heading(text: &str) {
    let border = "━".repeat(CONSOLE_WIDTH);
    println!("{}", border.green());
    for line in wrap(text, CONSOLE_WIDTH) {
        println!("{}", center(&line, CONSOLE_WIDTH).bold().green());
    }
    let border = "━".repeat(CONSOLE_WIDTH);
    println!("{}", border.green());
}

/// Prints a thin horizontal rule.
pub fn rule() {
    println!("{}", "─".repeat(CONSOLE_WIDTH).green());
}

/// Prints a green status line (wrapped) on stdout.
pub fn success(text: &str) {
    for line in wrap(text, CONSOLE_WIDTH) {
        println!("{}", line.green());
    }
}

/// Prints a blue status line (wrapped) on stdout.
pub fn info(text: &str) {
    for line in wrap(text, CONSOLE_WIDTH) {
        println!("{}", line.blue());
    }
}

/// Prints a red error line (wrapped) on stderr.
pub fn error(text: &str) {
    for line in wrap(text, CONSOLE_WIDTH) {
        eprintln!("{}", line.red());
    }
}

/// Word-wraps `text` to `width` display columns.
///
/// Words wider than the whole line are emitted on their own line unbroken,
/// container ids and URLs stay copy-pastable.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Centers `line` within `width` display columns by left-padding with spaces.
/// Lines already wider than `width` are returned unchanged.
fn center(line: &str, width: usize) -> String {
    let line_width = line.width();
    if line_width >= width {
        return line.to_string();
    }
    let padding = (width - line_width) / 2;
    format!("{}{}", " ".repeat(padding), line)
}
