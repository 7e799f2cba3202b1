// utils/display.rs

//! # Display Utility Module
//!
//! Styled terminal output for the deploy command: a Unicode message box for
//! banners and color-coded macros for errors and successes.
//!
//! ## Example Usage
//! ```rust
//! use crate::utils::display::print_unicode_box;
//!
//! print_unicode_box("🚀 Deploying Lakebase metadata: [metadata/dev.yml]");
//! print_error!("Failed to reach the workspace.");
//! print_success!("Lakebase deployment finished");
//! ```

use unicode_width::UnicodeWidthStr;

/// Builds the lines of a Unicode box around `message`, sized by display
/// width so that emojis and wide characters line up.
pub fn unicode_box_lines(message: &str) -> Vec<String> {
    let lines: Vec<&str> = message.split('\n').collect();
    let max_length = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap_or(0);

    let mut boxed = Vec::with_capacity(lines.len() + 2);
    boxed.push(format!("┌{}┐", "─".repeat(max_length + 2)));
    for line in lines {
        let padding = max_length - UnicodeWidthStr::width(line);
        boxed.push(format!("│ {}{} │", line, " ".repeat(padding)));
    }
    boxed.push(format!("└{}┘", "─".repeat(max_length + 2)));
    boxed
}

/// Prints a yellow Unicode-styled message box.
pub fn print_unicode_box(message: &str) {
    use colored::Colorize;

    for line in unicode_box_lines(message) {
        println!("{}", line.bright_yellow());
    }
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{}", format!($($arg)*).red())
    }};
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).green())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_lines_align() {
        let lines = unicode_box_lines("short\na longer line");
        let widths: Vec<usize> = lines.iter().map(|l| UnicodeWidthStr::width(l.as_str())).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_box_accounts_for_wide_characters() {
        let lines = unicode_box_lines("🚀 go");
        assert_eq!(
            UnicodeWidthStr::width(lines[0].as_str()),
            UnicodeWidthStr::width(lines[1].as_str())
        );
    }
}
