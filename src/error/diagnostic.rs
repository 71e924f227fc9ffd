//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting lexer errors with
//! source code context. The lexer itself reports character offsets;
//! the diagnostic resolves them to line/column against the source text
//! the caller supplies.

use super::LexError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: LexError,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: LexError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: LexError, source: &str) -> Self {
        Self {
            error,
            source: Some(source.to_string()),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.message());
        output.push('\n');

        if let Some(ref source) = self.source {
            let (line, column) = resolve_position(source, self.error.position());
            output.push_str(&format!(
                "  {} {}:{}\n",
                "-->".blue().bold(),
                line,
                column
            ));
            output.push_str(&self.format_source_context(source, line, column));
        } else {
            output.push_str(&format!(
                "  {} offset {}\n",
                "-->".blue().bold(),
                self.error.position()
            ));
        }

        output
    }

    /// Format source code context around the error line
    fn format_source_context(&self, source: &str, line: usize, column: usize) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if line == 0 || line > lines.len() {
            return output;
        }

        let line_idx = line - 1;
        let line_num_width = line.to_string().len();

        // Show previous line if available
        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        // Show error line
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        // Show error indicator
        let indicator_padding = " ".repeat(line_num_width + 2 + column - 1);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        // Show next line if available
        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

/// Resolve a character offset to a 1-based (line, column) pair
///
/// An offset at or past the end of the source resolves to one column
/// past the last character, so end-of-input errors point just after
/// the text.
fn resolve_position(source: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (i, c) in source.chars().enumerate() {
        if i == position {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
