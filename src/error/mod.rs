//! Error handling and diagnostics for the mathlang lexer
//!
//! This module provides the error type surfaced across the tokenizer
//! boundary, plus diagnostic formatting for presenting errors with
//! source context.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;

/// Error type for lexical analysis
///
/// Every lexical error is fatal to the current tokenization pass. The
/// caller is expected to abort on any of these; there is no recovery or
/// partial-token emission. `position` is the character offset into the
/// source at which the condition was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A quoted literal was never closed before the end of input
    UnterminatedString { position: usize },
    /// Quote scanning was entered on a character other than `"`
    /// (internal invariant; should be unreachable)
    MalformedStart { position: usize },
    /// A single character that is not a letter, digit, symbol, or quote
    /// was encountered outside any quoted context
    UnclassifiedCharacter { character: char, position: usize },
    /// The cursor was advanced past the end of input during a read
    OutOfBounds { position: usize },
}

impl LexError {
    /// Create a new unterminated-string error
    pub fn unterminated_string(position: usize) -> Self {
        Self::UnterminatedString { position }
    }

    /// Create a new malformed-start error
    pub fn malformed_start(position: usize) -> Self {
        Self::MalformedStart { position }
    }

    /// Create a new unclassified-character error
    pub fn unclassified_character(character: char, position: usize) -> Self {
        Self::UnclassifiedCharacter {
            character,
            position,
        }
    }

    /// Create a new out-of-bounds error
    pub fn out_of_bounds(position: usize) -> Self {
        Self::OutOfBounds { position }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::UnterminatedString { .. } => "Unterminated String",
            Self::MalformedStart { .. } => "Malformed String Start",
            Self::UnclassifiedCharacter { .. } => "Unclassified Character",
            Self::OutOfBounds { .. } => "Out Of Bounds",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::UnterminatedString { .. } => {
                "quoted string never closed before end of input".to_string()
            }
            Self::MalformedStart { .. } => {
                "string scanning did not start with a quote".to_string()
            }
            Self::UnclassifiedCharacter { character, .. } => {
                format!("input character '{}' not defined", character)
            }
            Self::OutOfBounds { .. } => "index out of bounds".to_string(),
        }
    }

    /// Get the character offset at which the error was detected
    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedString { position }
            | Self::MalformedStart { position }
            | Self::UnclassifiedCharacter { position, .. }
            | Self::OutOfBounds { position } => *position,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at offset {}",
            self.kind(),
            self.message(),
            self.position()
        )
    }
}

impl std::error::Error for LexError {}
