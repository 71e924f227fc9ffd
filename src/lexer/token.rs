//! Token definitions for the mathlang language
//!
//! This module defines the token variants produced by lexical analysis.

use std::fmt;

/// A token in the mathlang language
///
/// Each variant carries its classified payload: a name or keyword, a
/// numeric value, a single operator/punctuation character, or the
/// contents of a quoted literal (delimiters stripped).
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An identifier or keyword
    Name(String),
    /// A numeric literal, always carried as a double
    Number(f64),
    /// One of the operator/punctuation characters `+ - = ;`
    Symbol(char),
    /// The contents of a quoted literal, or a multi-character bare word
    /// that is neither a keyword nor a number
    Str(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name '{}'", name),
            Self::Number(value) => write!(f, "number {}", value),
            Self::Symbol(symbol) => write!(f, "symbol '{}'", symbol),
            Self::Str(contents) => write!(f, "string \"{}\"", contents),
        }
    }
}

/// Keywords in the mathlang language
///
/// Multi-character bare words are recognized as names only when they
/// match this closed set; anything else falls through to number or
/// string classification. This is deliberately restrictive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    Note,
    Print,
    Let,
}

impl Keyword {
    /// Get keyword from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "note" => Some(Self::Note),
            "print" => Some(Self::Print),
            "let" => Some(Self::Let),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Print => "print",
            Self::Let => "let",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether a character belongs to the fixed symbol set
pub fn is_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '=' | ';')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("note"), Some(Keyword::Note));
        assert_eq!(Keyword::from_str("print"), Some(Keyword::Print));
        assert_eq!(Keyword::from_str("let"), Some(Keyword::Let));
        assert_eq!(Keyword::from_str("invalid"), None);
        // any other bare word is not a keyword, even plausible ones
        assert_eq!(Keyword::from_str("Let"), None);
        assert_eq!(Keyword::from_str("prints"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Note.as_str(), "note");
        assert_eq!(Keyword::Print.as_str(), "print");
        assert_eq!(Keyword::Let.as_str(), "let");
    }

    #[test]
    fn test_is_symbol() {
        assert!(is_symbol('+'));
        assert!(is_symbol('-'));
        assert!(is_symbol('='));
        assert!(is_symbol(';'));
        assert!(!is_symbol('*'));
        assert!(!is_symbol('"'));
        assert!(!is_symbol('a'));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Name("let".to_string()).to_string(), "name 'let'");
        assert_eq!(Token::Number(5.0).to_string(), "number 5");
        assert_eq!(Token::Symbol(';').to_string(), "symbol ';'");
        assert_eq!(Token::Str("hi".to_string()).to_string(), "string \"hi\"");
    }
}
