//! Tokenizer implementation for the mathlang language
//!
//! This module implements lexical analysis, converting source text into
//! tokens one at a time as the parser pulls them.

use super::token::{is_symbol, Keyword, Token};
use crate::error::{LexError, LexResult};

/// Tokenizer for mathlang source text
///
/// Owns the full source and a cursor into it. The parser drives it by
/// calling [`Tokenizer::next_token`] until it returns `Ok(None)`.
pub struct Tokenizer {
    source: Vec<char>,
    cursor: usize,
}

impl Tokenizer {
    /// Create a new tokenizer over the whole source text
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            cursor: 0,
        }
    }

    /// Produce the next token
    ///
    /// Skips leading whitespace, then scans either a quoted string or a
    /// bare run and classifies it. Returns `Ok(None)` once the input is
    /// exhausted; further calls keep returning `Ok(None)`.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        while self.in_bounds() {
            if self.peek()?.is_whitespace() {
                self.advance()?;
            } else if self.peek()? == '"' {
                return self.scan_quoted().map(Some);
            } else {
                let start = self.cursor;
                let raw = self.scan_bare()?;
                return self.classify(&raw, start).map(Some);
            }
        }
        Ok(None)
    }

    /// Drain the remaining input into a token vector
    ///
    /// Stops at end of input; the first lexical error aborts the pass.
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Scan a quoted string literal
    ///
    /// The opening quote must be the current character; both quotes are
    /// consumed and excluded from the payload. No escape processing: the
    /// first `"` after the opening quote always closes the literal.
    fn scan_quoted(&mut self) -> LexResult<Token> {
        let start = self.cursor;
        // The dispatcher only sends us here on a quote, but keep the
        // check as a safety net.
        if self.advance()? != '"' {
            return Err(LexError::malformed_start(start));
        }

        let mut contents = String::new();
        loop {
            match self.peek() {
                Ok('"') => break,
                Ok(_) => contents.push(self.advance()?),
                Err(LexError::OutOfBounds { .. }) => {
                    return Err(LexError::unterminated_string(start));
                }
                Err(err) => return Err(err),
            }
        }

        // Consume closing quote
        self.advance()?;

        Ok(Token::Str(contents))
    }

    /// Scan a bare run (identifier, keyword, number, or symbol)
    ///
    /// Accumulates non-whitespace characters, ending the run early when
    /// the last accumulated character is `=` or `+`, or the next
    /// unconsumed character is any of `+ - = ;`. The trailing-side check
    /// deliberately covers only `=` and `+` while the leading-side check
    /// covers all four symbols, so `x+y` splits apart but `a-b` lexes as
    /// `a` then `-b`. Quirk kept for compatibility with existing
    /// programs; a symmetric rule would behave differently.
    fn scan_bare(&mut self) -> LexResult<String> {
        let mut raw = String::new();
        while self.in_bounds() && !self.peek()?.is_whitespace() {
            if raw.is_empty() {
                raw.push(self.advance()?);
            } else if raw.ends_with('=') || raw.ends_with('+') || is_symbol(self.peek()?) {
                break;
            } else {
                raw.push(self.advance()?);
            }
        }
        Ok(raw)
    }

    /// Classify a completed bare run into a concrete token
    ///
    /// Multi-character runs are names only when they match the closed
    /// keyword set; otherwise they are numbers if they parse as a double
    /// and strings if not. Single characters are symbols, single-letter
    /// names, or single-digit numbers; anything else is an error at
    /// `position` (the offset where the run began).
    fn classify(&self, raw: &str, position: usize) -> LexResult<Token> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                if is_symbol(c) {
                    Ok(Token::Symbol(c))
                } else if c.is_alphabetic() {
                    Ok(Token::Name(raw.to_string()))
                } else if let Some(digit) = c.to_digit(10) {
                    Ok(Token::Number(f64::from(digit)))
                } else {
                    Err(LexError::unclassified_character(c, position))
                }
            }
            _ => {
                if Keyword::from_str(raw).is_some() {
                    Ok(Token::Name(raw.to_string()))
                } else if let Ok(value) = raw.parse::<f64>() {
                    Ok(Token::Number(value))
                } else {
                    Ok(Token::Str(raw.to_string()))
                }
            }
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> LexResult<char> {
        self.source
            .get(self.cursor)
            .copied()
            .ok_or_else(|| LexError::out_of_bounds(self.cursor))
    }

    /// Consume and return the current character
    fn advance(&mut self) -> LexResult<char> {
        let c = self.peek()?;
        self.cursor += 1;
        Ok(c)
    }

    /// Check whether any input remains
    fn in_bounds(&self) -> bool {
        self.cursor < self.source.len()
    }
}

impl Iterator for Tokenizer {
    type Item = LexResult<Token>;

    /// Iterate tokens, mapping end-of-input to iterator exhaustion
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
