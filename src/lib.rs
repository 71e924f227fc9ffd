//! # mathlang lexer
//!
//! Lexical analyzer for mathlang, a small scripting language built from
//! `note`, `print`, and `let` statements. This crate converts raw source
//! text into a sequence of typed tokens; parsing and execution live in
//! downstream consumers that pull tokens one at a time.
//!
//! ## Architecture
//!
//! - `lexer`: tokenization of source text ([`Tokenizer`], [`Token`])
//! - `error`: error types and diagnostic formatting
//!
//! ## Usage
//!
//! ```
//! use mathlang::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new("let x = 5 ;");
//! while let Some(token) = tokenizer.next_token().unwrap() {
//!     println!("{}", token);
//! }
//! ```

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexResult};
pub use lexer::{Keyword, Token, Tokenizer};

/// Version of the mathlang lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a complete mathlang source text
///
/// Convenience wrapper that drains a [`Tokenizer`] into a vector. The
/// first lexical error aborts the pass; no partial token list is
/// returned.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Tokenizer::new(source).tokenize()
}
