//! Lexical analysis module
//!
//! This module handles tokenization of mathlang source text.

pub mod scanner;
pub mod token;

pub use scanner::Tokenizer;
pub use token::{is_symbol, Keyword, Token};
