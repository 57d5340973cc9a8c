//! Tokenizer for elpath path expressions.
//!
//! A [`Lexer`] is configured with a punctuation [`Dialect`] and hands out
//! single-use [`Tokens`] iterators. Lexing is lazy: the parser pulls one token
//! at a time and never looks at more input than it needs.

pub mod dialect;
pub mod error;
pub mod lexer;
pub mod token;

pub use dialect::Dialect;
pub use error::LexError;
pub use lexer::{Lexer, Tokens};
pub use token::{Token, TokenKind};
