//! Pratt parser turning elpath token streams into [`Expression`] trees.
//!
//! The grammar lives entirely in the [`parselets`] registries; [`Parser`] only
//! drives them by token kind and precedence.

pub mod error;
pub mod parselets;
pub mod parser;
pub mod precedence;

pub use error::ParseError;
pub use parselets::{InfixParselet, InfixRule, PrefixParselet};
pub use parser::{DEFAULT_MAX_DEPTH, Parser};
pub use precedence::Precedence;

use elpath_ast::Expression;
use elpath_lexer::{Dialect, Lexer};

/// Parses `source` with the full punctuation dialect.
///
/// Parsing stops at the first token that cannot extend the expression; use
/// [`Parser::finish`] directly to reject trailing input.
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    let lexer = Lexer::new(source).with(Dialect::full());
    Parser::new(lexer.iter()).parse_expression()
}
