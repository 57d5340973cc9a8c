//! Parselets and the default registries that map token kinds to them.
//!
//! | Token | Prefix            | Infix (precedence `Postfix`) |
//! |-------|-------------------|------------------------------|
//! | name  | name / keyword    |                              |
//! | num   | number            |                              |
//! | str   | string            |                              |
//! | `*`   | wildcard          |                              |
//! | `/`   | descendants       | name-descendants or branch   |
//! | `(`   | group             |                              |
//! | `@`   | attribute         | infix attribute              |
//! | `.`   |                   | instance                     |
//! | `[`   |                   | index access                 |
//! | `=`   |                   | equality (`==`)              |

mod group;
mod literals;
mod operators;
mod traversal;

pub use group::{attribute, group};
pub use literals::{boolean, name, null, number, string, wildcard};
pub use operators::equality;
pub use traversal::{
    branch, descendants, index_access, infix_attribute, instance, name_descendants,
};

use super::error::ParseError;
use super::parser::Parser;
use super::precedence::Precedence;
use elpath_ast::Expression;
use elpath_lexer::{Token, TokenKind};
use std::collections::HashMap;

/// Builds an expression from the token that starts it.
pub type PrefixParselet = fn(&mut Parser<'_>, Token) -> Result<Expression, ParseError>;

/// Extends an already parsed left operand using the operator token.
pub type InfixParselet = fn(&mut Parser<'_>, Expression, Token) -> Result<Expression, ParseError>;

#[derive(Clone, Copy)]
pub struct InfixRule {
    pub parselet: InfixParselet,
    pub precedence: Precedence,
}

pub fn prefix_rules() -> HashMap<TokenKind, PrefixParselet> {
    let rules: [(TokenKind, PrefixParselet); 7] = [
        (TokenKind::Name, name),
        (TokenKind::Number, number),
        (TokenKind::String, string),
        (TokenKind::Asterisk, wildcard),
        (TokenKind::ForwardSlash, descendants),
        (TokenKind::LeftParen, group),
        (TokenKind::Attribute, attribute),
    ];
    rules.into_iter().collect()
}

pub fn infix_rules() -> HashMap<TokenKind, InfixRule> {
    let rules: [(TokenKind, InfixParselet); 5] = [
        (TokenKind::Dot, instance),
        (TokenKind::ForwardSlash, name_descendants),
        (TokenKind::LeftSquare, index_access),
        (TokenKind::Attribute, infix_attribute),
        (TokenKind::Equality, equality),
    ];
    rules
        .into_iter()
        .map(|(kind, parselet)| {
            let rule = InfixRule {
                parselet,
                precedence: Precedence::Postfix,
            };
            (kind, rule)
        })
        .collect()
}
