use crate::error::ParseError;
use crate::parser::Parser;
use elpath_ast::Expression;
use elpath_lexer::{Token, TokenKind};

/// `( a, b, ... )`. Commas are optional separators and the list may be empty.
pub fn group(parser: &mut Parser<'_>, _: Token) -> Result<Expression, ParseError> {
    let mut items = Vec::new();
    while !parser.matches(TokenKind::RightParen) {
        items.push(parser.parse_expression()?);
        parser.matches(TokenKind::Comma);
    }
    Ok(Expression::Group(items))
}

pub fn attribute(_: &mut Parser<'_>, _: Token) -> Result<Expression, ParseError> {
    Ok(Expression::Attribute)
}
