use super::PrefixParselet;
use crate::error::ParseError;
use crate::parser::Parser;
use elpath_ast::Expression;
use elpath_lexer::Token;

/// Reserved words take precedence over plain names.
const KEYWORDS: [(&str, PrefixParselet); 3] =
    [("true", boolean), ("false", boolean), ("null", null)];

pub fn name(parser: &mut Parser<'_>, token: Token) -> Result<Expression, ParseError> {
    if let Some((_, keyword)) = KEYWORDS.iter().find(|(word, _)| *word == token.literal()) {
        return keyword(parser, token);
    }
    Ok(Expression::Name(token.into_literal()))
}

pub fn boolean(_: &mut Parser<'_>, token: Token) -> Result<Expression, ParseError> {
    match token.literal() {
        "true" => Ok(Expression::Boolean(true)),
        "false" => Ok(Expression::Boolean(false)),
        _ => Err(ParseError::InvalidBoolean(token.into_literal())),
    }
}

pub fn null(_: &mut Parser<'_>, _: Token) -> Result<Expression, ParseError> {
    Err(ParseError::UnexpectedNull)
}

pub fn number(_: &mut Parser<'_>, token: Token) -> Result<Expression, ParseError> {
    token
        .literal()
        .parse::<f64>()
        .map(Expression::Number)
        .map_err(|_| ParseError::InvalidNumber(token.literal().to_string()))
}

/// The literal keeps its quotes and escapes exactly as lexed.
pub fn string(_: &mut Parser<'_>, token: Token) -> Result<Expression, ParseError> {
    Ok(Expression::String(token.into_literal()))
}

pub fn wildcard(_: &mut Parser<'_>, _: Token) -> Result<Expression, ParseError> {
    Ok(Expression::Wildcard)
}
