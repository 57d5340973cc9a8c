use crate::error::ParseError;
use crate::parser::Parser;
use elpath_ast::Expression;
use elpath_lexer::{Token, TokenKind};

/// `name == value`. The lexer emits `=` per rune, so the first has already
/// been consumed as the operator token and the second is required here.
pub fn equality(
    parser: &mut Parser<'_>,
    left: Expression,
    _: Token,
) -> Result<Expression, ParseError> {
    if !matches!(left, Expression::Name(_)) {
        return Err(ParseError::InvalidEqualityProperty(left.expression_type()));
    }
    parser.consume_token(TokenKind::Equality)?;
    let right = parser.parse_expression()?;
    Ok(Expression::equality(left, right))
}
