use crate::error::ParseError;
use crate::parser::Parser;
use elpath_ast::{BinaryOperator, DescendantMode, Expression};
use elpath_lexer::{Token, TokenKind};

/// `/expr` selects children, `//expr` the whole subtree.
pub fn descendants(parser: &mut Parser<'_>, _: Token) -> Result<Expression, ParseError> {
    let mode = if parser.matches(TokenKind::ForwardSlash) {
        DescendantMode::All
    } else {
        DescendantMode::Context
    };
    let expr = parser.parse_expression()?;
    Ok(Expression::descendants(mode, expr))
}

/// `left/right`. Only a left operand rooted at a name steps through children;
/// anything else (a closed group, say) chains as a branch.
pub fn name_descendants(
    parser: &mut Parser<'_>,
    left: Expression,
    token: Token,
) -> Result<Expression, ParseError> {
    if !matches!(left.leftmost(), Expression::Name(_)) {
        return branch(parser, left, token);
    }
    let right = parser.parse_expression()?;
    Ok(Expression::name_descendants(left, right))
}

pub fn branch(
    parser: &mut Parser<'_>,
    left: Expression,
    _: Token,
) -> Result<Expression, ParseError> {
    let right = parser.parse_expression()?;
    Ok(Expression::branch(left, right))
}

pub fn instance(
    parser: &mut Parser<'_>,
    left: Expression,
    _: Token,
) -> Result<Expression, ParseError> {
    let right = parser.parse_expression()?;
    Ok(Expression::instance(left, right))
}

pub fn index_access(
    parser: &mut Parser<'_>,
    left: Expression,
    _: Token,
) -> Result<Expression, ParseError> {
    if parser.matches(TokenKind::RightSquare) {
        return Err(ParseError::InvalidIndexAccess);
    }
    let index = parser.parse_expression()?;
    parser.consume_token(TokenKind::RightSquare)?;
    Ok(Expression::index_access(left, index))
}

pub fn infix_attribute(
    parser: &mut Parser<'_>,
    left: Expression,
    _: Token,
) -> Result<Expression, ParseError> {
    let right = parser.parse_expression()?;
    Ok(Expression::binary(left, BinaryOperator::InfixAttribute, right))
}
