//! Canonical text rendering of expression trees.
//!
//! Every binary node is parenthesised, so the output shows the tree's
//! structure rather than reproducing the source text verbatim.

use super::expression::{BinaryOperator, DescendantMode, Expression};
use std::fmt::{self, Write};

impl BinaryOperator {
    /// The glyph written between the two operands of this operator.
    pub fn glyph(self) -> &'static str {
        match self {
            BinaryOperator::NameDescendants => "/",
            BinaryOperator::Branch => " ",
            BinaryOperator::Instance => ".",
            BinaryOperator::IndexAccess | BinaryOperator::IndexAccessDescendants => "[",
            BinaryOperator::InfixAttribute => "@",
            BinaryOperator::Equality => "==",
            BinaryOperator::Inequality => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
        }
    }
}

/// Writes the canonical rendering of `expr` into `out`.
pub fn describe<W: Write>(expr: &Expression, out: &mut W) -> fmt::Result {
    match expr {
        Expression::Wildcard => out.write_char('*'),
        Expression::Descendants { mode, expr } => {
            out.write_char('(')?;
            out.write_str(match mode {
                DescendantMode::All => "//",
                DescendantMode::Context => "/",
            })?;
            describe(expr, out)?;
            out.write_char(')')
        }
        Expression::Binary { left, op, right } => {
            out.write_char('(')?;
            describe(left, out)?;
            out.write_str(op.glyph())?;
            describe(right, out)?;
            if matches!(
                op,
                BinaryOperator::IndexAccess | BinaryOperator::IndexAccessDescendants
            ) {
                out.write_char(']')?;
            }
            out.write_char(')')
        }
        Expression::Attribute => out.write_char('@'),
        Expression::MethodCall { method, args } => {
            describe(method, out)?;
            describe_list(args, out)
        }
        Expression::Group(items) => describe_list(items, out),
        Expression::Boolean(value) => write!(out, "{}", value),
        Expression::Integer(value) => write!(out, "{}", value),
        Expression::Number(value) => write!(out, "{:?}", value),
        Expression::Name(name) => out.write_str(name),
        Expression::String(raw) => out.write_str(raw),
    }
}

fn describe_list<W: Write>(items: &[Expression], out: &mut W) -> fmt::Result {
    out.write_char('(')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        describe(item, out)?;
    }
    out.write_char(')')
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe(self, f)
    }
}
