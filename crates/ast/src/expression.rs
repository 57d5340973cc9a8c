//! Defines the expression tree produced by the parser and walked by the path engine.
//!
//! The tree is a closed union: every consumer matches exhaustively instead of
//! probing for capabilities. The accessor methods return `None` when a node
//! does not carry the requested part, which lets callers decide explicitly
//! how to treat a shape they did not expect.

use super::literal::{Literal, unquote};
use std::fmt;

/// Whether a separator-prefixed expression selects direct children or every descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescendantMode {
    /// `//` - the full transitive set of descendants.
    All,
    /// `/` - the direct children of the current context only.
    Context,
}

/// The operator joining the two operands of a [`Expression::Binary`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Traversal
    NameDescendants,
    Branch,
    Instance,
    IndexAccess,
    IndexAccessDescendants,
    InfixAttribute,
    // Comparison
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    // Logical
    LogicalAnd,
    LogicalOr,
}

impl BinaryOperator {
    /// True for the operators that compare a property against a value.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperator::Equality
                | BinaryOperator::Inequality
                | BinaryOperator::LessThan
                | BinaryOperator::LessThanOrEqual
                | BinaryOperator::GreaterThan
                | BinaryOperator::GreaterThanOrEqual
        )
    }
}

/// A stable, side-effect free tag describing the shape of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Wildcard,
    AllDescendants,
    Descendants,
    NameDescendants,
    Branch,
    String,
    Name,
    IndexAccess,
    Number,
    Integer,
    InfixAttribute,
    MethodCall,
    Group,
    Instance,
    IndexAccessDescendants,
    Attribute,
    Equality,
    Inequality,
    LogicalAnd,
    LogicalOr,
    Boolean,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpressionType::Wildcard => "Wildcard",
            ExpressionType::AllDescendants => "AllDescendants",
            ExpressionType::Descendants => "Descendants",
            ExpressionType::NameDescendants => "NameDescendants",
            ExpressionType::Branch => "Branch",
            ExpressionType::String => "String",
            ExpressionType::Name => "Name",
            ExpressionType::IndexAccess => "IndexAccess",
            ExpressionType::Number => "Number",
            ExpressionType::Integer => "Integer",
            ExpressionType::InfixAttribute => "InfixAttribute",
            ExpressionType::MethodCall => "MethodCall",
            ExpressionType::Group => "Group",
            ExpressionType::Instance => "Instance",
            ExpressionType::IndexAccessDescendants => "IndexAccessDescendants",
            ExpressionType::Attribute => "Attribute",
            ExpressionType::Equality => "Equality",
            ExpressionType::Inequality => "Inequality",
            ExpressionType::LogicalAnd => "LogicalAnd",
            ExpressionType::LogicalOr => "LogicalOr",
            ExpressionType::Boolean => "Boolean",
            ExpressionType::LessThan => "LessThan",
            ExpressionType::LessThanOrEqual => "LessThanOrEqual",
            ExpressionType::GreaterThan => "GreaterThan",
            ExpressionType::GreaterThanOrEqual => "GreaterThanOrEqual",
        };
        f.write_str(name)
    }
}

/// A node of a parsed path expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `*`
    Wildcard,
    /// `/expr` or `//expr`.
    Descendants {
        mode: DescendantMode,
        expr: Box<Expression>,
    },
    /// Any node with exactly two ordered children.
    Binary {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
    /// The `@` marker opening a predicate clause.
    Attribute,
    MethodCall {
        method: Box<Expression>,
        args: Vec<Expression>,
    },
    /// A parenthesised list, used as a predicate clause or an argument list.
    Group(Vec<Expression>),
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Name(String),
    /// A string literal, kept exactly as written including its delimiters.
    String(String),
}

impl Expression {
    pub fn name(value: impl Into<String>) -> Self {
        Expression::Name(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(value.into())
    }

    pub fn descendants(mode: DescendantMode, expr: Expression) -> Self {
        Expression::Descendants {
            mode,
            expr: Box::new(expr),
        }
    }

    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn name_descendants(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::NameDescendants, right)
    }

    pub fn branch(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Branch, right)
    }

    pub fn instance(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Instance, right)
    }

    pub fn index_access(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::IndexAccess, right)
    }

    pub fn equality(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Equality, right)
    }

    pub fn method_call(method: Expression, args: Vec<Expression>) -> Self {
        Expression::MethodCall {
            method: Box::new(method),
            args,
        }
    }

    /// Returns the shape tag of this node.
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Expression::Wildcard => ExpressionType::Wildcard,
            Expression::Descendants { mode, .. } => match mode {
                DescendantMode::All => ExpressionType::AllDescendants,
                DescendantMode::Context => ExpressionType::Descendants,
            },
            Expression::Binary { op, .. } => match op {
                BinaryOperator::NameDescendants => ExpressionType::NameDescendants,
                BinaryOperator::Branch => ExpressionType::Branch,
                BinaryOperator::Instance => ExpressionType::Instance,
                BinaryOperator::IndexAccess => ExpressionType::IndexAccess,
                BinaryOperator::IndexAccessDescendants => ExpressionType::IndexAccessDescendants,
                BinaryOperator::InfixAttribute => ExpressionType::InfixAttribute,
                BinaryOperator::Equality => ExpressionType::Equality,
                BinaryOperator::Inequality => ExpressionType::Inequality,
                BinaryOperator::LessThan => ExpressionType::LessThan,
                BinaryOperator::LessThanOrEqual => ExpressionType::LessThanOrEqual,
                BinaryOperator::GreaterThan => ExpressionType::GreaterThan,
                BinaryOperator::GreaterThanOrEqual => ExpressionType::GreaterThanOrEqual,
                BinaryOperator::LogicalAnd => ExpressionType::LogicalAnd,
                BinaryOperator::LogicalOr => ExpressionType::LogicalOr,
            },
            Expression::Attribute => ExpressionType::Attribute,
            Expression::MethodCall { .. } => ExpressionType::MethodCall,
            Expression::Group(_) => ExpressionType::Group,
            Expression::Boolean(_) => ExpressionType::Boolean,
            Expression::Integer(_) => ExpressionType::Integer,
            Expression::Number(_) => ExpressionType::Number,
            Expression::Name(_) => ExpressionType::Name,
            Expression::String(_) => ExpressionType::String,
        }
    }

    /// The left operand of a binary node.
    pub fn left(&self) -> Option<&Expression> {
        match self {
            Expression::Binary { left, .. } => Some(left),
            _ => None,
        }
    }

    /// The right operand of a binary node.
    pub fn right(&self) -> Option<&Expression> {
        match self {
            Expression::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    /// The operator of a binary node.
    pub fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Expression::Binary { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// The wrapped child and mode of a descendants node.
    pub fn descendants_of(&self) -> Option<(DescendantMode, &Expression)> {
        match self {
            Expression::Descendants { mode, expr } => Some((*mode, expr)),
            _ => None,
        }
    }

    /// The ordered children of a group.
    pub fn list(&self) -> Option<&[Expression]> {
        match self {
            Expression::Group(items) => Some(items),
            _ => None,
        }
    }

    /// The identifier of a name literal.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expression::Name(name) => Some(name),
            _ => None,
        }
    }

    /// The zero-based position carried by a numeric literal.
    ///
    /// Fractional numbers are truncated toward zero.
    pub fn index(&self) -> Option<i64> {
        match self {
            Expression::Integer(value) => Some(*value),
            Expression::Number(value) if value.is_finite() => Some(value.trunc() as i64),
            _ => None,
        }
    }

    /// A borrowed view of a literal node, or `None` for structural nodes.
    pub fn literal(&self) -> Option<Literal<'_>> {
        match self {
            Expression::Boolean(value) => Some(Literal::Boolean(*value)),
            Expression::Integer(value) => Some(Literal::Integer(*value)),
            Expression::Number(value) => Some(Literal::Number(*value)),
            Expression::Name(value) => Some(Literal::Name(value)),
            Expression::String(raw) => Some(Literal::String(unquote(raw))),
            _ => None,
        }
    }

    /// Walks down the left spine of binary nodes and returns the leftmost leaf.
    pub fn leftmost(&self) -> &Expression {
        let mut current = self;
        while let Expression::Binary { left, .. } = current {
            current = left;
        }
        current
    }
}
