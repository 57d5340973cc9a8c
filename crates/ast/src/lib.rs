//! The expression tree shared by the elpath parser and path engine.
//!
//! Trees are immutable once built: composite nodes own their children and
//! nothing is shared, so a parsed expression can be read concurrently by any
//! number of path executions.

pub mod describe;
pub mod expression;
pub mod literal;

pub use describe::describe;
pub use expression::{BinaryOperator, DescendantMode, Expression, ExpressionType};
pub use literal::{Literal, unquote};
