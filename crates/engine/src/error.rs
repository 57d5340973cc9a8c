use elpath_ast::ExpressionType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The executor reached a node it has no rule for in that position.
    #[error("Unexpected expression in path: {found}")]
    UnexpectedExpression { found: ExpressionType },
}
