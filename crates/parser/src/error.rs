use elpath_ast::ExpressionType;
use elpath_lexer::{LexError, Token, TokenKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("No prefix rule for token {0}")]
    NoPrefixRule(Token),

    #[error("No infix rule for token {0}")]
    NoInfixRule(Token),

    #[error("Buffer underflow: no token left to consume")]
    BufferUnderflow,

    /// Raised when lookahead runs past the end of input. Precedence lookup
    /// treats this as the end of the current expression.
    #[error("Buffer overflow: lookahead ran past the end of input")]
    BufferOverflow,

    #[error("Unexpected token {found}, expected '{expected}'")]
    UnexpectedToken { expected: TokenKind, found: Token },

    #[error("Invalid boolean literal '{0}'")]
    InvalidBoolean(String),

    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("Invalid index access: empty brackets")]
    InvalidIndexAccess,

    #[error("Invalid equality property: expected a name, found {0}")]
    InvalidEqualityProperty(ExpressionType),

    #[error("Unexpected null: 'null' is reserved and is not a valid value")]
    UnexpectedNull,

    #[error("Expression nests deeper than the limit of {limit}")]
    TooDeep { limit: usize },

    #[error("Unexpected trailing input starting at {0}")]
    TrailingInput(Token),

    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
}
