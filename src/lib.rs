//! XPath-like path expressions for locating nodes in host-defined trees.
//!
//! ```ignore
//! let path = elpath::PathBuilder::new()
//!     .with_equality(|el: &MyElement, property: &str, value: &elpath::Literal<'_>| {
//!         property == "Name" && value.as_str() == Some(el.name())
//!     })
//!     .build(r#"/node[0]/subnode.(@Name=="subnode")"#)?;
//! let matches = path.execute(&root)?;
//! ```
//!
//! The pipeline is lexer ([`elpath_lexer`]) → Pratt parser ([`elpath_parser`])
//! → expression tree ([`elpath_ast`]) → executor ([`elpath_engine`]).

pub mod builder;
pub mod config;
pub mod error;

pub use builder::PathBuilder;
pub use config::{DialectKind, PathConfig};
pub use error::PathError;

pub use elpath_ast::{BinaryOperator, DescendantMode, Expression, ExpressionType, Literal};
pub use elpath_engine::{Element, ExecError, Path, Predicate};
pub use elpath_lexer::{Dialect, LexError, Lexer, Token, TokenKind};
pub use elpath_parser::{DEFAULT_MAX_DEPTH, ParseError, Parser};

/// Compiles `source` with the default configuration and no predicate hooks.
pub fn compile<E: Element>(source: &str) -> Result<Path<E>, PathError> {
    PathBuilder::new().build(source)
}
