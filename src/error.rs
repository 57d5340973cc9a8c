use elpath_engine::ExecError;
use elpath_parser::ParseError;
use thiserror::Error;

/// Any failure while compiling or executing a path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Execution failed: {0}")]
    Exec(#[from] ExecError),
}
