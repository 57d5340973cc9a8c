use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("No token recognized at position {position}: found '{found}'")]
    NoTokenRecognized { position: usize, found: char },
}
