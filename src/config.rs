use elpath_lexer::Dialect;
use elpath_parser::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Selects the punctuation the lexer recognises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// Literals only. Any path using `/`, `.`, `[` and so on fails to lex.
    Minimal,
    /// Every punctuation rune. (Default)
    #[default]
    Full,
}

impl DialectKind {
    pub fn dialect(self) -> Dialect {
        match self {
            DialectKind::Minimal => Dialect::minimal(),
            DialectKind::Full => Dialect::full(),
        }
    }
}

/// Compilation settings. Missing fields take their defaults when deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Defaults to [`DialectKind::Full`].
    pub dialect: DialectKind,
    /// When set, input left over after the first complete expression is an
    /// error instead of being ignored.
    ///
    /// Defaults to `true`.
    pub strict: bool,
    /// Nesting limit handed to the parser. Each `/` step costs two levels.
    ///
    /// Defaults to 512.
    pub max_depth: usize,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            dialect: DialectKind::Full,
            strict: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
