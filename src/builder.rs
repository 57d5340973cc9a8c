use crate::config::{DialectKind, PathConfig};
use crate::error::PathError;
use elpath_ast::Literal;
use elpath_engine::{Element, Path, Predicate};
use elpath_lexer::Lexer;
use elpath_parser::Parser;

/// A builder for compiling `Path`s that share a configuration and predicate hooks.
pub struct PathBuilder<E> {
    config: PathConfig,
    predicate: Predicate<E>,
}

impl<E: Element> Default for PathBuilder<E> {
    fn default() -> Self {
        Self {
            config: PathConfig::default(),
            predicate: Predicate::new(),
        }
    }
}

impl<E: Element> PathBuilder<E> {
    /// Creates a builder with the default configuration and no predicate hooks.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: PathConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.config.max_depth = limit;
        self
    }

    /// Registers the hook answering `property == value` inside `.( ... )` clauses.
    pub fn with_equality<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E, &str, &Literal<'_>) -> bool + Send + Sync + 'static,
    {
        self.predicate = self.predicate.with_equality(hook);
        self
    }

    pub fn with_inequality<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E, &str, &Literal<'_>) -> bool + Send + Sync + 'static,
    {
        self.predicate = self.predicate.with_inequality(hook);
        self
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Lexes and parses `source` into a `Path` carrying this builder's hooks.
    /// The builder can be reused for any number of sources.
    pub fn build(&self, source: &str) -> Result<Path<E>, PathError> {
        let lexer = Lexer::new(source).with(self.config.dialect.dialect());
        let mut parser = Parser::new(lexer.iter()).with_max_depth(self.config.max_depth);
        let expression = parser.parse_expression()?;
        if self.config.strict {
            parser.finish()?;
        }
        log::debug!("compiled '{}' as {}", source, expression);
        Ok(Path::new(expression).with(self.predicate.clone()))
    }
}
