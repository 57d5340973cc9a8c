//! Host hooks answering `property == literal` questions during predicate clauses.

use elpath_ast::Literal;
use std::fmt;
use std::sync::Arc;

/// `(element, property, literal) -> keep?`
pub type PropertyHook<E> = Arc<dyn Fn(&E, &str, &Literal<'_>) -> bool + Send + Sync>;

/// The comparison hooks consulted by `.( ... )` clauses.
///
/// Without an equality hook every element fails every equality, so any clause
/// with at least one comparison yields nothing. The inequality hook is carried
/// for hosts that register one but no clause shape reaches it yet.
pub struct Predicate<E> {
    equality: Option<PropertyHook<E>>,
    inequality: Option<PropertyHook<E>>,
}

impl<E> Predicate<E> {
    pub fn new() -> Self {
        Self {
            equality: None,
            inequality: None,
        }
    }

    pub fn with_equality<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E, &str, &Literal<'_>) -> bool + Send + Sync + 'static,
    {
        self.equality = Some(Arc::new(hook));
        self
    }

    pub fn with_inequality<F>(mut self, hook: F) -> Self
    where
        F: Fn(&E, &str, &Literal<'_>) -> bool + Send + Sync + 'static,
    {
        self.inequality = Some(Arc::new(hook));
        self
    }

    /// Evaluates the equality hook, `false` when none is registered.
    pub fn equality(&self, element: &E, property: &str, value: &Literal<'_>) -> bool {
        self.equality
            .as_ref()
            .is_some_and(|hook| hook(element, property, value))
    }

    pub fn has_equality(&self) -> bool {
        self.equality.is_some()
    }

    pub fn has_inequality(&self) -> bool {
        self.inequality.is_some()
    }
}

impl<E> Default for Predicate<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self {
            equality: self.equality.clone(),
            inequality: self.inequality.clone(),
        }
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("equality", &self.has_equality())
            .field("inequality", &self.has_inequality())
            .finish()
    }
}
