//! Executes a parsed expression against an element tree.
//!
//! Execution is a walk down the right spine of the expression. At every step
//! the current expression decides how the candidate list (seeded with the
//! root) is filtered or expanded and which sub-expression comes next.

use super::element::Element;
use super::error::ExecError;
use super::predicate::Predicate;
use elpath_ast::{BinaryOperator, DescendantMode, Expression};
use std::fmt;

/// The expression every filtering step hands back once its work is done.
static WILDCARD: Expression = Expression::Wildcard;

/// A compiled path: an immutable expression plus the host's predicate hooks.
#[derive(Debug, Clone)]
pub struct Path<E> {
    expression: Expression,
    predicate: Predicate<E>,
}

impl<E: Element> Path<E> {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression,
            predicate: Predicate::new(),
        }
    }

    /// Replaces the predicate hooks.
    pub fn with(mut self, predicate: Predicate<E>) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn predicate(&self) -> &Predicate<E> {
        &self.predicate
    }

    /// Writes the canonical, fully parenthesised rendering of the expression.
    pub fn describe<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        elpath_ast::describe(&self.expression, out)
    }

    /// Returns every element below `root` the path selects, in document order
    /// and without deduplication.
    pub fn execute(&self, root: &E) -> Result<Vec<E>, ExecError> {
        let mut candidates = vec![root.clone()];

        // A lone `*` means every descendant and a lone name means matching
        // children; neither may select the root itself.
        let mut current = match &self.expression {
            Expression::Wildcard => {
                candidates = subtree(&candidates);
                &WILDCARD
            }
            name @ Expression::Name(_) => {
                candidates = children(&candidates);
                name
            }
            other => other,
        };

        loop {
            log::debug!(
                "executing {} over {} candidate(s)",
                current.expression_type(),
                candidates.len()
            );
            match current {
                Expression::Wildcard => break,
                Expression::Descendants { mode, expr } => {
                    candidates = match mode {
                        DescendantMode::All => subtree(&candidates),
                        DescendantMode::Context => children(&candidates),
                    };
                    current = expr.as_ref();
                }
                Expression::Binary {
                    left,
                    op:
                        BinaryOperator::NameDescendants
                        | BinaryOperator::Instance
                        | BinaryOperator::Branch,
                    right,
                } => {
                    let right: &Expression = right;
                    candidates = self.select(left, candidates)?;
                    current = match right {
                        Expression::Name(_)
                        | Expression::Binary {
                            op: BinaryOperator::NameDescendants | BinaryOperator::Instance,
                            ..
                        } => {
                            candidates = children(&candidates);
                            right
                        }
                        Expression::Wildcard
                        | Expression::Binary {
                            op: BinaryOperator::Branch,
                            ..
                        } => right,
                        Expression::Binary {
                            op: BinaryOperator::IndexAccess,
                            ..
                        } => {
                            candidates = self.select(right, children(&candidates))?;
                            &WILDCARD
                        }
                        Expression::Group(items) => {
                            candidates = self.clause(items, candidates)?;
                            &WILDCARD
                        }
                        other => return Err(unexpected(other)),
                    };
                }
                Expression::Name(name) => {
                    candidates = by_name(candidates, name);
                    break;
                }
                other => return Err(unexpected(other)),
            }
        }

        log::debug!("path selected {} element(s)", candidates.len());
        Ok(candidates)
    }

    /// Applies the left operand of a traversal step to the candidates.
    fn select(&self, left: &Expression, candidates: Vec<E>) -> Result<Vec<E>, ExecError> {
        match left {
            Expression::Name(name) => Ok(by_name(candidates, name)),
            Expression::Binary {
                left: target,
                op: BinaryOperator::IndexAccess,
                right: index,
            } => {
                let name = target.as_name().ok_or_else(|| unexpected(target))?;
                let position = index.index().ok_or_else(|| unexpected(index))?;
                let selected = usize::try_from(position)
                    .ok()
                    .and_then(|position| by_name(candidates, name).into_iter().nth(position));
                Ok(selected.into_iter().collect())
            }
            Expression::Group(items) => self.clause(items, candidates),
            other => Err(unexpected(other)),
        }
    }

    /// Filters by a `( [@] name == literal ... )` clause. Every comparison must
    /// hold for an element to survive; an empty clause keeps everything.
    fn clause(&self, items: &[Expression], mut candidates: Vec<E>) -> Result<Vec<E>, ExecError> {
        let comparisons = match items {
            [attribute @ Expression::Attribute] => return Err(unexpected(attribute)),
            [Expression::Attribute, rest @ ..] => rest,
            _ => items,
        };

        for comparison in comparisons {
            let Expression::Binary {
                left,
                op: BinaryOperator::Equality,
                right,
            } = comparison
            else {
                return Err(unexpected(comparison));
            };
            let property = left.as_name().ok_or_else(|| unexpected(left))?;
            let value = right.literal().ok_or_else(|| unexpected(right))?;
            candidates.retain(|element| self.predicate.equality(element, property, &value));
            log::debug!("{}=={} kept {} element(s)", property, value, candidates.len());
        }

        Ok(candidates)
    }
}

fn unexpected(expr: &Expression) -> ExecError {
    ExecError::UnexpectedExpression {
        found: expr.expression_type(),
    }
}

fn by_name<E: Element>(candidates: Vec<E>, name: &str) -> Vec<E> {
    candidates
        .into_iter()
        .filter(|element| element.name() == name)
        .collect()
}

fn children<E: Element>(candidates: &[E]) -> Vec<E> {
    candidates.iter().flat_map(|element| element.children()).collect()
}

/// Pre-order closure below each candidate, one candidate's subtree at a time.
fn subtree<E: Element>(candidates: &[E]) -> Vec<E> {
    let mut found = Vec::new();
    for candidate in candidates {
        let mut stack: Vec<E> = candidate.children().into_iter().rev().collect();
        while let Some(element) = stack.pop() {
            stack.extend(element.children().into_iter().rev());
            found.push(element);
        }
    }
    found
}
