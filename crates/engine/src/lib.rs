//! Path execution over host element trees.
//!
//! Hosts implement [`Element`] for their node handles, optionally supply
//! [`Predicate`] hooks for `.( ... )` clauses, and run a [`Path`] against a
//! root element to collect the matches.

pub mod element;
pub mod error;
pub mod path;
pub mod predicate;

pub use element::Element;
pub use error::ExecError;
pub use path::Path;
pub use predicate::{Predicate, PropertyHook};
