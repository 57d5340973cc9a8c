//! Defines the host-side contract for the trees a path is executed against.

/// A node in a host-defined tree.
///
/// Elements are handles: cloning one must be cheap and must not copy the
/// subtree. The executor never mutates elements and only ever walks downward.
pub trait Element: Clone {
    /// The name used by name filters such as `node` in `/node/subnode`.
    fn name(&self) -> &str;

    /// The ordered direct children of this element. May be computed per call.
    fn children(&self) -> Vec<Self>;
}

// Test utilities - publicly available for integration testing in downstream crates
pub mod tests {
    use super::*;
    use crate::predicate::Predicate;
    use elpath_ast::Literal;
    use std::sync::Arc;

    #[derive(Debug)]
    struct MemoryNode {
        name: String,
        children: Vec<MemoryElement>,
    }

    /// A shared, immutable in-memory element.
    #[derive(Debug, Clone)]
    pub struct MemoryElement(Arc<MemoryNode>);

    impl MemoryElement {
        pub fn new(name: impl Into<String>) -> Self {
            Self::with_children(name, Vec::new())
        }

        pub fn with_children(name: impl Into<String>, children: Vec<MemoryElement>) -> Self {
            MemoryElement(Arc::new(MemoryNode {
                name: name.into(),
                children,
            }))
        }

        /// True when both handles point at the same node.
        pub fn same(&self, other: &MemoryElement) -> bool {
            Arc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Element for MemoryElement {
        fn name(&self) -> &str {
            &self.0.name
        }

        fn children(&self) -> Vec<Self> {
            self.0.children.clone()
        }
    }

    /// Creates the standard fixture:
    /// ```text
    /// root
    ///   node        (x nodes)
    ///     subnode   (x subnodes, under every node)
    /// ```
    pub fn create_test_tree(nodes: usize, subnodes: usize) -> MemoryElement {
        let children = (0..nodes)
            .map(|_| {
                let leaves = (0..subnodes).map(|_| MemoryElement::new("subnode")).collect();
                MemoryElement::with_children("node", leaves)
            })
            .collect();
        MemoryElement::with_children("root", children)
    }

    /// An equality hook that understands the `Name` property only.
    pub fn name_predicate() -> Predicate<MemoryElement> {
        Predicate::new().with_equality(
            |element: &MemoryElement, property: &str, value: &Literal<'_>| {
                property == "Name" && value.as_str() == Some(element.name())
            },
        )
    }
}
