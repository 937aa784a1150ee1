//! The check interface and the per-node view checks receive.

use xqlint_tree::{Node, NodeKind};

use crate::error::CheckError;
use crate::issue::Reporter;
use crate::rule::RuleDefinition;

/// A node under visit together with its ancestor path.
///
/// Nodes do not store parent links; the analyzer builds the path while it
/// descends. Ancestors are ordered from the root to the direct parent.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'v, 't> {
    node: &'t Node,
    ancestors: &'v [&'t Node],
}

impl<'v, 't> Visit<'v, 't> {
    /// Creates a visit of `node` below `ancestors`.
    #[must_use]
    pub const fn new(node: &'t Node, ancestors: &'v [&'t Node]) -> Self {
        Self { node, ancestors }
    }

    /// Creates a visit of a root node.
    #[must_use]
    pub const fn root(node: &'t Node) -> Self {
        Self {
            node,
            ancestors: &[],
        }
    }

    /// Returns the visited node.
    #[must_use]
    pub const fn node(&self) -> &'t Node {
        self.node
    }

    /// Returns the ancestor path, root first.
    #[must_use]
    pub const fn ancestors(&self) -> &'v [&'t Node] {
        self.ancestors
    }

    /// Returns the direct parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&'t Node> {
        self.ancestors.last().copied()
    }

    /// Returns the depth of the visited node; the root has depth 0.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Returns the nearest ancestor whose kind is one of `kinds`.
    #[must_use]
    pub fn nearest_ancestor(&self, kinds: &[NodeKind]) -> Option<&'t Node> {
        self.ancestors
            .iter()
            .rev()
            .find(|ancestor| kinds.contains(&ancestor.kind()))
            .copied()
    }
}

/// A lint rule evaluated once per node in a pre-order traversal.
///
/// Checks hold no per-unit state, so one registry can serve concurrent
/// analyses.
pub trait Check: Send + Sync {
    /// Describes the rule this check implements.
    fn definition(&self) -> RuleDefinition;

    /// Inspects one node, raising issues through `reporter`.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] when the node cannot be inspected. The
    /// analyzer records the failure and continues with other nodes.
    fn enter_node(&self, visit: &Visit<'_, '_>, reporter: &mut Reporter<'_>)
    -> Result<(), CheckError>;
}
