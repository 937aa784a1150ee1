//! Constrained path search over syntax trees.
//!
//! A query is an ordered list of [`NodeKind`] constraints. Starting at a root
//! node, the search walks the tree in pre-order, leftmost first. Each node
//! whose kind equals the next required constraint consumes that constraint;
//! nodes of any other kind are skipped transparently. The first node that
//! consumes the last constraint is the result.
//!
//! Matching is a subsequence match along a single root-to-node path: the
//! satisfying nodes need not be in direct parent-child relationship, but each
//! one lies in the subtree of the previous one. Once a node has consumed a
//! constraint, its subtree is searched only for the remaining constraints;
//! there is no backtracking to retry the consumed step deeper down.

use crate::error::QueryError;
use crate::kind::NodeKind;
use crate::node::Node;

/// Finds the first node below `root` (inclusive) that satisfies the
/// constraint chain.
///
/// Returns `None` when no path matches or when `constraints` is empty.
///
/// # Example
///
/// ```
/// use xqlint_tree::{find_first, Node, NodeKind};
///
/// let flwor = Node::new(NodeKind::FlworExpr, 1).with_child(
///     Node::new(NodeKind::ForClause, 1).with_token("for").with_child(
///         Node::new(NodeKind::ForBinding, 1).with_token("$x"),
///     ),
/// );
///
/// let binding = find_first(&flwor, &[NodeKind::FlworExpr, NodeKind::ForBinding]);
/// assert_eq!(binding.map(Node::kind), Some(NodeKind::ForBinding));
/// assert!(find_first(&flwor, &[NodeKind::LetBinding]).is_none());
/// ```
#[must_use]
pub fn find_first<'a>(root: &'a Node, constraints: &[NodeKind]) -> Option<&'a Node> {
    let (required, rest) = constraints.split_first()?;

    if root.kind() == *required {
        if rest.is_empty() {
            return Some(root);
        }
        return find_in_children(root, rest);
    }

    find_in_children(root, constraints)
}

/// Like [`find_first`], but accepts an absent root.
#[must_use]
pub fn find_first_in<'a>(root: Option<&'a Node>, constraints: &[NodeKind]) -> Option<&'a Node> {
    root.and_then(|node| find_first(node, constraints))
}

/// Finds the first node satisfying the chain, failing when there is none.
///
/// Use this when the caller's invariants guarantee presence; use
/// [`find_first`] when absence is an expected outcome.
///
/// # Errors
///
/// Returns [`QueryError::EmptyConstraints`] for an empty chain, or
/// [`QueryError::NotFound`] naming the first constraint that the most
/// advanced search path could not satisfy.
pub fn find_first_or_fail<'a>(
    root: &'a Node,
    constraints: &[NodeKind],
) -> Result<&'a Node, QueryError> {
    let Some(target) = constraints.last() else {
        return Err(QueryError::EmptyConstraints);
    };

    find_first(root, constraints).ok_or_else(|| {
        let satisfied = deepest_progress(root, constraints, 0);
        let unmet = constraints.get(satisfied).unwrap_or(target);
        QueryError::not_found(*unmet, constraints)
    })
}

/// Resolves the chain and returns the matched node's text.
///
/// # Errors
///
/// Fails exactly when [`find_first_or_fail`] fails.
pub fn find_first_text(root: &Node, constraints: &[NodeKind]) -> Result<String, QueryError> {
    find_first_or_fail(root, constraints).map(Node::text)
}

fn find_in_children<'a>(node: &'a Node, constraints: &[NodeKind]) -> Option<&'a Node> {
    node.children()
        .find_map(|child| find_first(child, constraints))
}

/// Returns the largest number of leading constraints consumed along any
/// path the search explores.
fn deepest_progress(node: &Node, constraints: &[NodeKind], satisfied: usize) -> usize {
    let consumed = match constraints.get(satisfied) {
        Some(required) if node.kind() == *required => satisfied + 1,
        Some(_) => satisfied,
        None => return satisfied,
    };

    node.children()
        .map(|child| deepest_progress(child, constraints, consumed))
        .max()
        .unwrap_or(consumed)
}

impl Node {
    /// Finds the first node in this subtree satisfying the chain.
    ///
    /// See [`find_first`].
    #[must_use]
    pub fn find(&self, constraints: &[NodeKind]) -> Option<&Self> {
        find_first(self, constraints)
    }

    /// Finds the first node in this subtree satisfying the chain, or fails.
    ///
    /// # Errors
    ///
    /// See [`find_first_or_fail`].
    pub fn find_or_fail(&self, constraints: &[NodeKind]) -> Result<&Self, QueryError> {
        find_first_or_fail(self, constraints)
    }

    /// Returns the text of the first node satisfying the chain.
    ///
    /// # Errors
    ///
    /// See [`find_first_text`].
    pub fn find_text(&self, constraints: &[NodeKind]) -> Result<String, QueryError> {
        find_first_text(self, constraints)
    }
}
