//! Tests for the per-node visit view.

use xqlint_tree::fixtures;

use crate::{Node, NodeKind, Visit};

#[test]
fn root_visit_has_no_ancestors() {
    let root = fixtures::untyped_for_module();
    let visit = Visit::root(&root);

    assert!(visit.parent().is_none());
    assert_eq!(visit.depth(), 0);
    assert!(visit.nearest_ancestor(&[NodeKind::Module]).is_none());
}

#[test]
fn ancestors_are_searched_nearest_first() {
    let outer = Node::new(NodeKind::FlworExpr, 1);
    let clause = Node::new(NodeKind::ReturnClause, 2);
    let inner = Node::new(NodeKind::FlworExpr, 3);
    let binding = fixtures::let_binding(4, "x", None, "1");
    let ancestors = [&outer, &clause, &inner];

    let visit = Visit::new(&binding, &ancestors);
    assert_eq!(visit.depth(), 3);
    assert_eq!(visit.parent().map(Node::line), Some(3));

    let nearest = visit.nearest_ancestor(&[NodeKind::FlworExpr]).expect("ancestor");
    assert_eq!(nearest.line(), 3);

    let either = visit
        .nearest_ancestor(&[NodeKind::ReturnClause, NodeKind::Module])
        .expect("ancestor");
    assert_eq!(either.kind(), NodeKind::ReturnClause);
    assert!(visit.nearest_ancestor(&[NodeKind::Prolog]).is_none());
}
