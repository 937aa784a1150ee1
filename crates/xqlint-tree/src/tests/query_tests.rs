//! Tests for the constrained path search.

use std::ptr;

use rstest::{fixture, rstest};

use crate::fixtures;
use crate::{
    Node, NodeKind, QueryError, find_first, find_first_in, find_first_or_fail, find_first_text,
};

/// A main module with a typed variable declaration and a FLWOR body whose
/// for binding (line 3) is untyped and let binding (line 4) is typed.
#[fixture]
fn module() -> Node {
    fixtures::main_module(
        vec![fixtures::var_decl(1, "limit", Some("xs:integer"), "10")],
        fixtures::flwor(2, None, Some("xs:integer")),
    )
}

/// Collects every structural node in pre-order.
fn pre_order(root: &Node) -> Vec<&Node> {
    let mut nodes = vec![root];
    for child in root.children() {
        nodes.extend(pre_order(child));
    }
    nodes
}

#[rstest]
#[case(NodeKind::Module)]
#[case(NodeKind::VarDecl)]
#[case(NodeKind::ForBinding)]
#[case(NodeKind::LetBinding)]
#[case(NodeKind::ItemType)]
#[case(NodeKind::EqName)]
fn single_constraint_returns_first_in_pre_order(module: Node, #[case] kind: NodeKind) {
    let expected = pre_order(&module)
        .into_iter()
        .find(|node| node.kind() == kind)
        .expect("kind present in fixture");
    let found = find_first(&module, &[kind]).expect("match");
    assert!(ptr::eq(found, expected));
}

#[rstest]
fn single_constraint_matches_root_itself(module: Node) {
    let found = find_first(&module, &[NodeKind::Module]).expect("match");
    assert!(ptr::eq(found, &module));
}

#[rstest]
fn chain_skips_unrelated_ancestors(module: Node) {
    let found = find_first(&module, &[NodeKind::FlworExpr, NodeKind::ItemType]).expect("match");
    assert_eq!(found.line(), 4);
    assert_eq!(found.text(), "xs:integer");
}

#[rstest]
fn chain_result_lies_below_each_satisfied_step(module: Node) {
    let flwor = find_first(&module, &[NodeKind::FlworExpr]).expect("flwor");
    let binding = find_first(&module, &[NodeKind::FlworExpr, NodeKind::LetBinding]).expect("let");

    assert!(pre_order(flwor).iter().any(|node| ptr::eq(*node, binding)));
}

#[rstest]
fn first_satisfied_step_scopes_the_rest(module: Node) {
    // The prolog's variable declaration holds the first item type in the
    // document, but the chain requires it inside a FLWOR expression.
    let found = find_first(&module, &[NodeKind::ItemType]).expect("match");
    assert_eq!(found.line(), 1);

    let scoped = find_first(&module, &[NodeKind::FlworExpr, NodeKind::ItemType]).expect("match");
    assert_eq!(scoped.line(), 4);
}

#[test]
fn inserting_unrelated_nodes_keeps_the_match() {
    let plain = fixtures::flwor(2, Some("xs:string"), None);
    let wrapped = Node::new(NodeKind::Module, 1)
        .with_child(Node::new(NodeKind::VersionDecl, 1).with_token("xquery"))
        .with_child(
            Node::new(NodeKind::ParenthesizedExpr, 2)
                .with_token("(")
                .with_child(Node::new(NodeKind::Literal, 2).with_token("0"))
                .with_child(plain.clone())
                .with_token(")"),
        );
    let chain = [NodeKind::ForClause, NodeKind::ForBinding, NodeKind::ItemType];

    let before = find_first(&plain, &chain).expect("match");
    let after = find_first(&wrapped, &chain).expect("match");
    assert_eq!(before, after);
    assert_eq!(after.text(), "xs:string");
}

#[test]
fn leftmost_match_wins() {
    let clause = Node::new(NodeKind::LetClause, 1)
        .with_child(fixtures::let_binding(1, "a", Some("xs:string"), "'a'"))
        .with_child(fixtures::let_binding(2, "b", Some("xs:integer"), "2"));

    let found = find_first(&clause, &[NodeKind::LetBinding, NodeKind::ItemType]).expect("match");
    assert_eq!(found.text(), "xs:string");
}

#[test]
fn step_satisfied_by_nested_node_of_same_kind() {
    let inner = fixtures::flwor(3, Some("node()"), None);
    let outer = Node::new(NodeKind::FlworExpr, 1).with_child(
        Node::new(NodeKind::ReturnClause, 2)
            .with_token("return")
            .with_child(inner),
    );

    let found = find_first(
        &outer,
        &[NodeKind::FlworExpr, NodeKind::FlworExpr, NodeKind::ItemType],
    )
    .expect("match");
    assert_eq!(found.text(), "node()");
}

#[rstest]
fn missing_first_kind_yields_none(module: Node) {
    assert!(find_first(&module, &[NodeKind::TypeswitchExpr, NodeKind::CaseClause]).is_none());
}

#[rstest]
fn empty_chain_yields_none(module: Node) {
    assert!(find_first(&module, &[]).is_none());
    assert_eq!(
        find_first_or_fail(&module, &[]),
        Err(QueryError::EmptyConstraints)
    );
}

#[test]
fn absent_root_yields_none() {
    let binding = fixtures::for_binding(3, "x", None, "xs");
    assert!(find_first_in(binding.type_annotation(), &[NodeKind::ItemType]).is_none());
    assert!(find_first_in(Some(&binding), &[NodeKind::VarRef]).is_some());
}

#[rstest]
#[case::missing_start(
    vec![NodeKind::TypeswitchExpr, NodeKind::CaseClause],
    NodeKind::TypeswitchExpr
)]
#[case::missing_middle(
    vec![NodeKind::FlworExpr, NodeKind::WhereClause, NodeKind::VarRef],
    NodeKind::WhereClause
)]
#[case::missing_target(
    vec![NodeKind::FlworExpr, NodeKind::ForBinding, NodeKind::ItemType],
    NodeKind::ItemType
)]
fn strict_query_names_the_unmet_kind(
    module: Node,
    #[case] chain: Vec<NodeKind>,
    #[case] unmet: NodeKind,
) {
    let err = find_first_or_fail(&module, &chain).expect_err("no match");
    assert_eq!(err.unmet(), Some(unmet));
    assert_eq!(err, QueryError::not_found(unmet, &chain));
}

#[rstest]
fn not_found_message_lists_the_chain(module: Node) {
    let err = find_first_or_fail(&module, &[NodeKind::FlworExpr, NodeKind::OrderByClause])
        .expect_err("no match");
    assert_eq!(
        err.to_string(),
        "order-by-clause not found (searching flwor-expr > order-by-clause)"
    );
}

#[rstest]
fn text_of_first_match(module: Node) {
    let text = find_first_text(&module, &[NodeKind::VarDecl, NodeKind::VarName]).expect("text");
    assert_eq!(text, "limit");
    assert!(find_first_text(&module, &[NodeKind::CaseClause]).is_err());
}

#[rstest]
fn node_methods_delegate(module: Node) {
    let chain = [NodeKind::LetBinding, NodeKind::VarName];
    assert_eq!(module.find(&chain), find_first(&module, &chain));
    assert_eq!(module.find_text(&chain).expect("text"), "count");
    assert!(module.find_or_fail(&[NodeKind::DefaultClause]).is_err());
}
