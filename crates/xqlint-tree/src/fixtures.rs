//! Builders for small XQuery syntax trees used by tests across the
//! workspace.
//!
//! The shapes follow the XQuery 3.0 grammar closely enough for the checks
//! and queries under test: bindings carry a `$` token, a [`NodeKind::VarName`]
//! child, an optional [`NodeKind::TypeDeclaration`] and their bound
//! expression.

use crate::kind::NodeKind;
use crate::node::Node;

/// Builds `as <item_type>` on `line`.
#[must_use]
pub fn type_declaration(line: u32, item_type: &str) -> Node {
    Node::new(NodeKind::TypeDeclaration, line)
        .with_token("as")
        .with_child(
            Node::new(NodeKind::SequenceType, line)
                .with_child(Node::new(NodeKind::ItemType, line).with_token(item_type)),
        )
}

/// Builds `as <item_type><indicator>` on `line`.
#[must_use]
pub fn quantified_type_declaration(line: u32, item_type: &str, indicator: &str) -> Node {
    Node::new(NodeKind::TypeDeclaration, line)
        .with_token("as")
        .with_child(
            Node::new(NodeKind::SequenceType, line)
                .with_child(Node::new(NodeKind::ItemType, line).with_token(item_type))
                .with_child(Node::new(NodeKind::OccurrenceIndicator, line).with_token(indicator)),
        )
}

/// Builds `$<name>`.
#[must_use]
pub fn var_ref(line: u32, name: &str) -> Node {
    Node::new(NodeKind::VarRef, line)
        .with_token("$")
        .with_child(var_name(line, name))
}

/// Builds `for $<var> [as <item_type>] in $<source>`.
#[must_use]
pub fn for_binding(line: u32, var: &str, item_type: Option<&str>, source: &str) -> Node {
    let binding = Node::new(NodeKind::ForBinding, line)
        .with_token("$")
        .with_child(var_name(line, var));
    with_optional_type(binding, line, item_type)
        .with_token("in")
        .with_child(var_ref(line, source))
}

/// Builds `$<var> [as <item_type>] := <literal>`.
#[must_use]
pub fn let_binding(line: u32, var: &str, item_type: Option<&str>, literal: &str) -> Node {
    let binding = Node::new(NodeKind::LetBinding, line)
        .with_token("$")
        .with_child(var_name(line, var));
    with_optional_type(binding, line, item_type)
        .with_token(":=")
        .with_child(Node::new(NodeKind::Literal, line).with_token(literal))
}

/// Builds a FLWOR expression with one for clause, one let clause and a
/// return clause, starting on `line`.
///
/// The for binding sits on `line + 1` and the let binding on `line + 2`.
#[must_use]
pub fn flwor(line: u32, for_type: Option<&str>, let_type: Option<&str>) -> Node {
    let for_line = line + 1;
    let let_line = line + 2;
    Node::new(NodeKind::FlworExpr, line)
        .with_child(
            Node::new(NodeKind::ForClause, for_line)
                .with_token("for")
                .with_child(for_binding(for_line, "item", for_type, "items")),
        )
        .with_child(
            Node::new(NodeKind::LetClause, let_line)
                .with_token("let")
                .with_child(let_binding(let_line, "count", let_type, "1")),
        )
        .with_child(
            Node::new(NodeKind::ReturnClause, let_line + 1)
                .with_token("return")
                .with_child(var_ref(let_line + 1, "item")),
        )
}

/// Builds `declare variable $<name> [as <item_type>] := <literal>;`.
#[must_use]
pub fn var_decl(line: u32, name: &str, item_type: Option<&str>, literal: &str) -> Node {
    let decl = Node::new(NodeKind::VarDecl, line)
        .with_token("declare")
        .with_token("variable")
        .with_token("$")
        .with_child(var_name(line, name));
    with_optional_type(decl, line, item_type)
        .with_token(":=")
        .with_child(Node::new(NodeKind::Literal, line).with_token(literal))
        .with_token(";")
}

/// Builds `$<name> [as <item_type>]` as a function parameter.
#[must_use]
pub fn param(line: u32, name: &str, item_type: Option<&str>) -> Node {
    let node = Node::new(NodeKind::Param, line)
        .with_token("$")
        .with_child(Node::new(NodeKind::EqName, line).with_token(name));
    with_optional_type(node, line, item_type)
}

/// Builds `declare function <name>(<params>) [as <return_type>] { () };`.
///
/// Each parameter is given as a name and an optional item type.
#[must_use]
pub fn function_decl(
    line: u32,
    name: &str,
    params: &[(&str, Option<&str>)],
    return_type: Option<&str>,
) -> Node {
    let mut list = Node::new(NodeKind::ParamList, line).with_token("(");
    for (index, (param_name, item_type)) in params.iter().enumerate() {
        if index > 0 {
            list = list.with_token(",");
        }
        list = list.with_child(param(line, param_name, *item_type));
    }
    let decl = Node::new(NodeKind::FunctionDecl, line)
        .with_token("declare")
        .with_token("function")
        .with_child(Node::new(NodeKind::EqName, line).with_token(name))
        .with_child(list.with_token(")"));
    with_optional_type(decl, line, return_type)
        .with_child(
            Node::new(NodeKind::FunctionBody, line)
                .with_token("{")
                .with_child(Node::new(NodeKind::ParenthesizedExpr, line).with_token("(").with_token(")"))
                .with_token("}"),
        )
        .with_token(";")
}

/// Builds `function(<params>) { () }`.
#[must_use]
pub fn inline_function(line: u32, params: &[(&str, Option<&str>)]) -> Node {
    let mut list = Node::new(NodeKind::ParamList, line).with_token("(");
    for (param_name, item_type) in params {
        list = list.with_child(param(line, param_name, *item_type));
    }
    Node::new(NodeKind::InlineFunctionExpr, line)
        .with_token("function")
        .with_child(list.with_token(")"))
        .with_child(
            Node::new(NodeKind::FunctionBody, line)
                .with_token("{")
                .with_child(Node::new(NodeKind::ParenthesizedExpr, line).with_token("(").with_token(")"))
                .with_token("}"),
        )
}

/// Builds a main module whose prolog holds `declarations` and whose body is
/// `body`.
#[must_use]
pub fn main_module(declarations: Vec<Node>, body: Node) -> Node {
    let mut prolog = Node::new(NodeKind::Prolog, declarations.first().map_or(1, Node::line));
    for declaration in declarations {
        prolog = prolog.with_child(declaration);
    }
    Node::new(NodeKind::Module, 1).with_child(
        Node::new(NodeKind::MainModule, 1)
            .with_child(prolog)
            .with_child(Node::new(NodeKind::Expr, body.line()).with_child(body)),
    )
}

/// Builds the module of the missing-annotation walkthrough: an untyped for
/// binding on line 3 and a typed let binding on line 4.
#[must_use]
pub fn untyped_for_module() -> Node {
    main_module(Vec::new(), flwor(2, None, Some("xs:integer")))
}

fn var_name(line: u32, name: &str) -> Node {
    Node::new(NodeKind::VarName, line).with_child(Node::new(NodeKind::EqName, line).with_token(name))
}

fn with_optional_type(node: Node, line: u32, item_type: Option<&str>) -> Node {
    match item_type {
        Some(name) => node.with_child(type_declaration(line, name)),
        None => node,
    }
}
