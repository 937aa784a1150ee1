//! Textual renderings of syntax trees for diagnostics and test snapshots.
//!
//! Structural nodes are labelled with their rule name and tokens with their
//! text. Whitespace in labels is escaped so every rendering stays on the
//! lines the layout chooses.

use std::fmt::{self, Write as _};

use crate::node::{Element, Node};

/// Renders a nested, depth-annotated view of a subtree.
///
/// A node with children renders on a fresh line indented by its depth as
/// `label<[depth]( child child ... )[depth]>`. Leaves render as their bare
/// label.
///
/// # Example
///
/// ```
/// use xqlint_tree::{debug_tree, Node, NodeKind};
///
/// let binding = Node::new(NodeKind::LetBinding, 1)
///     .with_token("$x")
///     .with_token(":=")
///     .with_child(Node::new(NodeKind::Literal, 1).with_token("1"));
///
/// assert_eq!(
///     debug_tree(&binding),
///     "\nlet-binding<[0]( $x := \n literal<[1]( 1 )[1]> )[0]>"
/// );
/// ```
#[must_use]
pub fn debug_tree(node: &Node) -> String {
    DebugTree(node).to_string()
}

/// Renders a LISP-style `(rule child child)` view of a subtree.
///
/// # Example
///
/// ```
/// use xqlint_tree::{string_tree, Node, NodeKind};
///
/// let call = Node::new(NodeKind::FunctionCall, 1)
///     .with_child(Node::new(NodeKind::EqName, 1).with_token("fn:count"))
///     .with_token("(")
///     .with_token(")");
///
/// assert_eq!(string_tree(&call), "(function-call (eq-name fn:count) ( ))");
/// ```
#[must_use]
pub fn string_tree(node: &Node) -> String {
    StringTree(node).to_string()
}

/// Escapes backslashes, newlines, carriage returns and tabs.
#[must_use]
pub fn escape_whitespace(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            other => buf.push(other),
        }
    }
    buf
}

/// Reverses [`escape_whitespace`].
///
/// Unknown escape sequences and a trailing lone backslash are kept verbatim.
#[must_use]
pub fn unescape_whitespace(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            buf.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => buf.push('\\'),
            Some('n') => buf.push('\n'),
            Some('r') => buf.push('\r'),
            Some('t') => buf.push('\t'),
            Some(other) => {
                buf.push('\\');
                buf.push(other);
            }
            None => buf.push('\\'),
        }
    }
    buf
}

fn write_label(out: &mut fmt::Formatter<'_>, element: &Element) -> fmt::Result {
    match element {
        Element::Node(node) => out.write_str(&escape_whitespace(node.name())),
        Element::Token(token) => out.write_str(&escape_whitespace(token.text())),
    }
}

struct DebugTree<'a>(&'a Node);

impl fmt::Display for DebugTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_debug_node(f, 0, self.0)
    }
}

fn write_debug_node(out: &mut fmt::Formatter<'_>, depth: usize, node: &Node) -> fmt::Result {
    let name = escape_whitespace(node.name());
    if node.is_leaf() {
        return out.write_str(&name);
    }

    write!(out, "\n{:depth$}{name}<[{depth}]( ", "")?;
    for (index, element) in node.elements().iter().enumerate() {
        if index > 0 {
            out.write_char(' ')?;
        }
        match element {
            Element::Node(child) => write_debug_node(out, depth + 1, child)?,
            Element::Token(_) => write_label(out, element)?,
        }
    }
    write!(out, " )[{depth}]>")
}

struct StringTree<'a>(&'a Node);

impl fmt::Display for StringTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_string_node(f, self.0)
    }
}

fn write_string_node(out: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    let name = escape_whitespace(node.name());
    if node.is_leaf() {
        return out.write_str(&name);
    }

    write!(out, "({name}")?;
    for element in node.elements() {
        out.write_char(' ')?;
        match element {
            Element::Node(child) => write_string_node(out, child)?,
            Element::Token(_) => write_label(out, element)?,
        }
    }
    out.write_char(')')
}

impl Node {
    /// Renders this subtree with [`debug_tree`].
    #[must_use]
    pub fn as_debug_tree(&self) -> String {
        debug_tree(self)
    }

    /// Renders this subtree with [`string_tree`].
    #[must_use]
    pub fn as_string_tree(&self) -> String {
        string_tree(self)
    }
}
