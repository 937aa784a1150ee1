//! Typed syntax tree nodes.
//!
//! A [`Node`] owns its children exclusively, so a tree is acyclic by
//! construction. Children are held as [`Element`] values in source order:
//! structural child nodes and the leaf tokens between them. Traversal and
//! path queries only visit structural children; tokens contribute to the
//! rendered text and to the debug formatter.

use crate::kind::NodeKind;

/// A leaf token of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    line: u32,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    /// Returns the token text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the one-based source line of the token.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// A child element of a node: either a structural node or a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A structural child node.
    Node(Node),
    /// A leaf token.
    Token(Token),
}

impl Element {
    /// Returns the structural node, if this element is one.
    #[must_use]
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    /// Returns the number of child elements (zero for tokens).
    #[must_use]
    pub const fn child_count(&self) -> usize {
        match self {
            Self::Node(node) => node.elements.len(),
            Self::Token(_) => 0,
        }
    }

    fn push_text(&self, buf: &mut String) {
        match self {
            Self::Node(node) => node.push_text(buf),
            Self::Token(token) => buf.push_str(&token.text),
        }
    }
}

/// One construct of a parsed syntax tree.
///
/// # Example
///
/// ```
/// use xqlint_tree::{Node, NodeKind};
///
/// let binding = Node::new(NodeKind::ForBinding, 3)
///     .with_token("$item")
///     .with_token("in")
///     .with_child(Node::new(NodeKind::VarRef, 3).with_token("$items"));
///
/// assert_eq!(binding.kind(), NodeKind::ForBinding);
/// assert_eq!(binding.text(), "$itemin$items");
/// assert_eq!(binding.children().count(), 1);
/// assert!(binding.type_annotation().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    line: u32,
    elements: Vec<Element>,
}

impl Node {
    /// Creates a node with no children.
    #[must_use]
    pub const fn new(kind: NodeKind, line: u32) -> Self {
        Self {
            kind,
            line,
            elements: Vec::new(),
        }
    }

    /// Appends a structural child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.elements.push(Element::Node(child));
        self
    }

    /// Appends a token on the same line as this node.
    #[must_use]
    pub fn with_token(self, text: impl Into<String>) -> Self {
        let line = self.line;
        self.with_token_at(text, line)
    }

    /// Appends a token on an explicit line.
    #[must_use]
    pub fn with_token_at(mut self, text: impl Into<String>, line: u32) -> Self {
        self.elements.push(Element::Token(Token::new(text, line)));
        self
    }

    /// Appends an already constructed element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Returns the grammar construct this node represents.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the grammar rule name of this node.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.rule_name()
    }

    /// Returns the one-based source line where the construct starts.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns all child elements, tokens included, in source order.
    #[must_use]
    pub const fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    /// Iterates over the structural children in source order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Self> + '_ {
        self.elements.iter().filter_map(Element::as_node)
    }

    /// Returns the first direct structural child of `kind`.
    ///
    /// Unlike [`Node::find`], this never looks below the direct children.
    #[must_use]
    pub fn child(&self, kind: NodeKind) -> Option<&Self> {
        self.children().find(|child| child.kind == kind)
    }

    /// Returns whether this node has no child elements at all.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the source text spanned by this node.
    ///
    /// Token texts are concatenated without separators, so whitespace that
    /// the parser discarded is not reconstructed.
    #[must_use]
    pub fn text(&self) -> String {
        let mut buf = String::new();
        self.push_text(&mut buf);
        buf
    }

    /// Returns the declared type annotation of this node, if the construct
    /// allows one and the source declares it.
    #[must_use]
    pub fn type_annotation(&self) -> Option<&Self> {
        self.child(self.kind.annotation_kind()?)
    }

    /// Returns the text of the item type named by the declared annotation.
    ///
    /// For `$x as element()*` this is `element()`: the occurrence indicator
    /// is not part of the item type.
    #[must_use]
    pub fn type_text(&self) -> Option<String> {
        self.type_annotation()?
            .find(&[NodeKind::SequenceType, NodeKind::ItemType])
            .map(Self::text)
    }

    fn push_text(&self, buf: &mut String) {
        for element in &self.elements {
            element.push_text(buf);
        }
    }
}

/// Concatenates the text of a list of nodes.
#[must_use]
pub fn joined_text<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> String {
    let mut buf = String::new();
    for node in nodes {
        node.push_text(&mut buf);
    }
    buf
}
