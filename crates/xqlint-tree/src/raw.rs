//! Dynamically-typed parse trees as produced by an external parser.
//!
//! Parsers hand over trees whose nodes are identified by rule name strings.
//! [`Node::from_raw`] checks every name against the closed [`NodeKind`] set
//! once, so analysis code never sees an unrecognised construct.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::kind::NodeKind;
use crate::node::{Element, Node, Token};

/// A parse tree element keyed by rule name.
///
/// The serialised form is plain JSON:
///
/// ```json
/// { "rule": "for-binding", "line": 3, "children": [ { "token": "$x", "line": 3 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawElement {
    /// A grammar rule node.
    Rule {
        /// The grammar rule name.
        rule: String,
        /// One-based source line.
        line: u32,
        /// Child elements in source order.
        #[serde(default)]
        children: Vec<RawElement>,
    },
    /// A leaf token.
    Token {
        /// The token text.
        token: String,
        /// One-based source line.
        line: u32,
    },
}

impl RawElement {
    /// Parses a raw tree from a JSON document.
    ///
    /// Each tree level nests two JSON values (the element object and its
    /// `children` array), so `serde_json`'s default recursion limit would
    /// reject trees deeper than about 64 levels. This parser lifts that
    /// limit; nesting depth is bounded only by the calling thread's stack.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidJson`] for malformed JSON, for elements
    /// that are neither rules nor tokens, and for trailing content.
    ///
    /// # Example
    ///
    /// ```
    /// use xqlint_tree::RawElement;
    ///
    /// let raw = RawElement::from_json(r#"{"rule": "prolog", "line": 2}"#)?;
    /// assert_eq!(raw.line(), 2);
    /// # Ok::<(), xqlint_tree::TreeError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self, TreeError> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let raw = Self::deserialize(&mut deserializer).map_err(invalid_json)?;
        deserializer.end().map_err(invalid_json)?;
        Ok(raw)
    }

    /// Returns the source line of the element.
    #[must_use]
    pub const fn line(&self) -> u32 {
        match self {
            Self::Rule { line, .. } | Self::Token { line, .. } => *line,
        }
    }
}

fn invalid_json(err: serde_json::Error) -> TreeError {
    TreeError::invalid_json(err.to_string())
}

impl Node {
    /// Parses a JSON raw tree and converts it into a typed tree.
    ///
    /// # Errors
    ///
    /// Fails as [`RawElement::from_json`] or [`Node::from_raw`] do.
    pub fn from_json(text: &str) -> Result<Self, TreeError> {
        Self::from_raw(RawElement::from_json(text)?)
    }

    /// Converts a raw parse tree into a typed tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownRule`] if any rule name falls outside the
    /// closed [`NodeKind`] set, or [`TreeError::TokenRoot`] if the root is a
    /// token.
    ///
    /// # Example
    ///
    /// ```
    /// use xqlint_tree::{Node, NodeKind, RawElement};
    ///
    /// let raw: RawElement = serde_json::from_str(
    ///     r#"{"rule": "let-binding", "line": 4, "children": [{"token": "$x", "line": 4}]}"#,
    /// )?;
    /// let node = Node::from_raw(raw)?;
    /// assert_eq!(node.kind(), NodeKind::LetBinding);
    /// assert_eq!(node.text(), "$x");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_raw(raw: RawElement) -> Result<Self, TreeError> {
        match raw {
            RawElement::Rule {
                rule,
                line,
                children,
            } => {
                let kind =
                    NodeKind::from_str(&rule).map_err(|_| TreeError::unknown_rule(rule, line))?;
                let mut node = Self::new(kind, line);
                for child in children {
                    node.push(Element::from_raw(child)?);
                }
                Ok(node)
            }
            RawElement::Token { line, .. } => Err(TreeError::token_root(line)),
        }
    }
}

impl Element {
    fn from_raw(raw: RawElement) -> Result<Self, TreeError> {
        match raw {
            RawElement::Token { token, line } => Ok(Self::Token(Token::new(token, line))),
            rule @ RawElement::Rule { .. } => Node::from_raw(rule).map(Self::Node),
        }
    }
}

impl TryFrom<RawElement> for Node {
    type Error = TreeError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
