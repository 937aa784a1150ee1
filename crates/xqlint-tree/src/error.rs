//! Error types for tree construction and path queries.

use thiserror::Error;

use crate::kind::NodeKind;

/// Errors raised while converting a raw parse tree into typed nodes.
///
/// These indicate a mismatch between the parser's grammar and the closed
/// [`NodeKind`] set. They are internal-consistency faults rather than
/// recoverable conditions and callers should propagate them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The raw tree names a grammar rule outside the closed kind set.
    #[error("unknown grammar rule '{rule}' at line {line}")]
    UnknownRule {
        /// The rule name that was not recognised.
        rule: String,
        /// Source line of the offending node.
        line: u32,
    },

    /// A raw tree document is not valid JSON or does not match the raw
    /// element shape.
    #[error("invalid raw tree JSON: {message}")]
    InvalidJson {
        /// The parser's description of the problem.
        message: String,
    },

    /// The root of a raw tree is a token rather than a rule node.
    #[error("raw tree root at line {line} is a token, expected a rule node")]
    TokenRoot {
        /// Source line of the token.
        line: u32,
    },
}

impl TreeError {
    /// Creates an unknown rule error.
    #[must_use]
    pub fn unknown_rule(rule: impl Into<String>, line: u32) -> Self {
        Self::UnknownRule {
            rule: rule.into(),
            line,
        }
    }

    /// Creates an invalid JSON error.
    #[must_use]
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }

    /// Creates a token root error.
    #[must_use]
    pub const fn token_root(line: u32) -> Self {
        Self::TokenRoot { line }
    }
}

/// Errors from the strict path query operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QueryError {
    /// No node satisfies the constraint chain.
    #[error("{unmet} not found (searching {})", render_chain(.chain))]
    NotFound {
        /// The first constraint the deepest explored path failed to satisfy.
        unmet: NodeKind,
        /// The complete constraint chain that was searched for.
        chain: Vec<NodeKind>,
    },

    /// The constraint chain was empty.
    #[error("empty constraint chain")]
    EmptyConstraints,
}

impl QueryError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(unmet: NodeKind, chain: &[NodeKind]) -> Self {
        Self::NotFound {
            unmet,
            chain: chain.to_vec(),
        }
    }

    /// Returns the unmet constraint for a not-found error.
    #[must_use]
    pub const fn unmet(&self) -> Option<NodeKind> {
        match self {
            Self::NotFound { unmet, .. } => Some(*unmet),
            Self::EmptyConstraints => None,
        }
    }
}

fn render_chain(chain: &[NodeKind]) -> String {
    chain
        .iter()
        .map(|kind| kind.rule_name())
        .collect::<Vec<_>>()
        .join(" > ")
}
