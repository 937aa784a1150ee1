//! Error types for checks and analysis configuration.

use thiserror::Error;
use xqlint_tree::QueryError;

/// Errors raised by a check while inspecting a node.
///
/// The analyzer records these as failures of the offending check and keeps
/// analysing the rest of the unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// A strict query inside the check found no match.
    #[error("query failed: {0}")]
    Query(#[from] QueryError),

    /// The node does not have the shape the check relies on.
    #[error("malformed {kind} at line {line}: {reason}")]
    MalformedNode {
        /// Rule name of the node.
        kind: &'static str,
        /// Source line of the node.
        line: u32,
        /// What was missing or unexpected.
        reason: String,
    },
}

impl CheckError {
    /// Creates a malformed node error.
    #[must_use]
    pub fn malformed_node(kind: &'static str, line: u32, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            kind,
            line,
            reason: reason.into(),
        }
    }
}

/// Errors encountered while loading an [`AnalysisConfig`](crate::AnalysisConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid analysis configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The depth bound must allow at least the root node.
    #[error("max_depth must be at least 1, got {value}")]
    InvalidMaxDepth {
        /// The rejected value.
        value: usize,
    },
}

impl ConfigError {
    /// Creates an invalid depth error.
    #[must_use]
    pub const fn invalid_max_depth(value: usize) -> Self {
        Self::InvalidMaxDepth { value }
    }
}
