//! xqlint: lint checks for XQuery syntax trees.
//!
//! This crate runs rule checks over trees built with [`xqlint_tree`] and
//! re-exports its node model and query API, so most callers depend on this
//! crate alone.
//!
//! # Core types
//!
//! - [`Check`] and [`Visit`] for writing checks against one node and its
//!   ancestor path
//! - [`CheckRegistry`] for collecting checks under a rule repository
//! - [`Analyzer`] for running enabled checks over [`SourceUnit`]s
//! - [`Issue`], [`IssueSink`] and [`Reporter`] for collecting findings
//! - [`AnalysisConfig`] for the depth bound and disabled rules
//!
//! # Example
//!
//! ```
//! use xqlint::{AnalysisConfig, Analyzer, Node, NodeKind, SourceUnit};
//!
//! let decl = Node::new(NodeKind::VarDecl, 2)
//!     .with_token("declare")
//!     .with_token("variable")
//!     .with_token("$")
//!     .with_child(
//!         Node::new(NodeKind::VarName, 2)
//!             .with_child(Node::new(NodeKind::EqName, 2).with_token("limit")),
//!     )
//!     .with_token(":=")
//!     .with_child(Node::new(NodeKind::Literal, 2).with_token("10"))
//!     .with_token(";");
//! let root = Node::new(NodeKind::Prolog, 2).with_child(decl);
//!
//! let report = Analyzer::builtin(&AnalysisConfig::default())
//!     .analyze(&SourceUnit::new("limits.xq", root));
//!
//! let messages: Vec<_> = report.issues().iter().map(|issue| issue.message()).collect();
//! assert_eq!(messages, ["Declare a type for module variable $limit."]);
//! ```

mod analyzer;
mod check;
pub mod checks;
mod config;
mod error;
mod issue;
mod registry;
mod rule;

pub use analyzer::{AnalysisReport, Analyzer, CheckFailure, SourceUnit};
pub use check::{Check, Visit};
pub use config::{AnalysisConfig, DEFAULT_MAX_DEPTH};
pub use error::{CheckError, ConfigError};
pub use issue::{Issue, IssueSink, Reporter};
pub use registry::{CheckRegistry, REPOSITORY_KEY};
pub use rule::{Priority, RuleDefinition, RuleKey, RuleMetadata};

// Re-export the tree layer checks are written against.
pub use xqlint_tree::{
    Element, Node, NodeKind, QueryError, RawElement, Token, TreeError, find_first,
    find_first_in, find_first_or_fail, find_first_text,
};

#[cfg(test)]
mod tests;
