//! Typed XQuery syntax trees and constrained path search for the xqlint
//! rule engine.
//!
//! This crate provides the tree layer that lint checks run against:
//!
//! - **Node model** via [`Node`] and the closed [`NodeKind`] set, built
//!   directly or converted from a parser's [`RawElement`] tree
//! - **Path queries** via [`find_first`] and its strict variants, which locate
//!   the first node in document order whose ancestry satisfies an ordered
//!   list of kind constraints
//! - **Tree rendering** via [`debug_tree`] and [`string_tree`] for
//!   diagnostics and snapshots
//!
//! # Path queries
//!
//! A constraint chain such as `[flwor-expr, let-binding, item-type]` reads
//! "somewhere below the root, a FLWOR expression, somewhere inside it a let
//! binding, and somewhere inside that an item type". Unrelated nodes between
//! the satisfying ones are skipped, and the leftmost match in pre-order wins.
//!
//! ```
//! use xqlint_tree::{Node, NodeKind};
//!
//! let binding = Node::new(NodeKind::LetBinding, 4)
//!     .with_token("$count")
//!     .with_child(
//!         Node::new(NodeKind::TypeDeclaration, 4).with_token("as").with_child(
//!             Node::new(NodeKind::SequenceType, 4)
//!                 .with_child(Node::new(NodeKind::ItemType, 4).with_token("xs:integer")),
//!         ),
//!     );
//! let flwor = Node::new(NodeKind::FlworExpr, 3).with_child(
//!     Node::new(NodeKind::LetClause, 4).with_token("let").with_child(binding),
//! );
//!
//! let item_type = flwor.find_text(&[
//!     NodeKind::FlworExpr,
//!     NodeKind::LetBinding,
//!     NodeKind::ItemType,
//! ])?;
//! assert_eq!(item_type, "xs:integer");
//! # Ok::<(), xqlint_tree::QueryError>(())
//! ```

mod error;
mod kind;
mod node;
mod query;
mod raw;
mod render;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use error::{QueryError, TreeError};
pub use kind::NodeKind;
pub use node::{Element, Node, Token, joined_text};
pub use query::{find_first, find_first_in, find_first_or_fail, find_first_text};
pub use raw::RawElement;
pub use render::{debug_tree, escape_whitespace, string_tree, unescape_whitespace};

#[cfg(test)]
mod tests;
