//! Error type for tree operations and invariant diagnostics.
//!
//! Plain lookups and removals report a missing key with `None`. APIs that
//! return a `Result` use [`TreeError::KeyNotFound`] instead. The remaining
//! variants are produced by [`AvlTree::check_invariants`] and name the
//! offending node by its in-order position, so the error does not depend on
//! the key type.
//!
//! [`AvlTree::check_invariants`]: crate::AvlTree::check_invariants
//!
//! # Examples
//!
//! ```rust
//! use avltree::{AvlTree, TreeError};
//!
//! let mut tree: AvlTree<i32, &str> = AvlTree::new();
//! assert_eq!(tree.replace(&1, "one"), Err(TreeError::KeyNotFound));
//! println!("{}", TreeError::KeyNotFound);
//! ```

use std::fmt;

// =============================================================================
// TreeError
// =============================================================================

/// Errors reported by [`AvlTree`](crate::AvlTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The requested key is not stored in the tree.
    KeyNotFound,

    /// The key at `position` is not strictly greater than its in-order
    /// predecessor.
    OutOfOrder {
        /// In-order position of the offending node.
        position: usize,
    },

    /// The node at `position` has a balance factor outside `-1..=1`.
    Unbalanced {
        /// In-order position of the offending node.
        position: usize,
        /// `height(left) - height(right)` at that node.
        balance: isize,
    },

    /// The cached height of the node at `position` is out of date.
    StaleHeight {
        /// In-order position of the offending node.
        position: usize,
        /// Height stored in the node.
        cached: usize,
        /// Height recomputed from the children.
        actual: usize,
    },

    /// The parent back-reference of the node at `position` does not name the
    /// node holding it as a child.
    BrokenParentLink {
        /// In-order position of the offending node.
        position: usize,
    },

    /// The recorded entry count disagrees with the number of reachable nodes.
    LengthMismatch {
        /// Count reported by `len()`.
        recorded: usize,
        /// Nodes reached by walking from the root.
        counted: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(formatter, "key not found"),
            Self::OutOfOrder { position } => {
                write!(formatter, "key at in-order position {position} is out of order")
            }
            Self::Unbalanced { position, balance } => write!(
                formatter,
                "node at in-order position {position} is unbalanced (balance factor {balance})"
            ),
            Self::StaleHeight {
                position,
                cached,
                actual,
            } => write!(
                formatter,
                "node at in-order position {position} caches height {cached}, actual height is {actual}"
            ),
            Self::BrokenParentLink { position } => write!(
                formatter,
                "node at in-order position {position} has a broken parent link"
            ),
            Self::LengthMismatch { recorded, counted } => write!(
                formatter,
                "tree records {recorded} entries but {counted} nodes are reachable"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

// =============================================================================
// Tests
// =============================================================================
