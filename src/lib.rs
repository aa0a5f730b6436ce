//! # avltree
//!
//! An ordered key-value map backed by an AVL tree.
//!
//! ## Overview
//!
//! [`AvlTree`] keeps its entries sorted by key and guarantees O(log N)
//! lookup, insertion and removal. After every structural change it walks
//! from the changed node back to the root, refreshing cached subtree heights
//! and rotating wherever the two subtrees of a node differ in height by more
//! than one.
//!
//! - **Entries**: [`Entry`] pairs an immutable key with a mutable value.
//! - **Nodes**: stored in an arena and linked by index. Children are owned
//!   links, the parent link is a back-reference used only to walk upwards.
//! - **Rotations**: single left, single right, left-right and right-left.
//! - **Traversal**: lazy, double-ended, in-order iterators.
//!
//! The tree never hands out node handles, only key-based access, so moving
//! an entry between nodes during removal is not observable.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events for rotations and bulk
//!   operations.
//!
//! ## Example
//!
//! ```rust
//! use avltree::prelude::*;
//!
//! let mut tree = AvlTree::new();
//! for key in [30, 20, 10] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! // A single right rotation made 20 the root.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.get(&10).map(String::as_str), Some("10"));
//!
//! assert_eq!(tree.remove(&20), Some("20".to_string()));
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![10, 30]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use avltree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::entry::Entry;
    pub use crate::error::TreeError;
    pub use crate::tree::{AvlTree, InsertOutcome};
}

mod entry;
mod error;
mod invariants;
mod node;
mod rotation;
mod tree;

pub mod iter;

pub use entry::Entry;
pub use error::TreeError;
pub use tree::{AvlTree, InsertOutcome};

static_assertions::assert_impl_all!(AvlTree<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(AvlTree<std::rc::Rc<i32>, ()>: Send, Sync);
