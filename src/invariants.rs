//! Structural self-check for [`AvlTree`].
//!
//! Walks the whole tree once and reports the first broken invariant.

use crate::error::TreeError;
use crate::node::NodeIndex;
use crate::tree::AvlTree;

/// Mutable state threaded through the in-order walk.
struct Walk<'a, K> {
    /// In-order position the next visited node will get.
    position: usize,
    previous_key: Option<&'a K>,
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Verifies every structural invariant of the tree.
    ///
    /// Checks that keys ascend strictly in order, that every balance factor
    /// is within `-1..=1`, that every cached height matches its children,
    /// that every parent back-reference names the node holding it, and that
    /// [`len`](Self::len) matches the number of reachable nodes.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in in-order.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<i32, ()> = (0..100).map(|key| (key, ())).collect();
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), TreeError> {
        let mut walk = Walk {
            position: 0,
            previous_key: None,
        };
        if let Some(root) = self.root {
            self.check_subtree(root, None, &mut walk)?;
        }

        if walk.position == self.len() {
            Ok(())
        } else {
            Err(TreeError::LengthMismatch {
                recorded: self.len(),
                counted: walk.position,
            })
        }
    }

    /// Checks the subtree rooted at `index` and returns its actual height.
    fn check_subtree<'a>(
        &'a self,
        index: NodeIndex,
        expected_parent: Option<NodeIndex>,
        walk: &mut Walk<'a, K>,
    ) -> Result<usize, TreeError> {
        // A cycle would otherwise never terminate.
        if walk.position > self.len() {
            return Err(TreeError::LengthMismatch {
                recorded: self.len(),
                counted: walk.position,
            });
        }

        let node = self.nodes.node(index);
        let left_height = match node.left {
            Some(left) => self.check_subtree(left, Some(index), walk)?,
            None => 0,
        };

        let position = walk.position;
        walk.position += 1;

        if node.parent != expected_parent {
            return Err(TreeError::BrokenParentLink { position });
        }
        let key = node.entry.key();
        if walk.previous_key.is_some_and(|previous| previous >= key) {
            return Err(TreeError::OutOfOrder { position });
        }
        walk.previous_key = Some(key);

        let right_height = match node.right {
            Some(right) => self.check_subtree(right, Some(index), walk)?,
            None => 0,
        };

        let actual = 1 + left_height.max(right_height);
        if node.height != actual {
            return Err(TreeError::StaleHeight {
                position,
                cached: node.height,
                actual,
            });
        }

        let balance = self.nodes.balance_factor(index);
        if balance.abs() > 1 {
            return Err(TreeError::Unbalanced { position, balance });
        }

        Ok(actual)
    }
}

// =============================================================================
// Tests
// =============================================================================
