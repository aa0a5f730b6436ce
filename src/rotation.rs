//! Rotation primitives and the rebalancing case analysis.
//!
//! A rotation is a local relinking that lowers the height difference at a
//! node while keeping the in-order sequence of keys unchanged. Every
//! primitive here returns the index of the node that now roots the rotated
//! subtree.
//!
//! ```text
//!         p                 l
//!        / \               / \
//!       l   c   ==>       a   p
//!      / \    rotate_right   / \
//!     a   b                 b   c
//! ```

use std::fmt;

use crate::node::{NodeIndex, Side};
use crate::tree::AvlTree;

// =============================================================================
// Rotation Kinds
// =============================================================================

/// The four ways a subtree can be restructured.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Rotation {
    /// Single left rotation at a right-right heavy node.
    Left,
    /// Single right rotation at a left-left heavy node.
    Right,
    /// Left rotation at the left child, then right rotation at the node.
    LeftRight,
    /// Right rotation at the right child, then left rotation at the node.
    RightLeft,
}

impl fmt::Display for Rotation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
        };
        formatter.write_str(name)
    }
}

impl Rotation {
    /// Picks the rotation that fixes a node with balance factor `balance`,
    /// given the balance factor of its heavier child.
    ///
    /// Returns `None` when `|balance| <= 1`.
    pub(crate) const fn classify(balance: isize, heavier_child_balance: isize) -> Option<Self> {
        if balance > 1 {
            if heavier_child_balance >= 0 {
                Some(Self::Right)
            } else {
                Some(Self::LeftRight)
            }
        } else if balance < -1 {
            if heavier_child_balance <= 0 {
                Some(Self::Left)
            } else {
                Some(Self::RightLeft)
            }
        } else {
            None
        }
    }
}

// =============================================================================
// Primitives
// =============================================================================

impl<K, V> AvlTree<K, V> {
    /// Single right rotation at `pivot`. The left child must exist.
    pub(crate) fn rotate_right(&mut self, pivot: NodeIndex) -> NodeIndex {
        self.rotate(pivot, Side::Left)
    }

    /// Single left rotation at `pivot`. The right child must exist.
    pub(crate) fn rotate_left(&mut self, pivot: NodeIndex) -> NodeIndex {
        self.rotate(pivot, Side::Right)
    }

    /// Left rotation at `pivot`'s left child, then right rotation at `pivot`.
    pub(crate) fn rotate_left_right(&mut self, pivot: NodeIndex) -> NodeIndex {
        if let Some(left) = self.nodes.node(pivot).left {
            self.rotate_left(left);
        }
        self.rotate_right(pivot)
    }

    /// Right rotation at `pivot`'s right child, then left rotation at `pivot`.
    pub(crate) fn rotate_right_left(&mut self, pivot: NodeIndex) -> NodeIndex {
        if let Some(right) = self.nodes.node(pivot).right {
            self.rotate_right(right);
        }
        self.rotate_left(pivot)
    }

    /// Applies `rotation` at `pivot` and returns the new subtree root.
    pub(crate) fn apply_rotation(&mut self, pivot: NodeIndex, rotation: Rotation) -> NodeIndex {
        #[cfg(feature = "tracing")]
        tracing::trace!(%rotation, pivot = pivot.get(), "rebalancing subtree");

        match rotation {
            Rotation::Left => self.rotate_left(pivot),
            Rotation::Right => self.rotate_right(pivot),
            Rotation::LeftRight => self.rotate_left_right(pivot),
            Rotation::RightLeft => self.rotate_right_left(pivot),
        }
    }

    /// Lifts `pivot`'s child on `heavy` into `pivot`'s place.
    ///
    /// With `heavy == Side::Left` this is a right rotation. The lifted child's
    /// inner subtree moves across to `pivot`, `pivot` becomes the lifted
    /// child's outer child, and heights are refreshed bottom-up: `pivot`
    /// first, then the lifted child.
    fn rotate(&mut self, pivot: NodeIndex, heavy: Side) -> NodeIndex {
        let light = heavy.opposite();
        let Some(lifted) = self.nodes.disconnect_child(pivot, heavy) else {
            return pivot;
        };
        let parent = self.nodes.node(pivot).parent;

        if let Some(inner) = self.nodes.disconnect_child(lifted, light) {
            self.nodes.connect_child(pivot, heavy, inner);
        }

        match parent {
            Some(parent) => {
                let side = self.nodes.side_of(parent, pivot);
                self.nodes.connect_child(parent, side, lifted);
            }
            None => {
                self.nodes.node_mut(lifted).parent = None;
                self.root = Some(lifted);
            }
        }

        self.nodes.connect_child(lifted, light, pivot);
        lifted
    }
}

// =============================================================================
// Tests
// =============================================================================
