//! Tree vertices and the arena that stores them.
//!
//! Every node lives in a slot of a [`NodeArena`] and is addressed by a
//! [`NodeIndex`]. Child links express ownership: a node owns the subtrees
//! reachable through `left` and `right`. The `parent` link is a plain index
//! used only to walk upwards; it never keeps a node alive.
//!
//! Released slots are threaded into a free list and reused by later
//! allocations, so indices stay stable for the lifetime of a node.

use crate::entry::Entry;

// =============================================================================
// Index and Side
// =============================================================================

/// Position of a node inside a [`NodeArena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeIndex(usize);

impl NodeIndex {
    #[inline]
    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// Which child slot of a node is addressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure of the AVL tree.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) entry: Entry<K, V>,
    /// `1 + max(height(left), height(right))`, absent children count as 0.
    pub(crate) height: usize,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
    /// Back-reference for upward navigation only.
    pub(crate) parent: Option<NodeIndex>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf of height 1.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            entry: Entry::new(key, value),
            height: 1,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    const fn child_slot(&mut self, side: Side) -> &mut Option<NodeIndex> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Returns the only child of a node that has at most one.
    #[inline]
    pub(crate) fn sole_child(&self) -> Option<(Side, NodeIndex)> {
        match (self.left, self.right) {
            (Some(left), None) => Some((Side::Left, left)),
            (None, Some(right)) => Some((Side::Right, right)),
            _ => None,
        }
    }
}

// =============================================================================
// Arena
// =============================================================================

#[derive(Clone, Debug)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant { next_free: Option<NodeIndex> },
}

/// Slot storage for the nodes of a single tree.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<NodeIndex>,
    occupied: usize,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            occupied: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.occupied
    }

    /// Number of nodes the arena can hold without reallocating.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        let reusable = self.slots.len() - self.occupied;
        self.slots.reserve(additional.saturating_sub(reusable));
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }

    /// Stores `node`, reusing a vacant slot when one exists.
    pub(crate) fn allocate(&mut self, node: Node<K, V>) -> NodeIndex {
        self.occupied += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index.get()];
                if let Slot::Vacant { next_free } = *slot {
                    self.free_head = next_free;
                }
                *slot = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    ///
    /// The caller must already have unlinked the node from the tree.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node<K, V> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index.get()], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("released a vacant arena slot"),
        }
    }

    #[inline]
    pub(crate) fn node(&self, index: NodeIndex) -> &Node<K, V> {
        match &self.slots[index.get()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node index"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node<K, V> {
        match &mut self.slots[index.get()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node index"),
        }
    }

    /// Mutable access to every live node, paired with its index, in slot
    /// order.
    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = (NodeIndex, &mut Node<K, V>)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(position, slot)| match slot {
                Slot::Occupied(node) => Some((NodeIndex(position), node)),
                Slot::Vacant { .. } => None,
            })
    }

    /// Consumes the arena, yielding every live node with its index.
    pub(crate) fn into_nodes(self) -> impl Iterator<Item = (NodeIndex, Node<K, V>)> {
        self.slots
            .into_iter()
            .enumerate()
            .filter_map(|(position, slot)| match slot {
                Slot::Occupied(node) => Some((NodeIndex(position), node)),
                Slot::Vacant { .. } => None,
            })
    }

    /// Number of slots, live or vacant. Every valid index is below this.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    // -------------------------------------------------------------------------
    // Height Bookkeeping
    // -------------------------------------------------------------------------

    /// Height of an optional subtree, 0 when absent.
    #[inline]
    pub(crate) fn height_of(&self, index: Option<NodeIndex>) -> usize {
        index.map_or(0, |index| self.node(index).height)
    }

    /// The height a node should have given its children's cached heights.
    #[inline]
    pub(crate) fn computed_height(&self, index: NodeIndex) -> usize {
        let node = self.node(index);
        1 + self.height_of(node.left).max(self.height_of(node.right))
    }

    pub(crate) fn update_height(&mut self, index: NodeIndex) {
        let height = self.computed_height(index);
        self.node_mut(index).height = height;
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub(crate) fn balance_factor(&self, index: NodeIndex) -> isize {
        let node = self.node(index);
        signed(self.height_of(node.left)) - signed(self.height_of(node.right))
    }

    // -------------------------------------------------------------------------
    // Linking
    // -------------------------------------------------------------------------

    /// Attaches `child` as `parent`'s child on `side`, points the child back at
    /// `parent` and refreshes `parent`'s height.
    ///
    /// Whatever occupied the slot is overwritten; detach it first.
    pub(crate) fn connect_child(&mut self, parent: NodeIndex, side: Side, child: NodeIndex) {
        *self.node_mut(parent).child_slot(side) = Some(child);
        self.node_mut(child).parent = Some(parent);
        self.update_height(parent);
    }

    /// Empties `parent`'s slot on `side` and returns the detached subtree.
    ///
    /// Nothing is promoted into the emptied slot.
    pub(crate) fn disconnect_child(&mut self, parent: NodeIndex, side: Side) -> Option<NodeIndex> {
        let child = self.node_mut(parent).child_slot(side).take();
        if let Some(child) = child {
            self.node_mut(child).parent = None;
        }
        self.update_height(parent);
        child
    }

    /// Which side of `parent` holds `child`.
    #[inline]
    pub(crate) fn side_of(&self, parent: NodeIndex, child: NodeIndex) -> Side {
        if self.node(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Follows left links from `index` to the smallest node of its subtree.
    pub(crate) fn leftmost(&self, index: NodeIndex) -> NodeIndex {
        self.outermost(index, Side::Left)
    }

    /// Follows right links from `index` to the largest node of its subtree.
    pub(crate) fn rightmost(&self, index: NodeIndex) -> NodeIndex {
        self.outermost(index, Side::Right)
    }

    fn outermost(&self, mut index: NodeIndex, side: Side) -> NodeIndex {
        while let Some(next) = self.node(index).child(side) {
            index = next;
        }
        index
    }
}

#[allow(clippy::cast_possible_wrap)]
#[inline]
const fn signed(height: usize) -> isize {
    // Heights are bounded by ~1.44 * log2(len), far below isize::MAX.
    height as isize
}

// =============================================================================
// Tests
// =============================================================================
