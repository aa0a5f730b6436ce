//! In-order iterators over an [`AvlTree`](crate::AvlTree).
//!
//! [`Iter`] is lazy: it keeps one stack of pending ancestors per end and
//! visits each node once, so a full traversal is O(N) and each step is
//! amortised O(1). The stacks live inline for trees of practical height.
//!
//! [`IterMut`] and [`IntoIter`] need every node at once (mutable borrows of
//! distinct arena slots, or ownership of the whole arena), so they order the
//! entries up front and then hand them out.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::node::{Node, NodeArena, NodeIndex, Side};

/// Pending ancestors kept inline before spilling to the heap. An AVL tree
/// with 32 levels already holds millions of entries.
const INLINE_DEPTH: usize = 32;

type Stack = SmallVec<[NodeIndex; INLINE_DEPTH]>;

// =============================================================================
// Index Walker
// =============================================================================

/// Double-ended in-order walk yielding node indices.
pub(crate) struct IndexWalker<'a, K, V> {
    nodes: &'a NodeArena<K, V>,
    /// Left spine still to visit from the front; top is the next index.
    front: Stack,
    /// Right spine still to visit from the back; top is the next index.
    back: Stack,
    remaining: usize,
}

impl<'a, K, V> IndexWalker<'a, K, V> {
    fn new(nodes: &'a NodeArena<K, V>, root: Option<NodeIndex>) -> Self {
        let mut walker = Self {
            nodes,
            front: Stack::new(),
            back: Stack::new(),
            remaining: nodes.len(),
        };
        walker.push_spine(root, Side::Left);
        walker.push_spine(root, Side::Right);
        walker
    }

    /// Pushes `start` and its chain of `side` descendants onto the stack for
    /// the matching end.
    fn push_spine(&mut self, start: Option<NodeIndex>, side: Side) {
        let stack = match side {
            Side::Left => &mut self.front,
            Side::Right => &mut self.back,
        };
        let mut current = start;
        while let Some(index) = current {
            stack.push(index);
            current = self.nodes.node(index).child(side);
        }
    }

    const fn nodes(&self) -> &'a NodeArena<K, V> {
        self.nodes
    }
}

impl<K, V> Clone for IndexWalker<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> Iterator for IndexWalker<'_, K, V> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front.pop()?;
        self.remaining -= 1;
        self.push_spine(self.nodes.node(index).right, Side::Left);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IndexWalker<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back.pop()?;
        self.remaining -= 1;
        self.push_spine(self.nodes.node(index).left, Side::Right);
        Some(index)
    }
}

impl<K, V> ExactSizeIterator for IndexWalker<'_, K, V> {}

// =============================================================================
// Iter
// =============================================================================

/// An iterator over the entries of an [`AvlTree`](crate::AvlTree) in
/// ascending key order.
pub struct Iter<'a, K, V> {
    walker: IndexWalker<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(nodes: &'a NodeArena<K, V>, root: Option<NodeIndex>) -> Self {
        Self {
            walker: IndexWalker::new(nodes, root),
        }
    }

    /// The same traversal, yielding node indices.
    pub(crate) fn indices(self) -> IndexWalker<'a, K, V> {
        self.walker
    }

    fn pair(&self, index: NodeIndex) -> (&'a K, &'a V) {
        self.walker.nodes().node(index).entry.as_pair()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            walker: self.walker.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.walker.next().map(|index| self.pair(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walker.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.walker.next_back().map(|index| self.pair(index))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.walker.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

// =============================================================================
// Keys / Values
// =============================================================================

/// An iterator over the keys of an [`AvlTree`](crate::AvlTree) in ascending
/// order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of an [`AvlTree`](crate::AvlTree) in
/// ascending key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

// =============================================================================
// IterMut / ValuesMut
// =============================================================================

/// An iterator over the entries of an [`AvlTree`](crate::AvlTree) in
/// ascending key order, with mutable access to the values.
pub struct IterMut<'a, K, V> {
    entries: std::vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    /// Orders the live nodes by `ranks`, the in-order position of each arena
    /// slot.
    pub(crate) fn new(
        nodes: impl Iterator<Item = (NodeIndex, &'a mut Node<K, V>)>,
        ranks: &[usize],
        length: usize,
    ) -> Self {
        let mut ordered: Vec<Option<(&'a K, &'a mut V)>> =
            std::iter::repeat_with(|| None).take(length).collect();
        for (index, node) in nodes {
            ordered[ranks[index.get()]] = Some(node.entry.as_pair_mut());
        }
        Self {
            entries: ordered.into_iter().flatten().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over mutable values of an [`AvlTree`](crate::AvlTree) in
/// ascending key order.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    pub(crate) const fn new(inner: IterMut<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over the entries of an [`AvlTree`](crate::AvlTree) in
/// ascending key order.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    /// Takes every node out of `nodes`, ordered by `ranks`.
    pub(crate) fn new(nodes: NodeArena<K, V>, ranks: &[usize]) -> Self {
        let mut ordered: Vec<Option<(K, V)>> =
            std::iter::repeat_with(|| None).take(nodes.len()).collect();
        for (index, node) in nodes.into_nodes() {
            ordered[ranks[index.get()]] = Some(node.entry.into_parts());
        }
        Self {
            entries: ordered.into_iter().flatten().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Tests
// =============================================================================
