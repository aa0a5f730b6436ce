//! Ordered map based on an AVL tree.
//!
//! This module provides [`AvlTree`], a mutable ordered map that keeps the
//! heights of every node's two subtrees within one of each other.
//!
//! # Overview
//!
//! - O(log N) get
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) first/last
//! - O(1) len, `is_empty` and height
//!
//! Nodes are stored in an arena and linked by index. Each node caches its
//! height; after every structural change the tree walks from the changed
//! node back up to the root, refreshing heights and rotating wherever a
//! balance factor leaves `-1..=1`.
//!
//! # Examples
//!
//! ```rust
//! use avltree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(10, "ten");
//! tree.insert(20, "twenty");
//! tree.insert(30, "thirty");
//!
//! // The ascending insertion was rebalanced by a single left rotation.
//! assert_eq!(tree.height(), 2);
//!
//! let keys: Vec<&i32> = tree.keys().collect();
//! assert_eq!(keys, vec![&10, &20, &30]);
//! ```
//!
//! # Thread safety
//!
//! `AvlTree` does no internal locking. To share one between threads, guard
//! it with a single exclusive lock such as `Mutex<AvlTree<K, V>>`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

use crate::entry::Entry;
use crate::error::TreeError;
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::node::{Node, NodeArena, NodeIndex, Side};
use crate::rotation::Rotation;

// =============================================================================
// InsertOutcome
// =============================================================================

/// What [`AvlTree::insert`] did with the given key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InsertOutcome<V> {
    /// A new node was created for the key.
    Inserted,
    /// The key was already present; its value was overwritten in place.
    Updated {
        /// The value that was displaced.
        previous: V,
    },
}

impl<V> InsertOutcome<V> {
    /// Returns `true` if a new entry was created.
    #[inline]
    #[must_use]
    pub const fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }

    /// Returns `true` if an existing value was overwritten.
    #[inline]
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// Returns the displaced value, if any.
    #[inline]
    #[must_use]
    pub fn previous(self) -> Option<V> {
        match self {
            Self::Inserted => None,
            Self::Updated { previous } => Some(previous),
        }
    }
}

// =============================================================================
// AvlTree Definition
// =============================================================================

/// An ordered map backed by a height-balanced binary search tree.
///
/// Keys must implement `Ord`. Entries are kept in ascending key order and
/// every key is unique: inserting an existing key overwrites its value.
///
/// Node identity is never exposed. All access goes through keys, so
/// relocating an entry between nodes during removal is invisible to
/// callers.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `contains_key` | O(log N)          |
/// | `first`/`last` | O(log N)          |
/// | `len`          | O(1)              |
/// | `height`       | O(1)              |
///
/// # Examples
///
/// ```rust
/// use avltree::{AvlTree, InsertOutcome};
///
/// let mut tree = AvlTree::new();
/// assert_eq!(tree.insert(3, "three"), InsertOutcome::Inserted);
/// assert_eq!(tree.insert(3, "THREE"), InsertOutcome::Updated { previous: "three" });
///
/// assert_eq!(tree.get(&3), Some(&"THREE"));
/// assert_eq!(tree.remove(&3), Some("THREE"));
/// assert!(tree.is_empty());
/// ```
#[derive(Clone)]
pub struct AvlTree<K, V> {
    /// Storage for every live node
    pub(crate) nodes: NodeArena<K, V>,
    /// Root node of the tree, `None` when empty
    pub(crate) root: Option<NodeIndex>,
}

/// Which kind of mutation a retrace follows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Retrace {
    /// At most one rotation group is needed; above it only heights change.
    Insertion,
    /// Every ancestor may need its own rotation.
    Removal,
}

impl<K, V> AvlTree<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<i32, String> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            root: None,
        }
    }

    /// Creates an empty tree with room for `capacity` entries before the
    /// node storage has to grow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<u64, u64> = AvlTree::with_capacity(128);
    /// assert!(tree.capacity() >= 128);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of entries the tree can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// Slots freed by earlier removals count towards the reservation.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single entry.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<i32, ()> = (0..7).map(|key| (key, ())).collect();
    /// assert_eq!(tree.height(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.nodes.height_of(self.root)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(entries = self.len(), "clearing tree");

        self.nodes.clear();
        self.root = None;
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
    /// let entries: Vec<(&i32, &&str)> = tree.iter().collect();
    /// assert_eq!(entries, vec![(&1, &"a"), (&2, &"b")]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.root)
    }

    /// Returns an iterator over keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over values in ascending key order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Returns an iterator over entries in ascending key order with mutable
    /// access to the values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32, i32> = (1..=3).map(|key| (key, key)).collect();
    /// for (key, value) in tree.iter_mut() {
    ///     *value *= key;
    /// }
    /// assert_eq!(tree.values().copied().collect::<Vec<_>>(), vec![1, 4, 9]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let ranks = self.in_order_ranks();
        let length = self.len();
        IterMut::new(self.nodes.nodes_mut(), &ranks, length)
    }

    /// Returns an iterator over mutable values in ascending key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree: AvlTree<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    /// assert_eq!(tree.first_key_value(), Some((&1, &"a")));
    /// assert_eq!(tree.last_key_value(), Some((&3, &"c")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| self.nodes.node(self.nodes.leftmost(root)).entry.as_pair())
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.root
            .map(|root| self.nodes.node(self.nodes.rightmost(root)).entry.as_pair())
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.nodes.leftmost(self.root?);
        Some(self.remove_node(first).into_parts())
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.nodes.rightmost(self.root?);
        Some(self.remove_node(last).into_parts())
    }

    /// In-order position of every live node, indexed by arena slot.
    /// Vacant slots map to `usize::MAX`.
    fn in_order_ranks(&self) -> Vec<usize> {
        let mut ranks = vec![usize::MAX; self.nodes.slot_count()];
        for (rank, index) in self.iter().indices().enumerate() {
            ranks[index.get()] = rank;
        }
        ranks
    }

    // -------------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------------

    /// Removes the entry held by `target` and returns it.
    ///
    /// A node with two children is not unlinked itself. Its in-order
    /// successor, which has no left child, is unlinked instead, and the
    /// successor's entry moves into `target`.
    fn remove_node(&mut self, target: NodeIndex) -> Entry<K, V> {
        let node = self.nodes.node(target);
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.nodes.leftmost(right);
                let relocated = self.unlink(successor).entry;
                std::mem::replace(&mut self.nodes.node_mut(target).entry, relocated)
            }
            _ => self.unlink(target).entry,
        }
    }

    /// Detaches a node with at most one child, splicing that child into the
    /// node's former slot, then rebalances upward from the former parent.
    fn unlink(&mut self, index: NodeIndex) -> Node<K, V> {
        let node = self.nodes.node(index);
        debug_assert!(node.left.is_none() || node.right.is_none());
        let parent = node.parent;
        let child = node
            .sole_child()
            .and_then(|(side, _)| self.nodes.disconnect_child(index, side));

        match parent {
            Some(parent) => {
                let side = self.nodes.side_of(parent, index);
                self.nodes.disconnect_child(parent, side);
                if let Some(child) = child {
                    self.nodes.connect_child(parent, side, child);
                }
            }
            None => self.root = child,
        }

        let removed = self.nodes.release(index);
        self.retrace(parent, Retrace::Removal);
        removed
    }

    // -------------------------------------------------------------------------
    // Rebalancing
    // -------------------------------------------------------------------------

    /// Walks from `start` to the root, refreshing cached heights and rotating
    /// unbalanced nodes.
    ///
    /// After an insertion the first rotation restores the subtree to its old
    /// height, so the rest of the walk only refreshes heights. After a
    /// removal every ancestor is checked.
    fn retrace(&mut self, start: Option<NodeIndex>, mode: Retrace) {
        let mut current = start;
        let mut rotated = false;

        while let Some(index) = current {
            self.nodes.update_height(index);

            let subtree_root = if rotated && mode == Retrace::Insertion {
                debug_assert!(self.nodes.balance_factor(index).abs() <= 1);
                index
            } else if let Some(new_root) = self.rebalance(index) {
                rotated = true;
                new_root
            } else {
                index
            };

            current = self.nodes.node(subtree_root).parent;
        }
    }

    /// Rotates at `index` if its balance factor is outside `-1..=1` and
    /// returns the new subtree root.
    fn rebalance(&mut self, index: NodeIndex) -> Option<NodeIndex> {
        let balance = self.nodes.balance_factor(index);
        let heavier_side = if balance > 1 {
            Side::Left
        } else if balance < -1 {
            Side::Right
        } else {
            return None;
        };
        let heavier_child_balance = self
            .nodes
            .node(index)
            .child(heavier_side)
            .map_or(0, |child| self.nodes.balance_factor(child));
        let rotation = Rotation::classify(balance, heavier_child_balance)?;
        Some(self.apply_rotation(index, rotation))
    }
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Creates a tree containing a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::singleton(42, "answer");
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(&42), Some(&"answer"));
    /// ```
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        let mut tree = Self::new();
        tree.insert(key, value);
        tree
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is overwritten in place. No
    /// node is created and the shape of the tree does not change; the
    /// displaced value is returned in [`InsertOutcome::Updated`]. Otherwise a
    /// new leaf is linked in and the path back to the root is rebalanced with
    /// at most one single or double rotation.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::{AvlTree, InsertOutcome};
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1, "one").is_inserted());
    ///
    /// let outcome = tree.insert(1, "ONE");
    /// assert_eq!(outcome.previous(), Some("one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> InsertOutcome<V> {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.allocate(Node::leaf(key, value)));
            return InsertOutcome::Inserted;
        };

        loop {
            let node = self.nodes.node_mut(current);
            let side = match key.cmp(node.entry.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let previous = std::mem::replace(node.entry.value_mut(), value);
                    return InsertOutcome::Updated { previous };
                }
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let leaf = self.nodes.allocate(Node::leaf(key, value));
                    self.nodes.connect_child(current, side, leaf);
                    self.retrace(Some(current), Retrace::Insertion);
                    return InsertOutcome::Inserted;
                }
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::singleton("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(Entry::value)
    }

    /// Returns the stored entry for the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::singleton(7, "seven");
    /// let entry = tree.get_entry(&7).unwrap();
    /// assert_eq!(entry.to_string(), "{7,seven}");
    /// ```
    #[must_use]
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key).map(|index| &self.nodes.node(index).entry)
    }

    /// Returns the stored key and value for the key.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(Entry::as_pair)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let mut tree = AvlTree::singleton(1, 10);
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(tree.get(&1), Some(&15));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.locate(key)?;
        Some(self.nodes.node_mut(index).entry.value_mut())
    }

    /// Returns `true` if the tree contains the key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key).is_some()
    }

    /// Overwrites the value of an existing key and returns the old value.
    ///
    /// Unlike [`insert`](Self::insert), an absent key is not added.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if the key is not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::{AvlTree, TreeError};
    ///
    /// let mut tree = AvlTree::singleton(1, "one");
    /// assert_eq!(tree.replace(&1, "ONE"), Ok("one"));
    /// assert_eq!(tree.replace(&2, "two"), Err(TreeError::KeyNotFound));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn replace<Q>(&mut self, key: &Q, value: V) -> Result<V, TreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_mut(key)
            .map(|slot| std::mem::replace(slot, value))
            .ok_or(TreeError::KeyNotFound)
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// An absent key leaves the tree untouched.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32, &str> = [(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
    /// assert_eq!(tree.remove(&20), Some("b"));
    /// assert_eq!(tree.remove(&20), None);
    /// assert_eq!(tree.keys().collect::<Vec<_>>(), vec![&10, &30]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key, returning the stored key and value if it was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.locate(key)?;
        Some(self.remove_node(target).into_parts())
    }

    /// Keeps only the entries for which `predicate` returns `true`.
    ///
    /// # Complexity
    ///
    /// O(N log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avltree::AvlTree;
    ///
    /// let mut tree: AvlTree<i32, i32> = (0..10).map(|key| (key, key * 10)).collect();
    /// tree.retain(|key, _| key % 2 == 0);
    /// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let entries = std::mem::take(self);
        self.reserve(entries.len());
        for (key, mut value) in entries {
            if predicate(&key, &mut value) {
                self.insert(key, value);
            }
        }
    }

    /// Descends from the root to the node holding `key`.
    fn locate<Q>(&self, key: &Q) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(index) = current {
            let node = self.nodes.node(index);
            current = match key.cmp(node.entry.key().borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
        }
        None
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for AvlTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for AvlTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let ranks = self.in_order_ranks();
        IntoIter::new(self.nodes, &ranks)
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut AvlTree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, Q, V> Index<&Q> for AvlTree<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in AvlTree"),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTree<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for AvlTree<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for AvlTree<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// Hashes the length, then every entry in key order, so equal trees hash
/// equally regardless of their insertion history.
impl<K: Hash, V: Hash> Hash for AvlTree<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AvlTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
