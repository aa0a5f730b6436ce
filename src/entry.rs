//! The key/value pair stored in every tree node.
//!
//! An [`Entry`] keeps its key and value as two ordinary fields. The key can
//! only be read once the entry exists; the value can be read and written
//! freely. This mirrors the entry of an ordered map without any aliasing of
//! the pair layout.

use std::fmt;

// =============================================================================
// Entry Definition
// =============================================================================

/// A key together with its associated value.
///
/// The key is immutable once the entry is constructed: there is no accessor
/// that hands out `&mut K`. The value is mutable in place through
/// [`value_mut`](Self::value_mut).
///
/// # Examples
///
/// ```rust
/// use avltree::Entry;
///
/// let mut entry = Entry::new(1, "one");
/// assert_eq!(entry.key(), &1);
///
/// *entry.value_mut() = "ONE";
/// assert_eq!(entry.value(), &"ONE");
/// assert_eq!(entry.to_string(), "{1,ONE}");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a shared reference to the key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a shared reference to the value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value.
    #[inline]
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the key and value as a pair of references.
    #[inline]
    #[must_use]
    pub const fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Splits the entry into a shared key reference and a mutable value
    /// reference. The key stays read-only.
    #[inline]
    pub const fn as_pair_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Consumes the entry, returning the owned key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Informational dump in the form `{key,value}`. Not a stable format.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{{},{}}}", self.key, self.value)
    }
}

// =============================================================================
// Tests
// =============================================================================
