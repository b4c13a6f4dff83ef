use std::{borrow::Borrow, hash::Hash};

use crate::probing_table::{Iter, LookupError, ProbingTable};

/// A bijective map: a one-to-one association where keys and values are
/// both unique and either side can look up the other.
///
/// The map owns two [`ProbingTable`]s, one from key to value and one from
/// value to key, and keeps them exact mirrors of each other: `(k, v)` is
/// live in the forward table exactly when `(v, k)` is live in the backward
/// table. Every mutating operation either updates both tables inside the
/// call or leaves both untouched, so the mirror invariant holds between
/// any two public calls. Any wrapper adding concurrent access must
/// serialize on the whole map to preserve it.
///
/// An insert is rejected when *either* side is already bound, so no key
/// ever maps to two values and no value is ever reachable from two keys.
///
/// Note: This implementation is not thread-safe.
///
/// # Examples
///
/// ```
/// use quadmap::BiMap;
///
/// let mut codes = BiMap::new();
/// assert!(codes.insert("de".to_string(), "germany".to_string()));
/// assert!(codes.insert("fr".to_string(), "france".to_string()));
///
/// // Either side resolves the other.
/// assert_eq!(codes.get_value("de"), Ok(&"germany".to_string()));
/// assert_eq!(codes.get_key("france"), Ok(&"fr".to_string()));
///
/// // A bound value blocks a second key.
/// assert!(!codes.insert("ge".to_string(), "germany".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct BiMap<K, V> {
    /// Key-to-value table
    forward: ProbingTable<K, V>,
    /// Value-to-key table, kept as the mirror of `forward`
    backward: ProbingTable<V, K>,
    /// Number of live pairs
    len: usize,
}

impl<K, V> Default for BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Creates a new `BiMap` whose inner tables start at the default
    /// capacity of 101 slots each
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(101)
    }

    /// Creates a new `BiMap` whose inner tables start with at least
    /// `capacity` slots each
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: ProbingTable::with_capacity(capacity),
            backward: ProbingTable::with_capacity(capacity),
            len: 0,
        }
    }

    /// Inserts the pair `(key, value)`.
    ///
    /// Returns false and leaves the map unchanged when `key` is already a
    /// key of some pair or `value` is already a value of some pair;
    /// either side being bound would break the one-to-one property.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.forward.contains(&key) || self.backward.contains(&value) {
            return false;
        }

        self.forward.insert(key.clone(), value.clone());
        self.backward.insert(value, key);
        self.len = self.len.saturating_add(1);
        true
    }

    /// Returns whether `key` is the key of a live pair
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains(key)
    }

    /// Returns whether `value` is the value of a live pair
    #[must_use]
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.contains(value)
    }

    /// Removes the pair whose key is `key`.
    ///
    /// Returns false and leaves the map unchanged when `key` is absent.
    /// Otherwise the pair is dropped from both inner tables.
    pub fn remove_key<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Ok(value) = self.forward.get(key) else {
            return false;
        };
        let value = value.clone();
        self.backward.remove(&value);
        self.forward.remove(key);
        self.len = self.len.saturating_sub(1);
        true
    }

    /// Removes the pair whose value is `value`.
    ///
    /// Returns false and leaves the map unchanged when `value` is absent.
    /// Otherwise the pair is dropped from both inner tables.
    pub fn remove_value<Q>(&mut self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Ok(key) = self.backward.get(value) else {
            return false;
        };
        let key = key.clone();
        self.forward.remove(&key);
        self.backward.remove(value);
        self.len = self.len.saturating_sub(1);
        true
    }

    /// Returns the value paired with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when `key` is not the key of a
    /// live pair.
    pub fn get_value<Q>(&self, key: &Q) -> Result<&V, LookupError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key)
    }

    /// Returns the key paired with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when `value` is not the value of
    /// a live pair.
    pub fn get_key<Q>(&self, value: &Q) -> Result<&K, LookupError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.get(value)
    }

    /// Removes every pair; the capacity of both inner tables is kept
    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
        self.len = 0;
    }

    /// Returns the number of live pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no pairs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over the live pairs, keyed side first
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.forward.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup_both_ways() {
        let mut map = BiMap::new();
        assert!(map.insert(1, 100));

        assert!(map.contains_key(&1));
        assert!(map.contains_value(&100));
        assert_eq!(map.get_value(&1), Ok(&100));
        assert_eq!(map.get_key(&100), Ok(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut map = BiMap::new();
        assert!(map.insert(1, 1));
        assert!(!map.insert(1, 2));

        assert_eq!(map.get_value(&1), Ok(&1));
        assert!(!map.contains_value(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let mut map = BiMap::new();
        assert!(map.insert(1, 1));
        assert!(!map.insert(2, 1));

        assert_eq!(map.get_key(&1), Ok(&1));
        assert!(!map.contains_key(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_key_drops_both_sides() {
        let mut map = BiMap::new();
        map.insert(1, 100);
        map.insert(2, 200);

        assert!(map.remove_key(&1));
        assert!(!map.contains_key(&1));
        assert!(!map.contains_value(&100));
        assert_eq!(map.len(), 1);
        assert!(!map.remove_key(&1));

        // The other pair is untouched.
        assert_eq!(map.get_value(&2), Ok(&200));
    }

    #[test]
    fn test_remove_value_drops_both_sides() {
        let mut map = BiMap::new();
        map.insert(1, 100);
        map.insert(2, 200);

        assert!(map.remove_value(&200));
        assert!(!map.contains_key(&2));
        assert!(!map.contains_value(&200));
        assert_eq!(map.len(), 1);
        assert!(!map.remove_value(&200));
    }

    #[test]
    fn test_insert_then_remove_restores_prior_state() {
        let mut map = BiMap::new();
        map.insert(1, 100);
        let len_before = map.len();

        assert!(map.insert(7, 700));
        assert!(map.remove_key(&7));

        assert_eq!(map.len(), len_before);
        assert!(!map.contains_key(&7));
        assert!(!map.contains_value(&700));
        assert_eq!(map.get_value(&1), Ok(&100));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut map: BiMap<i32, i32> = BiMap::new();
        map.clear();
        assert_eq!(map.len(), 0);

        map.insert(1, 100);
        map.insert(2, 200);
        map.clear();

        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains_key(&1));
        assert!(!map.contains_value(&200));
    }

    #[test]
    fn test_rebind_after_removal() {
        let mut map = BiMap::new();
        map.insert(1, 100);

        // Removing the pair frees both the key and the value for reuse.
        assert!(map.remove_key(&1));
        assert!(map.insert(1, 200));
        assert_eq!(map.get_value(&1), Ok(&200));

        assert!(map.insert(5, 100));
        assert_eq!(map.get_key(&100), Ok(&5));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_mixed_scenario() {
        let mut map = BiMap::new();
        assert!(map.insert(1, 100));
        assert!(map.insert(2, 101));
        assert!(map.insert(3, 102));
        assert_eq!(map.len(), 3);

        assert!(!map.insert(1, 200));
        assert_eq!(map.len(), 3);

        assert!(map.remove_key(&2));
        assert_eq!(map.len(), 2);
        assert!(!map.contains_value(&101));

        assert_eq!(map.get_key(&102), Ok(&3));
        assert_eq!(map.get_value(&99), Err(LookupError::NotFound));
        assert_eq!(map.get_key(&99), Err(LookupError::NotFound));
    }

    #[test]
    fn test_bulk_insert_and_even_key_removal() {
        let mut map = BiMap::new();
        for i in 0..1000 {
            assert!(map.insert(i, i + 10_000));
        }
        assert_eq!(map.len(), 1000);
        for i in 0..1000 {
            assert!(map.contains_key(&i));
            assert!(map.contains_value(&(i + 10_000)));
        }

        for i in (0..1000).step_by(2) {
            assert!(map.remove_key(&i));
        }
        assert_eq!(map.len(), 500);
        for i in 0..1000 {
            assert_eq!(map.contains_key(&i), i % 2 == 1);
            assert_eq!(map.contains_value(&(i + 10_000)), i % 2 == 1);
        }
    }

    #[test]
    fn test_string_keys_with_borrowed_lookup() {
        let mut map: BiMap<String, u32> = BiMap::new();
        map.insert("one".to_string(), 1);
        map.insert("two".to_string(), 2);

        assert!(map.contains_key("one"));
        assert_eq!(map.get_value("two"), Ok(&2));
        assert_eq!(map.get_key(&1), Ok(&"one".to_string()));
        assert!(map.remove_key("one"));
        assert!(!map.contains_value(&1));
    }

    #[test]
    fn test_extend_skips_conflicting_pairs() {
        let mut map: BiMap<i32, i32> = BiMap::new();
        map.extend(vec![(1, 100), (2, 200), (1, 300), (3, 100)]);

        // (1, 300) lost to the bound key 1, (3, 100) to the bound value 100.
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_value(&1), Ok(&100));
        assert_eq!(map.get_value(&2), Ok(&200));
        assert!(!map.contains_key(&3));
    }

    #[test]
    fn test_iter_yields_live_pairs() {
        let mut map = BiMap::new();
        map.insert(1, 100);
        map.insert(2, 200);
        map.insert(3, 300);
        map.remove_key(&2);

        let mut pairs: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(1, 100), (3, 300)]);
    }
}
