//! Utility functions and traits for `BiMap`

use crate::BiMap;
use std::hash::Hash;

/// Extension trait for `BiMap` that provides additional utility methods
pub trait BiMapExtensions<K, V> {
    /// Returns the keys of the map as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the live pairs of the map as a Vec
    fn pairs(&self) -> Vec<(K, V)>;
}

impl<K, V> BiMapExtensions<K, V> for BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn pairs(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Creates a `BiMap` from an iterator of key-value pairs.
///
/// Pairs that would break the one-to-one property are skipped, matching
/// `BiMap::insert`.
#[allow(dead_code)]
pub fn from_iter<K, V, I>(iter: I) -> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = BiMap::new();

    for (key, value) in iter {
        map.insert(key, value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map = from_iter(data);

        assert_eq!(map.get_value("a"), Ok(&1));
        assert_eq!(map.get_value("b"), Ok(&2));
        assert_eq!(map.get_value("c"), Ok(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_keys_values_and_pairs() {
        let mut map = BiMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = map.values();
        values.sort_unstable();

        let mut pairs = map.pairs();
        pairs.sort();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(
            pairs,
            vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
        );
    }
}
