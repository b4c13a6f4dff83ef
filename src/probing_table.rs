use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
};

use crate::prime::next_prime;

/// Slot count requested when no capacity is given; rounded to a prime.
const DEFAULT_CAPACITY: usize = 101;

/// Failure kind returned by the loud accessors (`get`, and the `BiMap`
/// getters built on it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// The requested key is not present in the table
    NotFound,
}

/// A slot occupied at some point: a key-value pair plus a tombstone flag.
///
/// A tombstone keeps its key so a probe for that key can still land on it
/// and reuse the slot on reinsertion.
#[derive(Debug, Clone)]
struct Bucket<K, V> {
    /// The key stored in this slot
    key: K,
    /// The value associated with the key
    value: V,
    /// Tombstone flag: the pair was removed but the slot stays occupied
    deleted: bool,
}

/// An open-addressing hash table with quadratic probing.
///
/// The slot count is always prime and the table rehashes into a
/// roughly-doubled prime capacity as soon as more than half of the slots
/// are in use. Together these guarantee that every probe sequence reaches
/// an empty slot, for present and absent keys alike.
///
/// Removal marks the slot with a tombstone instead of emptying it, so
/// probe sequences that pass through it stay intact. Tombstones are
/// reclaimed when the same key is reinserted or at the next rehash.
///
/// Unlike a conventional map, `insert` never overwrites: inserting a key
/// that is already present fails and leaves the table unchanged.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ProbingTable<K, V> {
    /// The slots holding the buckets; `None` marks a never-used slot
    slots: Vec<Option<Bucket<K, V>>>,
    /// Number of live (non-tombstone) entries
    len: usize,
    /// Slots in use, tombstones included; this count drives rehashing
    occupied: usize,
}

impl<K, V> Default for ProbingTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ProbingTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> ProbingTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a new `ProbingTable` with the default capacity of 101 slots
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `ProbingTable` with at least `capacity` slots.
    ///
    /// The actual slot count is the smallest odd prime at or above the
    /// request, which quadratic probing needs to cover the table.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = next_prime(capacity.max(1));

        Self { slots: vec![None; capacity], len: 0, occupied: 0 }
    }

    /// Computes the hash for a key
    #[allow(clippy::unused_self)]
    fn hash<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Maps a key to its home slot index
    #[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
    fn home_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        let hash = self.hash(key);
        // Slot count is never zero (smallest capacity is 3).
        (hash as usize) % self.slots.len()
    }

    /// Runs the quadratic probe sequence for `key`.
    ///
    /// Returns the index of the slot where the probe terminated: either
    /// the first empty slot, or the slot whose key equals `key` (live or
    /// tombstoned). Returns `None` if the bounded probe loop is exhausted,
    /// which cannot happen while the table is kept at most half full.
    fn find_pos<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.slots.len();
        let mut pos = self.home_index(key);
        let mut offset: usize = 1;

        for _ in 0..capacity {
            match self.slots.get(pos) {
                // Out of range: the running position degenerated, give up
                None => return None,

                // First empty slot terminates the probe
                Some(None) => return Some(pos),

                // Matching key terminates the probe, tombstoned or not
                Some(Some(bucket)) if bucket.key.borrow() == key => return Some(pos),

                // Occupied by another key, keep probing
                Some(Some(_)) => {}
            }

            // Offsets 1, 3, 5, ... trace the quadratic probe sequence.
            // Offsets stay below the capacity while the half-full bound
            // holds, so one conditional subtraction replaces a modulo.
            pos = pos.saturating_add(offset);
            offset = offset.saturating_add(2);
            if pos >= capacity {
                pos = pos.saturating_sub(capacity);
            }
        }

        None
    }

    /// Returns whether the slot at `pos` holds a live entry
    fn is_live(&self, pos: usize) -> bool {
        matches!(self.slots.get(pos), Some(Some(bucket)) if !bucket.deleted)
    }

    /// Returns whether `key` is present in the table
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_pos(key).is_some_and(|pos| self.is_live(pos))
    }

    /// Returns the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when `key` is absent, which
    /// includes keys whose slot only holds a tombstone.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, LookupError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_pos(key).and_then(|pos| self.slots.get(pos)) {
            Some(Some(bucket)) if !bucket.deleted => Ok(&bucket.value),
            _ => Err(LookupError::NotFound),
        }
    }

    /// Inserts a key-value pair into the table.
    ///
    /// Returns false and leaves the table unchanged when `key` is already
    /// present. On success the pair occupies the slot where the probe
    /// terminated: a tombstone left by the same key is reused in place,
    /// while taking a fresh slot counts toward the rehash trigger.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let Some(pos) = self.find_pos(&key) else {
            return false;
        };
        if self.is_live(pos) {
            return false;
        }

        let Some(slot) = self.slots.get_mut(pos) else {
            return false;
        };
        if slot.is_none() {
            self.occupied = self.occupied.saturating_add(1);
        }
        *slot = Some(Bucket { key, value, deleted: false });
        self.len = self.len.saturating_add(1);

        if self.occupied > self.slots.len() / 2 {
            self.rehash();
        }

        true
    }

    /// Removes the entry for `key`, leaving a tombstone in its slot.
    ///
    /// Returns false when `key` is not present. The slot stays occupied so
    /// that longer probe sequences running through it keep working.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(pos) = self.find_pos(key) else {
            return false;
        };
        match self.slots.get_mut(pos) {
            Some(Some(bucket)) if !bucket.deleted => {
                bucket.deleted = true;
                self.len = self.len.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    /// Grows the table to the next prime above twice the current capacity
    /// and reinserts every live entry, dropping all tombstones.
    #[allow(clippy::arithmetic_side_effects)]
    fn rehash(&mut self) {
        let new_capacity = next_prime(self.slots.len().saturating_mul(2));
        let old_slots = mem::replace(&mut self.slots, vec![None; new_capacity]);
        self.len = 0;
        self.occupied = 0;

        // The new capacity fits double the live entries, so these inserts
        // stay under the half-full bound and cannot rehash again.
        for bucket in old_slots.into_iter().flatten() {
            if !bucket.deleted {
                self.insert(bucket.key, bucket.value);
            }
        }
    }

    /// Resets every slot to empty; the capacity is kept
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
        self.occupied = 0;
    }

    /// Returns the number of live entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fraction of slots in use, tombstones included.
    ///
    /// This is the ratio the rehash trigger watches; it never exceeds 0.5
    /// after an insert returns.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.slots.len() as f64
    }

    /// Returns an iterator over the live key-value pairs
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0, _marker: PhantomData }
    }
}

/// Iterator over the live key-value pairs of a `ProbingTable`
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Reference to the slots of the table
    slots: &'a [Option<Bucket<K, V>>],
    /// Current position in the iteration
    index: usize,
    /// Phantom data to hold the lifetime and type parameters
    _marker: PhantomData<&'a (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.slots.len() {
            let slot = self.slots.get(self.index);
            self.index = self.index.saturating_add(1);
            if let Some(Some(bucket)) = slot {
                if !bucket.deleted {
                    return Some((&bucket.key, &bucket.value));
                }
            }
        }
        None
    }
}
