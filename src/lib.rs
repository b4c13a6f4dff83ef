//! # Quadmap
//!
//! A bijective map built on a quadratic-probing hash table.
//!
//! This crate provides two containers:
//!
//! - `BiMap`: a one-to-one map where keys and values are both unique and
//!   either side can look up the other
//! - `ProbingTable`: the underlying open-addressing hash table with
//!   quadratic probing, tombstone deletion, and prime-sized capacities
//!
//! A `BiMap` keeps two `ProbingTable`s as exact mirrors of each other, so
//! `get_value` and `get_key` are both single hash lookups. Inserts that
//! would bind a key or a value twice are rejected rather than overwritten,
//! which is what keeps the mirror consistent.
//!
//! ## Basic Usage
//!
//! ```rust
//! use quadmap::BiMap;
//!
//! // Create a new bijective map
//! let mut map = BiMap::new();
//!
//! // Insert pairs
//! assert!(map.insert("apple".to_string(), 1));
//! assert!(map.insert("banana".to_string(), 2));
//!
//! // Look up either side
//! assert_eq!(map.get_value("apple"), Ok(&1));
//! assert_eq!(map.get_key(&2), Ok(&"banana".to_string()));
//!
//! // A bound key or value blocks further inserts
//! assert!(!map.insert("apple".to_string(), 3));
//! assert!(!map.insert("cherry".to_string(), 1));
//!
//! // Removing by either side frees both
//! assert!(map.remove_value(&1));
//! assert!(!map.contains_key("apple"));
//! assert!(map.insert("cherry".to_string(), 1));
//! ```
//!
//! ## Using the table directly
//!
//! ```rust
//! use quadmap::{LookupError, ProbingTable};
//!
//! let mut table = ProbingTable::new();
//! assert!(table.insert("one".to_string(), 1));
//!
//! // Inserting an existing key fails instead of updating
//! assert!(!table.insert("one".to_string(), 10));
//! assert_eq!(table.get("one"), Ok(&1));
//! assert_eq!(table.get("two"), Err(LookupError::NotFound));
//!
//! // Removal tombstones the slot; the key can be bound again later
//! assert!(table.remove("one"));
//! assert!(table.insert("one".to_string(), 11));
//! assert_eq!(table.get("one"), Ok(&11));
//! ```

/// Module implementing the bijective map over two mirrored tables
mod bimap;
/// Property tests for the bijective map (compiled only under test)
mod bimap_proptest;
/// Prime number helpers for table sizing
mod prime;
/// Module implementing the quadratic-probing hash table
mod probing_table;
/// Utility functions and traits for the bijective map
mod utils;

pub use bimap::BiMap;
pub use probing_table::{Iter, LookupError, ProbingTable};
pub use utils::BiMapExtensions;
