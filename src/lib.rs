#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A key-value map over the chained hash table.
///
/// This module provides a `HashMap` that wraps the `HashTable` and pairs it
/// with a pluggable key-to-index conversion, defaulting to the identity
/// conversion for integral and character keys.
pub mod hash_map;

/// The separate-chaining hash table underlying the map.
pub mod hash_table;

/// Conversion of keys into bucket index integers.
///
/// This module provides the `Indexer` trait consumed by the map, the
/// `AsIndex` trait for keys that are their own index, and the `Identity`
/// default indexer.
pub mod index;

pub use hash_map::HashMap;
pub use hash_table::DEFAULT_BUCKETS;
pub use hash_table::HashTable;
pub use index::AsIndex;
pub use index::Identity;
pub use index::Indexer;
