use core::fmt::Debug;

use crate::hash_table::HashTable;
use crate::index::Identity;
use crate::index::Indexer;

/// A key-value map over the chained [`HashTable`].
///
/// `HashMap<K, V, I>` stores key-value pairs where keys implement `Eq` and an
/// indexer `I` reduces each key to the `u64` fed into the bucket modulo. The
/// default indexer is [`Identity`], which uses the key's own integer value,
/// so integral and character keys work with no configuration.
///
/// Two deliberate departures from the standard-library map contract, both
/// inherited from the underlying table:
///
/// - **Inserting never updates.** [`insert`](HashMap::insert) appends
///   unconditionally; re-inserting a key stores a second entry rather than
///   replacing the first. See the method docs for the full contract.
/// - **No iteration.** The map cannot enumerate its entries, and `Debug`
///   output reports only the length and bucket count. Callers that need
///   enumeration must track the key domain externally.
///
/// The bucket array is allocated in full at construction and never resized.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashMap;
///
/// let mut map: HashMap<char, u32> = HashMap::new();
/// map.insert('a', 1);
/// map.insert('b', 2);
///
/// assert_eq!(map.get(&'a'), Some(&1));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, I = Identity> {
    table: HashTable<(K, V)>,
    indexer: I,
}

impl<K, V, I> HashMap<K, V, I>
where
    K: Eq,
    I: Indexer<K>,
{
    /// Creates a map with the given indexer and the default bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    /// use chain_hash::Identity;
    ///
    /// let map: HashMap<u32, &str, _> = HashMap::with_indexer(Identity);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_indexer(indexer: I) -> Self {
        Self {
            table: HashTable::new(),
            indexer,
        }
    }

    /// Creates a map with the given bucket count and indexer.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    /// use chain_hash::Identity;
    ///
    /// let map: HashMap<u32, &str, _> = HashMap::with_buckets_and_indexer(128, Identity);
    /// assert_eq!(map.bucket_count(), 128);
    /// ```
    pub fn with_buckets_and_indexer(buckets: usize, indexer: I) -> Self {
        Self {
            table: HashTable::with_buckets(buckets),
            indexer,
        }
    }

    /// Returns the number of stored entries in O(1).
    ///
    /// Duplicated keys are counted once per stored entry, not once per
    /// distinct key.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the fixed number of bucket slots.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Insertion always appends a new entry: no existing-key check is made
    /// and nothing is ever overwritten. Inserting a key twice therefore
    /// stores two entries: lookups return the earliest-inserted one, a
    /// single [`remove`](HashMap::remove) deletes only that one, and
    /// [`len`](HashMap::len) counts both. Callers that want update-in-place
    /// should use [`get_mut`](HashMap::get_mut) instead of re-inserting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<u32, &str> = HashMap::new();
    /// map.insert(1, "first");
    /// map.insert(1, "second");
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), Some(&"first"));
    ///
    /// map.remove(&1);
    /// assert_eq!(map.get(&1), Some(&"second"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let index = self.indexer.index_of(&key);
        self.table.insert(index, (key, value));
    }

    /// Returns a reference to the value of the first entry matching `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<u32, &str> = HashMap::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.indexer.index_of(key);
        self.table.find(index, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value of the first entry matching
    /// `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<u32, u32> = HashMap::new();
    /// map.insert(1, 10);
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&1), Some(&11));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.indexer.index_of(key);
        self.table
            .find_mut(index, |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if at least one entry matches `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the first entry matching `key`, returning its value.
    ///
    /// Removing an absent key is a successful no-op returning `None`. When a
    /// key was inserted more than once, each call removes one entry in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<u32, &str> = HashMap::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.indexer.index_of(key);
        self.table.remove(index, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes all entries from the map.
    ///
    /// Every bucket slot is visited and reset; the bucket array keeps its
    /// construction-time size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<u32, &str> = HashMap::new();
    /// map.insert(1, "a");
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K, V, I> HashMap<K, V, I>
where
    K: Eq,
    I: Indexer<K> + Default,
{
    /// Creates a map with the default indexer and bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let map: HashMap<char, u32> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_indexer(I::default())
    }

    /// Creates a map with the given bucket count and the default indexer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let map: HashMap<char, u32> = HashMap::with_buckets(256);
    /// assert_eq!(map.bucket_count(), 256);
    /// ```
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_buckets_and_indexer(buckets, I::default())
    }
}

impl<K, V, I> Default for HashMap<K, V, I>
where
    K: Eq,
    I: Indexer<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, I> Debug for HashMap<K, V, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashMap")
            .field("len", &self.table.len())
            .field("buckets", &self.table.bucket_count())
            .finish()
    }
}
