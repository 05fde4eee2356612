//! Partitioned storage for scoped entries
//!
//! One flat shard for the instance scope, one shard per identifier for the
//! workflow and execution scopes.
//!
//! # Design
//!
//! - RwLock: guards the single instance shard
//! - DashMap: workflow and execution shards keyed by identifier, sharded
//!   locking so different identifiers rarely contend
//! - FxHashMap: O(1) key lookups inside a shard
//!
//! # Expiration
//!
//! Entries are never swept. A read that finds an expired entry drops its read
//! guard, takes the write guard, and removes the entry only if it is still
//! expired, so a value written in between survives.

use dashmap::DashMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use scopekv_core::{Entry, Scope, ScopeKind, Timestamp};
use tracing::trace;

/// Result of a single-key read inside a shard
enum Lookup<V> {
    Missing,
    Live(V),
    Expired,
}

/// One flat key → entry mapping
#[derive(Debug)]
pub struct Shard<V> {
    /// HashMap with FxHash for O(1) lookups
    pub(crate) data: FxHashMap<String, Entry<V>>,
}

impl<V> Shard<V> {
    /// Create a new empty shard
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
        }
    }

    /// Create a shard with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if shard is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Insert or replace an entry, returning the previous one
    pub fn insert(&mut self, key: String, entry: Entry<V>) -> Option<Entry<V>> {
        self.data.insert(key, entry)
    }

    /// Remove an entry, returning it if it was present
    pub fn remove(&mut self, key: &str) -> Option<Entry<V>> {
        self.data.remove(key)
    }

    /// Remove an entry only if it is expired at `now`
    ///
    /// Returns true if something was removed.
    pub fn remove_expired(&mut self, key: &str, now: Timestamp) -> bool {
        match self.data.get(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.data.remove(key);
                true
            }
            _ => false,
        }
    }

    /// Keys of entries still live at `now`, sorted
    pub fn live_keys(&self, now: Timestamp) -> Vec<String> {
        let mut keys: Vec<_> = self
            .data
            .iter()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn lookup(&self, key: &str, now: Timestamp) -> Lookup<V>
    where
        V: Clone,
    {
        match self.data.get(key) {
            None => Lookup::Missing,
            Some(entry) if entry.is_expired_at(now) => Lookup::Expired,
            Some(entry) => Lookup::Live(entry.value.clone()),
        }
    }
}

impl<V> Default for Shard<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a scope's entries live
enum Location<'a, V> {
    Global(&'a RwLock<Shard<V>>),
    Partition(&'a DashMap<String, Shard<V>>, &'a str),
}

/// Scope-partitioned storage
///
/// # Thread Safety
///
/// All operations are thread-safe and take `&self`:
/// - Instance scope: readers share the RwLock, writers take it exclusively
/// - Workflow/execution scopes: only the DashMap shard holding the
///   identifier is locked
/// - Different scope kinds never contend
///
/// # Example
///
/// ```ignore
/// use scopekv_storage::ScopedShards;
/// use scopekv_core::{Entry, Scope};
///
/// let shards = ScopedShards::new();
/// shards.put(&Scope::workflow("wf-1"), "k", Entry::new("v"));
/// assert_eq!(shards.get(&Scope::workflow("wf-1"), "k", 0), Some("v"));
/// ```
pub struct ScopedShards<V> {
    /// Instance-wide shard
    global: RwLock<Shard<V>>,
    /// Per-workflow shards
    workflows: DashMap<String, Shard<V>>,
    /// Per-execution shards
    executions: DashMap<String, Shard<V>>,
    /// Initial capacity of lazily created partitions
    partition_capacity: usize,
}

impl<V> ScopedShards<V> {
    /// Create empty storage
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create storage with pre-allocated capacities
    ///
    /// `global_capacity` sizes the instance shard; `partition_capacity` sizes
    /// each workflow or execution shard when it is first created.
    pub fn with_capacity(global_capacity: usize, partition_capacity: usize) -> Self {
        Self {
            global: RwLock::new(Shard::with_capacity(global_capacity)),
            workflows: DashMap::new(),
            executions: DashMap::new(),
            partition_capacity,
        }
    }

    fn locate<'a>(&'a self, scope: &'a Scope) -> Location<'a, V> {
        match scope {
            Scope::Global => Location::Global(&self.global),
            Scope::Workflow(id) => Location::Partition(&self.workflows, id),
            Scope::Execution(id) => Location::Partition(&self.executions, id),
        }
    }

    // ========================================================================
    // Get/Put/Delete Operations
    // ========================================================================

    /// Store an entry, replacing any previous one
    ///
    /// Creates the workflow or execution partition on first use.
    pub fn put(&self, scope: &Scope, key: impl Into<String>, entry: Entry<V>) -> Option<Entry<V>> {
        match self.locate(scope) {
            Location::Global(shard) => shard.write().insert(key.into(), entry),
            Location::Partition(map, id) => {
                if let Some(mut shard) = map.get_mut(id) {
                    return shard.insert(key.into(), entry);
                }
                map.entry(id.to_string())
                    .or_insert_with(|| Shard::with_capacity(self.partition_capacity))
                    .insert(key.into(), entry)
            }
        }
    }

    /// Read a live value
    ///
    /// An entry expired at `now` is removed as a side effect and reported
    /// as missing.
    pub fn get(&self, scope: &Scope, key: &str, now: Timestamp) -> Option<V>
    where
        V: Clone,
    {
        match self.locate(scope) {
            Location::Global(shard) => {
                let found = shard.read().lookup(key, now);
                match found {
                    Lookup::Live(value) => Some(value),
                    Lookup::Missing => None,
                    Lookup::Expired => {
                        if shard.write().remove_expired(key, now) {
                            trace!(scope = %scope, key, "purged expired entry");
                        }
                        None
                    }
                }
            }
            Location::Partition(map, id) => {
                let found = match map.get(id) {
                    Some(shard) => shard.lookup(key, now),
                    None => Lookup::Missing,
                };
                match found {
                    Lookup::Live(value) => Some(value),
                    Lookup::Missing => None,
                    Lookup::Expired => {
                        let purged = map
                            .get_mut(id)
                            .map(|mut shard| shard.remove_expired(key, now))
                            .unwrap_or(false);
                        if purged {
                            trace!(scope = %scope, key, "purged expired entry");
                        }
                        None
                    }
                }
            }
        }
    }

    /// Remove an entry
    ///
    /// Returns true if an entry was stored, even one already expired.
    pub fn delete(&self, scope: &Scope, key: &str) -> bool {
        match self.locate(scope) {
            Location::Global(shard) => shard.write().remove(key).is_some(),
            Location::Partition(map, id) => map
                .get_mut(id)
                .map(|mut shard| shard.remove(key).is_some())
                .unwrap_or(false),
        }
    }

    // ========================================================================
    // Scope Lifecycle
    // ========================================================================

    /// Replace a scope's mapping with an empty one
    ///
    /// For workflow and execution scopes the partition stays present (and is
    /// created if it did not exist yet).
    pub fn clear(&self, scope: &Scope) {
        match self.locate(scope) {
            Location::Global(shard) => *shard.write() = Shard::new(),
            Location::Partition(map, id) => {
                map.insert(id.to_string(), Shard::with_capacity(self.partition_capacity));
            }
        }
    }

    /// Remove a workflow or execution partition entirely
    ///
    /// Returns true if the partition existed. The instance shard cannot be
    /// removed; passing [`Scope::Global`] returns false.
    pub fn remove_partition(&self, scope: &Scope) -> bool {
        match self.locate(scope) {
            Location::Global(_) => false,
            Location::Partition(map, id) => map.remove(id).is_some(),
        }
    }

    /// Drop every entry and every partition
    pub fn reset(&self) {
        let mut global = self.global.write();
        self.workflows.clear();
        self.executions.clear();
        *global = Shard::new();
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of entries stored under a scope, expired ones included
    pub fn len(&self, scope: &Scope) -> usize {
        match self.locate(scope) {
            Location::Global(shard) => shard.read().len(),
            Location::Partition(map, id) => map.get(id).map(|shard| shard.len()).unwrap_or(0),
        }
    }

    /// Check if a scope's mapping exists
    ///
    /// Always true for the instance scope.
    pub fn contains_partition(&self, scope: &Scope) -> bool {
        match self.locate(scope) {
            Location::Global(_) => true,
            Location::Partition(map, id) => map.contains_key(id),
        }
    }

    /// Number of mappings for a scope kind
    pub fn partition_count(&self, kind: ScopeKind) -> usize {
        match kind {
            ScopeKind::Global => 1,
            ScopeKind::Workflow => self.workflows.len(),
            ScopeKind::Execution => self.executions.len(),
        }
    }

    /// Total number of stored entries across all scopes
    pub fn total_entries(&self) -> usize {
        let partitions = |map: &DashMap<String, Shard<V>>| -> usize {
            map.iter().map(|shard| shard.value().len()).sum()
        };
        self.global.read().len() + partitions(&self.workflows) + partitions(&self.executions)
    }

    /// Keys live at `now` under a scope, sorted
    ///
    /// Does not purge expired entries.
    pub fn live_keys(&self, scope: &Scope, now: Timestamp) -> Vec<String> {
        match self.locate(scope) {
            Location::Global(shard) => shard.read().live_keys(now),
            Location::Partition(map, id) => map
                .get(id)
                .map(|shard| shard.live_keys(now))
                .unwrap_or_default(),
        }
    }
}

impl<V> Default for ScopedShards<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for ScopedShards<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedShards")
            .field("workflows", &self.workflows.len())
            .field("executions", &self.executions.len())
            .field("total_entries", &self.total_entries())
            .finish()
    }
}
