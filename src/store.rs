//! The scoped key-value store.
//!
//! This module provides [`ScopedStore`], the entry point for all store
//! operations.

use crate::builder::StoreBuilder;
use crate::error::Result;
use crate::types::{Clock, Scope, ScopeKind, Timestamp, Value};
use scopekv_core::{ttl_from_secs, Entry};
use scopekv_storage::ScopedShards;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Scoped key-value store with lazy TTL expiration.
///
/// Keys live in one of three isolated scopes: the instance scope, one scope
/// per workflow identifier, and one scope per execution identifier. The same
/// key string in two scopes refers to two unrelated entries.
///
/// The store is an ordinary value: create it once at the composition root
/// and share it by `Arc`. All operations take `&self` and are safe to call
/// from many threads.
///
/// # Example
///
/// ```ignore
/// use scopekv::prelude::*;
///
/// let store = ScopedStore::new();
///
/// store.set(ScopeKind::Workflow, Some("wf-1"), "greeting", "hello", None)?;
/// assert_eq!(
///     store.get(ScopeKind::Workflow, Some("wf-1"), "greeting")?,
///     Some(Value::from("hello"))
/// );
///
/// // Expires 30 seconds from now
/// store.set(ScopeKind::Global, None, "token", "abc", Some(30))?;
///
/// // Drop everything an execution stored once it finishes
/// store.cleanup_execution("exec-42");
/// ```
///
/// ## Two call shapes
///
/// 1. **Scope tag + optional identifier** - `store.set(kind, id, key, value, ttl)`.
///    Fails with [`Error::ScopeIdRequired`](crate::Error::ScopeIdRequired)
///    when a workflow or execution identifier is missing.
/// 2. **Resolved scope** - `store.put(&scope, key, value, ttl)`. A
///    [`Scope`] always carries its identifier, so these calls cannot fail.
///    They do not validate it either: build scopes from caller input with
///    [`Scope::resolve`].
pub struct ScopedStore<V = Value> {
    shards: ScopedShards<V>,
    clock: Arc<dyn Clock>,
}

impl ScopedStore {
    /// Create a store with default settings and wall-clock time.
    pub fn new() -> Self {
        StoreBuilder::new().build()
    }

    /// Create a builder for store configuration.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }
}

impl<V: Clone> ScopedStore<V> {
    pub(crate) fn from_parts(shards: ScopedShards<V>, clock: Arc<dyn Clock>) -> Self {
        Self { shards, clock }
    }

    /// Current time according to the store's clock.
    pub fn now_millis(&self) -> Timestamp {
        self.clock.now_millis()
    }

    // =========================================================================
    // Scope tag + optional identifier
    // =========================================================================

    /// Store a value, replacing any previous entry under the same key.
    ///
    /// `ttl_seconds` of `None` or `Some(0)` means the entry never expires.
    /// The identifier is ignored for [`ScopeKind::Global`].
    pub fn set(
        &self,
        kind: ScopeKind,
        scope_id: Option<&str>,
        key: &str,
        value: impl Into<V>,
        ttl_seconds: Option<u64>,
    ) -> Result<()> {
        let scope = Scope::resolve(kind, scope_id)?;
        self.put(&scope, key, value, ttl_seconds.and_then(ttl_from_secs));
        Ok(())
    }

    /// Read a value.
    ///
    /// Returns `None` if the key is absent or expired. An expired entry is
    /// removed by this call.
    pub fn get(&self, kind: ScopeKind, scope_id: Option<&str>, key: &str) -> Result<Option<V>> {
        let scope = Scope::resolve(kind, scope_id)?;
        Ok(self.fetch(&scope, key))
    }

    /// Read a value, falling back to `default` if absent or expired.
    pub fn get_or(
        &self,
        kind: ScopeKind,
        scope_id: Option<&str>,
        key: &str,
        default: V,
    ) -> Result<V> {
        Ok(self.get(kind, scope_id, key)?.unwrap_or(default))
    }

    /// Delete a key.
    ///
    /// Returns `true` if an entry was stored under the key. Expiry is not
    /// consulted: an expired entry that no read has purged yet still counts.
    pub fn delete(&self, kind: ScopeKind, scope_id: Option<&str>, key: &str) -> Result<bool> {
        let scope = Scope::resolve(kind, scope_id)?;
        Ok(self.remove(&scope, key))
    }

    /// Empty a scope.
    ///
    /// A cleared workflow or execution scope remains known to the store,
    /// with no entries.
    pub fn clear(&self, kind: ScopeKind, scope_id: Option<&str>) -> Result<()> {
        let scope = Scope::resolve(kind, scope_id)?;
        self.clear_scope(&scope);
        Ok(())
    }

    /// Drop all data for a finished execution.
    ///
    /// Unlike [`clear`](Self::clear), this forgets the execution entirely.
    /// Returns `true` if the execution had stored anything; unknown
    /// identifiers are a no-op.
    pub fn cleanup_execution(&self, execution_id: &str) -> bool {
        let scope = Scope::execution(execution_id);
        let removed = self.shards.remove_partition(&scope);
        debug!(execution_id, removed, "cleaned up execution scope");
        removed
    }

    // =========================================================================
    // Resolved scope
    // =========================================================================

    /// Store a value under a resolved scope.
    ///
    /// A `ttl` of `None` or zero means the entry never expires.
    pub fn put(&self, scope: &Scope, key: &str, value: impl Into<V>, ttl: Option<Duration>) {
        let entry = Entry::with_ttl(value.into(), ttl, self.now_millis());
        self.shards.put(scope, key, entry);
    }

    /// Read a value from a resolved scope, purging it if expired.
    pub fn fetch(&self, scope: &Scope, key: &str) -> Option<V> {
        self.shards.get(scope, key, self.now_millis())
    }

    /// Read a value from a resolved scope, falling back to `default`.
    pub fn fetch_or(&self, scope: &Scope, key: &str, default: V) -> V {
        self.fetch(scope, key).unwrap_or(default)
    }

    /// Delete a key from a resolved scope.
    pub fn remove(&self, scope: &Scope, key: &str) -> bool {
        self.shards.delete(scope, key)
    }

    /// Empty a resolved scope.
    pub fn clear_scope(&self, scope: &Scope) {
        self.shards.clear(scope);
        debug!(scope = %scope, "cleared scope");
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Live keys under a scope, sorted. Does not purge expired entries.
    pub fn keys(&self, scope: &Scope) -> Vec<String> {
        self.shards.live_keys(scope, self.now_millis())
    }

    /// Number of entries physically stored under a scope.
    ///
    /// Counts expired entries that no read has purged yet.
    pub fn len(&self, scope: &Scope) -> usize {
        self.shards.len(scope)
    }

    /// Check if a scope holds no entries.
    pub fn is_empty(&self, scope: &Scope) -> bool {
        self.len(scope) == 0
    }

    /// Check if the store knows a workflow or execution scope.
    ///
    /// A scope becomes known on its first write or clear and is forgotten
    /// only by [`cleanup_execution`](Self::cleanup_execution) or
    /// [`reset`](Self::reset).
    pub fn contains_partition(&self, scope: &Scope) -> bool {
        self.shards.contains_partition(scope)
    }

    /// Number of known scopes of a kind.
    pub fn partition_count(&self, kind: ScopeKind) -> usize {
        self.shards.partition_count(kind)
    }

    /// Number of entries physically stored across all scopes.
    pub fn total_entries(&self) -> usize {
        self.shards.total_entries()
    }

    /// Drop every entry in every scope.
    ///
    /// Intended for tests that share one store and need a clean slate.
    pub fn reset(&self) {
        self.shards.reset();
        debug!("reset store");
    }
}

impl<V: Clone> Default for ScopedStore<V> {
    fn default() -> Self {
        StoreBuilder::new().build()
    }
}

impl<V> std::fmt::Debug for ScopedStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedStore")
            .field("shards", &self.shards)
            .field("clock", &self.clock)
            .finish()
    }
}
