//! Store configuration.
//!
//! [`StoreBuilder`] configures a [`ScopedStore`] before it is created.
//! [`StoreConfig`] holds the tunables a host may load from its own
//! configuration file.

use crate::error::Result;
use crate::store::ScopedStore;
use scopekv_core::{Clock, SystemClock};
use scopekv_storage::ScopedShards;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Capacity hints for a store.
///
/// Both fields default to zero (grow on demand).
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::from_json(r#"{"global_capacity": 1024}"#)?;
/// let store: ScopedStore = ScopedStore::builder().config(config).build();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Pre-allocated entries for the instance scope
    pub global_capacity: usize,
    /// Pre-allocated entries for each workflow or execution partition
    pub partition_capacity: usize,
}

impl StoreConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```ignore
/// // Production: wall-clock time, default capacities
/// let store: ScopedStore = ScopedStore::builder().build();
///
/// // Tests: a clock that only moves when told to
/// let clock = Arc::new(ManualClock::new(0));
/// let store: ScopedStore = ScopedStore::builder()
///     .clock(clock.clone())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    config: StoreConfig,
    clock: Arc<dyn Clock>,
}

impl StoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Apply a whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Pre-allocate entries for the instance scope.
    pub fn global_capacity(mut self, capacity: usize) -> Self {
        self.config.global_capacity = capacity;
        self
    }

    /// Pre-allocate entries for each workflow or execution partition.
    pub fn partition_capacity(mut self, capacity: usize) -> Self {
        self.config.partition_capacity = capacity;
        self
    }

    /// Use a custom time source for TTL bookkeeping.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Create the store.
    pub fn build<V: Clone>(self) -> ScopedStore<V> {
        let shards = ScopedShards::with_capacity(
            self.config.global_capacity,
            self.config.partition_capacity,
        );
        ScopedStore::from_parts(shards, self.clock)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
