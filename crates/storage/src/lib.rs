//! Storage layer for scopekv
//!
//! This crate implements the partitioned in-memory backend:
//! - Shard: one flat key → entry mapping (FxHashMap)
//! - ScopedShards: the instance shard behind a RwLock, plus workflow and
//!   execution shards in DashMaps keyed by scope identifier
//! - Lazy expiration on read

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sharded;

pub use sharded::{ScopedShards, Shard};
