//! # scopekv
//!
//! Embedded key-value store with scoped isolation and lazy TTL expiration.
//!
//! Keys live in one of three scopes: the instance scope shared by everyone,
//! one scope per workflow, and one scope per execution. Entries may carry a
//! time-to-live; expired entries are detected and dropped when read.
//!
//! ## Quick Start
//!
//! ```ignore
//! use scopekv::prelude::*;
//! use std::sync::Arc;
//!
//! // One store per process, shared by handle
//! let store = Arc::new(ScopedStore::new());
//!
//! // Scope tag + optional identifier
//! store.set(ScopeKind::Workflow, Some("wf-1"), "counter", 0, None)?;
//! let counter = store.get(ScopeKind::Workflow, Some("wf-1"), "counter")?;
//!
//! // Resolved scope
//! let scope = Scope::execution("exec-7");
//! store.put(&scope, "scratch", json!({"step": 3}), Some(Duration::from_secs(30)));
//!
//! // Execution finished
//! store.cleanup_execution("exec-7");
//! ```
//!
//! ## Crates
//!
//! - `scopekv-core` - scopes, entries, values, clocks
//! - `scopekv-storage` - concurrent partitioned storage

#![warn(missing_docs)]

mod builder;
mod error;
mod store;
mod types;

pub mod prelude;

// Re-export main entry points
pub use builder::{StoreBuilder, StoreConfig};
pub use error::{Error, Result};
pub use store::ScopedStore;

// Re-export types
pub use types::*;
