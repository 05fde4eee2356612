//! Convenient imports for scopekv.
//!
//! ```ignore
//! use scopekv::prelude::*;
//!
//! let store = ScopedStore::new();
//! store.set(ScopeKind::Global, None, "key", "value", None)?;
//! ```

// Main entry point
pub use crate::builder::{StoreBuilder, StoreConfig};
pub use crate::store::ScopedStore;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{Clock, ManualClock, Scope, ScopeKind, SystemClock, Value};

// Re-export for convenience
pub use serde_json::json;
pub use std::time::Duration;
