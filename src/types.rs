//! Public types for scopekv.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Scopes
pub use scopekv_core::{Scope, ScopeKind};

// Stored data
pub use scopekv_core::{Entry, Timestamp, Value};

// Time
pub use scopekv_core::{Clock, ManualClock, SystemClock};

// TTL conversion
pub use scopekv_core::{ttl_from_secs, ttl_from_secs_f64};
