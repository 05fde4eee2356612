//! Core types for scopekv
//!
//! This crate defines the data model shared by the storage layer and the
//! public facade:
//! - [`ScopeKind`] / [`Scope`]: isolation partitions
//! - [`Entry`]: a stored value with an optional expiration timestamp
//! - [`Value`]: the default opaque payload type
//! - [`Clock`]: the time source used for TTL bookkeeping

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod entry;
pub mod error;
pub mod types;
pub mod value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{ttl_from_secs, ttl_from_secs_f64, Entry, Timestamp};
pub use error::{Error, Result};
pub use types::{Scope, ScopeKind};
pub use value::Value;
