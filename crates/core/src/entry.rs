//! Stored entries and TTL conversion
//!
//! An [`Entry`] pairs a value with an optional absolute expiration time.
//! Expiry is strict: an entry whose `expire_at` equals the current time is
//! still live; it expires once the clock moves past it.

use crate::error::{Error, Result};
use std::time::Duration;

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// A stored value and its expiration time
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    /// The stored payload
    pub value: V,
    /// Absolute expiration time, `None` if the entry never expires
    pub expire_at: Option<Timestamp>,
}

impl<V> Entry<V> {
    /// Create an entry that never expires
    pub fn new(value: V) -> Self {
        Self {
            value,
            expire_at: None,
        }
    }

    /// Create an entry expiring `ttl` after `now`
    ///
    /// A missing or zero TTL means the entry never expires.
    pub fn with_ttl(value: V, ttl: Option<Duration>, now: Timestamp) -> Self {
        let expire_at = ttl.filter(|ttl| !ttl.is_zero()).map(|ttl| {
            let millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
            now.saturating_add(millis)
        });
        Self { value, expire_at }
    }

    /// Whether the entry is past its expiration time at `now`
    #[inline]
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        matches!(self.expire_at, Some(expire_at) if expire_at < now)
    }
}

/// Convert a whole-second TTL; zero means no expiration
///
/// # Examples
///
/// ```
/// use scopekv_core::ttl_from_secs;
/// use std::time::Duration;
///
/// assert_eq!(ttl_from_secs(5), Some(Duration::from_secs(5)));
/// assert_eq!(ttl_from_secs(0), None);
/// ```
pub fn ttl_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Convert a fractional TTL in seconds; zero means no expiration
///
/// Negative and non-finite values fail with [`Error::InvalidTtl`].
pub fn ttl_from_secs_f64(secs: f64) -> Result<Option<Duration>> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::InvalidTtl(secs.to_string()));
    }
    if secs == 0.0 {
        return Ok(None);
    }
    Duration::try_from_secs_f64(secs)
        .map(Some)
        .map_err(|e| Error::InvalidTtl(format!("{}: {}", secs, e)))
}
