//! Time sources for TTL bookkeeping
//!
//! Expiration timestamps are absolute milliseconds since the Unix epoch.
//! [`SystemClock`] reads wall-clock time; [`ManualClock`] only moves when
//! told to, which keeps TTL tests deterministic.

use crate::entry::Timestamp;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Source of the current time in milliseconds
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current time, milliseconds since the Unix epoch
    fn now_millis(&self) -> Timestamp;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_millis(&self) -> Timestamp {
        Utc::now().timestamp_millis()
    }
}

/// Clock that advances only when told to
///
/// # Examples
///
/// ```
/// use scopekv_core::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(Duration::from_secs(6));
/// assert_eq!(clock.now_millis(), 7_000);
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: AtomicI64::new(start),
        }
    }

    /// Create a clock frozen at the current wall-clock time
    pub fn starting_now() -> Self {
        Self::new(SystemClock.now_millis())
    }

    /// Move the clock forward, saturating at `i64::MAX`
    pub fn advance(&self, by: Duration) {
        let millis = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        // The closure always returns Some, so the update cannot fail
        let _ = self
            .now
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| {
                Some(now.saturating_add(millis))
            });
    }

    /// Jump to an absolute time
    pub fn set(&self, at: Timestamp) {
        self.now.store(at, Ordering::Release);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_millis(&self) -> Timestamp {
        self.now.load(Ordering::Acquire)
    }
}
