//! Time source for expiry computation and checks

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of the current time
///
/// Implementations must be thread-safe (Send + Sync). Readings keep
/// millisecond precision so expiry is not rounded to whole seconds.
pub trait Clock: Send + Sync {
    /// Current time, milliseconds since the unix epoch
    fn now_millis(&self) -> i64;

    /// Current time, whole seconds since the unix epoch (floored)
    fn now(&self) -> i64 {
        self.now_millis().div_euclid(1000)
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock
///
/// Starts at a fixed instant and only moves when told to. Useful for tests
/// and for replaying verification at a known time.
#[derive(Debug)]
pub struct FixedClock {
    now_millis: AtomicI64,
}

impl FixedClock {
    /// Clock frozen at `timestamp` whole seconds
    #[must_use]
    pub fn new(timestamp: i64) -> Self {
        Self::from_millis(timestamp.saturating_mul(1000))
    }

    /// Clock frozen at `millis` milliseconds
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self {
            now_millis: AtomicI64::new(millis),
        }
    }

    /// Jump to `timestamp` whole seconds
    pub fn set(&self, timestamp: i64) {
        self.set_millis(timestamp.saturating_mul(1000));
    }

    /// Jump to `millis` milliseconds
    pub fn set_millis(&self, millis: i64) {
        self.now_millis.store(millis, Ordering::SeqCst);
    }

    /// Move forward (or backward, for negative `seconds`)
    pub fn advance(&self, seconds: i64) {
        self.advance_millis(seconds.saturating_mul(1000));
    }

    /// Move forward (or backward) by `millis` milliseconds
    pub fn advance_millis(&self, millis: i64) {
        self.now_millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now_millis.load(Ordering::SeqCst)
    }
}

/// Implementation of Clock for Arc<T> to allow shared ownership.
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
