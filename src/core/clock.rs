//! Timestamp sources for request assembly

use crate::error::Result;
use crate::utils::current_timestamp;

/// Supplies milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> Result<i64>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Result<i64> {
        current_timestamp()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> Result<i64> {
        Ok(self.0)
    }
}
