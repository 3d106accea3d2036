//! Wall-clock abstraction
//!
//! The cancellation and return windows are measured against "now", so the
//! lifecycle manager takes its time from a `Clock` rather than calling
//! `Utc::now()` inline. Tests substitute a controllable clock to cross
//! window boundaries without sleeping.

use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
