//! Injectable time source for time-dependent validation.
//!
//! The store checks the vacation lead-time rule against a [`Clock`] rather
//! than reading the wall clock directly, so tests can pin "now" to a known
//! instant.

use chrono::{DateTime, Utc};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock. This is the clock every store uses unless one is
/// injected explicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use roster_service::storage::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
