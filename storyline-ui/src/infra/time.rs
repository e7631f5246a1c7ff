//! Wall-clock access for time-dependent validation
//!
//! Schedule validation compares user input against "now"; reading the clock
//! through [`TimeProvider`] keeps that comparison deterministic under test.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Trait for providing time in tests and production
pub trait TimeProvider: Send + Sync + 'static {
    /// Get the current UTC datetime
    fn utc_now(&self) -> DateTime<Utc>;

    /// Get the current wall-clock datetime in the user's time zone
    fn local_now(&self) -> NaiveDateTime;

    /// Resolve a wall-clock datetime in the user's time zone to an absolute
    /// instant. Returns `None` when the local time does not exist (DST gap).
    /// Ambiguous times resolve to the earlier instant.
    fn resolve_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>>;

    /// Clone the time provider into a boxed trait object
    fn clone_box(&self) -> Box<dyn TimeProvider>;
}

/// Production time provider that uses the system clock and time zone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn resolve_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        Local
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn clone_box(&self) -> Box<dyn TimeProvider> {
        Box::new(*self)
    }
}
