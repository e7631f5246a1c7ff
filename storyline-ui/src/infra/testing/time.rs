//! Virtual time provider for deterministic testing

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use parking_lot::Mutex;

use crate::infra::time::TimeProvider;

/// Virtual time provider for testing
///
/// Holds a settable UTC instant and a fixed offset standing in for the
/// user's time zone. Clones share the same clock.
#[derive(Clone, Debug)]
pub struct VirtualTimeProvider {
    now: Arc<Mutex<DateTime<Utc>>>,
    offset: FixedOffset,
}

impl VirtualTimeProvider {
    /// Create a virtual time provider at `start_time`, in UTC
    pub fn new_at(start_time: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start_time)),
            offset: Utc.fix(),
        }
    }

    /// Use `offset` as the local time zone
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: chrono::Duration) {
        let mut now = self.now.lock();
        *now += duration;
    }

    /// Set the current time to a specific UTC datetime
    pub fn set_utc(&self, datetime: DateTime<Utc>) {
        *self.now.lock() = datetime;
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl TimeProvider for VirtualTimeProvider {
    fn utc_now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }

    fn local_now(&self) -> NaiveDateTime {
        self.utc_now().with_timezone(&self.offset).naive_local()
    }

    fn resolve_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn clone_box(&self) -> Box<dyn TimeProvider> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn noon_utc() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_virtual_time_advance() {
        let provider = VirtualTimeProvider::new_at(noon_utc());
        provider.advance(chrono::Duration::seconds(90));
        assert_eq!(provider.utc_now().minute(), 1);
        assert_eq!(provider.utc_now().second(), 30);
    }

    #[test]
    fn test_clones_share_the_clock() {
        let provider = VirtualTimeProvider::new_at(noon_utc());
        let clone = provider.clone();
        provider.advance(chrono::Duration::hours(1));
        assert_eq!(clone.utc_now().hour(), 13);
    }

    #[test]
    fn test_local_time_applies_offset() {
        let provider = VirtualTimeProvider::new_at(noon_utc())
            .with_offset(FixedOffset::west_opt(5 * 3600).unwrap());

        assert_eq!(provider.local_now().hour(), 7);

        let resolved = provider.resolve_local(provider.local_now()).unwrap();
        assert_eq!(resolved, noon_utc());
    }
}
