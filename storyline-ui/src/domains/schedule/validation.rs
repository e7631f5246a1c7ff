//! Date/time parsing and the future-only rule for scheduled releases

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc,
};

use crate::infra::constants::schedule::{
    DATE_INPUT_FORMAT, TIME_INPUT_FORMAT, TIME_INPUT_FORMAT_SECONDS,
};
use crate::infra::time::TimeProvider;

/// Reasons a confirmation is rejected. The display text is shown to the
/// user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select both date and time")]
    MissingFields,

    #[error("Please select a valid date and time")]
    InvalidDateTime,

    #[error("Scheduled time must be in the future")]
    NotInFuture,
}

/// An accepted release time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledRelease {
    pub instant: DateTime<Utc>,
    /// ISO-8601 UTC timestamp with millisecond precision,
    /// e.g. `2026-10-18T14:30:00.000Z`
    pub timestamp: String,
}

impl ScheduledRelease {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, TIME_INPUT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_INPUT_FORMAT_SECONDS))
        .ok()
}

/// Combine the raw picker values into one wall-clock datetime
pub fn combine(
    date: &str,
    time: &str,
) -> Result<NaiveDateTime, ValidationError> {
    if date.trim().is_empty() || time.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }

    match (parse_date(date), parse_time(time)) {
        (Some(date), Some(time)) => Ok(date.and_time(time)),
        _ => Err(ValidationError::InvalidDateTime),
    }
}

/// Validate the picker values against the clock at the moment of the call.
///
/// The combined instant must be strictly after now; an instant equal to now
/// is rejected.
pub fn validate_schedule(
    date: &str,
    time: &str,
    clock: &dyn TimeProvider,
) -> Result<ScheduledRelease, ValidationError> {
    let local = combine(date, time)?;
    let instant = clock
        .resolve_local(local)
        .ok_or(ValidationError::InvalidDateTime)?;

    if instant <= clock.utc_now() {
        return Err(ValidationError::NotInFuture);
    }

    Ok(ScheduledRelease::at(instant))
}
