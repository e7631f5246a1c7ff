//! Schedule modal constants

/// Value format of the date picker (`2026-10-18`).
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
/// Value format of the time picker (`14:30`).
pub const TIME_INPUT_FORMAT: &str = "%H:%M";
/// Time picker values may carry seconds (`14:30:00`).
pub const TIME_INPUT_FORMAT_SECONDS: &str = "%H:%M:%S";
/// Preview rendering, e.g. `Sunday, October 18, 2026 at 2:30 PM`.
pub const PREVIEW_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p";

pub const TITLE: &str = "Schedule Chapter Release";
pub const DESCRIPTION: &str =
    "Choose when you want this chapter to be automatically published.";
