use chrono::NaiveDateTime;

use super::validation::{ValidationError, combine, parse_date};
use crate::infra::constants::schedule::{
    DATE_INPUT_FORMAT, PREVIEW_FORMAT, TIME_INPUT_FORMAT,
};
use crate::infra::time::TimeProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Editing,
    /// Still open and editable; the error was surfaced as a toast
    Rejected(ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleModalState {
    pub phase: ModalPhase,
    pub selected_date: String,
    pub selected_time: String,
    pub loading: bool,
}

impl ScheduleModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }

    pub fn last_error(&self) -> Option<ValidationError> {
        match self.phase {
            ModalPhase::Rejected(err) => Some(err),
            _ => None,
        }
    }

    pub fn has_both_fields(&self) -> bool {
        !self.selected_date.trim().is_empty()
            && !self.selected_time.trim().is_empty()
    }

    /// Pickers and buttons are disabled while a request is in flight
    pub fn controls_disabled(&self) -> bool {
        self.loading
    }

    pub fn can_confirm(&self) -> bool {
        self.is_open() && !self.loading && self.has_both_fields()
    }

    /// Clear both fields and the error, leaving the modal closed
    pub fn reset(&mut self) {
        self.phase = ModalPhase::Closed;
        self.selected_date.clear();
        self.selected_time.clear();
    }

    /// Earliest selectable date for the date picker.
    ///
    /// A hint only: `confirm` re-validates against the clock.
    pub fn min_date(&self, clock: &dyn TimeProvider) -> String {
        clock
            .local_now()
            .date()
            .format(DATE_INPUT_FORMAT)
            .to_string()
    }

    /// Earliest selectable time, only when the selected date is today
    pub fn min_time(&self, clock: &dyn TimeProvider) -> Option<String> {
        let now = clock.local_now();
        let selected = parse_date(&self.selected_date)?;
        (selected == now.date())
            .then(|| now.time().format(TIME_INPUT_FORMAT).to_string())
    }

    /// Wall-clock datetime of the current selection, when it parses
    pub fn selected_datetime(&self) -> Option<NaiveDateTime> {
        combine(&self.selected_date, &self.selected_time).ok()
    }

    /// Human-readable rendering of the selection for confirmation,
    /// e.g. `Sunday, October 18, 2026 at 2:30 PM`
    pub fn preview(&self) -> Option<String> {
        self.selected_datetime()
            .map(|datetime| datetime.format(PREVIEW_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::VirtualTimeProvider;
    use chrono::{TimeZone, Utc};

    fn clock() -> VirtualTimeProvider {
        VirtualTimeProvider::new_at(
            Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 42).unwrap(),
        )
    }

    fn editing(date: &str, time: &str) -> ScheduleModalState {
        ScheduleModalState {
            phase: ModalPhase::Editing,
            selected_date: date.into(),
            selected_time: time.into(),
            loading: false,
        }
    }

    #[test]
    fn preview_renders_weekday_and_twelve_hour_time() {
        let state = editing("2026-10-18", "14:30");
        assert_eq!(
            state.preview().as_deref(),
            Some("Sunday, October 18, 2026 at 2:30 PM")
        );

        let state = editing("2026-11-02", "00:05");
        assert_eq!(
            state.preview().as_deref(),
            Some("Monday, November 2, 2026 at 12:05 AM")
        );
    }

    #[test]
    fn preview_requires_both_fields() {
        assert_eq!(editing("2026-10-18", "").preview(), None);
        assert_eq!(editing("", "14:30").preview(), None);
    }

    #[test]
    fn min_time_only_applies_to_today() {
        let clock = clock();
        assert_eq!(
            editing("2026-10-18", "").min_time(&clock).as_deref(),
            Some("09:05")
        );
        assert_eq!(editing("2026-10-19", "").min_time(&clock), None);
        assert_eq!(editing("", "").min_time(&clock), None);
    }

    #[test]
    fn min_date_is_local_today() {
        let clock = clock();
        assert_eq!(editing("", "").min_date(&clock), "2026-10-18");
    }

    #[test]
    fn confirm_gating_follows_loading_and_fields() {
        let mut state = editing("2026-10-18", "14:30");
        assert!(state.can_confirm());

        state.loading = true;
        assert!(state.controls_disabled());
        assert!(!state.can_confirm());

        let state = editing("2026-10-18", " ");
        assert!(!state.can_confirm());
    }
}
