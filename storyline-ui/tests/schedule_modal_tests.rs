//! Schedule modal behavior through the public API
//!
//! Covers validation totality, the future-only rule, reset on close, the
//! loading guard and toast delivery.

mod common;

use std::sync::Arc;

use chrono::{FixedOffset, TimeZone, Utc};
use storyline_ui::domains::schedule::ModalPhase;
use storyline_ui::infra::testing::{RecordingNotifier, VirtualTimeProvider};
use storyline_ui::{
    LogNotifier, ScheduleEvent, ScheduleModal, ValidationError,
};

fn modal_at(
    clock: VirtualTimeProvider,
) -> (ScheduleModal, RecordingNotifier) {
    common::init_logging();
    let notifier = RecordingNotifier::new();
    let modal = ScheduleModal::new(Arc::new(clock), Arc::new(notifier.clone()));
    (modal, notifier)
}

fn utc_clock() -> VirtualTimeProvider {
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 14, 30, 0).unwrap();
    VirtualTimeProvider::new_at(now)
}

#[test]
fn missing_fields_are_rejected_without_an_event() {
    let (mut modal, notifier) = modal_at(utc_clock());
    modal.open();

    assert!(modal.confirm().is_empty());
    modal.select_date("2026-10-20");
    assert!(modal.confirm().is_empty());

    assert_eq!(
        modal.state().last_error(),
        Some(ValidationError::MissingFields)
    );
    assert_eq!(
        notifier.errors(),
        vec![
            "Please select both date and time".to_string(),
            "Please select both date and time".to_string(),
        ]
    );
    assert!(modal.state().is_open());
}

#[test]
fn instant_equal_to_now_is_not_in_the_future() {
    let clock = utc_clock();
    let (mut modal, notifier) = modal_at(clock.clone());
    modal.open();
    modal.select_date("2026-10-18");
    modal.select_time("14:30");

    assert!(modal.confirm().is_empty());
    assert_eq!(
        notifier.errors(),
        vec!["Scheduled time must be in the future".to_string()]
    );

    modal.select_time("14:31");
    let events = modal.confirm();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ScheduleEvent::Scheduled(release) => {
            assert_eq!(release.timestamp, "2026-10-18T14:31:00.000Z");
        }
        other => panic!("expected Scheduled, got {other:?}"),
    }
    assert_eq!(modal.state().phase, ModalPhase::Editing);
}

#[test]
fn the_clock_moving_past_the_selection_rejects_it() {
    let clock = utc_clock();
    let (mut modal, _notifier) = modal_at(clock.clone());
    modal.open();
    modal.select_date("2026-10-18");
    modal.select_time("15:00");

    clock.advance(chrono::Duration::hours(1));

    assert!(modal.confirm().is_empty());
    assert_eq!(
        modal.state().last_error(),
        Some(ValidationError::NotInFuture)
    );
}

#[test]
fn fields_are_read_as_local_time() {
    // 14:30 UTC is 16:30 at +02:00; 16:00 local is already in the past.
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let (mut modal, _notifier) = modal_at(utc_clock().with_offset(offset));
    modal.open();
    modal.select_date("2026-10-18");
    modal.select_time("16:00");
    assert!(modal.confirm().is_empty());

    modal.select_time("17:00");
    match modal.confirm().as_slice() {
        [ScheduleEvent::Scheduled(release)] => {
            assert_eq!(release.timestamp, "2026-10-18T15:00:00.000Z");
        }
        other => panic!("expected one Scheduled event, got {other:?}"),
    }
}

#[test]
fn malformed_input_is_an_invalid_date_time() {
    let (mut modal, notifier) = modal_at(utc_clock());
    modal.open();
    modal.select_date("2026-02-30");
    modal.select_time("10:00");

    assert!(modal.confirm().is_empty());
    assert_eq!(
        notifier.errors(),
        vec!["Please select a valid date and time".to_string()]
    );
}

#[test]
fn close_resets_fields_for_the_next_open() {
    let (mut modal, _notifier) = modal_at(utc_clock());
    modal.open();
    modal.select_date("2026-10-20");
    modal.select_time("09:15");
    modal.confirm();

    assert_eq!(modal.close(), vec![ScheduleEvent::CloseRequested]);
    assert!(!modal.state().is_open());

    modal.open();
    assert_eq!(modal.state().selected_date, "");
    assert_eq!(modal.state().selected_time, "");
    assert_eq!(modal.state().phase, ModalPhase::Editing);
    assert!(modal.preview().is_none());
}

#[test]
fn loading_blocks_edits_and_confirmation_but_not_close() {
    let (mut modal, _notifier) = modal_at(utc_clock());
    modal.open();
    modal.select_date("2026-10-20");
    modal.select_time("09:15");
    assert!(modal.state().can_confirm());

    modal.set_loading(true);
    assert!(!modal.state().can_confirm());
    assert!(modal.confirm().is_empty());
    modal.select_time("10:00");
    assert_eq!(modal.state().selected_time, "09:15");

    assert_eq!(modal.close(), vec![ScheduleEvent::CloseRequested]);
}

#[test]
fn editing_after_a_rejection_returns_to_editing() {
    let (mut modal, _notifier) = modal_at(utc_clock());
    modal.open();
    modal.confirm();
    assert!(matches!(modal.state().phase, ModalPhase::Rejected(_)));

    modal.select_date("2026-10-20");
    assert_eq!(modal.state().phase, ModalPhase::Editing);
}

#[test]
fn hints_and_preview_follow_the_clock() {
    let (mut modal, _notifier) = modal_at(utc_clock());
    modal.open();

    assert_eq!(modal.min_date(), "2026-10-18");
    assert_eq!(modal.min_time(), None);

    modal.select_date("2026-10-18");
    assert_eq!(modal.min_time().as_deref(), Some("14:30"));

    modal.select_time("14:45");
    assert_eq!(
        modal.preview().as_deref(),
        Some("Sunday, October 18, 2026 at 2:45 PM")
    );

    modal.select_date("2026-10-19");
    assert_eq!(modal.min_time(), None);
}

#[test]
fn system_clock_rejects_past_dates() {
    common::init_logging();
    let mut modal = ScheduleModal::with_system_clock(Arc::new(LogNotifier));
    modal.open();
    modal.select_date("2000-01-01");
    modal.select_time("00:00");

    assert!(modal.confirm().is_empty());
    assert_eq!(
        modal.state().last_error(),
        Some(ValidationError::NotInFuture)
    );

    modal.select_date("2999-12-31");
    assert!(matches!(
        modal.confirm().as_slice(),
        [ScheduleEvent::Scheduled(_)]
    ));
}
