use log::{debug, info};

use super::messages::{ScheduleEvent, ScheduleMessage};
use super::state::{ModalPhase, ScheduleModalState};
use super::validation::validate_schedule;
use crate::common::messages::UpdateResult;
use crate::domains::feedback::{Notifier, ToastNotification};
use crate::infra::time::TimeProvider;

pub fn update_schedule(
    state: &mut ScheduleModalState,
    message: ScheduleMessage,
    clock: &dyn TimeProvider,
    notifier: &dyn Notifier,
) -> UpdateResult<ScheduleEvent> {
    match message {
        ScheduleMessage::Open => {
            if !state.is_open() {
                state.reset();
                state.phase = ModalPhase::Editing;
            }
            UpdateResult::none()
        }
        ScheduleMessage::SelectDate(value) => {
            if accepts_input(state, "SelectDate") {
                state.selected_date = value;
                state.phase = ModalPhase::Editing;
            }
            UpdateResult::none()
        }
        ScheduleMessage::SelectTime(value) => {
            if accepts_input(state, "SelectTime") {
                state.selected_time = value;
                state.phase = ModalPhase::Editing;
            }
            UpdateResult::none()
        }
        ScheduleMessage::Confirm => {
            if !accepts_input(state, "Confirm") {
                return UpdateResult::none();
            }

            match validate_schedule(
                &state.selected_date,
                &state.selected_time,
                clock,
            ) {
                Ok(release) => {
                    info!(
                        "[Schedule] Chapter release scheduled for {}",
                        release.timestamp
                    );
                    state.phase = ModalPhase::Editing;
                    UpdateResult::effect(ScheduleEvent::Scheduled(release))
                }
                Err(err) => {
                    debug!("[Schedule] Rejected confirmation: {err}");
                    state.phase = ModalPhase::Rejected(err);
                    notifier.notify(ToastNotification::error(err.to_string()));
                    UpdateResult::none()
                }
            }
        }
        ScheduleMessage::Close => {
            state.reset();
            UpdateResult::effect(ScheduleEvent::CloseRequested)
        }
        ScheduleMessage::SetLoading(loading) => {
            state.loading = loading;
            UpdateResult::none()
        }
    }
}

/// Editing and confirmation require an open modal with no request in flight
fn accepts_input(state: &ScheduleModalState, action: &str) -> bool {
    if !state.is_open() {
        debug!("[Schedule] Ignoring {action}: modal is closed");
        return false;
    }
    if state.loading {
        debug!("[Schedule] Ignoring {action}: scheduling request in flight");
        return false;
    }
    true
}
