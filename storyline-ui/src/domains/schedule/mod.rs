//! Chapter release scheduling modal
//!
//! Collects a release date and time, requires the combined instant to be
//! strictly in the future, and emits one [`ScheduleEvent::Scheduled`] per
//! accepted confirmation. Rejections are surfaced as error toasts through the
//! injected [`Notifier`]; the modal stays open and editable.
//!
//! ```text
//! Closed --open--> Editing --confirm(err)--> Rejected(err)
//!                     ^                           |
//!                     +-------- edit -------------+
//! any --close--> Closed (fields cleared)
//! ```

pub mod messages;
pub mod state;
pub mod update;
pub mod validation;

use std::sync::Arc;

pub use messages::{ScheduleEvent, ScheduleMessage};
pub use state::{ModalPhase, ScheduleModalState};
pub use update::update_schedule;
pub use validation::{ScheduledRelease, ValidationError};

use crate::domains::feedback::Notifier;
use crate::infra::time::{SystemTimeProvider, TimeProvider};

/// Schedule modal with its injected clock and notifier
pub struct ScheduleModal {
    state: ScheduleModalState,
    clock: Arc<dyn TimeProvider>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for ScheduleModal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleModal")
            .field("state", &self.state)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl ScheduleModal {
    pub fn new(
        clock: Arc<dyn TimeProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: ScheduleModalState::default(),
            clock,
            notifier,
        }
    }

    /// Modal reading the system clock
    pub fn with_system_clock(notifier: Arc<dyn Notifier>) -> Self {
        Self::new(Arc::new(SystemTimeProvider), notifier)
    }

    pub fn state(&self) -> &ScheduleModalState {
        &self.state
    }

    pub fn update(&mut self, message: ScheduleMessage) -> Vec<ScheduleEvent> {
        update_schedule(
            &mut self.state,
            message,
            self.clock.as_ref(),
            self.notifier.as_ref(),
        )
        .into_effects()
    }

    pub fn open(&mut self) -> Vec<ScheduleEvent> {
        self.update(ScheduleMessage::Open)
    }

    pub fn select_date(
        &mut self,
        value: impl Into<String>,
    ) -> Vec<ScheduleEvent> {
        self.update(ScheduleMessage::SelectDate(value.into()))
    }

    pub fn select_time(
        &mut self,
        value: impl Into<String>,
    ) -> Vec<ScheduleEvent> {
        self.update(ScheduleMessage::SelectTime(value.into()))
    }

    pub fn confirm(&mut self) -> Vec<ScheduleEvent> {
        self.update(ScheduleMessage::Confirm)
    }

    pub fn close(&mut self) -> Vec<ScheduleEvent> {
        self.update(ScheduleMessage::Close)
    }

    pub fn set_loading(&mut self, loading: bool) -> Vec<ScheduleEvent> {
        self.update(ScheduleMessage::SetLoading(loading))
    }

    pub fn min_date(&self) -> String {
        self.state.min_date(self.clock.as_ref())
    }

    pub fn min_time(&self) -> Option<String> {
        self.state.min_time(self.clock.as_ref())
    }

    pub fn preview(&self) -> Option<String> {
        self.state.preview()
    }
}
