//! Storyline UI core
//!
//! Headless state for two leaf components of the reading platform: the
//! chapter release schedule modal and the trending stories carousel. View
//! layers drive the domains with messages and render from their state.
//!
//! Notes
//! - The carousel runtime spawns tokio tasks and must be mounted from within
//!   a tokio runtime.
//! - Public items are subject to change while the domains stabilize.

pub mod common;
pub mod domains;
pub mod infra;

pub use domains::feedback::{
    LogNotifier, Notifier, ToastLevel, ToastNotification,
};
pub use domains::schedule::{
    ScheduleEvent, ScheduleMessage, ScheduleModal, ScheduledRelease,
    ValidationError,
};
pub use domains::trending::{
    CarouselTimings, TrendingCarouselHandle, TrendingError, TrendingEvent,
    TrendingMessage, TrendingState,
};
pub use infra::services::{FetchError, StoryService};
