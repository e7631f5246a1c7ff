//! Trending stories carousel
//!
//! Shows one highlighted story at a time and rotates through them on a
//! timer. Manual navigation suspends rotation; it resumes once the user has
//! left the carousel alone for the cooldown period.
//!
//! - [`update_trending`] is the pure reducer. It mutates [`TrendingState`]
//!   and returns [`TrendingEffect`]s describing timer changes and events.
//! - [`TrendingCarouselHandle`] mounts the actor that runs the reducer and
//!   carries the effects out on tokio tasks.
//! - [`TrendingState::view`] projects the state into a [`CarouselView`].

pub mod messages;
pub mod runtime;
pub mod state;
pub mod timers;
pub mod update;
pub mod view_model;

pub use messages::{TrendingEffect, TrendingEvent, TrendingMessage};
pub use runtime::TrendingCarouselHandle;
pub use state::{CarouselTimings, LoadState, TrendingError, TrendingState};
pub use update::update_trending;
pub use view_model::{CarouselView, TrendingSlide};
