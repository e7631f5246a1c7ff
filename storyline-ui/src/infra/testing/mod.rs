//! Test doubles for the injected capabilities
//!
//! These are public so integration tests and embedding applications can run
//! the domains without a network, a wall clock or a toast system.

pub mod stubs;
pub mod time;

pub use stubs::{RecordingNotifier, StubStoryService};
pub use time::VirtualTimeProvider;
