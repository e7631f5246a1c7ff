//! Service traits for external collaborators

pub mod story;

pub use story::{FetchError, FetchResult, StoryService};
