//! Core data model definitions shared across Storyline crates.
#![allow(missing_docs)]

pub mod api;
pub mod error;
pub mod ids;
pub mod numbers;
pub mod prelude;
pub mod routes;
pub mod story;

// Intentionally curated re-exports for downstream consumers.
pub use api::ApiResponse;
pub use error::{ModelError, Result as ModelResult};
pub use ids::StoryId;
pub use numbers::{ChapterCount, format_compact_count};
pub use routes::StoryRoute;
pub use story::{AuthorRef, StoryStatus, StorySummary};
