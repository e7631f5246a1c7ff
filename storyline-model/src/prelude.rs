//! UI focused snapshot of the model surface.
//! Prefer importing from this module when working in storyline-ui.

pub use super::api::ApiResponse;
pub use super::ids::StoryId;
pub use super::numbers::{ChapterCount, format_compact_count};
pub use super::routes::StoryRoute;
pub use super::story::{AuthorRef, StoryStatus, StorySummary};
