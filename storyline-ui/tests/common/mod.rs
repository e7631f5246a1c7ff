//! Shared fixtures for storyline-ui integration tests

#![allow(dead_code)]

use std::time::Duration;

use storyline_model::{
    AuthorRef, ChapterCount, StoryId, StoryStatus, StorySummary,
};

/// Route `log` output through the test harness; safe to call repeatedly
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn story(id: u64) -> StorySummary {
    StorySummary {
        id: StoryId(id),
        title: format!("Story {id}"),
        author: Some(AuthorRef {
            display_name: format!("Author {id}"),
        }),
        description: format!("Description of story {id}"),
        cover_image: format!("https://cdn.example.com/covers/{id}.jpg"),
        status: if id % 2 == 0 {
            StoryStatus::Complete
        } else {
            StoryStatus::Ongoing
        },
        genres: vec!["Fantasy".into(), "Drama".into()],
        total_votes: 1_000 * id,
        total_views: 250_000 * id,
        chapter_count: ChapterCount::new(10 + id as u32),
    }
}

/// Stories with ids `1..=count`
pub fn stories(count: u64) -> Vec<StorySummary> {
    (1..=count).map(story).collect()
}

/// Let paused tokio time run forward; every task that becomes ready before
/// the deadline is driven to idle first.
pub async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
