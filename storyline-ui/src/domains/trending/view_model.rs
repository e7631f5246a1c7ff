//! Render-ready projection of the carousel state

use storyline_model::{StoryRoute, StorySummary, format_compact_count};

use super::state::{LoadState, TrendingState};
use crate::infra::constants::trending::slide;

/// One carousel slide with every display string already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingSlide {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_image: String,
    pub status_label: &'static str,
    pub genres: Vec<String>,
    pub votes: String,
    pub views: String,
    pub chapters: String,
    pub route: StoryRoute,
}

impl From<&StorySummary> for TrendingSlide {
    fn from(story: &StorySummary) -> Self {
        Self {
            title: story.title.clone(),
            author: story.author_name().to_string(),
            description: story.description.clone(),
            cover_image: story.cover_image.clone(),
            status_label: story.status.label(),
            genres: story.leading_genres(slide::MAX_GENRES).to_vec(),
            votes: format_compact_count(story.total_votes),
            views: format_compact_count(story.total_views),
            chapters: story.chapter_count.label(),
            route: StoryRoute::details(story.id),
        }
    }
}

/// What the carousel should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselView {
    /// Fetch still pending
    Loading(&'static str),
    /// Failed fetch or empty result
    Hidden,
    Slides {
        current: TrendingSlide,
        current_index: usize,
        total: usize,
        /// Arrows, dots and play/pause
        show_controls: bool,
        auto_advance_enabled: bool,
    },
}

impl CarouselView {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl TrendingState {
    pub fn view(&self) -> CarouselView {
        match self.load_state {
            LoadState::Loading => CarouselView::Loading(slide::LOADING_TEXT),
            LoadState::Failed => CarouselView::Hidden,
            LoadState::Ready => match self.current() {
                Some(story) => CarouselView::Slides {
                    current: TrendingSlide::from(story),
                    current_index: self.current_index,
                    total: self.len(),
                    show_controls: self.has_controls(),
                    auto_advance_enabled: self.auto_advance_enabled,
                },
                None => CarouselView::Hidden,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyline_model::{AuthorRef, ChapterCount, StoryId, StoryStatus};

    fn story() -> StorySummary {
        StorySummary {
            id: StoryId(42),
            title: "The Lantern Road".into(),
            author: Some(AuthorRef {
                display_name: "Mara Quill".into(),
            }),
            description: "A courier carries light across a dark country."
                .into(),
            cover_image: "https://cdn.example.com/covers/42.jpg".into(),
            status: StoryStatus::Complete,
            genres: vec![
                "Fantasy".into(),
                "Adventure".into(),
                "Romance".into(),
                "Mystery".into(),
            ],
            total_votes: 1_500,
            total_views: 2_500_000,
            chapter_count: ChapterCount::new(37),
        }
    }

    #[test]
    fn slide_formats_display_fields() {
        let slide = TrendingSlide::from(&story());

        assert_eq!(slide.author, "Mara Quill");
        assert_eq!(slide.status_label, "Complete");
        assert_eq!(slide.genres, vec!["Fantasy", "Adventure", "Romance"]);
        assert_eq!(slide.votes, "1.5k");
        assert_eq!(slide.views, "2.5M");
        assert_eq!(slide.chapters, "37 chapters");
        assert_eq!(slide.route.path(), "/story/42");
    }

    #[test]
    fn missing_author_renders_empty() {
        let mut story = story();
        story.author = None;
        story.status = StoryStatus::Ongoing;

        let slide = TrendingSlide::from(&story);
        assert_eq!(slide.author, "");
        assert_eq!(slide.status_label, "Ongoing");
    }

    #[test]
    fn view_follows_load_state() {
        let mut state = TrendingState::new();
        assert_eq!(
            state.view(),
            CarouselView::Loading("Loading trending stories...")
        );

        state.load_state = LoadState::Ready;
        assert!(state.view().is_hidden());

        state.items = vec![story()];
        match state.view() {
            CarouselView::Slides {
                total,
                show_controls,
                ..
            } => {
                assert_eq!(total, 1);
                assert!(!show_controls);
            }
            other => panic!("expected slides, got {other:?}"),
        }

        state.load_state = LoadState::Failed;
        assert!(state.view().is_hidden());
    }
}
