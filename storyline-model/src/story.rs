//! Ranked story summaries as returned by the trending endpoint.

use crate::ids::StoryId;
use crate::numbers::ChapterCount;

/// Publication status of a story.
///
/// The provider only distinguishes `"complete"`; every other raw value is
/// treated as an ongoing story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum StoryStatus {
    Complete,
    #[default]
    Ongoing,
}

impl StoryStatus {
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("complete") {
            StoryStatus::Complete
        } else {
            StoryStatus::Ongoing
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, StoryStatus::Complete)
    }

    /// Wire value understood by the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryStatus::Complete => "complete",
            StoryStatus::Ongoing => "ongoing",
        }
    }

    /// Badge text shown next to the trending marker
    pub fn label(&self) -> &'static str {
        match self {
            StoryStatus::Complete => "Complete",
            StoryStatus::Ongoing => "Ongoing",
        }
    }
}

impl From<String> for StoryStatus {
    fn from(raw: String) -> Self {
        StoryStatus::from_raw(&raw)
    }
}

impl From<StoryStatus> for String {
    fn from(status: StoryStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AuthorRef {
    pub display_name: String,
}

/// A ranked summary of a story used for carousel display
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StorySummary {
    #[cfg_attr(feature = "serde", serde(rename = "Id"))]
    pub id: StoryId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub author: Option<AuthorRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cover_image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: StoryStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_votes: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_views: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chapter_count: ChapterCount,
}

impl StorySummary {
    /// Author display name, empty when the provider omitted the author
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|author| author.display_name.as_str())
            .unwrap_or_default()
    }

    /// The first `limit` genres, in provider order
    pub fn leading_genres(&self, limit: usize) -> &[String] {
        &self.genres[..self.genres.len().min(limit)]
    }
}
