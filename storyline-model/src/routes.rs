//! Client-side addresses for per-story views.

use crate::ids::StoryId;

/// Route to a story's detail view, e.g. `/story/42`.
///
/// The surrounding application owns the router; this only names the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoryRoute {
    pub story_id: StoryId,
}

impl StoryRoute {
    pub fn details(story_id: StoryId) -> Self {
        Self { story_id }
    }

    pub fn path(&self) -> String {
        format!("/story/{}", self.story_id)
    }
}

impl std::fmt::Display for StoryRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/story/{}", self.story_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_uses_story_id() {
        let route = StoryRoute::details(StoryId(42));
        assert_eq!(route.path(), "/story/42");
        assert_eq!(route.to_string(), route.path());
    }
}
