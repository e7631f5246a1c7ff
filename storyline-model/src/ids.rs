use std::str::FromStr;

use crate::error::ModelError;

/// Strongly typed ID for stories as issued by the story data provider
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StoryId(pub u64);

impl StoryId {
    pub fn new(id: u64) -> Self {
        StoryId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for StoryId {
    fn from(id: u64) -> Self {
        StoryId(id)
    }
}

impl FromStr for StoryId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(StoryId)
            .map_err(|_| ModelError::InvalidStoryId(s.to_string()))
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numeric_ids() {
        assert_eq!(" 42 ".parse::<StoryId>().unwrap(), StoryId(42));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<StoryId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid story id: \"abc\"");
    }
}
