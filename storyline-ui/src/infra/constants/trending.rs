//! Trending carousel constants
//!
//! Compiled defaults for the carousel. Runtime overrides live in
//! `RuntimeConfig`; tuning of the defaults should happen here.

/// Timer cadence for rotation and manual-navigation cooldown.
pub mod timing {
    /// Period of the auto-advance timer (ms).
    pub const AUTO_ADVANCE_MS: u64 = 6_000;
    /// Suspension of auto-advance after a manual navigation (ms).
    pub const COOLDOWN_MS: u64 = 10_000;
}

/// Data window requested from the story provider.
pub mod fetch {
    /// Number of trending entries requested per mount.
    pub const TRENDING_LIMIT: usize = 5;
}

/// Slide presentation limits.
pub mod slide {
    /// Genres shown per slide.
    pub const MAX_GENRES: usize = 3;
    /// Placeholder text while the fetch is pending.
    pub const LOADING_TEXT: &str = "Loading trending stories...";
}
