use std::time::Duration;

use storyline_model::StorySummary;

use crate::infra::constants::trending::{fetch, timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTimings {
    pub auto_advance_period: Duration,
    pub cooldown: Duration,
    /// Entries requested per mount; longer results are truncated
    pub limit: usize,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            auto_advance_period: Duration::from_millis(timing::AUTO_ADVANCE_MS),
            cooldown: Duration::from_millis(timing::COOLDOWN_MS),
            limit: fetch::TRENDING_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrendingError {
    #[error("Slide index {index} out of range for {len} trending stories")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Trending carousel is no longer mounted")]
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Fetch failed for this mount; renders nothing, never retried
    Failed,
}

/// Carousel state owned by the reducer
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingState {
    pub items: Vec<StorySummary>,
    pub current_index: usize,
    pub auto_advance_enabled: bool,
    pub load_state: LoadState,
    /// Generation of the running auto-advance timer, if any
    pub auto_advance_generation: Option<u64>,
    /// Generation of the pending cooldown timer, if any
    pub cooldown_generation: Option<u64>,
    next_generation: u64,
}

impl Default for TrendingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
            auto_advance_enabled: true,
            load_state: LoadState::Loading,
            auto_advance_generation: None,
            cooldown_generation: None,
            next_generation: 1,
        }
    }
}

impl TrendingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn current(&self) -> Option<&StorySummary> {
        self.items.get(self.current_index)
    }

    /// Arrows, dots and the play/pause toggle only exist for 2+ entries
    pub fn has_controls(&self) -> bool {
        self.items.len() > 1
    }

    pub fn auto_advance_running(&self) -> bool {
        self.auto_advance_generation.is_some()
    }

    pub fn cooldown_pending(&self) -> bool {
        self.cooldown_generation.is_some()
    }

    pub fn check_index(&self, index: usize) -> Result<(), TrendingError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(TrendingError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    pub(crate) fn should_auto_advance(&self) -> bool {
        self.auto_advance_enabled
            && self.load_state == LoadState::Ready
            && self.items.len() > 1
    }

    pub(crate) fn issue_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    pub(crate) fn step_forward(&mut self) {
        let len = self.items.len();
        if len > 0 {
            self.current_index = (self.current_index + 1) % len;
        }
    }

    pub(crate) fn step_back(&mut self) {
        let len = self.items.len();
        if len > 0 {
            self.current_index = (self.current_index + len - 1) % len;
        }
    }
}
