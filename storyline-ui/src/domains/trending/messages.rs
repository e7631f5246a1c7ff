//! Message and effect types for the trending carousel

use std::time::Duration;

use storyline_model::{StoryRoute, StorySummary};

use crate::infra::services::FetchError;

/// Every input to the carousel reducer: user commands, timer fires and the
/// fetch completion all arrive through this one type.
pub enum TrendingMessage {
    // Data
    Loaded(Result<Vec<StorySummary>, FetchError>),

    // Timers
    AutoAdvanceTick { generation: u64 },
    CooldownElapsed { generation: u64 },

    // Navigation
    Next,
    Previous,
    GoTo(usize),
    ToggleAutoPlay,
    Open(usize),
}

impl TrendingMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "Trending::Loaded",
            Self::AutoAdvanceTick { .. } => "Trending::AutoAdvanceTick",
            Self::CooldownElapsed { .. } => "Trending::CooldownElapsed",
            Self::Next => "Trending::Next",
            Self::Previous => "Trending::Previous",
            Self::GoTo(_) => "Trending::GoTo",
            Self::ToggleAutoPlay => "Trending::ToggleAutoPlay",
            Self::Open(_) => "Trending::Open",
        }
    }
}

impl std::fmt::Debug for TrendingMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded(Ok(stories)) => {
                write!(f, "Trending::Loaded(Ok({} stories))", stories.len())
            }
            Self::Loaded(Err(err)) => write!(f, "Trending::Loaded(Err({err}))"),
            Self::AutoAdvanceTick { generation } => {
                write!(f, "Trending::AutoAdvanceTick(gen={generation})")
            }
            Self::CooldownElapsed { generation } => {
                write!(f, "Trending::CooldownElapsed(gen={generation})")
            }
            Self::GoTo(index) => write!(f, "Trending::GoTo({index})"),
            Self::Open(index) => write!(f, "Trending::Open({index})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Events the embedding application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingEvent {
    /// Navigate to the selected story's detail view
    Navigate(StoryRoute),
}

/// Side effects requested by the reducer, carried out by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingEffect {
    /// (Re)create the auto-advance interval, replacing any running one
    StartAutoAdvance { generation: u64, period: Duration },
    StopAutoAdvance,
    /// (Re)arm the one-shot cooldown, replacing any pending one
    StartCooldown { generation: u64, delay: Duration },
    CancelCooldown,
    Emit(TrendingEvent),
}
