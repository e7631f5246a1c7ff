//! Runtime configuration for user-adjustable constants
//!
//! This module provides a RuntimeConfig struct with Option<T> fields that override
//! the default constants. Accessor methods fall back to constants when None.

use std::time::Duration;

use crate::domains::trending::CarouselTimings;
use crate::infra::constants::trending::{fetch, timing};

pub const ENV_TRENDING_LIMIT: &str = "STORYLINE_TRENDING_LIMIT";
pub const ENV_AUTO_ADVANCE_MS: &str = "STORYLINE_AUTO_ADVANCE_MS";
pub const ENV_COOLDOWN_MS: &str = "STORYLINE_COOLDOWN_MS";

/// Runtime configuration with optional overrides for constants.
/// Fields are None by default, falling back to compiled constants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    // ========== TRENDING CAROUSEL ==========
    /// Entries requested from the story provider
    pub trending_limit: Option<usize>,
    /// Auto-advance period (ms)
    pub auto_advance_ms: Option<u64>,
    /// Manual navigation cooldown (ms)
    pub cooldown_ms: Option<u64>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`. Unparseable or zero values are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            trending_limit: parse_positive(&lookup, ENV_TRENDING_LIMIT),
            auto_advance_ms: parse_positive(&lookup, ENV_AUTO_ADVANCE_MS),
            cooldown_ms: parse_positive(&lookup, ENV_COOLDOWN_MS),
        }
    }

    pub fn trending_limit(&self) -> usize {
        self.trending_limit.unwrap_or(fetch::TRENDING_LIMIT)
    }

    pub fn auto_advance_period(&self) -> Duration {
        Duration::from_millis(
            self.auto_advance_ms.unwrap_or(timing::AUTO_ADVANCE_MS),
        )
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms.unwrap_or(timing::COOLDOWN_MS))
    }

    pub fn carousel_timings(&self) -> CarouselTimings {
        CarouselTimings {
            auto_advance_period: self.auto_advance_period(),
            cooldown: self.cooldown(),
            limit: self.trending_limit(),
        }
    }
}

fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Some(value),
        _ => {
            log::warn!(
                "Ignoring {key}={raw:?}: expected a positive integer, using default"
            );
            None
        }
    }
}
