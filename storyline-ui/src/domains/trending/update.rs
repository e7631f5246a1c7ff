use log::{debug, error, info, warn};
use storyline_model::{StoryRoute, StorySummary};

use super::messages::{TrendingEffect, TrendingEvent, TrendingMessage};
use super::state::{CarouselTimings, LoadState, TrendingState};
use crate::common::messages::UpdateResult;
use crate::infra::services::FetchError;

pub fn update_trending(
    state: &mut TrendingState,
    message: TrendingMessage,
    timings: &CarouselTimings,
) -> UpdateResult<TrendingEffect> {
    let mut result = UpdateResult::none();

    match message {
        TrendingMessage::Loaded(outcome) => {
            handle_loaded(state, outcome, timings, &mut result)
        }
        TrendingMessage::AutoAdvanceTick { generation } => {
            if state.auto_advance_generation == Some(generation) {
                state.step_forward();
            } else {
                debug!("[Trending] Ignoring stale auto-advance tick {generation}");
            }
        }
        TrendingMessage::CooldownElapsed { generation } => {
            if state.cooldown_generation == Some(generation) {
                state.cooldown_generation = None;
                set_auto_advance(state, true, timings, &mut result);
            } else {
                debug!("[Trending] Ignoring superseded cooldown {generation}");
            }
        }
        TrendingMessage::Next => {
            if state.has_controls() {
                state.step_forward();
                suspend_for_manual_navigation(state, timings, &mut result);
            }
        }
        TrendingMessage::Previous => {
            if state.has_controls() {
                state.step_back();
                suspend_for_manual_navigation(state, timings, &mut result);
            }
        }
        TrendingMessage::GoTo(index) => match state.check_index(index) {
            Ok(()) => {
                state.current_index = index;
                suspend_for_manual_navigation(state, timings, &mut result);
            }
            Err(err) => warn!("[Trending] GoTo ignored: {err}"),
        },
        TrendingMessage::ToggleAutoPlay => {
            // A manual toggle is sticky; a pending cooldown must not undo it.
            if state.cooldown_generation.take().is_some() {
                result.push(TrendingEffect::CancelCooldown);
            }
            let enabled = !state.auto_advance_enabled;
            set_auto_advance(state, enabled, timings, &mut result);
        }
        TrendingMessage::Open(index) => match state.items.get(index) {
            Some(story) => {
                let route = StoryRoute::details(story.id);
                result.push(TrendingEffect::Emit(TrendingEvent::Navigate(
                    route,
                )));
            }
            None => warn!(
                "[Trending] Open ignored: no story at index {index} of {}",
                state.len()
            ),
        },
    }

    result
}

fn handle_loaded(
    state: &mut TrendingState,
    outcome: Result<Vec<StorySummary>, FetchError>,
    timings: &CarouselTimings,
    result: &mut UpdateResult<TrendingEffect>,
) {
    if !state.is_loading() {
        warn!("[Trending] Ignoring fetch completion after initial load");
        return;
    }

    match outcome {
        Ok(mut stories) => {
            stories.truncate(timings.limit);
            info!("[Trending] Loaded {} trending stories", stories.len());
            state.items = stories;
            state.current_index = 0;
            state.load_state = LoadState::Ready;
            restart_auto_advance(state, timings, result);
        }
        Err(err) => {
            error!("[Trending] Failed to load trending stories: {err}");
            state.items.clear();
            state.load_state = LoadState::Failed;
        }
    }
}

fn set_auto_advance(
    state: &mut TrendingState,
    enabled: bool,
    timings: &CarouselTimings,
    result: &mut UpdateResult<TrendingEffect>,
) {
    if state.auto_advance_enabled != enabled {
        state.auto_advance_enabled = enabled;
        restart_auto_advance(state, timings, result);
    }
}

/// Tear down the running interval (if any) and start a fresh one when the
/// trigger conditions hold.
fn restart_auto_advance(
    state: &mut TrendingState,
    timings: &CarouselTimings,
    result: &mut UpdateResult<TrendingEffect>,
) {
    if state.auto_advance_generation.take().is_some() {
        result.push(TrendingEffect::StopAutoAdvance);
    }

    if state.should_auto_advance() {
        let generation = state.issue_generation();
        state.auto_advance_generation = Some(generation);
        result.push(TrendingEffect::StartAutoAdvance {
            generation,
            period: timings.auto_advance_period,
        });
    }
}

/// Pause auto-advance and (re)arm the single cooldown timer
fn suspend_for_manual_navigation(
    state: &mut TrendingState,
    timings: &CarouselTimings,
    result: &mut UpdateResult<TrendingEffect>,
) {
    set_auto_advance(state, false, timings, result);

    let generation = state.issue_generation();
    state.cooldown_generation = Some(generation);
    result.push(TrendingEffect::StartCooldown {
        generation,
        delay: timings.cooldown,
    });
}
