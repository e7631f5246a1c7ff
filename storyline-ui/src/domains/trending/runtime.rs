//! Carousel runtime
//!
//! One tokio task (the actor) owns the reducer state. User commands, timer
//! fires and the fetch completion are all messages on the same channel, so
//! they are handled strictly one at a time and every timer fire sees current
//! state. Timer tasks only send messages tagged with their generation.
//!
//! Dropping the [`TrendingCarouselHandle`] aborts the actor; the actor's
//! [`TaskSlot`]s abort the timers and the fetch with it.

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::messages::{TrendingEffect, TrendingEvent, TrendingMessage};
use super::state::{CarouselTimings, TrendingError, TrendingState};
use super::timers::{TaskSlot, spawn_auto_advance, spawn_cooldown};
use super::update::update_trending;
use crate::infra::services::StoryService;

/// Handle to a mounted trending carousel
#[derive(Debug)]
pub struct TrendingCarouselHandle {
    commands: UnboundedSender<TrendingMessage>,
    snapshot: watch::Receiver<TrendingState>,
    actor: Option<JoinHandle<()>>,
}

impl TrendingCarouselHandle {
    /// Mount a carousel and start its one-time fetch.
    ///
    /// Must be called from within a tokio runtime. Navigation events are
    /// delivered on the returned receiver.
    pub fn mount(
        service: Arc<dyn StoryService>,
        timings: CarouselTimings,
    ) -> (Self, UnboundedReceiver<TrendingEvent>) {
        let (commands, inbox) = mpsc::unbounded_channel();
        let (events, events_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot) = watch::channel(TrendingState::new());

        let mut actor = TrendingActor {
            state: TrendingState::new(),
            timings,
            inbox,
            outbox: commands.clone(),
            snapshot: snapshot_tx,
            events,
            auto_advance: TaskSlot::new(),
            cooldown: TaskSlot::new(),
            fetch: TaskSlot::new(),
        };
        actor
            .fetch
            .replace(spawn_fetch(service, timings.limit, commands.clone()));

        debug!("[Trending] Mounting carousel (limit {})", timings.limit);

        let handle = Self {
            commands,
            snapshot,
            actor: Some(tokio::spawn(actor.run())),
        };
        (handle, events_rx)
    }

    pub fn next(&self) -> Result<(), TrendingError> {
        self.send(TrendingMessage::Next)
    }

    pub fn previous(&self) -> Result<(), TrendingError> {
        self.send(TrendingMessage::Previous)
    }

    /// Jump to `index`; out-of-range indices are rejected without effect
    pub fn go_to(&self, index: usize) -> Result<(), TrendingError> {
        self.snapshot.borrow().check_index(index)?;
        self.send(TrendingMessage::GoTo(index))
    }

    pub fn toggle_auto_play(&self) -> Result<(), TrendingError> {
        self.send(TrendingMessage::ToggleAutoPlay)
    }

    /// Request navigation to the story at `index`
    pub fn open(&self, index: usize) -> Result<(), TrendingError> {
        self.snapshot.borrow().check_index(index)?;
        self.send(TrendingMessage::Open(index))
    }

    /// Copy of the latest published state
    pub fn snapshot(&self) -> TrendingState {
        self.snapshot.borrow().clone()
    }

    /// Watch state changes; the receiver errors once the carousel unmounts
    pub fn subscribe(&self) -> watch::Receiver<TrendingState> {
        self.snapshot.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.actor
            .as_ref()
            .is_some_and(|actor| !actor.is_finished())
    }

    /// Tear the carousel down, cancelling every timer and the fetch
    pub fn unmount(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(actor) = self.actor.take() {
            debug!("[Trending] Unmounting carousel");
            actor.abort();
        }
    }

    fn send(&self, message: TrendingMessage) -> Result<(), TrendingError> {
        if self.actor.is_none() {
            return Err(TrendingError::Unmounted);
        }
        self.commands
            .send(message)
            .map_err(|_| TrendingError::Unmounted)
    }
}

impl Drop for TrendingCarouselHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct TrendingActor {
    state: TrendingState,
    timings: CarouselTimings,
    inbox: UnboundedReceiver<TrendingMessage>,
    outbox: UnboundedSender<TrendingMessage>,
    snapshot: watch::Sender<TrendingState>,
    events: UnboundedSender<TrendingEvent>,
    auto_advance: TaskSlot,
    cooldown: TaskSlot,
    fetch: TaskSlot,
}

impl TrendingActor {
    async fn run(mut self) {
        while let Some(message) = self.inbox.recv().await {
            debug!("[Trending] Handling {message:?}");
            let result =
                update_trending(&mut self.state, message, &self.timings);
            for effect in result.into_effects() {
                self.apply(effect);
            }
            self.snapshot.send_replace(self.state.clone());
        }
    }

    fn apply(&mut self, effect: TrendingEffect) {
        match effect {
            TrendingEffect::StartAutoAdvance { generation, period } => {
                self.auto_advance.replace(spawn_auto_advance(
                    self.outbox.clone(),
                    generation,
                    period,
                ));
            }
            TrendingEffect::StopAutoAdvance => self.auto_advance.clear(),
            TrendingEffect::StartCooldown { generation, delay } => {
                self.cooldown.replace(spawn_cooldown(
                    self.outbox.clone(),
                    generation,
                    delay,
                ));
            }
            TrendingEffect::CancelCooldown => self.cooldown.clear(),
            TrendingEffect::Emit(event) => {
                if let Err(unsent) = self.events.send(event) {
                    debug!("[Trending] No listener for {:?}", unsent.0);
                }
            }
        }
    }
}

fn spawn_fetch(
    service: Arc<dyn StoryService>,
    limit: usize,
    outbox: UnboundedSender<TrendingMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = service.fetch_trending(limit).await;
        if outbox.send(TrendingMessage::Loaded(outcome)).is_err() {
            debug!("[Trending] Carousel unmounted before fetch completed");
        }
    })
}
