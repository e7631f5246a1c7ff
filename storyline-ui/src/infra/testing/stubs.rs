//! In-memory stand-ins for the story provider and the toast system

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use storyline_model::StorySummary;
use tokio::sync::Notify;

use crate::domains::feedback::{Notifier, ToastLevel, ToastNotification};
use crate::infra::services::{FetchError, FetchResult, StoryService};

#[derive(Debug, Clone)]
enum StubOutcome {
    Stories(Vec<StorySummary>),
    Fail(String),
}

/// Story service returning canned results.
///
/// A gated stub holds every fetch until [`StubStoryService::release`] is
/// called, which lets tests tear a component down mid-fetch.
#[derive(Debug, Clone)]
pub struct StubStoryService {
    outcome: StubOutcome,
    gate: Option<Arc<Notify>>,
    calls: Arc<AtomicUsize>,
    limits: Arc<Mutex<Vec<usize>>>,
}

impl StubStoryService {
    pub fn with_stories(stories: Vec<StorySummary>) -> Self {
        Self::new(StubOutcome::Stories(stories))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(StubOutcome::Fail(reason.into()))
    }

    fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            gate: None,
            calls: Arc::new(AtomicUsize::new(0)),
            limits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Hold fetches until `release` is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Let a pending (or the next) gated fetch complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Limits passed to each fetch, in call order
    pub fn requested_limits(&self) -> Vec<usize> {
        self.limits.lock().clone()
    }
}

#[async_trait]
impl StoryService for StubStoryService {
    async fn fetch_trending(
        &self,
        limit: usize,
    ) -> FetchResult<Vec<StorySummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.limits.lock().push(limit);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            StubOutcome::Stories(stories) => {
                Ok(stories.iter().take(limit).cloned().collect())
            }
            StubOutcome::Fail(reason) => {
                Err(FetchError::Unavailable(reason.clone()))
            }
        }
    }
}

/// Notifier that records every toast it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<ToastNotification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<ToastNotification> {
        self.toasts.lock().clone()
    }

    /// Messages of recorded error toasts, oldest first
    pub fn errors(&self) -> Vec<String> {
        self.toasts
            .lock()
            .iter()
            .filter(|toast| toast.level == ToastLevel::Error)
            .map(|toast| toast.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.toasts.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: ToastNotification) {
        self.toasts.lock().push(toast);
    }
}
