//! Owned handles for the carousel's background tasks

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::messages::TrendingMessage;

/// Slot holding at most one spawned task.
///
/// Replacing, clearing or dropping the slot aborts the task it held, so a
/// slot can never leak a timer past its owner.
#[derive(Debug, Default)]
pub struct TaskSlot {
    handle: Option<JoinHandle<()>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.abort();
        }
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True while the held task has not finished
    pub fn is_armed(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Recurring tick for auto-advance. The first tick fires one full period
/// after the timer is created.
pub fn spawn_auto_advance(
    outbox: UnboundedSender<TrendingMessage>,
    generation: u64,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if outbox
                .send(TrendingMessage::AutoAdvanceTick { generation })
                .is_err()
            {
                break;
            }
        }
    })
}

/// One-shot re-enable of auto-advance after manual navigation
pub fn spawn_cooldown(
    outbox: UnboundedSender<TrendingMessage>,
    generation: u64,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        time::sleep(delay).await;
        let _ = outbox.send(TrendingMessage::CooldownElapsed { generation });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn replacing_a_slot_aborts_the_previous_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = TaskSlot::new();

        slot.replace(spawn_cooldown(tx.clone(), 1, Duration::from_secs(10)));
        time::sleep(Duration::from_secs(5)).await;
        slot.replace(spawn_cooldown(tx, 2, Duration::from_secs(10)));

        match rx.recv().await {
            Some(TrendingMessage::CooldownElapsed { generation }) => {
                assert_eq!(generation, 2)
            }
            other => panic!("unexpected message: {other:?}"),
        }
        // Every sender is gone once the surviving timer finished.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_a_slot_aborts_its_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = TaskSlot::new();
        slot.replace(spawn_auto_advance(tx, 7, Duration::from_secs(6)));
        assert!(slot.is_armed());

        drop(slot);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_waits_a_full_period_before_first_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _slot = {
            let mut slot = TaskSlot::new();
            slot.replace(spawn_auto_advance(tx, 3, Duration::from_secs(6)));
            slot
        };

        let started = Instant::now();
        let message = rx.recv().await;
        assert!(matches!(
            message,
            Some(TrendingMessage::AutoAdvanceTick { generation: 3 })
        ));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(6), "fired after {elapsed:?}");
        assert!(elapsed < Duration::from_secs(7), "fired after {elapsed:?}");
    }
}
