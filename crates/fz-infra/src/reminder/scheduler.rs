use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::{debug, trace};

use fz_core::ports::{ClockPort, ReminderSchedulerError, ReminderSchedulerPort};
use fz_core::ContainerId;

struct PendingReminder {
    generation: u64,
    trigger_at_ms: i64,
    handle: AbortHandle,
}

#[derive(Default)]
struct Timers {
    next_generation: u64,
    pending: HashMap<ContainerId, PendingReminder>,
}

impl Timers {
    /// Drop the entry for `id` if it still belongs to `generation`.
    /// A replaced or cancelled timer reports false and must not fire.
    fn finish(&mut self, id: ContainerId, generation: u64) -> bool {
        let current = self
            .pending
            .get(&id)
            .is_some_and(|p| p.generation == generation);
        if current {
            self.pending.remove(&id);
        }
        current
    }
}

/// In-process reminder timers, one tokio task per container.
///
/// A due reminder sends its container id on the channel returned by
/// [`TokioReminderScheduler::new`]. Timers live as long as the runtime; a
/// restart relies on rescheduling from stored `reminder_at` values.
pub struct TokioReminderScheduler {
    clock: Arc<dyn ClockPort>,
    timers: Arc<Mutex<Timers>>,
    fired_tx: mpsc::UnboundedSender<ContainerId>,
}

impl TokioReminderScheduler {
    pub fn new(clock: Arc<dyn ClockPort>) -> (Self, mpsc::UnboundedReceiver<ContainerId>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            clock,
            timers: Arc::new(Mutex::new(Timers::default())),
            fired_tx,
        };
        (scheduler, fired_rx)
    }

    /// Trigger instant of the pending reminder for `id`.
    pub async fn trigger_at(&self, id: ContainerId) -> Option<i64> {
        self.timers
            .lock()
            .await
            .pending
            .get(&id)
            .map(|p| p.trigger_at_ms)
    }

    /// Abort every pending timer.
    pub async fn cancel_all(&self) {
        let mut timers = self.timers.lock().await;
        for (_, pending) in timers.pending.drain() {
            pending.handle.abort();
        }
    }
}

#[async_trait]
impl ReminderSchedulerPort for TokioReminderScheduler {
    async fn schedule(
        &self,
        id: ContainerId,
        trigger_at_ms: i64,
    ) -> Result<(), ReminderSchedulerError> {
        if self.fired_tx.is_closed() {
            return Err(ReminderSchedulerError::Closed);
        }

        let delay_ms = (trigger_at_ms - self.clock.now_ms()).max(0) as u64;
        let timers = Arc::clone(&self.timers);
        let fired_tx = self.fired_tx.clone();

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.pending.remove(&id) {
            existing.handle.abort();
            trace!(container_id = %id, "replaced pending reminder");
        }
        let generation = timers_guard.next_generation;
        timers_guard.next_generation += 1;

        let handle = tokio::spawn(async move {
            sleep(Duration::from_millis(delay_ms)).await;
            if !timers.lock().await.finish(id, generation) {
                trace!(container_id = %id, generation, "superseded reminder dropped");
                return;
            }

            if fired_tx.send(id).is_err() {
                debug!(container_id = %id, "reminder fired after receiver closed");
            }
        });

        timers_guard.pending.insert(
            id,
            PendingReminder {
                generation,
                trigger_at_ms,
                handle: handle.abort_handle(),
            },
        );
        debug!(container_id = %id, trigger_at_ms, delay_ms, "reminder scheduled");
        Ok(())
    }

    async fn cancel(&self, id: ContainerId) -> Result<(), ReminderSchedulerError> {
        let mut timers_guard = self.timers.lock().await;
        if let Some(pending) = timers_guard.pending.remove(&id) {
            pending.handle.abort();
            debug!(container_id = %id, "reminder cancelled");
        }
        Ok(())
    }

    async fn pending(&self) -> Result<Vec<ContainerId>, ReminderSchedulerError> {
        let mut ids: Vec<ContainerId> = self.timers.lock().await.pending.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fz_core::container::DAY_MS;
    use tokio::time::advance;

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }

        fn local_offset(&self) -> chrono::FixedOffset {
            chrono::FixedOffset::east_opt(0).unwrap()
        }
    }

    const NOW: i64 = 1_700_000_000_000;

    fn scheduler() -> (TokioReminderScheduler, mpsc::UnboundedReceiver<ContainerId>) {
        TokioReminderScheduler::new(Arc::new(FixedClock(NOW)))
    }

    #[tokio::test]
    async fn fires_after_delay() -> anyhow::Result<()> {
        tokio::time::pause();
        let (scheduler, mut fired) = scheduler();
        let id = ContainerId::new(1);

        scheduler.schedule(id, NOW + 5_000).await?;
        assert_eq!(scheduler.pending().await?, vec![id]);

        advance(Duration::from_millis(4_999)).await;
        tokio::task::yield_now().await;
        assert!(fired.try_recv().is_err());

        advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.recv().await, Some(id));
        assert!(scheduler.pending().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn past_trigger_fires_immediately() -> anyhow::Result<()> {
        tokio::time::pause();
        let (scheduler, mut fired) = scheduler();

        scheduler.schedule(ContainerId::new(2), NOW - DAY_MS).await?;

        assert_eq!(fired.recv().await, Some(ContainerId::new(2)));
        Ok(())
    }

    #[tokio::test]
    async fn cancel_prevents_delivery() -> anyhow::Result<()> {
        tokio::time::pause();
        let (scheduler, mut fired) = scheduler();
        let id = ContainerId::new(3);

        scheduler.schedule(id, NOW + 5_000).await?;
        scheduler.cancel(id).await?;
        advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;

        assert!(fired.try_recv().is_err());
        assert!(scheduler.pending().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn schedule_replaces_existing_reminder_for_same_container() -> anyhow::Result<()> {
        tokio::time::pause();
        let (scheduler, mut fired) = scheduler();
        let id = ContainerId::new(4);

        scheduler.schedule(id, NOW + 5_000).await?;
        scheduler.schedule(id, NOW + 10_000).await?;
        assert_eq!(scheduler.trigger_at(id).await, Some(NOW + 10_000));

        advance(Duration::from_millis(5_000)).await;
        tokio::task::yield_now().await;
        assert!(fired.try_recv().is_err());
        assert_eq!(scheduler.pending().await?, vec![id]);

        advance(Duration::from_millis(5_000)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.recv().await, Some(id));
        assert!(fired.try_recv().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn superseded_generation_does_not_finish() {
        let mut timers = Timers::default();
        let id = ContainerId::new(6);
        let handle = tokio::spawn(async {}).abort_handle();
        timers.pending.insert(
            id,
            PendingReminder {
                generation: 2,
                trigger_at_ms: NOW,
                handle,
            },
        );

        assert!(!timers.finish(id, 1));
        assert!(timers.pending.contains_key(&id));
        assert!(timers.finish(id, 2));
        assert!(timers.pending.is_empty());
        assert!(!timers.finish(id, 2));
    }

    #[tokio::test]
    async fn schedule_fails_once_receiver_is_gone() {
        tokio::time::pause();
        let (scheduler, fired) = scheduler();
        drop(fired);

        let err = scheduler.schedule(ContainerId::new(5), NOW).await.unwrap_err();
        assert!(matches!(err, ReminderSchedulerError::Closed));
    }
}
