use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use fz_core::ports::{ClockPort, ContainerRepositoryPort, ReminderSchedulerPort};
use fz_core::{ContainerId, ReminderRequest, ResolvedReminder};

/// Keeps the stored `reminder_at` of a container and its pending timer in step.
///
/// Storage is written first and is authoritative. The scheduler is best-effort:
/// failures are logged and never fail the caller.
#[derive(Clone)]
pub struct ReminderReconciler {
    containers: Arc<dyn ContainerRepositoryPort>,
    scheduler: Arc<dyn ReminderSchedulerPort>,
    clock: Arc<dyn ClockPort>,
}

impl ReminderReconciler {
    pub fn new(
        containers: Arc<dyn ContainerRepositoryPort>,
        scheduler: Arc<dyn ReminderSchedulerPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            containers,
            scheduler,
            clock,
        }
    }

    /// Pin `request` to an instant without touching storage.
    pub fn resolve(&self, request: &ReminderRequest) -> Result<ResolvedReminder> {
        let resolved = request
            .resolve(self.clock.now_ms(), self.clock.local_offset())
            .context("invalid reminder")?;
        Ok(resolved)
    }

    /// Store the reminder days and instant of `resolved`, then schedule it.
    pub async fn apply(&self, id: ContainerId, resolved: ResolvedReminder) -> Result<bool> {
        let now_ms = self.clock.now_ms();
        let updated = self
            .containers
            .update_reminder_days(id, Some(resolved.reminder_days), now_ms)
            .await
            .context("failed to store reminder days")?;
        if !updated {
            return Ok(false);
        }
        self.schedule_at(id, resolved.trigger_at_ms).await
    }

    /// Store `trigger_at_ms` as the container's reminder and request a timer.
    ///
    /// Returns `false` when the row does not exist.
    pub async fn schedule_at(&self, id: ContainerId, trigger_at_ms: i64) -> Result<bool> {
        let updated = self
            .containers
            .update_reminder_at(id, Some(trigger_at_ms), self.clock.now_ms())
            .await
            .context("failed to store reminder")?;
        if !updated {
            debug!(container_id = %id, "no row to schedule a reminder for");
            return Ok(false);
        }

        self.request_timer(id, trigger_at_ms).await;
        Ok(true)
    }

    /// Ask the scheduler for a timer only, leaving storage as it is.
    pub async fn request_timer(&self, id: ContainerId, trigger_at_ms: i64) -> bool {
        match self.scheduler.schedule(id, trigger_at_ms).await {
            Ok(()) => true,
            Err(err) => {
                warn!(container_id = %id, error = %err, "failed to schedule reminder");
                false
            }
        }
    }

    /// Clear the stored reminder and drop the pending timer.
    pub async fn clear(&self, id: ContainerId) -> Result<bool> {
        let updated = self
            .containers
            .update_reminder_at(id, None, self.clock.now_ms())
            .await
            .context("failed to clear reminder")?;
        self.cancel_timer(id).await;
        Ok(updated)
    }

    /// Drop the pending timer. Used after storage already cleared the column.
    pub async fn cancel_timer(&self, id: ContainerId) {
        if let Err(err) = self.scheduler.cancel(id).await {
            warn!(container_id = %id, error = %err, "failed to cancel reminder");
        }
    }
}
