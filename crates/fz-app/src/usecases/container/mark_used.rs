use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::ContainerId;

use crate::usecases::internal::ReminderReconciler;

/// Record that an item has been eaten. Also reached from a reminder's action.
pub struct MarkUsed {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
}

impl MarkUsed {
    pub fn new(
        containers: Arc<dyn ContainerRepositoryPort>,
        reminders: ReminderReconciler,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            containers,
            reminders,
            clock,
        }
    }

    /// Status USED with `date_used = now`; the reminder is cleared and cancelled.
    pub async fn execute(&self, id: ContainerId) -> Result<bool> {
        let span = info_span!("usecase.mark_used.execute", container_id = %id);

        async {
            let updated = self
                .containers
                .mark_used(id, self.clock.now_ms())
                .await
                .context("failed to mark container used")?;
            if !updated {
                info!("container not found; nothing marked");
                return Ok(false);
            }

            self.reminders.cancel_timer(id).await;
            info!("container marked used");
            Ok(true)
        }
        .instrument(span)
        .await
    }
}
