use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};

use crate::usecases::internal::ReminderReconciler;

/// Re-arm timers from stored reminders after a restart.
pub struct RescheduleReminders {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
}

impl RescheduleReminders {
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

    /// Schedule every ACTIVE row whose reminder is still ahead.
    ///
    /// Returns how many timers were requested successfully.
    pub async fn execute(&self) -> Result<usize> {
        let span = info_span!("usecase.reschedule_reminders.execute");

        async {
            let now_ms = self.clock.now_ms();
            let rows = self
                .containers
                .list_scheduled_active()
                .await
                .context("failed to list scheduled containers")?;

            let mut scheduled = 0;
            for container in rows.iter().filter(|c| c.has_future_reminder(now_ms)) {
                if let Some(at) = container.reminder_at_ms {
                    if self.reminders.request_timer(container.id, at).await {
                        scheduled += 1;
                    }
                }
            }

            info!(scheduled, stored = rows.len(), "reminders rescheduled");
            Ok(scheduled)
        }
        .instrument(span)
        .await
    }
}
