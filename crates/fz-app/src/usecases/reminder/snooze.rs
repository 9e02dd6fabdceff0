use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::reminder::snooze_at_ms;
use fz_core::ContainerId;

use crate::usecases::internal::ReminderReconciler;

/// Push the reminder of an ACTIVE item a fixed number of days past now.
pub struct Snooze {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
    snooze_days: i32,
}

impl Snooze {
    pub fn new(
        containers: Arc<dyn ContainerRepositoryPort>,
        reminders: ReminderReconciler,
        clock: Arc<dyn ClockPort>,
        snooze_days: i32,
    ) -> Self {
        Self {
            containers,
            reminders,
            clock,
            snooze_days,
        }
    }

    pub async fn execute(&self, id: ContainerId) -> Result<Option<i64>> {
        let span = info_span!("usecase.snooze.execute", container_id = %id);

        async {
            let active = self
                .containers
                .get_by_id(id)
                .await
                .context("failed to load container")?
                .is_some_and(|c| c.is_active());
            if !active {
                info!("no active container; snooze ignored");
                return Ok(None);
            }

            let at = snooze_at_ms(self.clock.now_ms(), self.snooze_days);
            if !self.reminders.schedule_at(id, at).await? {
                return Ok(None);
            }
            info!(trigger_at_ms = at, days = self.snooze_days, "reminder snoozed");
            Ok(Some(at))
        }
        .instrument(span)
        .await
    }
}
