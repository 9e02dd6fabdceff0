use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::ContainerRepositoryPort;
use fz_core::{ContainerId, ReminderRequest};

use crate::usecases::internal::ReminderReconciler;

/// Edit the reminder of an item in use, by day count or explicit date.
pub struct SetReminder {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
}

impl SetReminder {
    pub fn new(containers: Arc<dyn ContainerRepositoryPort>, reminders: ReminderReconciler) -> Self {
        Self {
            containers,
            reminders,
        }
    }

    /// Returns the trigger instant, or `None` when the row is missing or not ACTIVE.
    pub async fn execute(&self, id: ContainerId, request: ReminderRequest) -> Result<Option<i64>> {
        let span = info_span!("usecase.set_reminder.execute", container_id = %id);

        async {
            let resolved = self.reminders.resolve(&request)?;

            let active = self
                .containers
                .get_by_id(id)
                .await
                .context("failed to load container")?
                .is_some_and(|c| c.is_active());
            if !active {
                info!("no active container; reminder not set");
                return Ok(None);
            }

            if !self.reminders.apply(id, resolved).await? {
                return Ok(None);
            }
            info!(
                trigger_at_ms = resolved.trigger_at_ms,
                reminder_days = resolved.reminder_days,
                "reminder set"
            );
            Ok(Some(resolved.trigger_at_ms))
        }
        .instrument(span)
        .await
    }
}
