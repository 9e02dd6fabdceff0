use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::{ContainerId, ContainerUuid};

use super::ItemForm;
use crate::usecases::internal::ReminderReconciler;

/// Give a blank printed label its first item.
pub struct ClaimLabel {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
}

impl ClaimLabel {
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

    /// UNUSED → ACTIVE. A reminder is scheduled only when the form carries one.
    ///
    /// Returns `None` when the label is not an unclaimed placeholder, so a
    /// second claim changes nothing.
    pub async fn execute(&self, uuid: &ContainerUuid, form: &ItemForm) -> Result<Option<ContainerId>> {
        let span = info_span!("usecase.claim_label.execute", uuid = %uuid);

        async {
            let resolved = form
                .reminder
                .as_ref()
                .map(|request| self.reminders.resolve(request))
                .transpose()?;
            let details = form.claim_details(resolved.map(|r| r.reminder_days))?;

            let claimed = self
                .containers
                .claim_placeholder(uuid, &details, self.clock.now_ms())
                .await
                .context("failed to claim label")?;

            let Some(id) = claimed else {
                info!("label is not an unclaimed placeholder; nothing to claim");
                return Ok(None);
            };

            if let Some(resolved) = resolved {
                self.reminders.schedule_at(id, resolved.trigger_at_ms).await?;
            }

            info!(container_id = %id, name = %details.name, "label claimed");
            Ok(Some(id))
        }
        .instrument(span)
        .await
    }
}
