use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::{ContainerId, ContainerUuid, ScanMode};

use super::{ClaimLabel, ItemForm};
use crate::usecases::internal::ReminderReconciler;

/// Start tracking an item under a code no row holds yet.
pub struct CreateFromScan {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
}

impl CreateFromScan {
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

    /// Unknown code: new ACTIVE row. Placeholder: claimed instead.
    /// Anything else is left alone and yields `None`.
    pub async fn execute(&self, uuid: &ContainerUuid, form: &ItemForm) -> Result<Option<ContainerId>> {
        let span = info_span!("usecase.create_from_scan.execute", uuid = %uuid);

        async {
            let existing = self
                .containers
                .find_by_uuid(uuid)
                .await
                .context("failed to look up scanned label")?;

            match ScanMode::for_existing(existing.as_ref()) {
                ScanMode::Unknown => {}
                ScanMode::Unused => {
                    let claim = ClaimLabel::new(
                        Arc::clone(&self.containers),
                        self.reminders.clone(),
                        Arc::clone(&self.clock),
                    );
                    return claim.execute(uuid, form).await;
                }
                mode => {
                    info!(mode = mode.as_str(), "label already tracked; not creating");
                    return Ok(None);
                }
            }

            let resolved = form
                .reminder
                .as_ref()
                .map(|request| self.reminders.resolve(request))
                .transpose()?;
            let details = form.claim_details(None)?;

            let now_ms = self.clock.now_ms();
            let id = self
                .containers
                .add_from_scan(uuid, &details.name, details.quantity, now_ms)
                .await
                .context("failed to create container")?;

            if let Some(days) = details.shelf_life_days {
                self.containers
                    .update_shelf_life_days(id, Some(days), now_ms)
                    .await
                    .context("failed to store shelf life")?;
            }
            if let Some(resolved) = resolved {
                self.reminders.apply(id, resolved).await?;
            }

            info!(container_id = %id, name = %details.name, "container created from scan");
            Ok(Some(id))
        }
        .instrument(span)
        .await
    }
}
