use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort, SettingsPort};
use fz_core::{ContainerId, ContainerUuid, ReminderRequest, ScanMode};

use super::ItemForm;
use crate::usecases::internal::ReminderReconciler;
use crate::AppOptions;

/// Put a label from a used or deleted item on a new one.
pub struct ReuseLabel {
    containers: Arc<dyn ContainerRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
    options: AppOptions,
}

impl ReuseLabel {
    pub fn new(
        containers: Arc<dyn ContainerRepositoryPort>,
        settings: Arc<dyn SettingsPort>,
        reminders: ReminderReconciler,
        clock: Arc<dyn ClockPort>,
        options: AppOptions,
    ) -> Self {
        Self {
            containers,
            settings,
            reminders,
            clock,
            options,
        }
    }

    /// Hand the label uuid to a fresh ACTIVE row.
    ///
    /// The old row keeps its status under a new random uuid. A blank name keeps
    /// the old one. Without an explicit reminder the default reminder days from
    /// settings apply. `None` unless the label is USED or DELETED.
    pub async fn execute(&self, uuid: &ContainerUuid, form: &ItemForm) -> Result<Option<ContainerId>> {
        let span = info_span!("usecase.reuse_label.execute", uuid = %uuid);

        async {
            let Some(previous) = self
                .containers
                .find_by_uuid(uuid)
                .await
                .context("failed to look up label")?
            else {
                info!("no container holds this label");
                return Ok(None);
            };
            if ScanMode::for_existing(Some(&previous)) != ScanMode::Historical {
                info!(status = previous.status.as_str(), "label is not reusable");
                return Ok(None);
            }

            form.check_shelf_life()?;
            let request = match form.reminder {
                Some(request) => request,
                None => {
                    let settings = self.settings.load().await.context("failed to load settings")?;
                    ReminderRequest::InDays {
                        days: settings.default_reminder_days,
                        time: self.options.reminder_time,
                    }
                }
            };
            let resolved = self.reminders.resolve(&request)?;

            self.reminders.clear(previous.id).await?;

            let now_ms = self.clock.now_ms();
            let new_name = Some(form.name.as_str()).filter(|n| !n.trim().is_empty());
            let Some(id) = self
                .containers
                .reuse_preserving_uuid(previous.id, new_name, now_ms)
                .await
                .context("failed to reuse label")?
            else {
                return Ok(None);
            };

            if let Some(days) = form.shelf_life_days {
                self.containers
                    .update_shelf_life_days(id, Some(days), now_ms)
                    .await
                    .context("failed to store shelf life")?;
            }
            self.reminders.apply(id, resolved).await?;

            info!(
                previous_id = %previous.id,
                container_id = %id,
                "label reused"
            );
            Ok(Some(id))
        }
        .instrument(span)
        .await
    }
}
