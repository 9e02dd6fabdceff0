use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::{Container, ContainerId, ContainerStatus};

use crate::usecases::internal::{ReminderReconciler, UndoSlot};

pub struct SoftDelete {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
    undo: Arc<UndoSlot>,
}

impl SoftDelete {
    pub fn new(
        containers: Arc<dyn ContainerRepositoryPort>,
        reminders: ReminderReconciler,
        clock: Arc<dyn ClockPort>,
        undo: Arc<UndoSlot>,
    ) -> Self {
        Self {
            containers,
            reminders,
            clock,
            undo,
        }
    }

    /// Mark the row DELETED, cancel its reminder and keep it for one undo.
    ///
    /// Returns the row as it was before deletion. A row that is already
    /// DELETED is left alone and does not replace the undo slot.
    pub async fn execute(&self, id: ContainerId) -> Result<Option<Container>> {
        let span = info_span!("usecase.soft_delete.execute", container_id = %id);

        async {
            let Some(before) = self
                .containers
                .get_by_id(id)
                .await
                .context("failed to load container")?
            else {
                info!("container not found; nothing deleted");
                return Ok(None);
            };
            if before.status == ContainerStatus::Deleted {
                info!("container already deleted");
                return Ok(None);
            }

            let deleted = self
                .containers
                .soft_delete(id, self.clock.now_ms())
                .await
                .context("failed to delete container")?;
            if !deleted {
                return Ok(None);
            }

            self.reminders.cancel_timer(id).await;
            self.undo.put(before.clone());
            info!(name = %before.display_name(), "container deleted");
            Ok(Some(before))
        }
        .instrument(span)
        .await
    }
}
