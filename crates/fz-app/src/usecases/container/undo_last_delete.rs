use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::ContainerId;

use crate::usecases::internal::{ReminderReconciler, UndoSlot};

/// Bring back the last soft-deleted container, once.
pub struct UndoLastDelete {
    containers: Arc<dyn ContainerRepositoryPort>,
    reminders: ReminderReconciler,
    clock: Arc<dyn ClockPort>,
    undo: Arc<UndoSlot>,
}

impl UndoLastDelete {
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

    /// Restore under a new id holding the original label uuid, in the status
    /// the row had before deletion.
    ///
    /// An empty slot is a no-op. A reminder that is still ahead is scheduled
    /// again when the restored row is ACTIVE.
    pub async fn execute(&self) -> Result<Option<ContainerId>> {
        let span = info_span!("usecase.undo_last_delete.execute");

        async {
            let Some(deleted) = self.undo.take() else {
                info!("nothing to undo");
                return Ok(None);
            };

            let now_ms = self.clock.now_ms();
            let Some(id) = self
                .containers
                .restore_deleted(deleted.id, deleted.status, now_ms)
                .await
                .context("failed to restore container")?
            else {
                info!(container_id = %deleted.id, "deleted row is gone; nothing restored");
                return Ok(None);
            };

            match deleted.reminder_at_ms {
                Some(at) if deleted.is_active() && at > now_ms => {
                    self.reminders.schedule_at(id, at).await?;
                }
                _ => {}
            }

            info!(
                previous_id = %deleted.id,
                container_id = %id,
                name = %deleted.display_name(),
                "delete undone"
            );
            Ok(Some(id))
        }
        .instrument(span)
        .await
    }
}
