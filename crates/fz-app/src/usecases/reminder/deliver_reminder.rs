use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, Instrument};

use fz_core::ports::{ContainerRepositoryPort, NotificationPort};
use fz_core::{ContainerId, ReminderNotification};

/// Turn a fired timer into a user-visible notification.
pub struct DeliverReminder {
    containers: Arc<dyn ContainerRepositoryPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl DeliverReminder {
    pub fn new(
        containers: Arc<dyn ContainerRepositoryPort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            containers,
            notifier,
        }
    }

    /// Notify for `id` if it is still ACTIVE. The stored reminder is left as is.
    pub async fn execute(&self, id: ContainerId) -> Result<bool> {
        let span = info_span!("usecase.deliver_reminder.execute", container_id = %id);

        async {
            let container = match self
                .containers
                .get_by_id(id)
                .await
                .context("failed to load container")?
            {
                Some(c) if c.is_active() => c,
                other => {
                    debug!(
                        status = ?other.map(|c| c.status),
                        "reminder fired for inactive container; skipped"
                    );
                    return Ok(false);
                }
            };

            let notification = ReminderNotification::for_container(&container);
            self.notifier
                .show(&notification)
                .await
                .context("failed to show reminder")?;
            info!(name = %container.display_name(), "reminder delivered");
            Ok(true)
        }
        .instrument(span)
        .await
    }
}
