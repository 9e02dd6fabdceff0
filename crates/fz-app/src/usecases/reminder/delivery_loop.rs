use tokio::sync::mpsc;
use tracing::{debug, warn};

use fz_core::ContainerId;

use super::DeliverReminder;

/// Consumes fired container ids until the scheduler side goes away.
pub struct ReminderDeliveryLoop {
    deliver: DeliverReminder,
    fired_rx: mpsc::UnboundedReceiver<ContainerId>,
}

impl ReminderDeliveryLoop {
    pub fn new(deliver: DeliverReminder, fired_rx: mpsc::UnboundedReceiver<ContainerId>) -> Self {
        Self { deliver, fired_rx }
    }

    /// Run until the channel closes. Returns how many reminders were shown.
    pub async fn run(mut self) -> usize {
        let mut delivered = 0;
        while let Some(id) = self.fired_rx.recv().await {
            match self.deliver.execute(id).await {
                Ok(true) => delivered += 1,
                Ok(false) => {}
                Err(err) => warn!(container_id = %id, error = %format!("{err:#}"), "reminder delivery failed"),
            }
        }
        debug!(delivered, "reminder channel closed");
        delivered
    }
}
