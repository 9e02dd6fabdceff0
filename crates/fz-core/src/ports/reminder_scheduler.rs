use async_trait::async_trait;

use crate::ids::ContainerId;
use crate::ports::errors::ReminderSchedulerError;

/// Keeps at most one pending reminder per container.
#[async_trait]
pub trait ReminderSchedulerPort: Send + Sync {
    /// Request a reminder at `trigger_at_ms`, replacing any pending one for `id`.
    /// Instants in the past fire immediately.
    async fn schedule(&self, id: ContainerId, trigger_at_ms: i64)
        -> Result<(), ReminderSchedulerError>;

    /// Drop the pending reminder for `id`, if any.
    async fn cancel(&self, id: ContainerId) -> Result<(), ReminderSchedulerError>;

    /// Containers with a reminder still pending.
    async fn pending(&self) -> Result<Vec<ContainerId>, ReminderSchedulerError>;
}
