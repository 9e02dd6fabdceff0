use async_trait::async_trait;

use crate::notification::ReminderNotification;

/// Surface that presents a fired reminder to the user.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn show(&self, notification: &ReminderNotification) -> anyhow::Result<()>;
}
