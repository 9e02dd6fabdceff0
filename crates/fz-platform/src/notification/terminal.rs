use std::io::Write;
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::info;

use fz_core::notification::{ReminderAction, ReminderNotification};
use fz_core::ports::NotificationPort;

/// Prints fired reminders to a terminal (or any writer).
pub struct TerminalNotifier<W> {
    out: Mutex<W>,
}

impl TerminalNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn render(notification: &ReminderNotification) -> String {
    let id = notification.container_id;
    let actions = notification
        .actions
        .iter()
        .map(|action| match action {
            ReminderAction::MarkUsed => format!("`use {id}`"),
            ReminderAction::Snooze => format!("`snooze {id}`"),
        })
        .collect::<Vec<_>>()
        .join(" or ");

    if actions.is_empty() {
        format!("\n🔔 {}: {}\n", notification.title, notification.body)
    } else {
        format!(
            "\n🔔 {}: {}\n   reply with {}\n",
            notification.title, notification.body, actions
        )
    }
}

#[async_trait]
impl<W: Write + Send> NotificationPort for TerminalNotifier<W> {
    async fn show(&self, notification: &ReminderNotification) -> anyhow::Result<()> {
        info!(
            container_id = %notification.container_id,
            body = %notification.body,
            "reminder delivered"
        );

        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("notification writer lock poisoned"))?;
        out.write_all(render(notification).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
