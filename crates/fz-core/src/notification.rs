use serde::Serialize;

use crate::container::Container;
use crate::ids::ContainerId;

pub const REMINDER_TITLE: &str = "Freezr Reminder";

/// Actions offered alongside a delivered reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderAction {
    MarkUsed,
    Snooze,
}

/// What the user sees when a reminder fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderNotification {
    pub container_id: ContainerId,
    pub title: String,
    pub body: String,
    pub actions: Vec<ReminderAction>,
}

impl ReminderNotification {
    pub fn for_container(container: &Container) -> Self {
        Self {
            container_id: container.id,
            title: REMINDER_TITLE.to_string(),
            body: format!("{} – check if it needs action", container.display_name()),
            actions: vec![ReminderAction::MarkUsed, ReminderAction::Snooze],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerStatus;
    use crate::ids::ContainerUuid;

    #[test]
    fn body_uses_item_number_for_blank_names() {
        let container = Container {
            id: ContainerId::new(42),
            uuid: ContainerUuid::from("u"),
            name: String::new(),
            status: ContainerStatus::Active,
            frozen_date_ms: 0,
            reminder_days: None,
            shelf_life_days: None,
            quantity: 1,
            notes: None,
            reminder_at_ms: Some(1),
            date_used_ms: None,
            created_at_ms: 0,
            updated_at_ms: 0,
        };

        let n = ReminderNotification::for_container(&container);
        assert_eq!(n.title, "Freezr Reminder");
        assert_eq!(n.body, "Item #42 – check if it needs action");
        assert_eq!(n.container_id, ContainerId::new(42));
    }
}
