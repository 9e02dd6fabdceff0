use serde::{Deserialize, Serialize};

use super::status::ContainerStatus;
use crate::error::ValidationError;
use crate::ids::{ContainerId, ContainerUuid};

/// One physical label / item.
///
/// All timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub uuid: ContainerUuid,
    /// May be blank for UNUSED placeholders.
    pub name: String,
    pub status: ContainerStatus,
    pub frozen_date_ms: i64,
    /// Notification offset chosen by the user, separate from shelf life.
    pub reminder_days: Option<i32>,
    /// Freshness window; `None` falls back to the default from settings.
    pub shelf_life_days: Option<i32>,
    pub quantity: i32,
    pub notes: Option<String>,
    pub reminder_at_ms: Option<i64>,
    pub date_used_ms: Option<i64>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl Container {
    /// Name shown to the user; blank names fall back to `Item #<id>`.
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("Item #{}", self.id)
        } else {
            trimmed.to_string()
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ContainerStatus::Active
    }

    pub fn effective_shelf_life_days(&self, default_days: i32) -> i32 {
        self.shelf_life_days.unwrap_or(default_days)
    }

    /// True when a reminder is recorded and still ahead of `now_ms`.
    pub fn has_future_reminder(&self, now_ms: i64) -> bool {
        matches!(self.reminder_at_ms, Some(at) if at > now_ms)
    }
}

/// A container row not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContainer {
    pub uuid: ContainerUuid,
    pub name: String,
    pub status: ContainerStatus,
    pub frozen_date_ms: i64,
    pub reminder_days: Option<i32>,
    pub shelf_life_days: Option<i32>,
    pub quantity: i32,
    pub notes: Option<String>,
    pub reminder_at_ms: Option<i64>,
    pub date_used_ms: Option<i64>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl NewContainer {
    /// A claimed item created directly from a scan of an unknown code.
    pub fn active(uuid: ContainerUuid, name: impl Into<String>, now_ms: i64) -> Self {
        Self {
            uuid,
            name: name.into(),
            status: ContainerStatus::Active,
            frozen_date_ms: now_ms,
            reminder_days: None,
            shelf_life_days: None,
            quantity: 1,
            notes: None,
            reminder_at_ms: None,
            date_used_ms: None,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        }
    }

    /// A blank, batch-printed label waiting to be claimed.
    pub fn placeholder(uuid: ContainerUuid, now_ms: i64) -> Self {
        Self {
            status: ContainerStatus::Unused,
            ..Self::active(uuid, String::new(), now_ms)
        }
    }

    /// Successor row for reuse: inherits the label uuid and the user's
    /// preferences, starts a fresh freshness window.
    pub fn successor_of(
        previous: &Container,
        uuid: ContainerUuid,
        new_name: Option<&str>,
        now_ms: i64,
    ) -> Self {
        let name = new_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&previous.name)
            .to_string();

        Self {
            quantity: previous.quantity,
            reminder_days: previous.reminder_days,
            shelf_life_days: previous.shelf_life_days,
            notes: previous.notes.clone(),
            ..Self::active(uuid, name, now_ms)
        }
    }

    /// Row brought back by undoing a soft delete, in the status it had
    /// before. Keeps the original dates; the reminder is not carried over.
    pub fn restored_from(
        deleted: &Container,
        uuid: ContainerUuid,
        status: ContainerStatus,
        now_ms: i64,
    ) -> Self {
        Self {
            uuid,
            name: deleted.name.clone(),
            status,
            frozen_date_ms: deleted.frozen_date_ms,
            reminder_days: deleted.reminder_days,
            shelf_life_days: deleted.shelf_life_days,
            quantity: deleted.quantity,
            notes: deleted.notes.clone(),
            reminder_at_ms: None,
            date_used_ms: deleted.date_used_ms,
            created_at_ms: deleted.created_at_ms,
            updated_at_ms: now_ms,
        }
    }
}

/// What the user fills in when claiming a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDetails {
    pub name: String,
    pub quantity: i32,
    pub shelf_life_days: Option<i32>,
    pub reminder_days: Option<i32>,
}

impl ClaimDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            shelf_life_days: None,
            reminder_days: None,
        }
    }

    /// Trims the name and checks the numeric fields.
    pub fn validated(mut self) -> Result<Self, ValidationError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.quantity < 1 {
            return Err(ValidationError::InvalidQuantity(self.quantity));
        }
        for days in [self.shelf_life_days, self.reminder_days].into_iter().flatten() {
            if days < 0 {
                return Err(ValidationError::NegativeDays(days as i64));
            }
        }
        Ok(self)
    }
}
