use serde::{Deserialize, Serialize};

use super::model::Container;
use crate::settings::Settings;

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Freshness of an item relative to its shelf life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    Critical,
    ExpiringSoon,
    Fresh,
    /// Not ACTIVE; freshness does not apply.
    Inactive,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Critical => "critical",
            ExpiryStatus::ExpiringSoon => "expiring_soon",
            ExpiryStatus::Fresh => "fresh",
            ExpiryStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryThresholds {
    pub default_shelf_life_days: i32,
    pub expiring_soon_days: i32,
    pub critical_days: i32,
}

impl From<&Settings> for ExpiryThresholds {
    fn from(settings: &Settings) -> Self {
        Self {
            default_shelf_life_days: settings.default_reminder_days,
            expiring_soon_days: settings.expiring_soon_days,
            critical_days: settings.critical_days,
        }
    }
}

impl ExpiryThresholds {
    /// Instant the shelf life runs out: created-at plus the effective shelf life.
    pub fn expiry_at_ms(&self, container: &Container) -> i64 {
        let days = container.effective_shelf_life_days(self.default_shelf_life_days);
        container.created_at_ms + days as i64 * DAY_MS
    }

    pub fn evaluate(&self, container: &Container, now_ms: i64) -> ExpiryStatus {
        if !container.is_active() {
            return ExpiryStatus::Inactive;
        }

        let remaining_ms = self.expiry_at_ms(container) - now_ms;
        if remaining_ms < 0 {
            ExpiryStatus::Expired
        } else if remaining_ms <= self.critical_days as i64 * DAY_MS {
            ExpiryStatus::Critical
        } else if remaining_ms <= self.expiring_soon_days as i64 * DAY_MS {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Fresh
        }
    }

    pub fn remaining_label(&self, container: &Container, now_ms: i64) -> String {
        remaining_label(self.expiry_at_ms(container) - now_ms)
    }
}

/// Human label for the time left until expiry, in whole (truncated) days.
pub fn remaining_label(remaining_ms: i64) -> String {
    let days = remaining_ms / DAY_MS;
    match days {
        d if d < 0 => format!("Expired {}d ago", -d),
        0 => "Expires today".to_string(),
        d => format!("{d}d remaining"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerStatus;
    use crate::ids::{ContainerId, ContainerUuid};

    const NOW: i64 = 1_700_000_000_000;

    fn thresholds() -> ExpiryThresholds {
        ExpiryThresholds {
            default_shelf_life_days: 60,
            expiring_soon_days: 7,
            critical_days: 2,
        }
    }

    fn active(created_days_ago: i64, shelf_life_days: Option<i32>) -> Container {
        let created = NOW - created_days_ago * DAY_MS;
        Container {
            id: ContainerId::new(1),
            uuid: ContainerUuid::from("u"),
            name: "Soup".to_string(),
            status: ContainerStatus::Active,
            frozen_date_ms: created,
            reminder_days: None,
            shelf_life_days,
            quantity: 1,
            notes: None,
            reminder_at_ms: None,
            date_used_ms: None,
            created_at_ms: created,
            updated_at_ms: created,
        }
    }

    #[test]
    fn status_follows_thresholds() {
        let t = thresholds();
        assert_eq!(t.evaluate(&active(0, Some(30)), NOW), ExpiryStatus::Fresh);
        assert_eq!(t.evaluate(&active(25, Some(30)), NOW), ExpiryStatus::ExpiringSoon);
        assert_eq!(t.evaluate(&active(28, Some(30)), NOW), ExpiryStatus::Critical);
        assert_eq!(t.evaluate(&active(31, Some(30)), NOW), ExpiryStatus::Expired);
    }

    #[test]
    fn missing_shelf_life_uses_default() {
        let t = thresholds();
        let c = active(55, None);
        assert_eq!(t.expiry_at_ms(&c), c.created_at_ms + 60 * DAY_MS);
        assert_eq!(t.evaluate(&c, NOW), ExpiryStatus::ExpiringSoon);
    }

    #[test]
    fn non_active_rows_are_inactive() {
        let mut c = active(100, Some(1));
        c.status = ContainerStatus::Used;
        assert_eq!(thresholds().evaluate(&c, NOW), ExpiryStatus::Inactive);
    }

    #[test]
    fn remaining_label_uses_truncated_days() {
        assert_eq!(remaining_label(3 * DAY_MS + 5), "3d remaining");
        assert_eq!(remaining_label(DAY_MS - 1), "Expires today");
        assert_eq!(remaining_label(-2 * DAY_MS - 1), "Expired 2d ago");
    }
}
