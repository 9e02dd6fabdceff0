use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::expiry::DAY_MS;
use super::model::Container;
use crate::error::ValidationError;

/// List filter on the recorded reminder instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderFilter {
    #[default]
    None,
    /// ACTIVE, reminder still ahead and within the "expiring soon" window.
    ExpiringSoon,
    /// ACTIVE, reminder at or before now.
    Expired,
}

impl ReminderFilter {
    pub fn matches(&self, container: &Container, now_ms: i64, expiring_soon_days: i32) -> bool {
        let reminder_at = match (self, container.reminder_at_ms) {
            (ReminderFilter::None, _) => return true,
            (_, None) => return false,
            (_, Some(at)) => at,
        };
        if !container.is_active() {
            return false;
        }

        match self {
            ReminderFilter::None => true,
            ReminderFilter::ExpiringSoon => {
                reminder_at > now_ms && reminder_at - now_ms <= expiring_soon_days as i64 * DAY_MS
            }
            ReminderFilter::Expired => reminder_at <= now_ms,
        }
    }

    pub fn apply(
        &self,
        containers: Vec<Container>,
        now_ms: i64,
        expiring_soon_days: i32,
    ) -> Vec<Container> {
        if *self == ReminderFilter::None {
            return containers;
        }
        containers
            .into_iter()
            .filter(|c| self.matches(c, now_ms, expiring_soon_days))
            .collect()
    }
}

impl FromStr for ReminderFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Ok(ReminderFilter::None),
            "expiring_soon" | "soon" => Ok(ReminderFilter::ExpiringSoon),
            "expired" => Ok(ReminderFilter::Expired),
            other => Err(ValidationError::UnknownOption(other.to_string())),
        }
    }
}
