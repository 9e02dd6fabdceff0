use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    CreatedAsc,
    CreatedDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "NAME_ASC",
            SortOrder::NameDesc => "NAME_DESC",
            SortOrder::CreatedAsc => "CREATED_ASC",
            SortOrder::CreatedDesc => "CREATED_DESC",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    /// Accepts the stored form as well as `name-asc` style spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "NAME_ASC" => Ok(SortOrder::NameAsc),
            "NAME_DESC" => Ok(SortOrder::NameDesc),
            "CREATED_ASC" => Ok(SortOrder::CreatedAsc),
            "CREATED_DESC" => Ok(SortOrder::CreatedDesc),
            _ => Err(ValidationError::UnknownOption(s.to_string())),
        }
    }
}

/// Process-wide user preferences, persisted as a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub sort_order: SortOrder,
    /// Include USED rows in listings.
    pub show_used: bool,
    pub default_reminder_days: i32,
    pub expiring_soon_days: i32,
    pub critical_days: i32,
}

/// One user edit to [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    SortOrder(SortOrder),
    ShowUsed(bool),
    DefaultReminderDays(i32),
    ExpiringSoonDays(i32),
    CriticalDays(i32),
}

impl Settings {
    /// Apply `change` and report whether anything differs afterwards.
    pub fn apply(&mut self, change: SettingsChange) -> Result<bool, ValidationError> {
        fn non_negative(days: i32) -> Result<i32, ValidationError> {
            if days < 0 {
                Err(ValidationError::NegativeDays(days as i64))
            } else {
                Ok(days)
            }
        }

        let before = self.clone();
        match change {
            SettingsChange::SortOrder(order) => self.sort_order = order,
            SettingsChange::ShowUsed(show) => self.show_used = show,
            SettingsChange::DefaultReminderDays(days) => {
                self.default_reminder_days = non_negative(days)?
            }
            SettingsChange::ExpiringSoonDays(days) => self.expiring_soon_days = non_negative(days)?,
            SettingsChange::CriticalDays(days) => self.critical_days = non_negative(days)?,
        }
        Ok(*self != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let s = Settings::default();
        assert_eq!(s.sort_order, SortOrder::CreatedDesc);
        assert!(!s.show_used);
        assert_eq!(s.default_reminder_days, 60);
        assert_eq!(s.expiring_soon_days, 7);
        assert_eq!(s.critical_days, 2);
    }

    #[test]
    fn apply_reports_change_only_when_value_differs() {
        let mut s = Settings::default();
        assert_eq!(s.apply(SettingsChange::CriticalDays(2)), Ok(false));
        assert_eq!(s.apply(SettingsChange::CriticalDays(3)), Ok(true));
        assert_eq!(s.critical_days, 3);
    }

    #[test]
    fn apply_rejects_negative_days_without_mutation() {
        let mut s = Settings::default();
        assert_eq!(
            s.apply(SettingsChange::ExpiringSoonDays(-1)),
            Err(ValidationError::NegativeDays(-1))
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn sort_order_parses_both_spellings() {
        assert_eq!("name-asc".parse(), Ok(SortOrder::NameAsc));
        assert_eq!("CREATED_DESC".parse(), Ok(SortOrder::CreatedDesc));
        assert!("random".parse::<SortOrder>().is_err());
    }
}
