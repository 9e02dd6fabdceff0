use super::model::*;

/// Storage key of the single settings row.
pub const SETTINGS_KEY: &str = "user";

/// Also the fallback shelf life for items without one.
pub const DEFAULT_REMINDER_DAYS: i32 = 60;
pub const DEFAULT_EXPIRING_SOON_DAYS: i32 = 7;
pub const DEFAULT_CRITICAL_DAYS: i32 = 2;

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::CreatedDesc
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            show_used: false,
            default_reminder_days: DEFAULT_REMINDER_DAYS,
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            critical_days: DEFAULT_CRITICAL_DAYS,
        }
    }
}
