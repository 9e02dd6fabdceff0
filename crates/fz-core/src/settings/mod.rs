mod defaults;
mod model;

pub use defaults::{
    DEFAULT_CRITICAL_DAYS, DEFAULT_EXPIRING_SOON_DAYS, DEFAULT_REMINDER_DAYS, SETTINGS_KEY,
};
pub use model::{Settings, SettingsChange, SortOrder};
