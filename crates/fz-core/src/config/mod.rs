//! # Configuration DTO
//!
//! Data only. Maps the TOML file onto [`AppConfig`] without validation or
//! default computation; empty values are facts and are resolved by the
//! caller (see `with_system_defaults`).

use std::path::PathBuf;

/// Application configuration DTO
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite database file (path only, no existence check)
    pub database_path: PathBuf,

    /// Directory for rolling log files
    pub log_dir: PathBuf,

    /// Reminder time of day as written, `HH:MM` (may be empty)
    pub reminder_time: String,

    /// Snooze length in days (0 when missing)
    pub snooze_days: i64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Must NOT validate or fill in defaults. Empty strings are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            database_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("database_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            reminder_time: toml_value
                .get("reminder")
                .and_then(|r| r.get("time_of_day"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            snooze_days: toml_value
                .get("reminder")
                .and_then(|r| r.get("snooze_days"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            database_path: PathBuf::new(),
            log_dir: PathBuf::new(),
            reminder_time: String::new(),
            snooze_days: 0,
        }
    }

    /// Create AppConfig with system-default paths under `data_dir`.
    ///
    /// `data_dir` is computed by the caller with platform logic (the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("freezr.db"),
            log_dir: data_dir.join("logs"),
            reminder_time: String::new(),
            snooze_days: 0,
        }
    }

    /// Fill empty fields from `defaults`; set values win.
    pub fn or_defaults(self, defaults: AppConfig) -> Self {
        Self {
            database_path: if self.database_path.as_os_str().is_empty() {
                defaults.database_path
            } else {
                self.database_path
            },
            log_dir: if self.log_dir.as_os_str().is_empty() {
                defaults.log_dir
            } else {
                self.log_dir
            },
            reminder_time: if self.reminder_time.is_empty() {
                defaults.reminder_time
            } else {
                self.reminder_time
            },
            snooze_days: if self.snooze_days == 0 {
                defaults.snooze_days
            } else {
                self.snooze_days
            },
        }
    }
}
