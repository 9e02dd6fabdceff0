//! # Configuration resolution
//!
//! ## Responsibilities
//!
//! - ✅ Locate the config file (`--config` or `<app data>/freezr.toml`)
//! - ✅ Write a starter file on first run
//! - ✅ Fill empty values from system defaults, then apply CLI overrides
//! - ✅ Turn the raw reminder values into [`AppOptions`]
//!
//! ## Prohibited
//!
//! ❌ **No wiring.** Nothing here opens the database or spawns tasks.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use fz_app::AppOptions;
use fz_core::app_dirs::AppDirs;
use fz_core::config::AppConfig;
use fz_core::{TimeOfDay, ValidationError};
use fz_infra::config::{load_config, write_default_config};

/// Values given on the command line. `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config_path: PathBuf,
    pub config: AppConfig,
    pub options: AppOptions,
}

/// Load the effective configuration for this run.
///
/// A missing file at the default location is created with commented
/// defaults. A missing file given with `--config` is an error.
pub fn resolve_config(
    app_dirs: &AppDirs,
    overrides: &ConfigOverrides,
) -> anyhow::Result<ResolvedConfig> {
    let config_path = match &overrides.config_path {
        Some(path) => path.clone(),
        None => {
            let path = app_dirs.config_path();
            if write_default_config(&path)? {
                info!(path = %path.display(), "Wrote default config");
            }
            path
        }
    };

    let mut config = load_config(&config_path)?
        .or_defaults(AppConfig::with_system_defaults(app_dirs.app_data_root.clone()));
    if let Some(database_path) = &overrides.database_path {
        config.database_path = database_path.clone();
    }

    let options = app_options(&config)
        .with_context(|| format!("Invalid reminder settings in {}", config_path.display()))?;

    Ok(ResolvedConfig {
        config_path,
        config,
        options,
    })
}

/// Empty time of day and zero snooze mean "use the default".
pub fn app_options(config: &AppConfig) -> Result<AppOptions, ValidationError> {
    let defaults = AppOptions::default();

    let reminder_time = if config.reminder_time.trim().is_empty() {
        defaults.reminder_time
    } else {
        TimeOfDay::parse(&config.reminder_time)?
    };

    let snooze_days = match config.snooze_days {
        0 => defaults.snooze_days,
        days if days < 0 => return Err(ValidationError::NegativeDays(days)),
        days => i32::try_from(days).map_err(|_| ValidationError::TimestampOutOfRange(days))?,
    };

    Ok(AppOptions {
        reminder_time,
        snooze_days,
    })
}
