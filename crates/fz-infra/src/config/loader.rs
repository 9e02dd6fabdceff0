//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto the [`AppConfig`] DTO. Whatever is in
//! the file is accepted; validation and defaults happen at the edge.

use anyhow::Context;
use std::path::Path;

use fz_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// Empty strings and out-of-range values are kept as-is. Fails only when the
/// file cannot be read or is not TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

const DEFAULT_CONFIG: &str = r#"# Freezr configuration. Empty values fall back to built-in defaults.

[storage]
# database_path = "/path/to/freezr.db"

[reminder]
time_of_day = "08:00"
snooze_days = 7

[logging]
# dir = "/path/to/logs"
"#;

/// Write a commented starter config unless one already exists.
///
/// Returns `true` when a file was created.
pub fn write_default_config(config_path: &Path) -> anyhow::Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create config dir failed: {}", dir.display()))?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    Ok(true)
}
