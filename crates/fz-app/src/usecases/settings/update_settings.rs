//! Use case for changing one user preference.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::SettingsPort;
use fz_core::{Settings, SettingsChange};

/// Applies a [`SettingsChange`] and persists the result.
///
/// ## Behavior
/// - Loads current settings (defaults when none are stored)
/// - Rejects negative day thresholds before anything is written
/// - Skips the write when the value is unchanged
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    /// Returns the settings after the change and whether anything was saved.
    pub async fn execute(&self, change: SettingsChange) -> Result<(Settings, bool)> {
        let span = info_span!("usecase.update_settings.execute", change = ?change);

        async {
            let mut settings = self.settings.load().await.context("failed to load settings")?;
            let changed = settings.apply(change)?;
            if !changed {
                info!("setting already has this value; nothing saved");
                return Ok((settings, false));
            }

            self.settings
                .save(&settings)
                .await
                .context("failed to save settings")?;
            info!("settings updated");
            Ok((settings, true))
        }
        .instrument(span)
        .await
    }
}
