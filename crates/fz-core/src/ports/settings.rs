use async_trait::async_trait;

use crate::ports::errors::SettingsError;
use crate::settings::Settings;

#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// Stored settings, or the defaults when nothing has been saved yet.
    async fn load(&self) -> Result<Settings, SettingsError>;

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}
