use std::sync::Arc;

use anyhow::Result;
use tracing::{info_span, Instrument};

use fz_core::ports::SettingsPort;
use fz_core::Settings;

pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");
        async { Ok(self.settings.load().await?) }.instrument(span).await
    }
}
