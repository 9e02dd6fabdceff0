use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort, SettingsPort};
use fz_core::{ContainerId, ExpiryThresholds};

use super::ContainerView;

pub struct GetContainer {
    containers: Arc<dyn ContainerRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
    clock: Arc<dyn ClockPort>,
}

impl GetContainer {
    pub fn new(
        containers: Arc<dyn ContainerRepositoryPort>,
        settings: Arc<dyn SettingsPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            containers,
            settings,
            clock,
        }
    }

    pub async fn execute(&self, id: ContainerId) -> Result<Option<ContainerView>> {
        let span = info_span!("usecase.get_container.execute", container_id = %id);

        async {
            let Some(container) = self
                .containers
                .get_by_id(id)
                .await
                .context("failed to load container")?
            else {
                debug!("container not found");
                return Ok(None);
            };

            let settings = self.settings.load().await.context("failed to load settings")?;
            let thresholds = ExpiryThresholds::from(&settings);
            Ok(Some(ContainerView::new(
                container,
                &thresholds,
                self.clock.now_ms(),
            )))
        }
        .instrument(span)
        .await
    }
}
