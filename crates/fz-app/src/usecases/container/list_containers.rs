use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort, SettingsPort};
use fz_core::{ExpiryThresholds, ReminderFilter};

use super::ContainerView;

/// The inventory list, shaped by the stored sort order and visibility settings.
pub struct ListContainers {
    containers: Arc<dyn ContainerRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
    clock: Arc<dyn ClockPort>,
}

impl ListContainers {
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

    pub async fn execute(&self, filter: ReminderFilter) -> Result<Vec<ContainerView>> {
        let span = info_span!("usecase.list_containers.execute", filter = ?filter);

        async {
            let settings = self.settings.load().await.context("failed to load settings")?;
            let rows = self
                .containers
                .list(settings.show_used, settings.sort_order)
                .await
                .context("failed to list containers")?;

            let now_ms = self.clock.now_ms();
            let rows = filter.apply(rows, now_ms, settings.expiring_soon_days);
            let thresholds = ExpiryThresholds::from(&settings);

            debug!(count = rows.len(), sort = %settings.sort_order, "listed containers");
            Ok(rows
                .into_iter()
                .map(|c| ContainerView::new(c, &thresholds, now_ms))
                .collect())
        }
        .instrument(span)
        .await
    }
}
