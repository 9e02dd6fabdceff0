use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::{ContainerId, ValidationError};

pub struct UpdateShelfLife {
    containers: Arc<dyn ContainerRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateShelfLife {
    pub fn new(containers: Arc<dyn ContainerRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { containers, clock }
    }

    /// `None` reverts to the default shelf life from settings.
    pub async fn execute(&self, id: ContainerId, days: Option<i32>) -> Result<bool> {
        let span = info_span!("usecase.update_shelf_life.execute", container_id = %id, days = ?days);

        async {
            if let Some(d) = days.filter(|d| *d < 0) {
                return Err(ValidationError::NegativeDays(d as i64).into());
            }

            let updated = self
                .containers
                .update_shelf_life_days(id, days, self.clock.now_ms())
                .await
                .context("failed to update shelf life")?;
            info!(updated, "shelf life updated");
            Ok(updated)
        }
        .instrument(span)
        .await
    }
}
