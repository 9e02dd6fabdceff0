use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::label::{self, LabelSpec};
use fz_core::ports::{ClockPort, ContainerRepositoryPort};
use fz_core::ContainerUuid;

/// Produce a batch of blank labels, optionally registering them as placeholders.
pub struct PrintLabels {
    containers: Arc<dyn ContainerRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl PrintLabels {
    pub fn new(containers: Arc<dyn ContainerRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { containers, clock }
    }

    /// `count` is clamped to `1..=500`. With `register` every label is stored
    /// as an UNUSED row so scanning it starts the claim flow.
    pub async fn execute(&self, count: u32, register: bool) -> Result<Vec<LabelSpec>> {
        let span = info_span!("usecase.print_labels.execute", count, register);

        async {
            let labels = label::generate(count);

            if register {
                let uuids: Vec<ContainerUuid> = labels.iter().map(|l| l.uuid.clone()).collect();
                let inserted = self
                    .containers
                    .insert_placeholders(&uuids, self.clock.now_ms())
                    .await
                    .context("failed to register placeholders")?;
                info!(inserted, "placeholders registered");
            }

            info!(generated = labels.len(), "labels generated");
            Ok(labels)
        }
        .instrument(span)
        .await
    }
}
