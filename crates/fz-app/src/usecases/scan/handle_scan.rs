use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use fz_core::ports::ContainerRepositoryPort;
use fz_core::scan::decode_payload;
use fz_core::ScanOutcome;

/// Resolve a scanned code to the flow that applies to it.
pub struct HandleScan {
    containers: Arc<dyn ContainerRepositoryPort>,
}

impl HandleScan {
    pub fn new(containers: Arc<dyn ContainerRepositoryPort>) -> Self {
        Self { containers }
    }

    /// Decode `raw` and look its uuid up.
    ///
    /// Fails on an empty code; every stored state maps to a flow.
    pub async fn execute(&self, raw: &str) -> Result<ScanOutcome> {
        let span = info_span!("usecase.handle_scan.execute");

        async {
            let uuid = decode_payload(raw)?;
            let existing = self
                .containers
                .find_by_uuid(&uuid)
                .await
                .context("failed to look up scanned label")?;

            let outcome = ScanOutcome::new(uuid, existing);
            info!(
                uuid = %outcome.uuid,
                mode = outcome.mode.as_str(),
                container_id = ?outcome.existing.as_ref().map(|c| c.id),
                "scan resolved"
            );
            Ok(outcome)
        }
        .instrument(span)
        .await
    }
}
