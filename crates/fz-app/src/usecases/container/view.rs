use serde::Serialize;

use fz_core::{Container, ExpiryStatus, ExpiryThresholds};

/// A container together with its freshness at the time it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerView {
    #[serde(flatten)]
    pub container: Container,
    pub expiry_status: ExpiryStatus,
    pub expires_at_ms: i64,
    /// `Expired 3d ago`, `Expires today`, `12d remaining`.
    pub remaining: String,
}

impl ContainerView {
    pub fn new(container: Container, thresholds: &ExpiryThresholds, now_ms: i64) -> Self {
        Self {
            expiry_status: thresholds.evaluate(&container, now_ms),
            expires_at_ms: thresholds.expiry_at_ms(&container),
            remaining: thresholds.remaining_label(&container, now_ms),
            container,
        }
    }
}
