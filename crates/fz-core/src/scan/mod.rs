//! Label payloads and the scan dispatch decision.
//!
//! A printed label encodes `FREEZR:<uuid>`. Scanning it looks the uuid up and
//! picks one of four flows from the current state of the matching row.

use serde::Serialize;
use thiserror::Error;

use crate::container::{Container, ContainerStatus};
use crate::ids::ContainerUuid;

pub const LABEL_PREFIX: &str = "FREEZR:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("scanned code is empty")]
    EmptyPayload,
}

pub fn encode_payload(uuid: &ContainerUuid) -> String {
    format!("{LABEL_PREFIX}{}", uuid.as_str())
}

/// Strip the label prefix (when present) and surrounding whitespace.
///
/// Codes printed by other tools carry no prefix and are taken verbatim.
pub fn decode_payload(raw: &str) -> Result<ContainerUuid, ScanError> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix(LABEL_PREFIX).unwrap_or(trimmed).trim();
    if body.is_empty() {
        return Err(ScanError::EmptyPayload);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(uuid = %body, prefixed = trimmed.starts_with(LABEL_PREFIX), "decoded scan payload");

    Ok(ContainerUuid::from(body))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// No row holds the uuid: create a new ACTIVE row with it.
    Unknown,
    /// Blank printed label: claim it.
    Unused,
    /// Item in use: show details, edit reminder or shelf life, mark used.
    Active,
    /// USED or DELETED: reuse the label for a new item.
    Historical,
}

impl ScanMode {
    pub fn for_existing(existing: Option<&Container>) -> Self {
        match existing.map(|c| c.status) {
            None => ScanMode::Unknown,
            Some(ContainerStatus::Unused) => ScanMode::Unused,
            Some(ContainerStatus::Active) => ScanMode::Active,
            Some(ContainerStatus::Used) | Some(ContainerStatus::Deleted) => ScanMode::Historical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Unknown => "unknown",
            ScanMode::Unused => "unused",
            ScanMode::Active => "active",
            ScanMode::Historical => "historical",
        }
    }
}

/// Result of resolving a scanned code against storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub uuid: ContainerUuid,
    pub mode: ScanMode,
    pub existing: Option<Container>,
}

impl ScanOutcome {
    pub fn new(uuid: ContainerUuid, existing: Option<Container>) -> Self {
        Self {
            mode: ScanMode::for_existing(existing.as_ref()),
            uuid,
            existing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ContainerId;

    fn row(status: ContainerStatus) -> Container {
        Container {
            id: ContainerId::new(1),
            uuid: ContainerUuid::from("abc"),
            name: String::new(),
            status,
            frozen_date_ms: 0,
            reminder_days: None,
            shelf_life_days: None,
            quantity: 1,
            notes: None,
            reminder_at_ms: None,
            date_used_ms: None,
            created_at_ms: 0,
            updated_at_ms: 0,
        }
    }

    #[test]
    fn decode_strips_prefix_and_whitespace() {
        assert_eq!(decode_payload("  FREEZR:abc-123 \n").unwrap().as_str(), "abc-123");
        assert_eq!(decode_payload("plain-code").unwrap().as_str(), "plain-code");
    }

    #[test]
    fn decode_rejects_empty_codes() {
        assert_eq!(decode_payload("   "), Err(ScanError::EmptyPayload));
        assert_eq!(decode_payload("FREEZR:  "), Err(ScanError::EmptyPayload));
    }

    #[test]
    fn encode_then_decode_yields_the_uuid() {
        let uuid = ContainerUuid::generate();
        assert_eq!(decode_payload(&encode_payload(&uuid)).unwrap(), uuid);
    }

    #[test]
    fn mode_follows_status() {
        assert_eq!(ScanMode::for_existing(None), ScanMode::Unknown);
        assert_eq!(ScanMode::for_existing(Some(&row(ContainerStatus::Unused))), ScanMode::Unused);
        assert_eq!(ScanMode::for_existing(Some(&row(ContainerStatus::Active))), ScanMode::Active);
        assert_eq!(ScanMode::for_existing(Some(&row(ContainerStatus::Used))), ScanMode::Historical);
        assert_eq!(ScanMode::for_existing(Some(&row(ContainerStatus::Deleted))), ScanMode::Historical);
    }
}
