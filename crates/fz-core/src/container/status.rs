use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerStatus {
    /// Printed label, not yet claimed.
    Unused,
    /// Claimed and in use.
    Active,
    /// Consumed; kept as history.
    Used,
    /// Soft-removed; recoverable through a one-shot undo.
    Deleted,
}

impl ContainerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStatus::Unused => "UNUSED",
            ContainerStatus::Active => "ACTIVE",
            ContainerStatus::Used => "USED",
            ContainerStatus::Deleted => "DELETED",
        }
    }

    /// Terminal rows can only come back through reuse (or undo for deletes).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ContainerStatus::Used | ContainerStatus::Deleted)
    }
}

impl Display for ContainerStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown container status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ContainerStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNUSED" => Ok(ContainerStatus::Unused),
            "ACTIVE" => Ok(ContainerStatus::Active),
            "USED" => Ok(ContainerStatus::Used),
            "DELETED" => Ok(ContainerStatus::Deleted),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
