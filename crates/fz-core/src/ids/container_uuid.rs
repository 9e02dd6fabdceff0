use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier printed into a label's QR code.
///
/// Unique across every container row, including used and deleted history.
/// When a label is reused the superseded row is handed a fresh value so the
/// printed one can move to the new active row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerUuid(String);

impl ContainerUuid {
    /// Generate a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Leading characters used as a human-readable caption under a printed code.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(6) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Display for ContainerUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContainerUuid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContainerUuid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_uuids_are_distinct_and_canonical() {
        let a = ContainerUuid::generate();
        let b = ContainerUuid::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn short_takes_first_six_chars() {
        let id = ContainerUuid::from("abcdef-123");
        assert_eq!(id.short(), "abcdef");

        let tiny = ContainerUuid::from("ab");
        assert_eq!(tiny.short(), "ab");
    }
}
