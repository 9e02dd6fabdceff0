use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Local surrogate key of a container row, assigned by storage on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(i64);

impl ContainerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl Display for ContainerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContainerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
