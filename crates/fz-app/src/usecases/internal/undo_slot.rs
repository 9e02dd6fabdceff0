use std::sync::{Mutex, PoisonError};

use fz_core::Container;

/// The most recently soft-deleted container, held for a single undo.
#[derive(Default)]
pub struct UndoSlot {
    last_deleted: Mutex<Option<Container>>,
}

impl UndoSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `container`, replacing whatever was held before.
    pub fn put(&self, container: Container) {
        *self
            .last_deleted
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(container);
    }

    /// Take the held container, leaving the slot empty.
    pub fn take(&self) -> Option<Container> {
        self.last_deleted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
