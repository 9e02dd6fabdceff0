//! Building blocks shared by several use cases.

mod reminder_reconciler;
mod undo_slot;

pub use reminder_reconciler::ReminderReconciler;
pub use undo_slot::UndoSlot;
