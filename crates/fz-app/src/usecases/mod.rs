//! Business logic use cases.
//!
//! ```text
//! scan code ──> HandleScan ──┬─ unknown    ─> CreateFromScan
//!                            ├─ unused     ─> ClaimLabel
//!                            ├─ active     ─> GetContainer / SetReminder / MarkUsed ...
//!                            └─ historical ─> ReuseLabel
//!
//! scheduler ──> ReminderDeliveryLoop ──> DeliverReminder ──> NotificationPort
//! ```

pub mod container;
pub mod internal;
pub mod print_labels;
pub mod reminder;
pub mod scan;
pub mod settings;

pub use container::{
    ContainerView, GetContainer, ListContainers, MarkUsed, SoftDelete, UndoLastDelete,
    UpdateShelfLife,
};
pub use print_labels::PrintLabels;
pub use reminder::{
    DeliverReminder, ReminderDeliveryLoop, RescheduleReminders, SetReminder, Snooze,
};
pub use scan::{ClaimLabel, CreateFromScan, HandleScan, ItemForm, ReuseLabel};
pub use settings::{GetSettings, UpdateSettings};
