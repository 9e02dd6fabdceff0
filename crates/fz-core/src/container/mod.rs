//! Container entity and its lifecycle.
//!
//! ```text
//! UNUSED --claim--> ACTIVE --mark used--> USED
//!                     |                    |
//!                     +--soft delete--> DELETED
//!
//! USED / DELETED --reuse--> (new) ACTIVE row holding the original uuid
//! ```

mod expiry;
mod filter;
mod model;
mod status;

pub use expiry::{remaining_label, ExpiryStatus, ExpiryThresholds, DAY_MS};
pub use filter::ReminderFilter;
pub use model::{ClaimDetails, Container, NewContainer};
pub use status::{ContainerStatus, UnknownStatus};
