//! # fz-core
//!
//! Core domain models and business rules for Freezr.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the container lifecycle, the scan decision, expiry evaluation and reminder
//! timing. Persistence, scheduling and notification are reached through [`ports`].

pub mod app_dirs;
pub mod config;
pub mod container;
pub mod error;
pub mod ids;
pub mod label;
pub mod notification;
pub mod ports;
pub mod reminder;
pub mod scan;
pub mod settings;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use container::{
    ClaimDetails, Container, ContainerStatus, ExpiryStatus, ExpiryThresholds, NewContainer,
    ReminderFilter,
};
pub use error::ValidationError;
pub use ids::{ContainerId, ContainerUuid};
pub use label::LabelSpec;
pub use notification::{ReminderAction, ReminderNotification};
pub use reminder::{ReminderRequest, ResolvedReminder, TimeOfDay};
pub use scan::{ScanError, ScanMode, ScanOutcome};
pub use settings::{Settings, SettingsChange, SortOrder};
