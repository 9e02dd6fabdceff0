//! Port interfaces for the application layer
//!
//! Ports are the contract between use cases and the infrastructure or
//! platform code that implements them. Core logic depends only on these
//! traits.

pub mod app_dirs;
mod clock;
pub mod container_repository;
pub mod errors;
pub mod notification;
pub mod reminder_scheduler;
pub mod settings;


pub use app_dirs::AppDirsPort;
pub use clock::*;
pub use container_repository::ContainerRepositoryPort;
pub use errors::{AppDirsError, ContainerRepositoryError, ReminderSchedulerError, SettingsError};
pub use notification::NotificationPort;
pub use reminder_scheduler::ReminderSchedulerPort;
pub use settings::SettingsPort;
