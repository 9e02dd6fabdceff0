//! # Application Dependencies
//!
//! Parameter grouping for [`App`](crate::App) construction. Not a builder:
//! every port is required and there are no defaults.

use std::sync::Arc;

use fz_core::ports::{
    ClockPort, ContainerRepositoryPort, NotificationPort, ReminderSchedulerPort, SettingsPort,
};

#[derive(Clone)]
pub struct AppDeps {
    // Storage
    pub containers: Arc<dyn ContainerRepositoryPort>,
    pub settings: Arc<dyn SettingsPort>,

    // Reminders
    pub scheduler: Arc<dyn ReminderSchedulerPort>,
    pub notifier: Arc<dyn NotificationPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
