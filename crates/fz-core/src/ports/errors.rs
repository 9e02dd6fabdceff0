use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("corrupt container row: {0}")]
    Mapping(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings storage error: {0}")]
    Storage(String),

    #[error("corrupt settings row: {0}")]
    Mapping(String),
}

#[derive(Debug, Error)]
pub enum ReminderSchedulerError {
    #[error("reminder scheduler is shut down")]
    Closed,

    #[error("failed to schedule reminder: {0}")]
    Schedule(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}
