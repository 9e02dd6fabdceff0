mod container_repo;
mod settings_repo;

pub use container_repo::DieselContainerRepository;
pub use settings_repo::DieselSettingsRepository;
