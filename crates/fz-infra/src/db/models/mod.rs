mod container_row;
mod settings_row;

pub use container_row::{ContainerRow, NewContainerRow};
pub use settings_row::SettingsRow;
