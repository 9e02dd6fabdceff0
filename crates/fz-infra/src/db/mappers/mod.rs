pub mod container_mapper;
pub mod settings_mapper;
