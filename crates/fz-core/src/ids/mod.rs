mod container_id;
mod container_uuid;

pub use container_id::ContainerId;
pub use container_uuid::ContainerUuid;
