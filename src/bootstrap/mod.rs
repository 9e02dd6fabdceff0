pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{resolve_config, ConfigOverrides, ResolvedConfig};
pub use wiring::{wire_dependencies, WiringError, WiringResult};
