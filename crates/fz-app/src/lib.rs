//! Freezr application orchestration layer.
//!
//! Use cases combine the ports declared in `fz-core`; adapters are handed in
//! through [`AppDeps`].

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, AppOptions};
pub use deps::AppDeps;
