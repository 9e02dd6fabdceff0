//! # fz-infra
//!
//! Infrastructure adapters for Freezr: SQLite persistence through diesel,
//! the system clock, in-process reminder timers and the TOML config loader.

pub mod config;
pub mod db;
pub mod reminder;
pub mod time;

pub use reminder::TokioReminderScheduler;
pub use time::SystemClock;
