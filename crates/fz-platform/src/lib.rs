//! # fz-platform
//!
//! Adapters that depend on the host system: where application data lives and
//! how a fired reminder reaches the user.

pub mod app_dirs;
pub mod notification;

pub use app_dirs::DirsAppDirsAdapter;
pub use notification::TerminalNotifier;
