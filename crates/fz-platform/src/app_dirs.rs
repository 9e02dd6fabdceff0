use std::path::PathBuf;

use fz_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "freezr";

/// Environment variable selecting an isolated data directory (`freezr-<profile>`).
pub const PROFILE_ENV: &str = "FREEZR_PROFILE";

/// Directory name for `profile`. Blank profiles and ones that would leave the
/// base directory fall back to the shared name.
fn app_dir_name(profile: Option<&str>) -> String {
    match profile.map(str::trim) {
        Some(p) if !p.is_empty() && !p.contains(['/', '\\']) && p != ".." => {
            format!("{APP_DIR_NAME}-{p}")
        }
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Data directory resolved through the `dirs` crate.
///
/// The profile is read once, when the adapter is built.
pub struct DirsAppDirsAdapter {
    base: Option<PathBuf>,
    profile: Option<String>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base: None,
            profile: std::env::var(PROFILE_ENV).ok(),
        }
    }

    /// Rooted at `base` instead of the system data-local directory.
    pub fn with_base(base: PathBuf, profile: Option<&str>) -> Self {
        Self {
            base: Some(base),
            profile: profile.map(str::to_string),
        }
    }

    fn base_dir(&self) -> Option<PathBuf> {
        self.base.clone().or_else(dirs::data_local_dir)
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = self
            .base_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base.join(app_dir_name(self.profile.as_deref())),
        })
    }
}
