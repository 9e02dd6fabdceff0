use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn database_path(&self) -> PathBuf {
        self.app_data_root.join("freezr.db")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }

    pub fn config_path(&self) -> PathBuf {
        self.app_data_root.join("freezr.toml")
    }
}
