//! Application Paths
//!
//! Where the backend keeps its database and logs. Everything is derived from
//! Tauri's path resolver; there is no config file.

use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager, Runtime};

pub const DB_FILE: &str = "hearth.db";
pub const LOG_NAME: &str = "Hearth";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    pub fn new(data_dir: &Path, log_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            db_path: data_dir.join(DB_FILE),
            log_dir: log_dir.to_path_buf(),
        }
    }

    /// Resolve from the app handle and make sure the directories exist
    pub fn resolve<R: Runtime>(app: &AppHandle<R>) -> Result<Self, String> {
        let data_dir = app
            .path()
            .app_data_dir()
            .map_err(|e| format!("No app data dir: {}", e))?;
        let log_dir = app
            .path()
            .app_log_dir()
            .map_err(|e| format!("No app log dir: {}", e))?;

        let paths = Self::new(&data_dir, &log_dir);
        paths.ensure_dirs().map_err(|e| e.to_string())?;
        Ok(paths)
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_layout() {
        let paths = AppPaths::new(Path::new("/data/hearth"), Path::new("/logs/hearth"));
        assert_eq!(paths.db_path, PathBuf::from("/data/hearth/hearth.db"));
        assert_eq!(paths.log_dir, PathBuf::from("/logs/hearth"));
    }
}
