use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "profilecard";

#[derive(Debug, Clone)]
pub struct AppPaths {
    sites_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        Ok(Self::at(config_root.join(APP_DIR)))
    }

    pub fn at(config_dir: PathBuf) -> Self {
        Self {
            sites_dir: config_dir.join("sites"),
        }
    }

    pub fn settings_file(&self, site: &str) -> PathBuf {
        self.sites_dir.join(format!("{site}.json"))
    }
}
