use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyLoun8XjsPCj-4CLd0vijSswdwiT5fdMtSz-RvOGzFZl25iuvNr8V8zuONLo6uuUYF2Q/exec";
pub const DEFAULT_ORGANIZATION: &str = "Air Astra";
pub const DEFAULT_PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/120";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub placeholder_photo: Option<String>,
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Settings {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn organization(&self) -> &str {
        self.organization.as_deref().unwrap_or(DEFAULT_ORGANIZATION)
    }

    pub fn placeholder_photo(&self) -> &str {
        self.placeholder_photo
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_PHOTO)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)?;
    let settings = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}
