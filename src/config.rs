//! Persistent app settings in `config.json`.
//!
//! The file is a JSON object. The app itself only reads and writes
//! `last_dir`, the folder the previous selection came from:
//!
//! ```json
//! {
//!   "last_dir": "/home/me/Music"
//! }
//! ```
//!
//! Other keys are carried through untouched, since every save rewrites the
//! whole file. A missing or malformed file is treated as an empty object.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Folder of the first file in the most recent selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dir: Option<String>,
    /// Keys this version does not know about.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AppConfig {
    /// Load from `path`. Never fails: absent or unparsable files give the
    /// default config.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Rewrite the whole file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Remember the folder of the first selected file.
    pub fn remember_selection(&mut self, first_file: &Path) {
        let dir = first_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        self.last_dir = Some(dir.to_string_lossy().into_owned());
    }

    /// Folder to browse when the user names no files.
    pub fn browse_dir(&self) -> PathBuf {
        self.last_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
