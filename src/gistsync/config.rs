use crate::error::{GistSyncError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = ".gistsync.json";
const DEFAULT_ID_DIR: &str = ".gistids";
const DEFAULT_GIST_BIN: &str = "gist";

/// Configuration for gistsync, stored in .gistsync.json next to the synced files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GistSyncConfig {
    /// Dotfolder holding the sidecar id files (relative to the working directory)
    #[serde(default = "default_id_dir")]
    pub id_dir: String,

    /// Name of the external gist tool to invoke
    #[serde(default = "default_gist_bin")]
    pub gist_bin: String,
}

fn default_id_dir() -> String {
    DEFAULT_ID_DIR.to_string()
}

fn default_gist_bin() -> String {
    DEFAULT_GIST_BIN.to_string()
}

impl Default for GistSyncConfig {
    fn default() -> Self {
        Self {
            id_dir: DEFAULT_ID_DIR.to_string(),
            gist_bin: DEFAULT_GIST_BIN.to_string(),
        }
    }
}

impl GistSyncConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GistSyncError::Io)?;
        let config: GistSyncConfig =
            serde_json::from_str(&content).map_err(GistSyncError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GistSyncError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GistSyncError::Serialization)?;
        fs::write(config_path, content).map_err(GistSyncError::Io)?;
        Ok(())
    }
}
