//! Application configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, ExplorerResult};

/// Top-level application configuration.
///
/// All fields have sensible defaults so PalmFM works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::NotFound`] if the file does not exist.
    /// - [`ExplorerError::PermissionDenied`] if the file is not readable.
    /// - [`ExplorerError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> ExplorerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExplorerError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                ExplorerError::PermissionDenied(path.to_path_buf())
            }
            _ => ExplorerError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| ExplorerError::ConfigParse(e.to_string()))
    }

    /// Resolves the browsing root: the configured override if set,
    /// otherwise the application storage root the platform supplied.
    pub fn resolve_root(&self, platform_root: &Path) -> PathBuf {
        self.storage
            .root
            .clone()
            .unwrap_or_else(|| platform_root.to_path_buf())
    }
}

/// General browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Whether the frontend asks for confirmation before deleting.
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

/// Storage root settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Optional override of the application storage root.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Photo import settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Whether the capture affordance may be shown at all. Camera
    /// permission is still required at runtime.
    #[serde(default = "default_true")]
    pub camera_enabled: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            camera_enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}
