//! Path management for daybook
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `DAYBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/daybook` or `~/.config/daybook`
//! 3. Windows: `%APPDATA%\daybook`

use std::path::PathBuf;

use crate::error::DaybookError;

/// Manages all paths used by daybook
#[derive(Debug, Clone)]
pub struct DaybookPaths {
    /// Base directory for all daybook data
    base_dir: PathBuf,
}

impl DaybookPaths {
    /// Create a new DaybookPaths instance
    ///
    /// Path resolution:
    /// 1. `DAYBOOK_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/daybook` or `~/.config/daybook`
    /// 3. Windows: `%APPDATA%\daybook`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DaybookError> {
        let base_dir = if let Ok(custom) = std::env::var("DAYBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DaybookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/daybook/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/daybook/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to entries.json
    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join("entries.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), DaybookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DaybookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DaybookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DaybookError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| DaybookError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("daybook"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DaybookError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DaybookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("daybook"))
}
