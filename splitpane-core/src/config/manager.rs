//! Settings file loading and saving

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::settings::Settings;
use crate::split::SplitError;
use crate::tracing::span_names;

/// Directory name under the platform config and data directories
const APP_DIR: &str = "splitpane";

/// Settings file name
const SETTINGS_FILE: &str = "settings.toml";

/// Default snapshot file name
const STATE_FILE: &str = "layout.json";

/// Errors that can occur while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML for [`Settings`]
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// The settings parse but hold an out-of-range value
    #[error("Invalid settings in {path}: {source}")]
    Invalid {
        /// File being loaded
        path: PathBuf,
        /// Rejected value
        source: SplitError,
    },

    /// Settings could not be encoded
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The platform has no config directory
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Loads and saves [`Settings`] from a config directory.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config_dir: PathBuf,
}

impl SettingsManager {
    /// Creates a manager for the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::NoConfigDir` if the platform has none.
    pub fn new() -> SettingsResult<Self> {
        let base = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(APP_DIR)))
    }

    /// Creates a manager for an explicit directory.
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Returns the config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if it holds an invalid navigation tolerance.
    pub fn load_settings(&self) -> SettingsResult<Settings> {
        let path = self.settings_path();
        let _span =
            crate::trace_operation_debug!(span_names::CONFIG_LOAD, path = %path.display())
                .entered();

        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let settings: Settings = match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(source) => return Err(SettingsError::Parse { path, source }),
        };
        if let Err(source) = settings.navigation.validate() {
            return Err(SettingsError::Invalid { path, source });
        }
        Ok(settings)
    }

    /// Saves settings, creating the config directory as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be encoded or written.
    pub fn save_settings(&self, settings: &Settings) -> SettingsResult<()> {
        let path = self.settings_path();
        let _span =
            crate::trace_operation_debug!(span_names::CONFIG_SAVE, path = %path.display())
                .entered();

        let content = toml::to_string_pretty(settings)?;
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Resolves the snapshot file: the configured path, else the platform
    /// data directory, else the config directory.
    #[must_use]
    pub fn state_file(&self, settings: &Settings) -> PathBuf {
        if let Some(file) = &settings.state.file {
            return file.clone();
        }
        dirs::data_dir().map_or_else(
            || self.config_dir.join(STATE_FILE),
            |data| data.join(APP_DIR).join(STATE_FILE),
        )
    }
}
