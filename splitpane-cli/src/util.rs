//! Shared utility functions used across command modules.

use std::path::{Path, PathBuf};

use splitpane_core::config::{Settings, SettingsManager};
use splitpane_core::persist::FileLayoutStore;
use splitpane_core::split::{PaneId, SplitLayout};

use crate::error::CliError;

/// Layout backed by the snapshot file
pub type FileLayout = SplitLayout<FileLayoutStore>;

/// Settings and paths resolved from CLI arguments.
pub struct Context {
    /// Loaded settings
    pub settings: Settings,
    /// Snapshot file to operate on
    pub state_file: PathBuf,
}

impl Context {
    /// Loads settings from `config_dir` (or the platform default) and
    /// resolves the snapshot file, preferring `state` when given.
    pub fn load(config_dir: Option<&Path>, state: Option<&Path>) -> Result<Self, CliError> {
        let manager = match config_dir {
            Some(path) => SettingsManager::with_config_dir(path),
            None => SettingsManager::new()?,
        };
        let settings = manager.load_settings()?;
        let state_file = state.map_or_else(|| manager.state_file(&settings), Path::to_path_buf);
        Ok(Self {
            settings,
            state_file,
        })
    }

    /// Opens the layout snapshot.
    pub fn open_layout(&self) -> Result<FileLayout, CliError> {
        let layout = SplitLayout::open(&self.state_file)?;
        Ok(layout.with_navigation(self.settings.navigation))
    }
}

/// Fails with `PaneNotFound` unless `id` is in the layout.
pub fn require_pane(layout: &FileLayout, id: &PaneId) -> Result<(), CliError> {
    if layout.contains(id) {
        Ok(())
    } else {
        Err(CliError::PaneNotFound(id.clone()))
    }
}

/// Formats a normalized coordinate for display
pub fn fmt_unit(value: f64) -> String {
    format!("{value:.3}")
}
