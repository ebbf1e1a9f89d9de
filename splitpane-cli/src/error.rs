//! CLI error types and exit codes.

use splitpane_core::config::SettingsError;
use splitpane_core::persist::PersistError;
use splitpane_core::split::{Direction, PaneId, SplitError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, snapshot, or rejected edit
    pub const GENERAL_ERROR: i32 = 1;
    /// The named pane is not in the layout, or has no neighbor
    pub const PANE_NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] SettingsError),

    /// Snapshot could not be read or written
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] PersistError),

    /// The layout rejected the edit
    #[error("Layout error: {0}")]
    Layout(#[from] SplitError),

    /// Pane not in the layout
    #[error("Pane not found: {0}")]
    PaneNotFound(PaneId),

    /// Navigation found nothing
    #[error("No pane {direction} of {start}")]
    NoNeighbor {
        /// Starting pane
        start: PaneId,
        /// Requested direction
        direction: Direction,
    },

    /// The edit had nothing to act on
    #[error("{0}")]
    Unchanged(String),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tree rendering error
    #[error("Failed to render layout: {0}")]
    Render(#[from] std::fmt::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, snapshot, rejected edit)
    /// - 2: Pane not found, or no pane in the requested direction
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::PaneNotFound(_) | Self::NoNeighbor { .. } => exit_codes::PANE_NOT_FOUND,
            Self::Config(_)
            | Self::Snapshot(_)
            | Self::Layout(_)
            | Self::Unchanged(_)
            | Self::Json(_)
            | Self::Render(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
