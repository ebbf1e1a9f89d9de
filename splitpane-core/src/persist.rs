//! Layout snapshots
//!
//! This module persists a split layout as a versioned JSON document and
//! provides [`FileLayoutStore`], a [`LayoutStore`] backed by such a file.
//!
//! ```json
//! {
//!   "version": 1,
//!   "saved_at": "2026-01-01T00:00:00Z",
//!   "root": { "axis": "horizontal", "size": 50, "before": "a", "after": "b" },
//!   "focused": "b"
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::split::{LayoutStore, PaneId, SplitError, SplitLayout, SplitNode};
use crate::tracing::span_names;

/// Current version of the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur while reading or writing snapshots
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(serde_json::Error),

    /// Version mismatch
    #[error("Incompatible snapshot version: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Expected version
        expected: u32,
        /// Actual version found
        actual: u32,
    },

    /// The stored tree breaks a layout invariant
    #[error("Invalid layout: {0}")]
    InvalidLayout(#[from] SplitError),
}

/// Serialized state of one split layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Format version
    pub version: u32,
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,
    /// Tree root, `None` when no pane is open
    #[serde(default)]
    pub root: Option<SplitNode>,
    /// Focused pane
    #[serde(default)]
    pub focused: Option<PaneId>,
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl LayoutSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(root: Option<SplitNode>, focused: Option<PaneId>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            root,
            focused,
        }
    }

    /// Takes a snapshot of a layout.
    #[must_use]
    pub fn capture<S: LayoutStore>(layout: &SplitLayout<S>) -> Self {
        Self::new(layout.root().cloned(), layout.focused().cloned())
    }

    /// Updates the saved_at timestamp
    pub fn touch(&mut self) {
        self.saved_at = Utc::now();
    }

    /// Checks the version and the tree invariants.
    ///
    /// # Errors
    ///
    /// - `PersistError::VersionMismatch` for a different format version
    /// - `PersistError::InvalidLayout` if the tree has duplicate panes or
    ///   out-of-range sizes
    pub fn validate(&self) -> Result<(), PersistError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                actual: self.version,
            });
        }
        if let Some(root) = &self.root {
            root.validate()?;
        }
        Ok(())
    }

    /// Serializes the snapshot to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string_pretty(self).map_err(PersistError::Serialization)
    }

    /// Parses and validates a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Deserialization` for malformed JSON and the
    /// errors of [`LayoutSnapshot::validate`].
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let snapshot: Self = serde_json::from_str(json).map_err(PersistError::Deserialization)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Writes the snapshot, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to_file(&self, path: &Path) -> Result<(), PersistError> {
        let _span = crate::trace_operation_debug!(
            span_names::SNAPSHOT_SAVE,
            path = %path.display()
        )
        .entered();

        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        debug!("Snapshot written");
        Ok(())
    }

    /// Reads and validates a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, parsing or validation fails.
    pub fn load_from_file(path: &Path) -> Result<Self, PersistError> {
        let _span = crate::trace_operation_debug!(
            span_names::SNAPSHOT_LOAD,
            path = %path.display()
        )
        .entered();

        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Layout store backed by a snapshot file.
///
/// The root is held in memory; [`FileLayoutStore::save`] writes it out.
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    path: PathBuf,
    root: Option<SplitNode>,
    focused: Option<PaneId>,
}

impl FileLayoutStore {
    /// Opens the snapshot at `path`. A missing file yields an empty layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is invalid.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "No snapshot yet, starting empty");
            return Ok(Self {
                path,
                root: None,
                focused: None,
            });
        }

        let snapshot = LayoutSnapshot::load_from_file(&path)?;
        Ok(Self {
            path,
            root: snapshot.root,
            focused: snapshot.focused,
        })
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the focus recorded in the file when it was opened.
    #[must_use]
    pub const fn focused(&self) -> Option<&PaneId> {
        self.focused.as_ref()
    }

    /// Writes the current root and `focused` to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn save(&mut self, focused: Option<&PaneId>) -> Result<(), PersistError> {
        self.focused = focused.cloned();
        LayoutSnapshot::new(self.root.clone(), self.focused.clone()).save_to_file(&self.path)
    }
}

impl LayoutStore for FileLayoutStore {
    fn get(&self) -> Option<&SplitNode> {
        self.root.as_ref()
    }

    fn set(&mut self, root: Option<SplitNode>) {
        self.root = root;
    }
}

impl SplitLayout<FileLayoutStore> {
    /// Opens a layout from a snapshot file, restoring its focus.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let store = FileLayoutStore::open(path)?;
        let focused = store.focused().cloned();
        Ok(Self::with_store(store).with_focused(focused))
    }

    /// Writes the layout and its focus back to the snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub fn flush(&mut self) -> Result<(), PersistError> {
        let focused = self.focused().cloned();
        self.store_mut().save(focused.as_ref())
    }
}
