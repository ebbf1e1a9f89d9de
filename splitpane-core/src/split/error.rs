//! Error types for split layout operations
//!
//! This module defines the error type and the outcome enum returned by
//! the tree editor.

use super::types::PaneId;

/// Errors that can occur during split layout operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    /// The identifier cannot name a pane.
    #[error("invalid pane id: {0:?} (must be non-empty, without ':' and not the empty-root id)")]
    InvalidPaneId(String),

    /// The axis name was not recognised.
    #[error("unknown split axis: {0}")]
    UnknownAxis(String),

    /// The direction name was not recognised.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// The pane already exists somewhere in the tree.
    #[error("pane already in layout: {0}")]
    DuplicatePane(PaneId),

    /// A branch spec must hold exactly the target and the inserted pane.
    #[error("branch for {target} must contain {target} and {inserted}")]
    InvalidBranch {
        /// Pane being split.
        target: PaneId,
        /// Pane being inserted.
        inserted: PaneId,
    },

    /// Invalid split size (must be between 0 and 100).
    #[error("invalid split size: {0} (must be between 0 and 100)")]
    InvalidSize(f64),

    /// Navigation tolerance that is negative or not a number.
    #[error("invalid navigation tolerance: {0} (must be finite and non-negative)")]
    InvalidTolerance(f64),

    /// A path ran past a leaf; the tree no longer matches the path.
    #[error("split path continues for {remaining} step(s) past a leaf")]
    PathMismatch {
        /// Steps left when the leaf was reached.
        remaining: usize,
    },
}

/// Result of a tree edit that may legitimately do nothing.
///
/// UI gestures race against state changes (a pane closing mid-drag), so
/// edits naming absent panes degrade to `Unchanged` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new root was assigned.
    Applied,
    /// The layout was left untouched.
    Unchanged,
}

impl EditOutcome {
    /// Returns true if the edit assigned a new root.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
