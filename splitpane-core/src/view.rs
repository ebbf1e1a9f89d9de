//! Collaborator for the view that renders the split layout
//!
//! The layout engine does not render; it only needs to know whether the
//! split view is showing, which pane the application considers focused,
//! and a way to bring the split view up.

use async_trait::async_trait;

use crate::split::PaneId;

/// Errors reported by a [`LayoutView`].
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The view could not be opened.
    #[error("failed to open layout view: {0}")]
    OpenFailed(String),
}

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// The application view that displays the split layout.
#[async_trait]
pub trait LayoutView: Send + Sync {
    /// Returns true if the split layout is currently on screen.
    fn is_active(&self) -> bool;

    /// Returns the pane the application currently has focused, if any.
    fn focused_pane(&self) -> Option<PaneId>;

    /// Brings the split layout on screen.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::OpenFailed` if the view cannot be shown.
    async fn open(&self) -> ViewResult<()>;
}
