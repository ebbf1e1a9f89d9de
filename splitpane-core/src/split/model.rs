//! Split layout model
//!
//! This module provides [`SplitLayout`], which owns the focused pane and
//! reaches the tree root through a [`LayoutStore`]. Every edit computes a
//! new tree from the current one and assigns it back in a single step;
//! an edit that fails or finds nothing to do leaves the store untouched.
//!
//! # Example
//!
//! ```
//! use splitpane_core::split::{Direction, PaneId, SplitAxis, SplitLayout};
//!
//! let mut layout = SplitLayout::new();
//! let chat = PaneId::new("chat").unwrap();
//!
//! // The first insert bootstraps the tree with the target itself.
//! layout.insert_empty(&chat, SplitAxis::Horizontal).unwrap();
//! assert_eq!(layout.pane_count(), 1);
//!
//! // Further inserts split the target.
//! let side = layout.insert_empty(&chat, SplitAxis::Horizontal).unwrap();
//! assert_eq!(layout.pane_count(), 2);
//! assert_eq!(layout.focused(), Some(&side));
//! assert_eq!(layout.navigate(&chat, Direction::Right), Some(side));
//! ```

use tracing::debug;

use super::editor::{self, BranchSpec, RemoveResult};
use super::error::{EditOutcome, SplitError};
use super::geometry::{SplitRect, layout_rects};
use super::navigator::{self, NavigationConfig};
use super::store::{LayoutStore, MemoryLayoutStore};
use super::tree::SplitNode;
use super::types::{Direction, PaneId, Side, SplitAxis};
use crate::tracing::span_names;
use crate::view::{LayoutView, ViewResult};

/// Manages one split layout: its root (through the store) and its focus.
///
/// # Focus Tracking
///
/// The focused pane is independent of the tree. It is updated whenever the
/// root is set to a bare leaf, by [`SplitLayout::insert_empty`], and
/// explicitly through [`SplitLayout::set_focused`]. Navigation never moves
/// focus on its own.
#[derive(Debug, Clone)]
pub struct SplitLayout<S = MemoryLayoutStore> {
    /// Backing store for the tree root.
    store: S,
    /// Pane that should receive input focus.
    focused: Option<PaneId>,
    /// Navigation tuning.
    navigation: NavigationConfig,
}

impl SplitLayout<MemoryLayoutStore> {
    /// Creates an empty layout backed by an in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(MemoryLayoutStore::new())
    }
}

impl Default for SplitLayout<MemoryLayoutStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LayoutStore> SplitLayout<S> {
    /// Creates a layout over an existing store.
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            focused: None,
            navigation: NavigationConfig::default(),
        }
    }

    /// Sets the navigation configuration.
    #[must_use]
    pub const fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    /// Sets the initial focus.
    #[must_use]
    pub fn with_focused(mut self, focused: Option<PaneId>) -> Self {
        self.focused = focused;
        self
    }

    /// Returns the navigation configuration.
    pub const fn navigation(&self) -> &NavigationConfig {
        &self.navigation
    }

    /// Returns the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the backing store mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // ========================================================================
    // Root and Focus Accessors
    // ========================================================================

    /// Returns the tree root, or `None` when no pane is open.
    pub fn root(&self) -> Option<&SplitNode> {
        self.store.get()
    }

    /// Replaces the tree root.
    ///
    /// Setting the root to a bare leaf also focuses that pane.
    pub fn set_root(&mut self, root: Option<SplitNode>) {
        if let Some(SplitNode::Leaf(id)) = &root {
            self.focused = Some(id.clone());
        }
        self.store.set(root);
    }

    /// Returns the focused pane.
    pub const fn focused(&self) -> Option<&PaneId> {
        self.focused.as_ref()
    }

    /// Sets the focused pane. The pane does not have to be in the tree.
    pub fn set_focused(&mut self, focused: Option<PaneId>) {
        self.focused = focused;
    }

    /// Returns true if no pane is open.
    pub fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Returns the number of open panes.
    pub fn pane_count(&self) -> usize {
        self.root().map_or(0, SplitNode::pane_count)
    }

    /// Returns all pane IDs in tree order.
    pub fn panes(&self) -> Vec<PaneId> {
        self.root()
            .map(|root| root.leaves().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns true if the layout contains the pane.
    pub fn contains(&self, id: &PaneId) -> bool {
        self.root().is_some_and(|root| root.contains(id))
    }

    // ========================================================================
    // Tree Edits
    // ========================================================================

    /// Inserts `inserted` next to the pane `target`.
    ///
    /// On an empty layout `spec` is ignored and the root becomes `target`
    /// itself: the first pane has nothing to split against. Otherwise the
    /// target leaf is replaced by the branch `spec` describes, at size 50.
    /// A target that is not in the layout leaves it unchanged.
    ///
    /// # Errors
    ///
    /// - `SplitError::DuplicatePane` if `inserted` is already open
    /// - `SplitError::InvalidBranch` if `spec` does not hold exactly
    ///   `target` and `inserted`
    pub fn insert(
        &mut self,
        target: &PaneId,
        inserted: &PaneId,
        spec: &BranchSpec,
    ) -> Result<EditOutcome, SplitError> {
        let _span = crate::trace_operation_debug!(
            span_names::SPLIT_INSERT,
            target = %target,
            inserted = %inserted
        )
        .entered();

        let Some(root) = self.root() else {
            debug!("Bootstrapping empty layout with target pane");
            return Ok(self.commit(Some(SplitNode::leaf(target.clone()))));
        };

        match editor::insert(root, target, inserted, spec)? {
            Some(tree) => Ok(self.commit(Some(tree))),
            None => Ok(EditOutcome::Unchanged),
        }
    }

    /// Inserts `inserted` next to the node at `path`.
    ///
    /// Unlike [`SplitLayout::insert`], the node may be a branch: the whole
    /// region then moves to the `before` side of a new branch.
    ///
    /// # Errors
    ///
    /// - `SplitError::DuplicatePane` if `inserted` is already open
    /// - `SplitError::PathMismatch` if `path` does not exist
    pub fn insert_at_path(
        &mut self,
        path: &[Side],
        inserted: &PaneId,
        axis: SplitAxis,
    ) -> Result<EditOutcome, SplitError> {
        let Some(root) = self.root() else {
            debug!(%inserted, "Cannot insert at a path of an empty layout");
            return Ok(EditOutcome::Unchanged);
        };

        let tree = editor::insert_at_path(root, path, inserted, axis)?;
        Ok(self.commit(Some(tree)))
    }

    /// Splits `target` with a freshly created pane and focuses the new pane.
    ///
    /// The new pane goes after `target` (right of it or below it). Focus
    /// moves to the new ID whether or not `target` was found.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SplitLayout::insert`].
    pub fn insert_empty(&mut self, target: &PaneId, axis: SplitAxis) -> Result<PaneId, SplitError> {
        let id = PaneId::generate();
        let spec = BranchSpec::new(axis, target.clone(), id.clone());
        self.insert(target, &id, &spec)?;
        self.focused = Some(id.clone());
        Ok(id)
    }

    /// Removes the pane `target`, collapsing its parent branch.
    ///
    /// Removing the last pane empties the layout.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::PathMismatch` if the tree is internally
    /// inconsistent.
    pub fn remove(&mut self, target: &PaneId) -> Result<EditOutcome, SplitError> {
        let _span =
            crate::trace_operation_debug!(span_names::SPLIT_REMOVE, target = %target).entered();

        let Some(root) = self.root() else {
            return Ok(EditOutcome::Unchanged);
        };

        match editor::remove(root, target)? {
            RemoveResult::NotFound => {
                debug!("Remove target not in layout");
                Ok(EditOutcome::Unchanged)
            }
            RemoveResult::RemovedRoot => Ok(self.commit(None)),
            RemoveResult::Removed(tree) => Ok(self.commit(Some(tree))),
        }
    }

    /// Renames the pane `target` to `replacement` without changing the shape.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::DuplicatePane` if `replacement` is already open
    /// elsewhere.
    pub fn replace(
        &mut self,
        target: &PaneId,
        replacement: &PaneId,
    ) -> Result<EditOutcome, SplitError> {
        let _span = crate::trace_operation_debug!(
            span_names::SPLIT_REPLACE,
            target = %target,
            replacement = %replacement
        )
        .entered();

        let Some(root) = self.root() else {
            return Ok(EditOutcome::Unchanged);
        };

        match editor::replace(root, target, replacement)? {
            Some(tree) => Ok(self.commit(Some(tree))),
            None => Ok(EditOutcome::Unchanged),
        }
    }

    /// Sets the size of the branch directly holding `target`.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidSize` if `size` is not in `0..=100`.
    pub fn resize(&mut self, target: &PaneId, size: f64) -> Result<EditOutcome, SplitError> {
        let Some(root) = self.root() else {
            return Ok(EditOutcome::Unchanged);
        };

        match editor::resize(root, target, size)? {
            Some(tree) => Ok(self.commit(Some(tree))),
            None => Ok(EditOutcome::Unchanged),
        }
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Returns the pane next to `start` in `direction`, if any.
    pub fn navigate(&self, start: &PaneId, direction: Direction) -> Option<PaneId> {
        let _span = crate::trace_operation_debug!(
            span_names::SPLIT_NAVIGATE,
            start = %start,
            direction = %direction
        )
        .entered();

        navigator::navigate(self.root(), start, direction, &self.navigation)
    }

    /// Returns the unit-square rectangles of all panes.
    pub fn layout_rects(&self) -> Vec<SplitRect> {
        self.root().map(layout_rects).unwrap_or_default()
    }

    // ========================================================================
    // View Activation
    // ========================================================================

    /// Shows the split view, seeding it with the view's focused pane.
    ///
    /// Does nothing if the split view is already active or nothing is
    /// focused. Otherwise the root is set to the focused pane before the
    /// view is asked to open. Returns true if the view was opened.
    ///
    /// # Errors
    ///
    /// Returns the view's error if it fails to open. The root stays set.
    pub async fn activate<V>(&mut self, view: &V) -> ViewResult<bool>
    where
        V: LayoutView + ?Sized,
    {
        if view.is_active() {
            return Ok(false);
        }
        let Some(pane) = view.focused_pane() else {
            return Ok(false);
        };

        debug!(pane = %pane, "Activating split view");
        self.set_root(Some(SplitNode::leaf(pane)));
        view.open().await?;
        Ok(true)
    }

    /// Assigns the result of an edit.
    pub(crate) fn commit(&mut self, root: Option<SplitNode>) -> EditOutcome {
        debug!(
            panes = root.as_ref().map_or(0, SplitNode::pane_count),
            "Layout updated"
        );
        self.set_root(root);
        EditOutcome::Applied
    }
}
