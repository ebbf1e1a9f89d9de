//! Path-based tree edits
//!
//! Every edit locates its target with [`SplitNode::find_path`] and rebuilds
//! the tree with [`apply_at_path`]. The functions are pure: they borrow the
//! current tree and return a new one, leaving the caller to assign it.
//! A `None` result means the target was not found and nothing changed.

use tracing::debug;

use super::error::SplitError;
use super::tree::{SplitBranch, SplitNode, apply_at_path, check_size};
use super::types::{PaneId, Side, SplitAxis};

/// Shape of the branch created when a pane is inserted next to a leaf.
///
/// `before` and `after` must be the target and the inserted pane, in the
/// order they should appear. `size` is accepted for completeness but new
/// branches always start at 50.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchSpec {
    /// Axis of the new branch.
    pub axis: SplitAxis,
    /// Left or top pane.
    pub before: PaneId,
    /// Right or bottom pane.
    pub after: PaneId,
    /// Requested size; ignored on insertion.
    pub size: Option<f64>,
}

impl BranchSpec {
    /// Creates a branch spec.
    #[must_use]
    pub const fn new(axis: SplitAxis, before: PaneId, after: PaneId) -> Self {
        Self {
            axis,
            before,
            after,
            size: None,
        }
    }

    /// Places `inserted` on the given side of `target`.
    #[must_use]
    pub fn beside(axis: SplitAxis, target: PaneId, inserted: PaneId, side: Side) -> Self {
        match side {
            Side::Before => Self::new(axis, inserted, target),
            Side::After => Self::new(axis, target, inserted),
        }
    }

    /// Sets the requested size.
    #[must_use]
    pub const fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    fn holds_exactly(&self, target: &PaneId, inserted: &PaneId) -> bool {
        (self.before == *target && self.after == *inserted)
            || (self.before == *inserted && self.after == *target)
    }
}

/// Result of removing a pane from a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveResult {
    /// The pane was not found in the tree.
    NotFound,
    /// The pane was the whole tree; the layout is now empty.
    RemovedRoot,
    /// The pane was removed and its sibling took its parent's place.
    Removed(SplitNode),
}

impl RemoveResult {
    /// Returns true if the pane was found and removed.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_) | Self::RemovedRoot)
    }

    /// Returns the tree left after the removal, given the original tree.
    ///
    /// `NotFound` yields the original tree unchanged.
    #[must_use]
    pub fn into_root(self, original: &SplitNode) -> Option<SplitNode> {
        match self {
            Self::NotFound => Some(original.clone()),
            Self::RemovedRoot => None,
            Self::Removed(node) => Some(node),
        }
    }
}

/// Builds the node that replaces `node` when `inserted` is placed next to it.
///
/// A leaf becomes the branch described by `spec`. A branch (a composite
/// region) is demoted to `before` of a new branch with `inserted` as
/// `after`. Either way the new branch has size 50.
#[must_use]
pub fn split_node(node: &SplitNode, inserted: &PaneId, spec: &BranchSpec) -> SplitNode {
    match node {
        SplitNode::Leaf(_) => SplitNode::branch(
            spec.axis,
            SplitNode::leaf(spec.before.clone()),
            SplitNode::leaf(spec.after.clone()),
        ),
        SplitNode::Branch(_) => {
            SplitNode::branch(spec.axis, node.clone(), SplitNode::leaf(inserted.clone()))
        }
    }
}

/// Inserts `inserted` next to the leaf `target`.
///
/// # Errors
///
/// - `SplitError::DuplicatePane` if `inserted` is already in the tree
/// - `SplitError::InvalidBranch` if `spec` does not hold exactly `target`
///   and `inserted`
pub fn insert(
    root: &SplitNode,
    target: &PaneId,
    inserted: &PaneId,
    spec: &BranchSpec,
) -> Result<Option<SplitNode>, SplitError> {
    if root.contains(inserted) {
        return Err(SplitError::DuplicatePane(inserted.clone()));
    }
    if !spec.holds_exactly(target, inserted) {
        return Err(SplitError::InvalidBranch {
            target: target.clone(),
            inserted: inserted.clone(),
        });
    }
    if let Some(size) = spec.size {
        debug!(%target, requested = size, "Ignoring requested size for new split");
    }

    let Some(path) = root.find_path(target) else {
        debug!(%target, "Insert target not in layout");
        return Ok(None);
    };

    apply_at_path(root, &path, |node| Ok(split_node(node, inserted, spec))).map(Some)
}

/// Inserts `inserted` next to the node at `path`, which may be a branch.
///
/// # Errors
///
/// - `SplitError::DuplicatePane` if `inserted` is already in the tree
/// - `SplitError::PathMismatch` if `path` does not exist in `root`
pub fn insert_at_path(
    root: &SplitNode,
    path: &[Side],
    inserted: &PaneId,
    axis: SplitAxis,
) -> Result<SplitNode, SplitError> {
    if root.contains(inserted) {
        return Err(SplitError::DuplicatePane(inserted.clone()));
    }

    apply_at_path(root, path, |node| {
        let spec = match node {
            SplitNode::Leaf(id) => BranchSpec::new(axis, id.clone(), inserted.clone()),
            // Only the axis matters when a composite region is demoted.
            SplitNode::Branch(_) => BranchSpec::new(axis, inserted.clone(), inserted.clone()),
        };
        Ok(split_node(node, inserted, &spec))
    })
}

/// Removes the leaf `target`, promoting its sibling into the parent's place.
///
/// # Errors
///
/// Returns `SplitError::PathMismatch` if the tree changed shape between
/// locating the leaf and rebuilding it.
pub fn remove(root: &SplitNode, target: &PaneId) -> Result<RemoveResult, SplitError> {
    let Some(path) = root.find_path(target) else {
        return Ok(RemoveResult::NotFound);
    };

    let Some((&side, parent)) = path.split_last() else {
        return Ok(RemoveResult::RemovedRoot);
    };

    apply_at_path(root, parent, |node| match node {
        SplitNode::Branch(branch) => Ok(SplitNode::clone(branch.child(side.other()))),
        SplitNode::Leaf(_) => Err(SplitError::PathMismatch { remaining: 1 }),
    })
    .map(RemoveResult::Removed)
}

/// Renames the leaf `target` to `replacement`, keeping the tree shape.
///
/// Returns `Ok(None)` when `target == replacement` or `target` is absent.
///
/// # Errors
///
/// Returns `SplitError::DuplicatePane` if `replacement` already names
/// another leaf.
pub fn replace(
    root: &SplitNode,
    target: &PaneId,
    replacement: &PaneId,
) -> Result<Option<SplitNode>, SplitError> {
    if target == replacement {
        return Ok(None);
    }
    let Some(path) = root.find_path(target) else {
        debug!(%target, "Replace target not in layout");
        return Ok(None);
    };
    if root.contains(replacement) {
        return Err(SplitError::DuplicatePane(replacement.clone()));
    }

    apply_at_path(root, &path, |_| Ok(SplitNode::leaf(replacement.clone()))).map(Some)
}

/// Sets the size of the branch that directly holds the leaf `target`.
///
/// `size` is the share of the branch's `before` child, whichever side
/// `target` is on. Returns `Ok(None)` when `target` is absent or is the
/// whole tree.
///
/// # Errors
///
/// Returns `SplitError::InvalidSize` if `size` is not in `0..=100`.
pub fn resize(root: &SplitNode, target: &PaneId, size: f64) -> Result<Option<SplitNode>, SplitError> {
    check_size(size)?;

    let Some(path) = root.find_path(target) else {
        return Ok(None);
    };
    let Some((_, parent)) = path.split_last() else {
        return Ok(None);
    };

    apply_at_path(root, parent, |node| match node {
        SplitNode::Branch(branch) => Ok(SplitNode::Branch(SplitBranch {
            size,
            ..branch.clone()
        })),
        SplitNode::Leaf(_) => Err(SplitError::PathMismatch { remaining: 1 }),
    })
    .map(Some)
}
