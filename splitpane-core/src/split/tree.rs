//! Split tree structure
//!
//! This module provides the binary tree used to represent split layouts.
//! Each node is either a leaf naming a pane or a branch dividing its
//! space between two children.
//!
//! # Tree Structure
//!
//! ```text
//! Branch(horizontal, 50)
//! ├── Leaf("chat")
//! └── Branch(vertical, 30)
//!     ├── Leaf("viewers")
//!     └── Leaf("events")
//! ```
//!
//! Children are held behind `Arc`, so a tree value is cheap to clone and an
//! edit only rebuilds the branches on the path to the edited node. Every
//! other subtree is shared with the previous tree.
//!
//! # Serialized Form
//!
//! A leaf serializes as its bare identifier and a branch as an object:
//!
//! ```json
//! { "axis": "horizontal", "size": 50, "before": "chat", "after": "events" }
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::SplitError;
use super::types::{PaneId, Side, SplitAxis};

/// Default split size (50% of available space).
pub const DEFAULT_SPLIT_SIZE: f64 = 50.0;

/// Minimum valid split size.
pub const MIN_SPLIT_SIZE: f64 = 0.0;

/// Maximum valid split size.
pub const MAX_SPLIT_SIZE: f64 = 100.0;

/// Sequence of steps from the root to a node.
pub type SplitPath = Vec<Side>;

/// A node in the split tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SplitNode {
    /// A pane.
    Leaf(PaneId),
    /// A binary split.
    Branch(SplitBranch),
}

/// A branch dividing its space between two children.
///
/// `size` is the percentage of the primary dimension (width for horizontal,
/// height for vertical) given to `before`; `after` gets the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitBranch {
    /// Split axis.
    pub axis: SplitAxis,
    /// Share of `before` in percent (0 to 100, default 50).
    #[serde(default = "default_size")]
    pub size: f64,
    /// Left or top child.
    pub before: Arc<SplitNode>,
    /// Right or bottom child.
    pub after: Arc<SplitNode>,
}

const fn default_size() -> f64 {
    DEFAULT_SPLIT_SIZE
}

impl SplitBranch {
    /// Creates a branch with the default size (50).
    #[must_use]
    pub fn new(axis: SplitAxis, before: SplitNode, after: SplitNode) -> Self {
        Self {
            axis,
            size: DEFAULT_SPLIT_SIZE,
            before: Arc::new(before),
            after: Arc::new(after),
        }
    }

    /// Creates a branch with a custom size.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidSize` if `size` is not in `0..=100`.
    pub fn with_size(
        axis: SplitAxis,
        before: SplitNode,
        after: SplitNode,
        size: f64,
    ) -> Result<Self, SplitError> {
        check_size(size)?;
        Ok(Self {
            size,
            ..Self::new(axis, before, after)
        })
    }

    /// Returns the child on the given side.
    #[must_use]
    pub fn child(&self, side: Side) -> &Arc<SplitNode> {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    /// Returns a copy of this branch with one child replaced.
    ///
    /// The other child is shared, not copied.
    #[must_use]
    pub fn with_child(&self, side: Side, child: Arc<SplitNode>) -> Self {
        let mut branch = self.clone();
        match side {
            Side::Before => branch.before = child,
            Side::After => branch.after = child,
        }
        branch
    }

    /// Returns the fraction (0.0 to 1.0) of space given to `before`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.size / 100.0
    }
}

/// Checks that a split size lies in `0..=100`.
///
/// # Errors
///
/// Returns `SplitError::InvalidSize` for out-of-range or NaN sizes.
pub fn check_size(size: f64) -> Result<(), SplitError> {
    if (MIN_SPLIT_SIZE..=MAX_SPLIT_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(SplitError::InvalidSize(size))
    }
}

impl SplitNode {
    /// Creates a leaf node.
    #[must_use]
    pub const fn leaf(id: PaneId) -> Self {
        Self::Leaf(id)
    }

    /// Creates a branch node with the default size.
    #[must_use]
    pub fn branch(axis: SplitAxis, before: Self, after: Self) -> Self {
        Self::Branch(SplitBranch::new(axis, before, after))
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the pane ID if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&PaneId> {
        match self {
            Self::Leaf(id) => Some(id),
            Self::Branch(_) => None,
        }
    }

    /// Returns the branch if this is a branch node.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&SplitBranch> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(branch) => Some(branch),
        }
    }

    // ========================================================================
    // Tree Queries
    // ========================================================================

    /// Returns true if the tree contains a leaf with the given ID.
    #[must_use]
    pub fn contains(&self, id: &PaneId) -> bool {
        match self {
            Self::Leaf(leaf) => leaf == id,
            Self::Branch(branch) => branch.before.contains(id) || branch.after.contains(id),
        }
    }

    /// Returns all pane IDs in tree order (depth-first, before-to-after).
    #[must_use]
    pub fn leaves(&self) -> Vec<&PaneId> {
        let mut ids = Vec::new();
        self.collect_leaves(&mut ids);
        ids
    }

    fn collect_leaves<'a>(&'a self, ids: &mut Vec<&'a PaneId>) {
        match self {
            Self::Leaf(id) => ids.push(id),
            Self::Branch(branch) => {
                branch.before.collect_leaves(ids);
                branch.after.collect_leaves(ids);
            }
        }
    }

    /// Returns the number of panes in the tree.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => branch.before.pane_count() + branch.after.pane_count(),
        }
    }

    /// Returns the depth of the tree.
    ///
    /// A single leaf has depth 0. Each level of splits adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(branch) => 1 + branch.before.depth().max(branch.after.depth()),
        }
    }

    /// Finds the path from this node to the leaf with the given ID.
    ///
    /// The `before` subtree is searched first, so the first match wins.
    #[must_use]
    pub fn find_path(&self, target: &PaneId) -> Option<SplitPath> {
        let mut path = Vec::new();
        self.find_path_into(target, &mut path).then_some(path)
    }

    fn find_path_into(&self, target: &PaneId, path: &mut SplitPath) -> bool {
        match self {
            Self::Leaf(id) => id == target,
            Self::Branch(branch) => {
                for side in [Side::Before, Side::After] {
                    path.push(side);
                    if branch.child(side).find_path_into(target, path) {
                        return true;
                    }
                    path.pop();
                }
                false
            }
        }
    }

    /// Returns the node reached by following `path`, if any.
    #[must_use]
    pub fn node_at(&self, path: &[Side]) -> Option<&Self> {
        match path.split_first() {
            None => Some(self),
            Some((&side, rest)) => self.as_branch()?.child(side).node_at(rest),
        }
    }

    /// Checks the tree invariants that cannot be enforced by the types.
    ///
    /// # Errors
    ///
    /// - `SplitError::DuplicatePane` if a pane ID occurs more than once
    /// - `SplitError::InvalidSize` if a branch size is outside `0..=100`
    pub fn validate(&self) -> Result<(), SplitError> {
        let mut seen = HashSet::new();
        self.validate_into(&mut seen)
    }

    fn validate_into<'a>(&'a self, seen: &mut HashSet<&'a PaneId>) -> Result<(), SplitError> {
        match self {
            Self::Leaf(id) => {
                if seen.insert(id) {
                    Ok(())
                } else {
                    Err(SplitError::DuplicatePane(id.clone()))
                }
            }
            Self::Branch(branch) => {
                check_size(branch.size)?;
                branch.before.validate_into(seen)?;
                branch.after.validate_into(seen)
            }
        }
    }
}

impl From<PaneId> for SplitNode {
    fn from(id: PaneId) -> Self {
        Self::Leaf(id)
    }
}

impl From<SplitBranch> for SplitNode {
    fn from(branch: SplitBranch) -> Self {
        Self::Branch(branch)
    }
}

/// Returns true if `node` contains a leaf with the given ID.
#[must_use]
pub fn contains(node: &SplitNode, id: &PaneId) -> bool {
    node.contains(id)
}

/// Rebuilds `node` with `updater` applied to the node at `path`.
///
/// Each branch on the path is copied with the indicated child replaced;
/// the sibling subtrees are shared with `node`. With an empty path the
/// updater is applied to `node` itself.
///
/// # Errors
///
/// Returns `SplitError::PathMismatch` if the path runs past a leaf, which
/// means the path was computed against a different tree. Errors from the
/// updater are propagated unchanged.
pub fn apply_at_path<F>(node: &SplitNode, path: &[Side], updater: F) -> Result<SplitNode, SplitError>
where
    F: FnOnce(&SplitNode) -> Result<SplitNode, SplitError>,
{
    let Some((&side, rest)) = path.split_first() else {
        return updater(node);
    };

    match node {
        SplitNode::Leaf(_) => Err(SplitError::PathMismatch {
            remaining: path.len(),
        }),
        SplitNode::Branch(branch) => {
            let child = apply_at_path(branch.child(side), rest, updater)?;
            Ok(SplitNode::Branch(branch.with_child(side, Arc::new(child))))
        }
    }
}
