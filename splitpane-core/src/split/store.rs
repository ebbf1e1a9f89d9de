//! Storage contract for the layout root
//!
//! The layout engine never persists anything itself. It reads and writes the
//! current root through a [`LayoutStore`], which an application backs with
//! whatever state container it already has.

use super::tree::SplitNode;

/// Get/set access to the persisted layout root.
pub trait LayoutStore {
    /// Returns the current root, or `None` when no pane is open.
    fn get(&self) -> Option<&SplitNode>;

    /// Replaces the current root.
    fn set(&mut self, root: Option<SplitNode>);
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryLayoutStore {
    root: Option<SplitNode>,
}

impl MemoryLayoutStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a store holding `root`.
    #[must_use]
    pub const fn with_root(root: SplitNode) -> Self {
        Self { root: Some(root) }
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn get(&self) -> Option<&SplitNode> {
        self.root.as_ref()
    }

    fn set(&mut self, root: Option<SplitNode>) {
        self.root = root;
    }
}

impl<S: LayoutStore + ?Sized> LayoutStore for Box<S> {
    fn get(&self) -> Option<&SplitNode> {
        (**self).get()
    }

    fn set(&mut self, root: Option<SplitNode>) {
        (**self).set(root);
    }
}
