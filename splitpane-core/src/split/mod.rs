//! Split layout engine
//!
//! This module implements a binary split tree of panes. Each leaf is a pane
//! ID; each branch divides its area along one axis at a percentage. Every
//! edit builds a new tree that shares untouched subtrees with the old one.
//!
//! # Module Structure
//!
//! - `types` - Identifiers and enums (`PaneId`, `SplitAxis`, `Direction`, `Side`)
//! - `tree` - Tree structure (`SplitNode`, `SplitBranch`, `apply_at_path`)
//! - `editor` - Pure tree edits (`insert`, `remove`, `replace`, `resize`)
//! - `geometry` - Unit-square partition (`SplitRect`, `layout_rects`)
//! - `navigator` - Directional navigation (`navigate`)
//! - `store` - Root storage contract (`LayoutStore`, `MemoryLayoutStore`)
//! - `model` - Layout facade with focus tracking (`SplitLayout`)
//! - `error` - Error types (`SplitError`, `EditOutcome`)
//!
//! # Example
//!
//! ```
//! use splitpane_core::split::{BranchSpec, PaneId, SplitAxis, SplitLayout, SplitNode};
//!
//! let a = PaneId::new("a").unwrap();
//! let b = PaneId::new("b").unwrap();
//!
//! let mut layout = SplitLayout::new();
//! layout.set_root(Some(SplitNode::leaf(a.clone())));
//!
//! let spec = BranchSpec::new(SplitAxis::Vertical, a.clone(), b.clone());
//! assert!(layout.insert(&a, &b, &spec).unwrap().is_applied());
//! assert_eq!(layout.panes(), vec![a, b]);
//! ```

pub mod editor;
mod error;
mod geometry;
mod model;
mod navigator;
mod store;
mod tree;
mod types;

pub use editor::{BranchSpec, RemoveResult};
pub use error::{EditOutcome, SplitError};
pub use geometry::{SplitRect, layout_rects};
pub use model::SplitLayout;
pub use navigator::{
    DEFAULT_NAVIGATION_TOLERANCE, NavigationConfig, alignment_score, gap_distance, is_adjacent,
    navigate,
};
pub use store::{LayoutStore, MemoryLayoutStore};
pub use tree::{
    DEFAULT_SPLIT_SIZE, MAX_SPLIT_SIZE, MIN_SPLIT_SIZE, SplitBranch, SplitNode, SplitPath,
    apply_at_path, check_size, contains,
};
pub use types::{Direction, EMPTY_ROOT_ID, POSITION_SEPARATOR, PaneId, Side, SplitAxis};
