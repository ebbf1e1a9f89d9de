//! splitpane Core Library
//!
//! This crate provides a split-pane layout engine: a binary tree of named
//! panes with path-based edits, directional navigation over the unit-square
//! partition, and translation of drag gestures into tree edits.
//!
//! # Crate Structure
//!
//! - [`split`] - Split tree, editor, navigator, and the `SplitLayout` facade
//! - [`drag_drop`] - Drag gesture decoding and application
//! - [`persist`] - JSON layout snapshots and a file-backed store
//! - [`view`] - Collaborator trait for the view that shows the layout
//! - [`config`] - TOML settings
//! - [`tracing`] - Logging setup and span names

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod drag_drop;
pub mod persist;
pub mod split;
pub mod tracing;
pub mod view;

pub use config::{Settings, SettingsError, SettingsManager};
pub use drag_drop::{DragEndEvent, DropTarget, DropZone};
pub use persist::{FileLayoutStore, LayoutSnapshot, PersistError, SNAPSHOT_VERSION};
pub use split::{
    BranchSpec, Direction, EMPTY_ROOT_ID, EditOutcome, LayoutStore, MemoryLayoutStore,
    NavigationConfig, PaneId, Side, SplitAxis, SplitError, SplitLayout, SplitNode, SplitRect,
    contains,
};
pub use tracing::{TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing};
pub use view::{LayoutView, ViewError, ViewResult};
