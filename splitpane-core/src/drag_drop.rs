//! Drag-and-drop model for split layout rearrangement
//!
//! This module translates the end of a drag gesture into a tree edit,
//! without any dependency on the UI toolkit that produced the gesture.
//! Drop targets encode their zone after a `:` (`"chat:left"`); the
//! reserved [`EMPTY_ROOT_ID`] target is the empty layout area.

use std::fmt;

use tracing::{debug, warn};

use crate::split::{
    BranchSpec, Direction, EMPTY_ROOT_ID, EditOutcome, LayoutStore, POSITION_SEPARATOR, PaneId,
    Side, SplitError, SplitLayout, SplitNode, editor,
};
use crate::tracing::span_names;

/// Zone of a pane a drag was released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropZone {
    /// Top edge: the source goes above the target.
    Up,
    /// Bottom edge: the source goes below the target.
    Down,
    /// Left edge: the source goes left of the target.
    Left,
    /// Right edge: the source goes right of the target.
    Right,
    /// Middle: the source takes the target's place.
    Center,
}

impl DropZone {
    /// Parses a zone tag.
    ///
    /// A missing or unrecognised tag is treated as [`DropZone::Right`], so a
    /// bare pane ID drops the source after the target.
    #[must_use]
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some("up") => Self::Up,
            Some("down") => Self::Down,
            Some("left") => Self::Left,
            Some("center") => Self::Center,
            Some("right") | None => Self::Right,
            Some(other) => {
                debug!(zone = other, "Unknown drop zone, using right");
                Self::Right
            }
        }
    }

    /// Returns the edge direction, or `None` for [`DropZone::Center`].
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Center => None,
        }
    }
}

impl fmt::Display for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        };
        f.write_str(tag)
    }
}

/// End of a drag gesture, as reported by the UI.
///
/// Both IDs are raw drag/drop identifiers: a bare pane ID or `"id:zone"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragEndEvent {
    /// Identifier of the dragged item.
    pub source: Option<String>,
    /// Identifier of the drop target.
    pub target: Option<String>,
}

impl DragEndEvent {
    /// Creates an event with both ends present.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
        }
    }
}

/// Decoded drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The empty layout area.
    EmptyRoot,
    /// A pane and the zone of it the drag was released over.
    Pane {
        /// Pane under the pointer.
        id: PaneId,
        /// Zone of that pane.
        zone: DropZone,
    },
}

/// Splits a raw drag identifier at the first separator.
#[must_use]
pub fn split_drag_id(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(POSITION_SEPARATOR) {
        Some((id, zone)) => (id, Some(zone)),
        None => (raw, None),
    }
}

/// Decodes a raw drop target identifier.
///
/// # Errors
///
/// Returns `SplitError::InvalidPaneId` if the ID part is not a valid pane ID.
pub fn decode_target(raw: &str) -> Result<DropTarget, SplitError> {
    let (id, zone) = split_drag_id(raw);
    if id == EMPTY_ROOT_ID {
        return Ok(DropTarget::EmptyRoot);
    }
    Ok(DropTarget::Pane {
        id: PaneId::new(id)?,
        zone: DropZone::parse(zone),
    })
}

/// Decodes a raw drag source identifier, ignoring any zone suffix.
///
/// # Errors
///
/// Returns `SplitError::InvalidPaneId` if the ID part is not a valid pane ID.
pub fn decode_source(raw: &str) -> Result<PaneId, SplitError> {
    PaneId::new(split_drag_id(raw).0)
}

/// Computes the tree produced by dropping `source` on `target`.
///
/// Returns `Ok(None)` when the drop changes nothing: the source is dropped
/// on itself, or the target pane is not in the layout. A source that is not
/// in the layout yet is simply added.
///
/// # Errors
///
/// Propagates internal-consistency errors from the tree edits.
pub fn plan_drop(
    root: Option<&SplitNode>,
    source: &PaneId,
    target: &DropTarget,
) -> Result<Option<SplitNode>, SplitError> {
    let (target_id, zone) = match target {
        DropTarget::EmptyRoot => return Ok(Some(SplitNode::leaf(source.clone()))),
        DropTarget::Pane { id, zone } => (id, *zone),
    };

    if target_id == source {
        return Ok(None);
    }
    let Some(root) = root.filter(|root| root.contains(target_id)) else {
        debug!(target = %target_id, "Drop target not in layout");
        return Ok(None);
    };

    // The target survives removing the source, so the tree stays non-empty.
    let detached = editor::remove(root, source)?.into_root(root);
    let Some(detached) = detached else {
        return Ok(None);
    };

    let Some(direction) = zone.direction() else {
        return Ok(Some(
            editor::replace(&detached, target_id, source)?.unwrap_or(detached),
        ));
    };

    let side = if direction.is_leading() {
        Side::Before
    } else {
        Side::After
    };
    let spec = BranchSpec::beside(direction.axis(), target_id.clone(), source.clone(), side);
    editor::insert(&detached, target_id, source, &spec)
}

impl<S: LayoutStore> SplitLayout<S> {
    /// Applies the end of a drag gesture to the layout.
    ///
    /// The source is detached from its current place, then dropped on the
    /// target: on the empty area it becomes the whole layout, on a pane's
    /// center it replaces that pane, and on an edge it is inserted next to
    /// the pane on that side. The result is assigned in one step.
    ///
    /// Missing ends, self-drops, malformed IDs and unknown targets leave
    /// the layout unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::PathMismatch` if the tree is internally
    /// inconsistent.
    pub fn handle_drag_end(&mut self, event: &DragEndEvent) -> Result<EditOutcome, SplitError> {
        let (Some(raw_source), Some(raw_target)) = (&event.source, &event.target) else {
            return Ok(EditOutcome::Unchanged);
        };
        if raw_source == raw_target {
            return Ok(EditOutcome::Unchanged);
        }

        let _span = crate::trace_operation_debug!(
            span_names::SPLIT_DRAG,
            source = %raw_source,
            target = %raw_target
        )
        .entered();

        let decoded = decode_source(raw_source).and_then(|source| {
            decode_target(raw_target).map(|target| (source, target))
        });
        let (source, target) = match decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(error = %err, "Ignoring drag with malformed identifier");
                return Ok(EditOutcome::Unchanged);
            }
        };

        match plan_drop(self.root(), &source, &target)? {
            Some(tree) => Ok(self.commit(Some(tree))),
            None => Ok(EditOutcome::Unchanged),
        }
    }
}
