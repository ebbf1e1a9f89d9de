//! Core type definitions for split layouts
//!
//! This module contains the identifier type and the small enums used
//! throughout the split tree: axes, navigation directions and path steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SplitError;

/// Reserved identifier for the drop area shown when the layout is empty.
///
/// It never names a real pane; [`PaneId::new`] rejects it.
pub const EMPTY_ROOT_ID: &str = "split-root-empty";

/// Separator between a pane id and a drop position in drag handles.
pub const POSITION_SEPARATOR: char = ':';

/// Prefix used for panes created by [`PaneId::generate`].
const GENERATED_PREFIX: &str = "split-";

/// Identifier of a pane (a leaf of the split tree).
///
/// The identifier is opaque to the layout engine; callers use it to name
/// whatever content the pane shows. It is validated on construction so that
/// it can round-trip through drag handles (`"id:position"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaneId(String);

impl PaneId {
    /// Creates a pane ID from a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidPaneId` if the identifier is empty,
    /// contains the reserved `:` separator, or equals [`EMPTY_ROOT_ID`].
    pub fn new(id: impl Into<String>) -> Result<Self, SplitError> {
        let id = id.into();
        if id.is_empty() || id.contains(POSITION_SEPARATOR) || id == EMPTY_ROOT_ID {
            return Err(SplitError::InvalidPaneId(id));
        }
        Ok(Self(id))
    }

    /// Creates a fresh, unique pane ID (`split-<uuid>`).
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{GENERATED_PREFIX}{}", Uuid::new_v4()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this ID was produced by [`PaneId::generate`].
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.0.starts_with(GENERATED_PREFIX)
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PaneId {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PaneId {
    type Error = SplitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PaneId {
    type Error = SplitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PaneId> for String {
    fn from(id: PaneId) -> Self {
        id.0
    }
}

impl AsRef<str> for PaneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Axis along which a branch divides its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitAxis {
    /// Split the width: `before` on the left, `after` on the right.
    Horizontal,
    /// Split the height: `before` on top, `after` below.
    Vertical,
}

impl fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for SplitAxis {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Ok(Self::Horizontal),
            "vertical" | "v" => Ok(Self::Vertical),
            _ => Err(SplitError::UnknownAxis(s.to_string())),
        }
    }
}

/// Direction of keyboard-style navigation between panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the top edge.
    Up,
    /// Towards the bottom edge.
    Down,
    /// Towards the left edge.
    Left,
    /// Towards the right edge.
    Right,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns true for `Up` and `Down`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Returns the axis a split must have to place panes in this direction.
    #[must_use]
    pub const fn axis(self) -> SplitAxis {
        if self.is_vertical() {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        }
    }

    /// Returns true if a pane placed in this direction comes first in its branch.
    #[must_use]
    pub const fn is_leading(self) -> bool {
        matches!(self, Self::Up | Self::Left)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(SplitError::UnknownDirection(s.to_string())),
        }
    }
}

/// One step of a root-to-leaf path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The `before` child (left or top).
    Before,
    /// The `after` child (right or bottom).
    After,
}

impl Side {
    /// Returns the sibling side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}
