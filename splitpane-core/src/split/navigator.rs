//! Directional navigation between panes
//!
//! Navigation recomputes the pane rectangles for every query and picks the
//! nearest pane lying entirely on the requested side of the start pane.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::SplitError;
use super::geometry::{SplitRect, layout_rects};
use super::tree::SplitNode;
use super::types::{Direction, PaneId, SplitAxis};

/// Default tolerance for treating nearly equal edges as touching.
pub const DEFAULT_NAVIGATION_TOLERANCE: f64 = 0.001;

/// Configuration for directional navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Slack applied to edge comparisons and distance ties.
    ///
    /// Repeated fractional splits drift by a few ULPs; the tolerance keeps
    /// panes that share an edge adjacent.
    pub tolerance: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_NAVIGATION_TOLERANCE,
        }
    }
}

impl NavigationConfig {
    /// Checks that the tolerance is finite and non-negative.
    ///
    /// A negative or NaN tolerance makes every adjacency test fail.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::InvalidTolerance` otherwise.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            Ok(())
        } else {
            Err(SplitError::InvalidTolerance(self.tolerance))
        }
    }
}

/// Finds the pane next to `start` in `direction`.
///
/// Returns `None` if the tree is empty, is the single pane `start`, does not
/// contain `start`, or has no pane on that side. The result is never `start`.
#[must_use]
pub fn navigate(
    root: Option<&SplitNode>,
    start: &PaneId,
    direction: Direction,
    config: &NavigationConfig,
) -> Option<PaneId> {
    let root = root?;
    if root.as_leaf() == Some(start) {
        return None;
    }

    let rects = layout_rects(root);
    let current = rects.iter().find(|r| r.id == *start)?;
    let tolerance = config.tolerance;

    let candidates: Vec<(&SplitRect, f64)> = rects
        .iter()
        .filter(|r| r.id != *start && is_adjacent(current, r, direction, tolerance))
        .map(|r| (r, gap_distance(current, r, direction)))
        .collect();

    let nearest = candidates
        .iter()
        .map(|&(_, gap)| gap)
        .min_by(f64::total_cmp)?;

    // Gaps within tolerance of the nearest count as ties; the pane sharing
    // the longest edge with `current` wins, then tree order.
    let best = candidates
        .iter()
        .filter(|&&(_, gap)| gap - nearest <= tolerance)
        .map(|&(rect, gap)| (rect, gap, alignment_score(current, rect, direction)))
        .inspect(|(rect, gap, score)| {
            trace!(start = %start, candidate = %rect.id, gap, score, "Navigation candidate");
        })
        .min_by(|a, b| b.2.total_cmp(&a.2))
        .map(|(rect, _, _)| rect.id.clone());

    trace!(start = %start, %direction, result = ?best, "Navigation resolved");
    best
}

/// Returns true if `candidate` lies on the `direction` side of `current`.
#[must_use]
pub fn is_adjacent(
    current: &SplitRect,
    candidate: &SplitRect,
    direction: Direction,
    tolerance: f64,
) -> bool {
    match direction {
        Direction::Up => candidate.bottom() <= current.y + tolerance,
        Direction::Down => candidate.y >= current.bottom() - tolerance,
        Direction::Left => candidate.right() <= current.x + tolerance,
        Direction::Right => candidate.x >= current.right() - tolerance,
    }
}

/// Separation between the facing edges of `from` and `to`.
#[must_use]
pub fn gap_distance(from: &SplitRect, to: &SplitRect, direction: Direction) -> f64 {
    match direction {
        Direction::Up => from.y - to.bottom(),
        Direction::Down => to.y - from.bottom(),
        Direction::Left => from.x - to.right(),
        Direction::Right => to.x - from.right(),
    }
}

/// Overlap of `from` and `to` across the direction of travel.
///
/// Vertical moves compare horizontal spans and vice versa.
#[must_use]
pub fn alignment_score(from: &SplitRect, to: &SplitRect, direction: Direction) -> f64 {
    let axis = if direction.is_vertical() {
        SplitAxis::Horizontal
    } else {
        SplitAxis::Vertical
    };
    from.overlap(to, axis)
}
