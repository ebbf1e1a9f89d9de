//! Unit-square partition of a split tree
//!
//! The layout engine does not know pixel sizes. Rectangles are computed in
//! normalized coordinates where the root occupies `[0, 1] × [0, 1]`.

use serde::Serialize;

use super::tree::SplitNode;
use super::types::{PaneId, SplitAxis};

/// Normalized rectangle occupied by one pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitRect {
    /// Pane shown in this rectangle.
    pub id: PaneId,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Bounds without an owner, used while recursing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

const UNIT: Bounds = Bounds {
    x: 0.0,
    y: 0.0,
    width: 1.0,
    height: 1.0,
};

impl SplitRect {
    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Length of the overlap between `self` and `other` projected on `axis`.
    ///
    /// `Horizontal` projects on the x axis, `Vertical` on the y axis.
    /// Disjoint spans overlap by 0.
    #[must_use]
    pub fn overlap(&self, other: &Self, axis: SplitAxis) -> f64 {
        let (start, end, other_start, other_end) = match axis {
            SplitAxis::Horizontal => (self.x, self.right(), other.x, other.right()),
            SplitAxis::Vertical => (self.y, self.bottom(), other.y, other.bottom()),
        };
        (end.min(other_end) - start.max(other_start)).max(0.0)
    }
}

/// Partitions the unit square according to `node`.
///
/// Horizontal branches split the width at their size fraction (before on
/// the left), vertical branches split the height (before on top). Returns
/// one rectangle per pane in tree order.
#[must_use]
pub fn layout_rects(node: &SplitNode) -> Vec<SplitRect> {
    let mut rects = Vec::new();
    partition(node, UNIT, &mut rects);
    rects
}

fn partition(node: &SplitNode, bounds: Bounds, rects: &mut Vec<SplitRect>) {
    let branch = match node {
        SplitNode::Leaf(id) => {
            rects.push(SplitRect {
                id: id.clone(),
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
            });
            return;
        }
        SplitNode::Branch(branch) => branch,
    };

    let ratio = branch.ratio();
    let (first, second) = match branch.axis {
        SplitAxis::Horizontal => {
            let first_width = bounds.width * ratio;
            (
                Bounds {
                    width: first_width,
                    ..bounds
                },
                Bounds {
                    x: bounds.x + first_width,
                    width: bounds.width * (1.0 - ratio),
                    ..bounds
                },
            )
        }
        SplitAxis::Vertical => {
            let first_height = bounds.height * ratio;
            (
                Bounds {
                    height: first_height,
                    ..bounds
                },
                Bounds {
                    y: bounds.y + first_height,
                    height: bounds.height * (1.0 - ratio),
                    ..bounds
                },
            )
        }
    };

    partition(&branch.before, first, rects);
    partition(&branch.after, second, rects);
}
