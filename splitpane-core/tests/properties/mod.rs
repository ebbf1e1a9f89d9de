//! Property test modules and shared strategies

mod drag_drop_tests;
mod editor_tests;
mod navigation_tests;
mod persist_tests;

use proptest::prelude::*;
use splitpane_core::split::{BranchSpec, PaneId, Side, SplitAxis, SplitLayout};

/// Upper bound on panes generated by [`layout_strategy`]
pub const MAX_PANES: usize = 8;

/// Returns the pane ID used for the `index`-th generated pane.
pub fn pane(index: usize) -> PaneId {
    PaneId::new(format!("p{index}")).expect("generated pane IDs are valid")
}

/// One generated insertion: which existing pane to split, and how
#[derive(Debug, Clone, Copy)]
pub struct InsertStep {
    /// Index into the current pane list, taken modulo its length
    pub target: usize,
    /// Axis of the new branch
    pub axis: SplitAxis,
    /// Side the new pane goes on
    pub side: Side,
}

/// Strategy for generating split axes
pub fn axis_strategy() -> impl Strategy<Value = SplitAxis> {
    prop_oneof![Just(SplitAxis::Horizontal), Just(SplitAxis::Vertical)]
}

/// Strategy for generating sides
pub fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Before), Just(Side::After)]
}

/// Strategy for generating insertion steps
pub fn insert_steps_strategy() -> impl Strategy<Value = Vec<InsertStep>> {
    proptest::collection::vec(
        (0usize..MAX_PANES, axis_strategy(), side_strategy()).prop_map(|(target, axis, side)| {
            InsertStep { target, axis, side }
        }),
        0..MAX_PANES,
    )
}

/// Builds a layout holding `p0` plus one pane per step.
pub fn build_layout(steps: &[InsertStep]) -> SplitLayout {
    let mut layout = SplitLayout::new();
    let first = pane(0);
    let bootstrap = BranchSpec::new(SplitAxis::Horizontal, first.clone(), pane(1));
    layout
        .insert(&first, &pane(1), &bootstrap)
        .expect("bootstrap insert succeeds");

    for (offset, step) in steps.iter().enumerate() {
        let panes = layout.panes();
        let target = panes[step.target % panes.len()].clone();
        let inserted = pane(offset + 1);
        let spec = BranchSpec::beside(step.axis, target.clone(), inserted.clone(), step.side);
        layout
            .insert(&target, &inserted, &spec)
            .expect("insert of a fresh pane succeeds");
    }
    layout
}

/// Strategy for generating populated layouts
pub fn layout_strategy() -> impl Strategy<Value = SplitLayout> {
    insert_steps_strategy().prop_map(|steps| build_layout(&steps))
}
