//! Property-based tests for directional navigation

use proptest::prelude::*;
use splitpane_core::split::{DEFAULT_NAVIGATION_TOLERANCE, Direction, layout_rects};

use super::{MAX_PANES, layout_strategy};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Navigation never returns the start pane and only returns open panes
    #[test]
    fn prop_navigate_never_returns_start(
        layout in layout_strategy(),
        start_index in 0usize..MAX_PANES,
        direction in direction_strategy(),
    ) {
        let panes = layout.panes();
        let start = panes[start_index % panes.len()].clone();
        if let Some(next) = layout.navigate(&start, direction) {
            prop_assert_ne!(&next, &start);
            prop_assert!(layout.contains(&next));
        }
    }

    /// The returned pane lies on the requested side of the start pane
    #[test]
    fn prop_navigate_respects_direction(
        layout in layout_strategy(),
        start_index in 0usize..MAX_PANES,
        direction in direction_strategy(),
    ) {
        let panes = layout.panes();
        let start = panes[start_index % panes.len()].clone();
        let Some(next) = layout.navigate(&start, direction) else {
            return Ok(());
        };

        let rects = layout_rects(layout.root().expect("non-empty"));
        let from = rects.iter().find(|r| r.id == start).expect("start has a rect");
        let to = rects.iter().find(|r| r.id == next).expect("result has a rect");
        let tolerance = DEFAULT_NAVIGATION_TOLERANCE;
        let on_side = match direction {
            Direction::Up => to.bottom() <= from.y + tolerance,
            Direction::Down => to.y >= from.bottom() - tolerance,
            Direction::Left => to.right() <= from.x + tolerance,
            Direction::Right => to.x >= from.right() - tolerance,
        };
        prop_assert!(on_side);
    }

    /// A pane touching the layout edge has no neighbor past that edge
    #[test]
    fn prop_no_neighbor_past_outer_edge(
        layout in layout_strategy(),
        start_index in 0usize..MAX_PANES,
    ) {
        let panes = layout.panes();
        let start = panes[start_index % panes.len()].clone();
        let rects = layout_rects(layout.root().expect("non-empty"));
        let rect = rects.iter().find(|r| r.id == start).expect("start has a rect");

        if rect.x.abs() < 1e-9 {
            prop_assert_eq!(layout.navigate(&start, Direction::Left), None);
        }
        if (rect.bottom() - 1.0).abs() < 1e-9 {
            prop_assert_eq!(layout.navigate(&start, Direction::Down), None);
        }
    }
}
