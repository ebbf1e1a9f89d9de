//! Property-based tests for drag gestures

use std::collections::BTreeSet;

use proptest::prelude::*;
use splitpane_core::drag_drop::{DragEndEvent, DropZone};
use splitpane_core::split::{EMPTY_ROOT_ID, PaneId, SplitLayout};

use super::{MAX_PANES, layout_strategy, pane};

fn zone_strategy() -> impl Strategy<Value = DropZone> {
    prop_oneof![
        Just(DropZone::Up),
        Just(DropZone::Down),
        Just(DropZone::Left),
        Just(DropZone::Right),
        Just(DropZone::Center),
    ]
}

fn pane_set(layout: &SplitLayout) -> BTreeSet<PaneId> {
    layout.panes().into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Edge drops between open panes only rearrange them
    #[test]
    fn prop_edge_drop_preserves_panes(
        layout in layout_strategy(),
        source_index in 0usize..MAX_PANES,
        target_index in 0usize..MAX_PANES,
        zone in zone_strategy(),
    ) {
        prop_assume!(zone != DropZone::Center);
        let mut layout = layout;
        let panes = layout.panes();
        let source = panes[source_index % panes.len()].clone();
        let target = panes[target_index % panes.len()].clone();
        let before = pane_set(&layout);

        let event = DragEndEvent::new(source.as_str(), format!("{target}:{zone}"));
        layout.handle_drag_end(&event).unwrap();

        prop_assert_eq!(pane_set(&layout), before);
        prop_assert!(layout.root().expect("non-empty").validate().is_ok());
    }

    /// Center drops put the source where the target was
    #[test]
    fn prop_center_drop_replaces_target(
        layout in layout_strategy(),
        source_index in 0usize..MAX_PANES,
        target_index in 0usize..MAX_PANES,
    ) {
        let mut layout = layout;
        let panes = layout.panes();
        let source = panes[source_index % panes.len()].clone();
        let target = panes[target_index % panes.len()].clone();
        prop_assume!(source != target);

        let event = DragEndEvent::new(source.as_str(), format!("{target}:center"));
        prop_assert!(layout.handle_drag_end(&event).unwrap().is_applied());

        prop_assert!(layout.contains(&source));
        prop_assert!(!layout.contains(&target));
        prop_assert_eq!(layout.pane_count(), panes.len() - 1);
    }

    /// Drops onto the source itself never change the layout
    #[test]
    fn prop_self_drop_is_noop(
        layout in layout_strategy(),
        source_index in 0usize..MAX_PANES,
        zone in zone_strategy(),
    ) {
        let mut layout = layout;
        let panes = layout.panes();
        let source = panes[source_index % panes.len()].clone();
        let original = layout.root().cloned();

        let event = DragEndEvent::new(source.as_str(), format!("{source}:{zone}"));
        prop_assert!(!layout.handle_drag_end(&event).unwrap().is_applied());
        prop_assert_eq!(layout.root().cloned(), original);
    }

    /// Dropping on the empty area makes the source the whole layout
    #[test]
    fn prop_empty_root_drop(source_index in 0usize..MAX_PANES) {
        let mut layout = SplitLayout::new();
        let source = pane(source_index);
        layout
            .handle_drag_end(&DragEndEvent::new(source.as_str(), EMPTY_ROOT_ID))
            .unwrap();
        prop_assert_eq!(layout.panes(), vec![source.clone()]);
        prop_assert_eq!(layout.focused(), Some(&source));
    }
}
