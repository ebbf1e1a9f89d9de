//! Property-based tests for tree edits

use proptest::prelude::*;
use splitpane_core::split::{
    BranchSpec, EditOutcome, SplitError, SplitLayout, SplitNode, contains, layout_rects,
};

use super::{MAX_PANES, axis_strategy, layout_strategy, pane, side_strategy};

// ============================================================================
// Insert / Remove
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Inserting a pane next to a leaf and removing it again restores the tree
    #[test]
    fn prop_insert_then_remove_restores_tree(
        layout in layout_strategy(),
        target_index in 0usize..MAX_PANES,
        axis in axis_strategy(),
        side in side_strategy(),
    ) {
        let mut layout = layout;
        let original = layout.root().cloned();
        let panes = layout.panes();
        let target = panes[target_index % panes.len()].clone();
        let fresh = pane(MAX_PANES + 1);

        let spec = BranchSpec::beside(axis, target.clone(), fresh.clone(), side);
        prop_assert!(layout.insert(&target, &fresh, &spec).unwrap().is_applied());
        prop_assert!(layout.contains(&fresh));
        prop_assert!(layout.remove(&fresh).unwrap().is_applied());

        prop_assert_eq!(layout.root().cloned(), original);
    }

    /// Every generated pane is contained; IDs never inserted are not
    #[test]
    fn prop_contains_matches_leaves(layout in layout_strategy()) {
        let root = layout.root().expect("generated layouts are non-empty");
        for id in layout.panes() {
            prop_assert!(contains(root, &id));
        }
        prop_assert!(!contains(root, &pane(MAX_PANES + 1)));
        prop_assert_eq!(root.leaves().len(), layout.pane_count());
        prop_assert!(root.validate().is_ok());
    }

    /// Inserting a pane that is already open is rejected without changes
    #[test]
    fn prop_duplicate_insert_rejected(
        layout in layout_strategy(),
        target_index in 0usize..MAX_PANES,
        axis in axis_strategy(),
    ) {
        let mut layout = layout;
        let panes = layout.panes();
        let target = panes[target_index % panes.len()].clone();
        let original = layout.root().cloned();

        let spec = BranchSpec::new(axis, target.clone(), target.clone());
        let result = layout.insert(&target, &target, &spec);
        prop_assert_eq!(result, Err(SplitError::DuplicatePane(target)));
        prop_assert_eq!(layout.root().cloned(), original);
    }

    /// Removing every pane one by one ends with an empty layout
    #[test]
    fn prop_remove_all_empties_layout(layout in layout_strategy()) {
        let mut layout = layout;
        let panes = layout.panes();
        for (removed, id) in panes.iter().enumerate() {
            prop_assert!(layout.remove(id).unwrap().is_applied());
            prop_assert_eq!(layout.pane_count(), panes.len() - removed - 1);
        }
        prop_assert!(layout.is_empty());
    }
}

// ============================================================================
// Replace
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Replacing a pane with itself changes nothing
    #[test]
    fn prop_replace_identity_is_noop(
        layout in layout_strategy(),
        target_index in 0usize..MAX_PANES,
    ) {
        let mut layout = layout;
        let panes = layout.panes();
        let target = panes[target_index % panes.len()].clone();
        let original = layout.root().cloned();

        prop_assert_eq!(layout.replace(&target, &target).unwrap(), EditOutcome::Unchanged);
        prop_assert_eq!(layout.root().cloned(), original);
    }

    /// Replacing a pane keeps the shape and pane order
    #[test]
    fn prop_replace_keeps_shape(
        layout in layout_strategy(),
        target_index in 0usize..MAX_PANES,
    ) {
        let mut layout = layout;
        let panes = layout.panes();
        let position = target_index % panes.len();
        let target = panes[position].clone();
        let fresh = pane(MAX_PANES + 1);
        let depth = layout.root().map(SplitNode::depth);

        layout.replace(&target, &fresh).unwrap();

        let mut expected = panes;
        expected[position] = fresh;
        prop_assert_eq!(layout.panes(), expected);
        prop_assert_eq!(layout.root().map(SplitNode::depth), depth);
    }
}

// ============================================================================
// Geometry
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Pane rectangles tile the unit square
    #[test]
    fn prop_rects_tile_unit_square(layout in layout_strategy()) {
        let root = layout.root().expect("generated layouts are non-empty");
        let rects = layout_rects(root);
        prop_assert_eq!(rects.len(), layout.pane_count());

        let area: f64 = rects.iter().map(|r| r.width * r.height).sum();
        prop_assert!((area - 1.0).abs() < 1e-9);
        for rect in &rects {
            prop_assert!(rect.x >= -1e-9 && rect.right() <= 1.0 + 1e-9);
            prop_assert!(rect.y >= -1e-9 && rect.bottom() <= 1.0 + 1e-9);
        }
    }

    /// The first insert into an empty layout ignores the branch shape
    #[test]
    fn prop_first_insert_bootstraps_target(axis in axis_strategy()) {
        let mut layout = SplitLayout::new();
        let spec = BranchSpec::new(axis, pane(0), pane(1));
        layout.insert(&pane(0), &pane(1), &spec).unwrap();
        prop_assert_eq!(layout.root(), Some(&SplitNode::leaf(pane(0))));
    }
}
