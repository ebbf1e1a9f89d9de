//! Property-based tests for layout snapshots

use proptest::prelude::*;
use splitpane_core::persist::LayoutSnapshot;
use splitpane_core::split::SplitLayout;
use tempfile::TempDir;

use super::layout_strategy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// A saved layout reopens with the same tree and focus
    #[test]
    fn prop_snapshot_file_preserves_layout(layout in layout_strategy()) {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("layout.json");

        LayoutSnapshot::capture(&layout)
            .save_to_file(&path)
            .expect("snapshot is written");
        let reopened = SplitLayout::open(&path).expect("snapshot is readable");

        prop_assert_eq!(reopened.root(), layout.root());
        prop_assert_eq!(reopened.focused(), layout.focused());
    }

    /// Snapshots survive a JSON round trip through a generic value
    #[test]
    fn prop_snapshot_json_is_stable(layout in layout_strategy()) {
        let snapshot = LayoutSnapshot::capture(&layout);
        let json = snapshot.to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        let reparsed = LayoutSnapshot::from_json(&value.to_string()).expect("parsable");
        prop_assert_eq!(reparsed, snapshot);
    }
}
