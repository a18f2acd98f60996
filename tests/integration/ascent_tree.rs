//! Ascent over real directory trees

use super::test_utils::{levels_to, Tree};
use cascade_json::{ascend, Ascent, LevelOutcome};
use serde_json::json;

const FILE: &str = ".metadata.json";

#[test]
fn test_two_levels_with_disjoint_keys_are_unioned() {
    let tree = Tree::new();
    tree.write("root/project/feature", FILE, r#"{"feature":"on"}"#);
    tree.write("root/project", FILE, r#"{"project":"demo"}"#);

    let levels = levels_to(&tree.feature(), &tree.dir("root"));
    let result = ascend(&tree.feature(), FILE, levels).unwrap();
    assert_eq!(result, json!({"feature": "on", "project": "demo"}));
}

#[test]
fn test_nearer_file_dominates_on_collision() {
    let tree = Tree::new();
    tree.write("root/project/feature", FILE, r#"{"owner":"feature-team","tags":["f"]}"#);
    tree.write("root/project", FILE, r#"{"owner":"project-team","tags":["p"],"lang":"rust"}"#);
    tree.write("root", FILE, r#"{"owner":"org","license":"MIT"}"#);

    let levels = levels_to(&tree.feature(), &tree.dir("root"));
    let result = ascend(&tree.feature(), FILE, levels).unwrap();
    assert_eq!(
        result,
        json!({
            "owner": "feature-team",
            "tags": ["f", "p"],
            "lang": "rust",
            "license": "MIT"
        })
    );
}

#[test]
fn test_no_file_anywhere_yields_nothing() {
    let tree = Tree::new();
    let levels = levels_to(&tree.feature(), &tree.dir("root"));
    assert_eq!(ascend(&tree.feature(), FILE, levels), None);
}

#[test]
fn test_level_limit_excludes_distant_files() {
    let tree = Tree::new();
    tree.write("root/project/feature", FILE, r#"{"near":1}"#);
    tree.write("root", FILE, r#"{"far":1}"#);

    let result = ascend(&tree.feature(), FILE, 2).unwrap();
    assert_eq!(result, json!({"near": 1}));
}

#[test]
fn test_broken_and_mismatched_levels_are_reported() {
    let tree = Tree::new();
    tree.write("root/project/feature", FILE, r#"{"a":{"x":1}}"#);
    tree.write("root/project", FILE, r#"{"a":"scalar","b":2}"#);
    tree.write("root", FILE, "{ not json");

    let levels = levels_to(&tree.feature(), &tree.dir("root"));
    let outcome = Ascent::new(tree.feature(), FILE, levels).run();

    assert_eq!(outcome.value, Some(json!({"a": {"x": 1}})));
    assert_eq!(outcome.levels.len(), 3);
    assert_eq!(outcome.levels[0].outcome, LevelOutcome::Seeded);
    assert!(matches!(outcome.levels[1].outcome, LevelOutcome::MergeFailed(_)));
    assert!(matches!(outcome.levels[2].outcome, LevelOutcome::Unparsable(_)));
    assert_eq!(outcome.dropped_levels().count(), 2);
}

#[test]
fn test_directory_named_like_the_file_is_skipped() {
    let tree = Tree::new();
    std::fs::create_dir_all(tree.dir("root/project").join(FILE)).unwrap();
    tree.write("root", FILE, r#"{"ok":true}"#);

    let levels = levels_to(&tree.feature(), &tree.dir("root"));
    let outcome = Ascent::new(tree.feature(), FILE, levels).run();
    assert_eq!(outcome.value, Some(json!({"ok": true})));
    assert!(matches!(outcome.levels[1].outcome, LevelOutcome::Unreadable(_)));
}
