//! Scenario tests for AvlTree.
//!
//! Each test drives the public API through a concrete sequence of operations
//! and checks the resulting contents, shape metrics and invariants.

use avltree::{AvlTree, InsertOutcome, TreeError};
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

#[fixture]
fn small_tree() -> AvlTree<i32, String> {
    [10, 20, 30]
        .into_iter()
        .map(|key| (key, format!("v{key}")))
        .collect()
}

fn keys_of<V>(tree: &AvlTree<i32, V>) -> Vec<i32> {
    tree.keys().copied().collect()
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: AvlTree<i32, String> = AvlTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.iter().count(), 0);
}

#[rstest]
fn test_default_creates_empty_tree() {
    let tree: AvlTree<i32, String> = AvlTree::default();
    assert!(tree.is_empty());
}

#[rstest]
fn test_singleton() {
    let tree = AvlTree::singleton(42, "answer".to_string());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.get(&42), Some(&"answer".to_string()));
}

// =============================================================================
// Rotation Scenarios
// =============================================================================

#[rstest]
#[case::single_left(&[10, 20, 30])]
#[case::single_right(&[30, 20, 10])]
#[case::left_right(&[30, 10, 20])]
#[case::right_left(&[10, 30, 20])]
fn test_three_inserts_balance_to_height_two(#[case] keys: &[i32]) {
    let tree: AvlTree<i32, ()> = keys.iter().map(|&key| (key, ())).collect();

    assert_eq!(tree.height(), 2);
    assert_eq!(keys_of(&tree), vec![10, 20, 30]);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[rstest]
fn test_remove_middle_of_three(mut small_tree: AvlTree<i32, String>) {
    assert_eq!(small_tree.remove(&20), Some("v20".to_string()));

    assert_eq!(keys_of(&small_tree), vec![10, 30]);
    assert_eq!(small_tree.len(), 2);
    assert_eq!(small_tree.height(), 2);
    assert_eq!(small_tree.check_invariants(), Ok(()));
}

#[rstest]
fn test_insert_same_key_twice_updates_value_only(mut small_tree: AvlTree<i32, String>) {
    let height = small_tree.height();
    let length = small_tree.len();

    assert_eq!(
        small_tree.insert(20, "second".to_string()),
        InsertOutcome::Updated {
            previous: "v20".to_string()
        }
    );

    assert_eq!(small_tree.len(), length);
    assert_eq!(small_tree.height(), height);
    assert_eq!(small_tree.get(&20), Some(&"second".to_string()));
}

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(7, 3)]
#[case(15, 4)]
#[case(1000, 10)]
fn test_sequential_inserts_produce_minimal_height(#[case] count: i32, #[case] height: usize) {
    let tree: AvlTree<i32, i32> = (0..count).map(|key| (key, key)).collect();
    assert_eq!(tree.height(), height);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[rstest]
fn test_descending_inserts_stay_balanced() {
    let mut tree = AvlTree::new();
    for key in (0..500).rev() {
        tree.insert(key, ());
        assert_eq!(tree.check_invariants(), Ok(()));
    }
    assert_eq!(tree.height(), 9);
}

// =============================================================================
// Removal Tests
// =============================================================================

#[rstest]
fn test_remove_absent_key_returns_none(mut small_tree: AvlTree<i32, String>) {
    let before = small_tree.clone();
    assert_eq!(small_tree.remove(&99), None);
    assert_eq!(small_tree, before);
}

#[rstest]
fn test_remove_from_empty_tree() {
    let mut tree: AvlTree<i32, i32> = AvlTree::new();
    assert_eq!(tree.remove(&1), None);
    assert_eq!(tree.remove_entry(&1), None);
}

#[rstest]
fn test_remove_all_in_insertion_order_empties_tree() {
    let keys: Vec<i32> = (0..300).map(|index| (index * 7919) % 300).collect();
    let mut tree: AvlTree<i32, i32> = keys.iter().map(|&key| (key, key)).collect();

    for key in &keys {
        assert_eq!(tree.remove(key), Some(*key));
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.first_key_value(), None);
}

#[rstest]
fn test_remove_with_borrowed_key() {
    let mut tree: AvlTree<String, i32> = [("a".to_string(), 1), ("b".to_string(), 2)]
        .into_iter()
        .collect();
    assert_eq!(tree.remove_entry("a"), Some(("a".to_string(), 1)));
    assert!(!tree.contains_key("a"));
}

#[rstest]
fn test_tree_is_reusable_after_emptying() {
    let mut tree: AvlTree<i32, i32> = (0..10).map(|key| (key, key)).collect();
    while tree.pop_first().is_some() {}
    tree.extend((100..110).map(|key| (key, key)));
    assert_eq!(keys_of(&tree), (100..110).collect::<Vec<_>>());
    assert_eq!(tree.check_invariants(), Ok(()));
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[rstest]
fn test_get_missing_key(small_tree: AvlTree<i32, String>) {
    assert_eq!(small_tree.get(&15), None);
    assert!(!small_tree.contains_key(&15));
}

#[rstest]
fn test_entry_view(small_tree: AvlTree<i32, String>) {
    let entry = small_tree.get_entry(&30).unwrap();
    assert_eq!(entry.key(), &30);
    assert_eq!(entry.value(), "v30");
    assert_eq!(entry.to_string(), "{30,v30}");
}

#[rstest]
fn test_get_mut_changes_value_in_place(mut small_tree: AvlTree<i32, String>) {
    small_tree.get_mut(&10).unwrap().push('!');
    assert_eq!(small_tree[&10], "v10!");
}

#[rstest]
fn test_replace_missing_key_is_error(mut small_tree: AvlTree<i32, String>) {
    assert_eq!(
        small_tree.replace(&11, "x".to_string()),
        Err(TreeError::KeyNotFound)
    );
    assert_eq!(small_tree.len(), 3);
}

#[rstest]
fn test_first_and_last(small_tree: AvlTree<i32, String>) {
    assert_eq!(small_tree.first_key_value().map(|(key, _)| *key), Some(10));
    assert_eq!(small_tree.last_key_value().map(|(key, _)| *key), Some(30));
}

// =============================================================================
// Traversal Tests
// =============================================================================

#[rstest]
fn test_iteration_is_ascending_after_mixed_operations() {
    let mut tree = AvlTree::new();
    for key in [50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43] {
        tree.insert(key, key * 2);
    }
    for key in [25, 75, 6] {
        tree.remove(&key);
    }

    let entries: Vec<(i32, i32)> = tree.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(
        entries,
        vec![
            (12, 24),
            (18, 36),
            (31, 62),
            (37, 74),
            (43, 86),
            (50, 100),
            (62, 124),
            (87, 174)
        ]
    );
    assert_eq!(tree.iter().len(), tree.len());
}

#[rstest]
fn test_display_and_debug(small_tree: AvlTree<i32, String>) {
    assert_eq!(format!("{small_tree}"), "{10: v10, 20: v20, 30: v30}");
    assert_eq!(
        format!("{small_tree:?}"),
        "{10: \"v10\", 20: \"v20\", 30: \"v30\"}"
    );
}

#[rstest]
fn test_into_iter_yields_owned_entries(small_tree: AvlTree<i32, String>) {
    let owned: Vec<(i32, String)> = small_tree.into_iter().collect();
    assert_eq!(
        owned,
        vec![
            (10, "v10".to_string()),
            (20, "v20".to_string()),
            (30, "v30".to_string())
        ]
    );
}
