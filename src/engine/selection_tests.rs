//! Tests for the selection coordinator.

use super::*;

fn keys(raw: &[&str]) -> KeySet {
    raw.iter().map(|s| ItemKey::from(*s)).collect()
}

fn items() -> Vec<Item> {
    vec![
        Item::new("1", "One"),
        Item::new("2", "Two"),
        Item::new("3", "Three").disabled(true),
    ]
}

// ===== toggle =====

#[test]
fn toggle_adds_then_removes() {
    let items = items();
    let once = toggle(&KeySet::new(), &items[0]);
    assert_eq!(once, keys(&["1"]));

    let twice = toggle(&once, &items[0]);
    assert!(twice.is_empty());
}

#[test]
fn toggle_disabled_item_is_noop() {
    let items = items();
    let selection = keys(&["1"]);
    assert_eq!(toggle(&selection, &items[2]), selection);
}

// ===== select_all_in =====

#[test]
fn select_all_skips_disabled_items() {
    let items = items();
    let refs: Vec<&Item> = items.iter().collect();
    let selected = select_all_in(&refs, &KeySet::new());
    assert_eq!(selected, keys(&["1", "2"]));
}

#[test]
fn select_all_twice_deselects() {
    let items = items();
    let refs: Vec<&Item> = items.iter().collect();
    let once = select_all_in(&refs, &KeySet::new());
    let twice = select_all_in(&refs, &once);
    assert!(twice.is_empty());
}

#[test]
fn select_all_with_partial_selection_completes_it() {
    let items = items();
    let refs: Vec<&Item> = items.iter().collect();
    let selected = select_all_in(&refs, &keys(&["2"]));
    assert_eq!(selected, keys(&["2", "1"]));
}

#[test]
fn select_all_leaves_keys_outside_partition_alone() {
    let items = items();
    let refs: Vec<&Item> = items.iter().take(1).collect();
    let selection = keys(&["1", "9"]);

    let deselected = select_all_in(&refs, &selection);
    assert_eq!(deselected, keys(&["9"]));
}

// ===== prune / clear =====

#[test]
fn prune_for_move_removes_moved_keys() {
    let pruned = prune_for_move(&keys(&["1", "2", "4"]), &keys(&["2", "3"]));
    assert_eq!(pruned, keys(&["1", "4"]));
}

#[test]
fn clear_side_keeps_other_side() {
    let target = keys(&["2"]);
    let selection = keys(&["1", "2"]);
    assert_eq!(clear_side(&selection, &target, Side::Source), keys(&["2"]));
    assert_eq!(clear_side(&selection, &target, Side::Target), keys(&["1"]));
}

// ===== derived views =====

#[test]
fn derive_sides_follows_target_membership() {
    let sides = derive_sides(&keys(&["3", "1", "2"]), &keys(&["1"]));
    assert_eq!(sides.source, keys(&["3", "2"]));
    assert_eq!(sides.target, keys(&["1"]));
}

#[test]
fn split_notification_matches_derive_sides() {
    let split = split_notification(&keys(&["1", "2"]), &keys(&["2"]));
    assert_eq!(split.source_selected_keys, vec![ItemKey::from("1")]);
    assert_eq!(split.target_selected_keys, vec![ItemKey::from("2")]);
}

// ===== summary =====

#[test]
fn summary_all_requires_every_enabled_item() {
    let items = items();
    let refs: Vec<&Item> = items.iter().collect();

    let summary = selection_summary(&refs, &keys(&["1", "2"]));
    assert_eq!(summary.state, CheckState::All);
    assert_eq!(summary.selected_count, 2);
    assert_eq!(summary.total_count, 2);

    assert_eq!(selection_summary(&refs, &keys(&["1"])).state, CheckState::Partial);
    assert_eq!(selection_summary(&refs, &KeySet::new()).state, CheckState::None);
}

#[test]
fn summary_of_only_disabled_items_is_none() {
    let items = items();
    let refs: Vec<&Item> = items.iter().skip(2).collect();
    let summary = selection_summary(&refs, &KeySet::new());
    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.state, CheckState::None);
}

#[test]
fn format_count_renders_fraction() {
    assert_eq!(format_count(2, 5), "2 / 5");
}
