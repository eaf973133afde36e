//! Tests for the transfer state controller.

use super::*;
use crate::engine::events::TransferEvent;
use crate::engine::selection::CheckState;
use crate::model::Item;

// ===== Helpers =====

fn keys(raw: &[&str]) -> KeySet {
    raw.iter().map(|s| ItemKey::from(*s)).collect()
}

fn key_vec(raw: &[&str]) -> Vec<ItemKey> {
    raw.iter().map(|s| ItemKey::from(*s)).collect()
}

fn store(n: usize) -> OptionStore {
    (1..=n)
        .map(|i| Item::new(i.to_string(), format!("Option {i}")))
        .collect()
}

fn recording(options: TransferOptions) -> Transfer<Vec<TransferEvent>> {
    Transfer::new(options, Vec::new())
}

fn titles(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.key.to_string()).collect()
}

fn change_events(events: &[TransferEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, TransferEvent::Change { .. }))
        .count()
}

// ===== Construction =====

#[test]
fn uncontrolled_engine_seeds_from_defaults() {
    let store = store(5);
    let transfer = Transfer::silent(TransferOptions {
        default_target_keys: keys(&["2"]),
        default_selected_keys: keys(&["1"]),
        ..TransferOptions::default()
    });

    assert_eq!(transfer.target_keys(&store), keys(&["2"]));
    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
    assert!(!transfer.is_target_controlled());
    assert!(!transfer.is_selection_controlled());
}

#[test]
fn stale_keys_are_pruned_on_read() {
    let store = store(3);
    let transfer = Transfer::silent(TransferOptions {
        default_target_keys: keys(&["2", "gone"]),
        default_selected_keys: keys(&["gone", "1"]),
        ..TransferOptions::default()
    });

    assert_eq!(transfer.target_keys(&store), keys(&["2"]));
    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
}

// ===== toggle_item =====

#[test]
fn toggle_emits_select_change_split_by_side() {
    let store = store(5);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["4"]),
        ..TransferOptions::default()
    });

    transfer.toggle_item(&store, &ItemKey::from("1"));
    transfer.toggle_item(&store, &ItemKey::from("4"));

    assert_eq!(
        transfer.listener().last(),
        Some(&TransferEvent::SelectChange {
            source_selected_keys: key_vec(&["1"]),
            target_selected_keys: key_vec(&["4"]),
        })
    );
}

#[test]
fn toggle_disabled_item_is_silent_noop() {
    let store = OptionStore::new(vec![Item::new("1", "One").disabled(true)]);
    let mut transfer = recording(TransferOptions::default());

    transfer.toggle_item(&store, &ItemKey::from("1"));

    assert!(transfer.selected_keys(&store).is_empty());
    assert!(transfer.listener().is_empty());
}

#[test]
fn toggle_unknown_key_is_silent_noop() {
    let store = store(2);
    let mut transfer = recording(TransferOptions::default());

    transfer.toggle_item(&store, &ItemKey::from("missing"));

    assert!(transfer.listener().is_empty());
}

#[test]
fn disabled_engine_ignores_interactions() {
    let store = store(3);
    let mut transfer = recording(TransferOptions {
        disabled: true,
        default_selected_keys: keys(&["1"]),
        ..TransferOptions::default()
    });

    transfer.toggle_item(&store, &ItemKey::from("2"));
    transfer.select_all(&store, Side::Source);
    assert!(!transfer.move_selected(&store, Direction::ToTarget));

    assert!(transfer.listener().is_empty());
    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
}

// ===== select_all =====

#[test]
fn select_all_skips_disabled_item() {
    let store = OptionStore::new(vec![
        Item::new("1", "One"),
        Item::new("2", "Two"),
        Item::new("3", "Three").disabled(true),
    ]);
    let mut transfer = recording(TransferOptions::default());

    transfer.select_all(&store, Side::Source);

    assert_eq!(transfer.selected_keys(&store), keys(&["1", "2"]));
}

#[test]
fn select_all_twice_restores_selection() {
    let store = store(4);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["4"]),
        default_selected_keys: keys(&["4"]),
        ..TransferOptions::default()
    });
    let before = transfer.selected_keys(&store);

    transfer.select_all(&store, Side::Source);
    assert_eq!(transfer.selected_keys(&store), keys(&["4", "1", "2", "3"]));

    transfer.select_all(&store, Side::Source);
    assert_eq!(transfer.selected_keys(&store), before);
    assert_eq!(transfer.listener().len(), 2);
}

#[test]
fn select_all_only_affects_search_matches() {
    let store = OptionStore::new(vec![
        Item::new("1", "apple"),
        Item::new("2", "apricot"),
        Item::new("3", "banana"),
    ]);
    let mut transfer = Transfer::silent(TransferOptions::default());

    transfer.search(Side::Source, "ap");
    transfer.select_all(&store, Side::Source);

    assert_eq!(transfer.selected_keys(&store), keys(&["1", "2"]));
}

// ===== move_selected =====

#[test]
fn basic_move_scenario() {
    let store = store(5);
    let mut transfer = recording(TransferOptions::default());

    transfer.toggle_item(&store, &ItemKey::from("1"));
    transfer.toggle_item(&store, &ItemKey::from("2"));
    transfer.listener_mut().clear();

    assert!(transfer.move_selected(&store, Direction::ToTarget));

    assert_eq!(
        transfer.listener().as_slice(),
        &[
            TransferEvent::Change {
                target_keys: key_vec(&["1", "2"]),
                direction: Direction::ToTarget,
                move_keys: key_vec(&["1", "2"]),
            },
            TransferEvent::SelectChange {
                source_selected_keys: vec![],
                target_selected_keys: vec![],
            },
        ]
    );
    assert_eq!(titles(&transfer.target_items(&store)), vec!["1", "2"]);
    assert!(transfer.selected_keys(&store).is_empty());
}

#[test]
fn move_with_nothing_selected_emits_nothing() {
    let store = store(5);
    let mut transfer = recording(TransferOptions::default());

    assert!(!transfer.move_selected(&store, Direction::ToTarget));

    assert_eq!(change_events(transfer.listener()), 0);
    assert!(transfer.listener().is_empty());
}

#[test]
fn move_only_takes_origin_side_selection() {
    let store = store(5);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["5"]),
        default_selected_keys: keys(&["1", "5"]),
        ..TransferOptions::default()
    });

    transfer.move_selected(&store, Direction::ToSource);

    assert!(transfer.target_keys(&store).is_empty());
    // "1" was on the source side and stays selected
    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
    assert_eq!(
        transfer.listener().first(),
        Some(&TransferEvent::Change {
            target_keys: vec![],
            direction: Direction::ToSource,
            move_keys: key_vec(&["5"]),
        })
    );
}

#[test]
fn moved_keys_are_never_still_selected() {
    let store = store(3);
    let mut transfer = Transfer::silent(TransferOptions {
        default_selected_keys: keys(&["2"]),
        ..TransferOptions::default()
    });

    transfer.move_selected(&store, Direction::ToTarget);

    assert!(!transfer.selected_keys(&store).contains(&ItemKey::from("2")));
    assert!(!transfer.move_selected(&store, Direction::ToSource));
}

#[test]
fn move_preserves_catalogue_order_on_target_side() {
    let store = store(5);
    let mut transfer = Transfer::silent(TransferOptions {
        default_target_keys: keys(&["4"]),
        default_selected_keys: keys(&["3", "1"]),
        ..TransferOptions::default()
    });

    transfer.move_selected(&store, Direction::ToTarget);

    assert_eq!(transfer.target_keys(&store), keys(&["4", "3", "1"]));
    assert_eq!(titles(&transfer.target_items(&store)), vec!["1", "3", "4"]);
}

// ===== controlled mode =====

#[test]
fn controlled_target_keys_are_not_changed_by_move() {
    let store = store(5);
    let mut transfer = recording(TransferOptions {
        target_keys: Some(KeySet::new()),
        default_selected_keys: keys(&["1"]),
        ..TransferOptions::default()
    });

    assert!(transfer.move_selected(&store, Direction::ToTarget));

    assert!(transfer.target_keys(&store).is_empty());
    assert_eq!(
        transfer.listener().first(),
        Some(&TransferEvent::Change {
            target_keys: key_vec(&["1"]),
            direction: Direction::ToTarget,
            move_keys: key_vec(&["1"]),
        })
    );

    // The parent accepts the proposal on the next render
    transfer.sync_target_keys(keys(&["1"]));
    assert_eq!(transfer.target_keys(&store), keys(&["1"]));
}

#[test]
fn controlled_selection_is_reported_but_not_stored() {
    let store = store(3);
    let mut transfer = recording(TransferOptions {
        selected_keys: Some(KeySet::new()),
        ..TransferOptions::default()
    });

    transfer.toggle_item(&store, &ItemKey::from("2"));

    assert!(transfer.selected_keys(&store).is_empty());
    assert_eq!(
        transfer.listener().as_slice(),
        &[TransferEvent::SelectChange {
            source_selected_keys: key_vec(&["2"]),
            target_selected_keys: vec![],
        }]
    );
}

#[test]
fn sync_is_ignored_for_uncontrolled_values() {
    let store = store(3);
    let mut transfer = Transfer::silent(TransferOptions::default());

    transfer.sync_target_keys(keys(&["1"]));
    transfer.sync_selected_keys(keys(&["1"]));

    assert!(transfer.target_keys(&store).is_empty());
    assert!(transfer.selected_keys(&store).is_empty());
}

// ===== search and pages =====

#[test]
fn search_resets_page_and_emits() {
    let store: OptionStore = (1..=25)
        .map(|i| {
            let title = if i <= 5 { format!("x-{i}") } else { format!("item {i}") };
            Item::new(i.to_string(), title)
        })
        .collect();
    let mut transfer = recording(TransferOptions {
        pagination: PaginationConfig::paged(10),
        ..TransferOptions::default()
    });

    transfer.change_page(&store, Side::Source, 3);
    assert_eq!(transfer.side_state(Side::Source).page, 3);

    transfer.search(Side::Source, "x");

    let view = transfer.view(&store, Side::Source);
    assert_eq!(transfer.side_state(Side::Source).page, 1);
    assert_eq!(view.page.total, 5);
    assert_eq!(view.page.total_pages, 1);
    assert_eq!(
        transfer.listener().as_slice(),
        &[TransferEvent::Search {
            side: Side::Source,
            text: "x".to_string(),
        }]
    );
}

#[test]
fn search_with_no_matches_still_emits() {
    let store = store(3);
    let mut transfer = recording(TransferOptions::default());

    transfer.search(Side::Target, "nothing");
    transfer.clear_search(Side::Target);

    assert_eq!(transfer.listener().len(), 2);
    assert_eq!(transfer.side_state(Side::Target).search, "");
    assert_eq!(transfer.view(&store, Side::Target).page.total, 0);
}

#[test]
fn search_keeps_hidden_items_selected() {
    let store = store(3);
    let mut transfer = Transfer::silent(TransferOptions {
        default_selected_keys: keys(&["1"]),
        ..TransferOptions::default()
    });

    transfer.search(Side::Source, "Option 3");

    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
    assert_eq!(transfer.view(&store, Side::Source).selected, keys(&["1"]));
}

#[test]
fn change_page_clamps_out_of_range_requests() {
    let store = store(25);
    let mut transfer = Transfer::silent(TransferOptions {
        pagination: PaginationConfig::paged(10),
        ..TransferOptions::default()
    });

    transfer.change_page(&store, Side::Source, 9);
    assert_eq!(transfer.side_state(Side::Source).page, 3);

    transfer.change_page(&store, Side::Source, 0);
    assert_eq!(transfer.side_state(Side::Source).page, 1);

    transfer.change_page(&store, Side::Target, 4);
    assert_eq!(transfer.side_state(Side::Target).page, 1);
}

#[test]
fn shrinking_partition_pulls_page_back_into_range() {
    let store = store(25);
    let mut transfer = Transfer::silent(TransferOptions {
        pagination: PaginationConfig::paged(10),
        ..TransferOptions::default()
    });
    transfer.change_page(&store, Side::Source, 3);

    let moving: KeySet = (16..=25).map(|i| ItemKey::from(i.to_string())).collect();
    transfer.move_to(&store, Direction::ToTarget, &moving);

    assert_eq!(transfer.side_state(Side::Source).page, 2);
    let view = transfer.view(&store, Side::Source);
    assert_eq!(view.page.items.len(), 5);
}

#[test]
fn view_clamps_stale_page_after_catalogue_shrinks() {
    let big = store(25);
    let small = store(4);
    let mut transfer = Transfer::silent(TransferOptions {
        pagination: PaginationConfig::paged(10),
        ..TransferOptions::default()
    });
    transfer.change_page(&big, Side::Source, 3);

    let view = transfer.view(&small, Side::Source);

    assert_eq!(view.page.page, 1);
    assert_eq!(view.page.items.len(), 4);
}

#[test]
fn view_reports_check_state_over_filtered_items() {
    let store = store(3);
    let transfer = Transfer::silent(TransferOptions {
        default_selected_keys: keys(&["1", "2", "3"]),
        ..TransferOptions::default()
    });

    let view = transfer.view(&store, Side::Source);
    assert_eq!(view.summary.state, CheckState::All);
    assert_eq!(view.summary.selected_count, 3);
}

// ===== imperative operations =====

#[test]
fn move_to_ignores_unknown_and_already_moved_keys() {
    let store = store(3);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["1"]),
        ..TransferOptions::default()
    });

    assert!(!transfer.move_to(&store, Direction::ToTarget, &keys(&["1", "zz"])));
    assert!(transfer.listener().is_empty());

    assert!(transfer.move_to(&store, Direction::ToTarget, &keys(&["1", "2"])));
    assert_eq!(
        transfer.listener().first(),
        Some(&TransferEvent::Change {
            target_keys: key_vec(&["1", "2"]),
            direction: Direction::ToTarget,
            move_keys: key_vec(&["2"]),
        })
    );
}

#[test]
fn move_to_prunes_selection_of_moved_keys() {
    let store = store(3);
    let mut transfer = Transfer::silent(TransferOptions {
        default_selected_keys: keys(&["2", "3"]),
        ..TransferOptions::default()
    });

    transfer.move_to(&store, Direction::ToTarget, &keys(&["2"]));

    assert_eq!(transfer.selected_keys(&store), keys(&["3"]));
}

#[test]
fn set_target_keys_removal_reports_to_source() {
    let store = store(3);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["1", "2"]),
        default_selected_keys: keys(&["2", "3"]),
        ..TransferOptions::default()
    });

    transfer.set_target_keys(&store, keys(&["1"]));

    assert_eq!(
        transfer.listener().as_slice(),
        &[
            TransferEvent::Change {
                target_keys: key_vec(&["1"]),
                direction: Direction::ToSource,
                move_keys: key_vec(&["2"]),
            },
            TransferEvent::SelectChange {
                source_selected_keys: key_vec(&["3"]),
                target_selected_keys: vec![],
            },
        ]
    );
}

#[test]
fn set_target_keys_without_change_is_silent() {
    let store = store(3);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["1"]),
        ..TransferOptions::default()
    });

    transfer.set_target_keys(&store, keys(&["1", "unknown"]));

    assert!(transfer.listener().is_empty());
}

#[test]
fn set_selected_keys_drops_unknown_and_disabled() {
    let store = OptionStore::new(vec![
        Item::new("1", "One"),
        Item::new("2", "Two").disabled(true),
    ]);
    let mut transfer = recording(TransferOptions::default());

    transfer.set_selected_keys(&store, keys(&["1", "2", "3"]));

    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
    assert_eq!(transfer.listener().len(), 1);
}

#[test]
fn clear_selection_emits_even_when_empty() {
    let store = store(2);
    let mut transfer = recording(TransferOptions::default());

    transfer.clear_selection(&store, Side::Target);

    assert_eq!(transfer.listener().len(), 1);
}

#[test]
fn selected_items_follow_catalogue_order() {
    let store = store(5);
    let transfer = Transfer::silent(TransferOptions {
        default_selected_keys: keys(&["5", "2"]),
        ..TransferOptions::default()
    });

    assert_eq!(titles(&transfer.selected_items(&store)), vec!["2", "5"]);
}

// ===== reset =====

#[test]
fn reset_restores_uncontrolled_defaults() {
    let store = store(25);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["1"]),
        pagination: PaginationConfig::paged(10),
        ..TransferOptions::default()
    });
    transfer.toggle_item(&store, &ItemKey::from("2"));
    transfer.move_selected(&store, Direction::ToTarget);
    transfer.search(Side::Target, "Option");
    transfer.change_page(&store, Side::Source, 2);
    let emitted = transfer.listener().len();

    transfer.reset();

    assert_eq!(transfer.target_keys(&store), keys(&["1"]));
    assert!(transfer.selected_keys(&store).is_empty());
    assert_eq!(transfer.side_state(Side::Target), &SideState::default());
    assert_eq!(transfer.side_state(Side::Source).page, 1);
    assert_eq!(transfer.listener().len(), emitted);
}

#[test]
fn reset_leaves_controlled_values_alone() {
    let store = store(5);
    let mut transfer = Transfer::silent(TransferOptions {
        target_keys: Some(keys(&["3"])),
        selected_keys: Some(keys(&["1"])),
        ..TransferOptions::default()
    });
    transfer.search(Side::Source, "Option 1");

    transfer.reset();

    assert_eq!(transfer.target_keys(&store), keys(&["3"]));
    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
    assert_eq!(transfer.side_state(Side::Source).search, "");
}

// ===== custom filter =====

#[test]
fn custom_filter_predicate_drives_select_all() {
    let store = store(5);
    let mut transfer = Transfer::silent(TransferOptions {
        filter: Some(FilterPredicate::new(|query, item| {
            item.key.to_string() == query
        })),
        ..TransferOptions::default()
    });

    transfer.search(Side::Source, "3");
    transfer.select_all(&store, Side::Source);

    assert_eq!(transfer.selected_keys(&store), keys(&["3"]));
}

// ===== Disabled seeds =====

#[test]
fn seeded_disabled_key_is_never_selected_or_moved() {
    let store = OptionStore::new(vec![
        Item::new("1", "One"),
        Item::new("2", "Two"),
        Item::new("3", "Three").disabled(true),
    ]);
    let mut transfer = recording(TransferOptions {
        default_selected_keys: keys(&["1", "3"]),
        ..TransferOptions::default()
    });

    assert_eq!(transfer.selected_keys(&store), keys(&["1"]));
    assert!(transfer.move_selected(&store, Direction::ToTarget));

    assert_eq!(transfer.target_keys(&store), keys(&["1"]));
    assert_eq!(
        transfer.listener()[0],
        TransferEvent::Change {
            target_keys: key_vec(&["1"]),
            direction: Direction::ToTarget,
            move_keys: key_vec(&["1"]),
        }
    );
}

#[test]
fn controlled_selection_hides_disabled_keys() {
    let store = OptionStore::new(vec![
        Item::new("1", "One").disabled(true),
        Item::new("2", "Two"),
    ]);
    let transfer = Transfer::silent(TransferOptions {
        selected_keys: Some(keys(&["1", "2"])),
        ..TransferOptions::default()
    });

    assert_eq!(transfer.selected_keys(&store), keys(&["2"]));
    assert_eq!(transfer.view(&store, Side::Source).summary.state, CheckState::All);
}

// ===== One-way mode =====

#[test]
fn one_way_ignores_user_actions_on_target_side() {
    let store = store(3);
    let mut transfer = recording(TransferOptions {
        default_target_keys: keys(&["3"]),
        one_way: true,
        ..TransferOptions::default()
    });

    transfer.toggle_item(&store, &ItemKey::from("3"));
    transfer.select_all(&store, Side::Target);
    assert!(transfer.listener().is_empty());

    transfer.set_selected_keys(&store, keys(&["3"]));
    assert!(!transfer.move_selected(&store, Direction::ToSource));
    assert_eq!(change_events(transfer.listener()), 0);

    transfer.toggle_item(&store, &ItemKey::from("1"));
    assert!(transfer.move_selected(&store, Direction::ToTarget));
    assert_eq!(transfer.target_keys(&store), keys(&["3", "1"]));
}

#[test]
fn one_way_still_allows_imperative_moves_back() {
    let store = store(3);
    let mut transfer = Transfer::silent(TransferOptions {
        default_target_keys: keys(&["2", "3"]),
        one_way: true,
        ..TransferOptions::default()
    });

    assert!(transfer.is_one_way());
    assert!(transfer.move_to(&store, Direction::ToSource, &keys(&["2"])));
    assert_eq!(transfer.target_keys(&store), keys(&["3"]));
}
