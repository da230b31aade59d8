//! End-to-end selection behavior of radio groups.

use std::sync::Arc;

use parking_lot::Mutex;
use radio_lattice::prelude::*;

fn shipping_items() -> Vec<RadioItem> {
    vec![
        RadioItem::new("Standard"),
        RadioItem::new("Express").with_subtitle("Arrives tomorrow"),
        RadioItem::new("Pickup"),
    ]
}

fn record(group: &mut RadioGroup) -> Arc<Mutex<Vec<i32>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    group.on_selection_changed(move |index| sink.lock().push(index));
    events
}

#[test]
fn test_select_sequence() {
    let mut group = RadioGroup::new(shipping_items(), GroupStyle::Standard, Axis::Vertical).unwrap();
    let events = record(&mut group);

    assert!(group.select(1).unwrap());
    assert_eq!(group.current_selection(), 1);

    assert!(!group.select(1).unwrap());

    assert!(group.select(2).unwrap());
    assert_eq!(group.current_selection(), 2);

    match group.select(5) {
        Err(Error::InvalidIndex { index, item_count }) => {
            assert_eq!(index, 5);
            assert_eq!(item_count, 3);
        }
        other => panic!("expected InvalidIndex, got {other:?}"),
    }
    assert_eq!(group.current_selection(), 2);

    assert_eq!(*events.lock(), vec![1, 2]);
}

#[test]
fn test_exclusivity_in_appearance() {
    let mut group = RadioGroup::new(shipping_items(), GroupStyle::Grouped, Axis::Vertical).unwrap();

    for index in 0..3 {
        group.select(index).unwrap();
        let selected: Vec<usize> = group
            .item_appearances()
            .iter()
            .filter(|a| a.selected)
            .map(|a| a.index)
            .collect();
        assert_eq!(selected, vec![index as usize]);
    }
}

#[test]
fn test_clear_with_sentinel() {
    let mut group = RadioGroup::new(shipping_items(), GroupStyle::Standard, Axis::Vertical)
        .unwrap()
        .with_initial_selection(0)
        .unwrap();
    let events = record(&mut group);

    assert!(group.select(NO_SELECTION).unwrap());
    assert!(group.selected_item().is_none());
    assert_eq!(*events.lock(), vec![-1]);
}

#[test]
fn test_empty_group_rejected() {
    let result = RadioGroup::new(Vec::new(), GroupStyle::Standard, Axis::Vertical);
    assert!(matches!(result, Err(Error::EmptyItemList)));
}

#[test]
fn test_second_observer_replaces_first() {
    let mut group = RadioGroup::new(shipping_items(), GroupStyle::Standard, Axis::Vertical).unwrap();
    let first = record(&mut group);
    group.select(0).unwrap();
    let second = record(&mut group);
    group.select(1).unwrap();

    assert_eq!(*first.lock(), vec![0]);
    assert_eq!(*second.lock(), vec![1]);
}

#[test]
fn test_observer_can_read_group_state_through_shared_handle() {
    let group = Arc::new(Mutex::new(
        RadioGroup::new(shipping_items(), GroupStyle::Standard, Axis::Vertical).unwrap(),
    ));
    let seen = Arc::new(Mutex::new(None));

    let s = seen.clone();
    group.lock().on_selection_changed(move |index| *s.lock() = Some(index));
    group.lock().select(2).unwrap();

    assert_eq!(*seen.lock(), Some(2));
}

#[test]
fn test_gesture_round_trip() {
    let mut group = RadioGroup::new(shipping_items(), GroupStyle::Grouped, Axis::Horizontal).unwrap();
    let layout = group.layout(330.0);

    let target = layout.row(2).unwrap().frame;
    let tap = Point::new(target.left() + 5.0, target.top() + 5.0);
    let hit = layout.hit_test(tap).unwrap();

    assert!(group.select(hit as i32).unwrap());
    assert_eq!(group.selected_item().map(RadioItem::title), Some("Pickup"));
}
