#![allow(clippy::float_cmp)]

use super::*;

fn loaded(width: f64, height: f64) -> (FieldState, FieldChanges) {
    let (fields, changes) = FieldState::new();
    fields.set_pair(Dimensions { width, height });
    (fields, changes)
}

// --- silent updates ---

#[test]
fn fields_start_unset() {
    let (fields, _changes) = FieldState::new();
    assert_eq!(fields.value(Axis::Width), None);
    assert_eq!(fields.dimensions(), None);
}

#[test]
fn set_updates_value_without_emitting() {
    let (fields, mut changes) = FieldState::new();
    fields.set(Axis::Width, 100.0);
    fields.set(Axis::Height, 80.0);
    assert_eq!(fields.dimensions(), Some((100.0, 80.0)));
    assert_eq!(changes.try_recv(), None);
}

#[test]
fn resize_transition_via_set_pair_emits_nothing() {
    let (fields, mut changes) = loaded(100.0, 80.0);
    fields.set_pair(Dimensions { width: 150.0, height: 120.0 });
    assert_eq!(fields.dimensions(), Some((150.0, 120.0)));
    assert_eq!(changes.try_recv(), None);
}

#[test]
fn subscribers_observe_silent_updates() {
    let (fields, _changes) = FieldState::new();
    let mut rx = fields.subscribe(Axis::Height);
    fields.set(Axis::Height, 42.0);
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), Some(42.0));
}

// --- user edits ---

#[test]
fn user_edit_emits_combined_change() {
    let (fields, mut changes) = loaded(100.0, 50.0);
    fields.set_from_user(Axis::Height, 300.0);
    assert_eq!(changes.try_recv(), Some(FieldChange { field: Axis::Height, width: 100.0, height: 300.0 }));
    assert_eq!(changes.try_recv(), None);
}

#[test]
fn combined_change_uses_latest_silent_value_of_other_field() {
    let (fields, mut changes) = loaded(100.0, 50.0);
    fields.set(Axis::Width, 200.0);
    fields.set_from_user(Axis::Height, 60.0);
    let change = changes.try_recv().unwrap();
    assert_eq!((change.width, change.height), (200.0, 60.0));
}

#[test]
fn user_edits_arrive_in_emission_order() {
    let (fields, mut changes) = loaded(1.0, 1.0);
    fields.set_from_user(Axis::Width, 10.0);
    fields.set_from_user(Axis::Height, 20.0);
    fields.set_from_user(Axis::Width, 30.0);

    let got: Vec<(f64, f64)> = std::iter::from_fn(|| changes.try_recv()).map(|c| (c.width, c.height)).collect();
    assert_eq!(got, vec![(10.0, 1.0), (10.0, 20.0), (30.0, 20.0)]);
}

#[test]
fn user_edit_before_other_field_is_set_is_not_combined() {
    let (fields, mut changes) = FieldState::new();
    fields.set_from_user(Axis::Width, 10.0);
    assert_eq!(fields.value(Axis::Width), Some(10.0));
    assert_eq!(changes.try_recv(), None);

    fields.set_from_user(Axis::Height, 20.0);
    assert_eq!(changes.try_recv(), Some(FieldChange { field: Axis::Height, width: 10.0, height: 20.0 }));
}

#[test]
fn user_edit_after_stream_dropped_still_updates_cell() {
    let (fields, changes) = loaded(1.0, 2.0);
    drop(changes);
    fields.set_from_user(Axis::Width, 5.0);
    assert_eq!(fields.value(Axis::Width), Some(5.0));
}

#[test]
fn clones_share_cells() {
    let (fields, mut changes) = loaded(1.0, 2.0);
    let ui = fields.clone();
    ui.set_from_user(Axis::Width, 9.0);
    assert_eq!(fields.value(Axis::Width), Some(9.0));
    assert!(changes.try_recv().is_some());
}

#[tokio::test]
async fn recv_ends_when_all_handles_dropped() {
    let (fields, mut changes) = FieldState::new();
    drop(fields);
    assert_eq!(changes.recv().await, None);
}
