//! Editor Scenario Tests
//!
//! End-to-end runs through the editor as a user would drive it.

use proptest::prelude::*;

use crate::{parse, to_json, validate, EditorState, ItemId, ItemType, Questionnaire, MAX_IMPORTED_ID};

#[test]
fn test_seeded_editor_add_then_remove() {
    let state = EditorState::default();
    assert_eq!(state.questionnaire().title, "Edit Teammate Review");
    assert_eq!(state.items().len(), 10);
    assert_eq!(state.params().min_score, 0);
    assert_eq!(state.params().max_score, 5);
    assert!(!state.params().is_private);

    let state = state.add_items("2", ItemType::Scale, 100);
    assert_eq!(state.items().len(), 12);
    assert_eq!(state.items()[10].item_type, ItemType::Scale);
    assert_eq!(state.items()[11].item_type, ItemType::Scale);

    let first = state.items()[0].id;
    let state = state.remove_item(first);
    assert_eq!(state.items().len(), 11);
}

#[test]
fn test_export_import_round_trip() {
    let state = EditorState::default()
        .add_items("3", ItemType::UploadFile, 100)
        .remove_item(ItemId(4))
        .set_title("Final Review");

    for pretty in [false, true] {
        let json = to_json(state.questionnaire(), pretty).unwrap();
        let reimported = EditorState::new(Questionnaire::default()).import(parse(&json).unwrap());
        assert_eq!(reimported.questionnaire(), state.questionnaire());
    }
}

#[test]
fn test_duplicate_sequence_after_import() {
    let json = r#"{"title": "Dup", "items": [
        {"sequence": 1.0, "text": "a", "type": "Scale"},
        {"sequence": 1.0, "text": "b", "type": "Scale"}
    ]}"#;
    let state = EditorState::default().import(parse(json).unwrap());
    let messages: Vec<String> = validate(&state).iter().map(ToString::to_string).collect();
    assert_eq!(messages, vec!["Duplicate sequence number detected: 1".to_string()]);

    assert!(validate(&state.renumber()).is_empty());
}

#[test]
fn test_remove_all_items() {
    let mut state = EditorState::default();
    let ids: Vec<ItemId> = state.items().iter().map(|i| i.id).collect();
    for id in ids {
        state = state.remove_item(id);
    }
    assert!(state.questionnaire().is_empty());
    let json = to_json(state.questionnaire(), false).unwrap();
    assert_eq!(json, r#"{"title":"Edit Teammate Review","items":[]}"#);
}

#[test]
fn test_ids_stay_unique_after_extreme_imports() {
    let json = r#"{"title": "Extreme", "items": [
        {"id": 4294967295, "sequence": 1, "type": "Scale"},
        {"sequence": 2, "type": "Scale"},
        {"id": 4294967294, "sequence": 3, "type": "Scale"},
        {"id": 7, "sequence": 4, "type": "Scale"}
    ]}"#;
    let state = EditorState::default()
        .import(parse(json).unwrap())
        .add_items("3", ItemType::Scale, 100);

    let mut ids: Vec<ItemId> = state.items().iter().map(|i| i.id).collect();
    assert_eq!(ids.len(), 7);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 7);
    assert!(ids.iter().all(|id| id.0 <= MAX_IMPORTED_ID));

    let removed = state.remove_item(state.items()[0].id);
    assert_eq!(removed.items().len(), 6);
}

fn item_type() -> impl Strategy<Value = ItemType> {
    prop::sample::select(ItemType::ALL.to_vec())
}

fn max_sequence() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0f64..1e3,
        9.0e15f64..1e17,
        1e17f64..1e300,
    ]
}

proptest! {
    #[test]
    fn prop_add_appends_increasing_sequences(n in 1usize..40, t in item_type()) {
        let before = EditorState::default();
        let max_before = before.questionnaire().max_sequence().unwrap();
        let after = before.add_items(&n.to_string(), t, 100);

        prop_assert_eq!(after.items().len(), before.items().len() + n);
        let added = &after.items()[before.items().len()..];
        prop_assert!(added.iter().all(|i| i.item_type == t));
        prop_assert!(added[0].sequence > max_before);
        prop_assert!(added.windows(2).all(|w| w[0].sequence < w[1].sequence));
    }

    #[test]
    fn prop_add_after_large_import_keeps_increasing(seq in max_sequence(), n in 1usize..40) {
        let doc = format!(r#"{{"title": "Big", "items": [{{"sequence": {:e}, "type": "Cake"}}]}}"#, seq);
        let before = EditorState::default().import(parse(&doc).unwrap());
        let max_before = before.questionnaire().max_sequence().unwrap();
        let after = before.add_items(&n.to_string(), ItemType::Cake, 100);

        prop_assert_eq!(after.items().len(), 1 + n);
        let sequences: Vec<f64> = after.items().iter().map(|i| i.sequence).collect();
        prop_assert!(sequences[1] > max_before);
        prop_assert!(sequences.windows(2).all(|w| w[0] < w[1]), "{:?}", sequences);
    }

    #[test]
    fn prop_remove_drops_exactly_one(index in 0usize..10) {
        let before = EditorState::default();
        let target = before.items()[index].id;
        let after = before.remove_item(target);

        prop_assert_eq!(after.items().len(), before.items().len() - 1);
        let survivors: Vec<_> = before
            .items()
            .iter()
            .filter(|i| i.id != target)
            .map(|i| (i.id, i.sequence))
            .collect();
        let remaining: Vec<_> = after.items().iter().map(|i| (i.id, i.sequence)).collect();
        prop_assert_eq!(survivors, remaining);
    }
}
