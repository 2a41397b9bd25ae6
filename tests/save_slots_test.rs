//! Save slot round trips, tolerant loading and slot listing.

use gangster::actions::{start_action, ActionId};
use gangster::core::config::GameConfig;
use gangster::core::tick::advance;
use gangster::save::{from_json, to_json, SaveSlots};
use gangster::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

fn unique_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gangster_save_test_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// A game that has explored once and has an action in flight
fn played_state() -> GameState {
    let mut state = GameState::new(1_700_000_000);
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let boss = state.gangsters[0].id;
    let deck = state.table[1].uid;
    let started =
        start_action(&mut state, &config, boss, ActionId::Explore, deck, &mut Vec::new()).unwrap();
    advance(&mut state, &config, started.duration_ms, &mut rng);
    start_action(&mut state, &config, boss, ActionId::Explore, deck, &mut Vec::new()).unwrap();
    state
}

#[test]
fn test_round_trip_preserves_everything() {
    let dir = unique_dir("round_trip");
    let slots = SaveSlots::with_dir(&dir).unwrap();
    let state = played_state();

    slots.save(1, &state).unwrap();
    assert!(slots.slot_exists(1));
    let loaded = slots.load(1).unwrap();
    assert_eq!(loaded, state);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_round_trip_preserves_deck_order() {
    let state = played_state();
    let deck_card = state.table[1].uid;
    let mut original = state.decks[&deck_card].clone();

    let mut loaded = from_json(&to_json(&state).unwrap()).unwrap();
    let restored = loaded.decks.get_mut(&deck_card).unwrap();
    let a: Vec<_> = std::iter::from_fn(|| original.draw()).collect();
    let b: Vec<_> = std::iter::from_fn(|| restored.draw()).collect();
    assert_eq!(a, b);
}

#[test]
fn test_decks_persist_as_id_arrays() {
    let state = played_state();
    let json: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
    let deck_card = state.table[1].uid.to_string();
    let deck = &json["decks"][&deck_card];
    // The neighborhood's second start entry is the lot + hideout group
    assert_eq!(deck["start"][0], serde_json::json!(["vacant_lot", "hideout"]));
    assert!(deck["middle"].as_array().is_some_and(|m| !m.is_empty()));
    assert!(deck["end"][0].is_string());
}

#[test]
fn test_missing_keys_load_onto_defaults() {
    let json = r#"{ "money": 512, "heat": 33, "next_uid": 4 }"#;
    let state = from_json(json).unwrap();
    assert_eq!(state.money, 512);
    assert_eq!(state.heat, 33);
    assert!(state.table.is_empty());
    assert!(state.decks.is_empty());
    assert!(state.choices.is_empty());
    assert_eq!(state.totals, Default::default());
}

#[test]
fn test_load_normalizes() {
    let mut state = played_state();
    state.heat = 250;
    state.next_uid = 1;
    let loaded = from_json(&to_json(&state).unwrap()).unwrap();
    assert_eq!(loaded.heat, 100);
    assert!(loaded.table.iter().all(|c| c.uid < loaded.next_uid));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let json = r#"{ "money": 5, "weather": "rain" }"#;
    assert_eq!(from_json(json).unwrap().money, 5);
}

#[test]
fn test_list_and_delete_slots() {
    let dir = unique_dir("list");
    let slots = SaveSlots::with_dir(&dir).unwrap();
    let mut state = played_state();
    state.money = 321;
    slots.save(2, &state).unwrap();
    fs::write(dir.join("slot_3.json"), "garbage").unwrap();

    let listed = slots.list_slots();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].slot, 2);
    assert_eq!(listed[0].money, 321);
    assert!(!listed[0].is_corrupted);
    assert!(listed[1].is_corrupted);
    assert_eq!(slots.first_free_slot(), Some(1));

    slots.delete_slot(2).unwrap();
    assert!(!slots.slot_exists(2));
    fs::remove_dir_all(&dir).ok();
}
