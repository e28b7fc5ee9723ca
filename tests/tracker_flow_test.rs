#[macro_use]
extern crate assert_float_eq;

use chrono::NaiveDate;
use tempfile::tempdir;

use macro_buddy_rs::error::MacroError;
use macro_buddy_rs::models::Target;
use macro_buddy_rs::state::{load_state, save_state, MacroTracker};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn stocked_tracker() -> MacroTracker {
    let mut tracker = MacroTracker::with_seed_foods();
    tracker
        .set_goals(Target::new(2000.0, 150.0, 160.0, 60.0))
        .unwrap();
    tracker.add_to_inventory("eggs", 500.0).unwrap();
    tracker.add_to_inventory("chicken breast", 600.0).unwrap();
    tracker.add_to_inventory("rice", 1000.0).unwrap();
    tracker
}

#[test]
fn test_logged_food_drives_progress() {
    let mut tracker = stocked_tracker();
    tracker.log_food("chicken breast", 200.0, day()).unwrap();

    let consumed = tracker.consumed_on(day());
    assert_float_absolute_eq!(consumed.calories, 330.0, 1e-9);
    assert_float_absolute_eq!(consumed.protein, 62.0, 1e-9);

    let progress = tracker.progress_on(day());
    assert_float_absolute_eq!(progress.calories.percentage, 16.5, 1e-9);
    assert_float_absolute_eq!(progress.protein.remaining, 88.0, 1e-9);
    assert_eq!(progress.carbs.percentage, 0.0);

    let tomorrow = day().succ_opt().unwrap();
    assert_eq!(tracker.consumed_on(tomorrow).calories, 0.0);
}

#[test]
fn test_suggest_uses_inventory_in_calorie_order() {
    let tracker = stocked_tracker();
    let picks = tracker.suggest_on(day(), 3).unwrap();

    assert!(!picks.is_empty());
    assert!(picks.len() <= 3);
    // chicken breast (165) ranks ahead of eggs (155) and rice (130)
    assert_eq!(picks[0].food_name, "chicken breast");
    for pick in &picks {
        assert!(pick.amount <= tracker.quantity_on_hand(&pick.food_name));
    }
}

#[test]
fn test_no_suggestions_once_protein_and_calories_met() {
    let mut tracker = stocked_tracker();
    tracker
        .set_goals(Target::new(100.0, 10.0, 160.0, 60.0))
        .unwrap();
    tracker.log_food("chicken breast", 100.0, day()).unwrap();

    let picks = tracker.suggest_on(day(), 3).unwrap();
    assert!(picks.is_empty());
}

#[test]
fn test_eat_suggestions_logs_and_depletes_inventory() {
    let mut tracker = stocked_tracker();
    let picks = tracker.suggest_on(day(), 3).unwrap();
    let before: Vec<f64> = picks
        .iter()
        .map(|p| tracker.quantity_on_hand(&p.food_name))
        .collect();

    tracker.eat_suggestions(&picks, day()).unwrap();

    assert_eq!(tracker.logs_on(day()).len(), picks.len());
    for (pick, was) in picks.iter().zip(before) {
        assert_float_absolute_eq!(
            tracker.quantity_on_hand(&pick.food_name),
            was - pick.amount,
            1e-9
        );
    }
}

#[test]
fn test_eat_suggestions_is_all_or_nothing() {
    let mut tracker = stocked_tracker();
    let mut picks = tracker.suggest_on(day(), 3).unwrap();
    assert!(!picks.is_empty());
    picks[0].amount = 10_000.0;

    let result = tracker.eat_suggestions(&picks, day());
    assert!(matches!(
        result,
        Err(MacroError::InsufficientInventory { .. })
    ));
    assert!(tracker.logs_on(day()).is_empty());
    assert_eq!(tracker.quantity_on_hand("rice"), 1000.0);
}

#[test]
fn test_state_survives_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut tracker = load_state(&path).unwrap();
    tracker
        .set_goals(Target::new(1800.0, 140.0, 120.0, 70.0))
        .unwrap();
    tracker.add_to_inventory("salmon", 400.0).unwrap();
    tracker.log_food("banana", 120.0, day()).unwrap();
    save_state(&path, &tracker).unwrap();

    let reloaded = load_state(&path).unwrap();
    assert_eq!(reloaded.goals(), Target::new(1800.0, 140.0, 120.0, 70.0));
    assert_eq!(reloaded.quantity_on_hand("salmon"), 400.0);
    assert_eq!(reloaded.logs_on(day()).len(), 1);
    assert_float_absolute_eq!(reloaded.consumed_on(day()).calories, 106.8, 1e-9);
}
