use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::state::tracker::{MacroTracker, StoredState};

/// Load a tracker from a JSON state file.
///
/// A missing file yields a fresh tracker with the built-in catalogue.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<MacroTracker> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "no state file, starting fresh");
        return Ok(MacroTracker::with_seed_foods());
    }

    let content = fs::read_to_string(path)?;
    let state: StoredState = serde_json::from_str(&content)?;
    Ok(MacroTracker::from_stored(state))
}

/// Save a tracker to a JSON state file.
pub fn save_state<P: AsRef<Path>>(path: P, tracker: &MacroTracker) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&tracker.to_stored())?;
    fs::write(path, json)?;
    info!(path = %path.display(), "state saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_file_starts_with_seed_catalogue() {
        let dir = tempdir().unwrap();
        let tracker = load_state(dir.path().join("absent.json")).unwrap();
        assert_eq!(tracker.all_foods().len(), 20);
        assert!(tracker.inventory_items().is_empty());
    }

    #[test]
    fn test_load_minimal_file_uses_default_goals() {
        let json = r#"{
            "foods": [
                {"id": 1, "name": "Eggs", "calories_per_100g": 155, "protein_per_100g": 13,
                 "carbs_per_100g": 1.1, "fat_per_100g": 11}
            ],
            "inventory": {"1": 500.0}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let tracker = load_state(file.path()).unwrap();
        assert_eq!(tracker.goals().calories, 2000.0);
        assert_eq!(tracker.quantity_on_hand("eggs"), 500.0);
    }

    #[test]
    fn test_deduplication() {
        let json = r#"{
            "foods": [
                {"id": 1, "name": "Eggs", "calories_per_100g": 150, "protein_per_100g": 12,
                 "carbs_per_100g": 1, "fat_per_100g": 10},
                {"id": 2, "name": "eggs", "calories_per_100g": 155, "protein_per_100g": 13,
                 "carbs_per_100g": 1.1, "fat_per_100g": 11}
            ],
            "logs": [
                {"id": 1, "food_id": 1, "amount_grams": 100.0, "date": "2024-05-01"}
            ],
            "inventory": {"1": 300.0, "2": 200.0}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let tracker = load_state(file.path()).unwrap();
        assert_eq!(tracker.all_foods().len(), 1);
        // Last occurrence wins
        assert_eq!(tracker.find_food("eggs").unwrap().id, 2);

        // Data under the dropped id follows the survivor
        assert_eq!(tracker.quantity_on_hand("eggs"), 500.0);
        let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let logs = tracker.logs_on(date);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].food_id, 2);
        assert_eq!(tracker.consumed_on(date).calories, 155.0);
    }
}
