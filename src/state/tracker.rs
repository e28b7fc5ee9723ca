use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::info;

use crate::engine::{self, DailyProgress};
use crate::engine::constants::{
    DEFAULT_CALORIES_GOAL, DEFAULT_CARBS_GOAL, DEFAULT_FAT_GOAL, DEFAULT_PROTEIN_GOAL,
};
use crate::error::{MacroError, Result};
use crate::models::{
    Consumed, ConsumptionEvent, Food, InventoryItem, NutrientProfile, Remaining, Suggestion,
    Target,
};
use crate::state::seed::seed_foods;

/// Minimum Jaro-Winkler score for a "did you mean" candidate.
const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Maximum number of "did you mean" candidates.
const MAX_SIMILAR: usize = 5;

/// One logged consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub food_id: u32,
    pub amount_grams: f64,
    pub date: NaiveDate,
}

/// The serialized form of a tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default = "default_goals")]
    pub goals: Target,
    pub foods: Vec<Food>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// Grams on hand keyed by food id.
    #[serde(default)]
    pub inventory: BTreeMap<u32, f64>,
}

pub fn default_goals() -> Target {
    Target::new(
        DEFAULT_CALORIES_GOAL,
        DEFAULT_PROTEIN_GOAL,
        DEFAULT_CARBS_GOAL,
        DEFAULT_FAT_GOAL,
    )
}

fn ensure_positive(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MacroError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            what, value
        )));
    }
    Ok(())
}

/// Owns one person's goals, food catalogue, daily logs and inventory, and
/// feeds them to the engine.
pub struct MacroTracker {
    goals: Target,
    /// All foods keyed by lowercase name.
    foods: HashMap<String, Food>,
    logs: Vec<LogEntry>,
    inventory: BTreeMap<u32, f64>,
}

impl MacroTracker {
    /// Create a tracker with default goals and the given catalogue.
    pub fn new(foods: Vec<Food>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self {
            goals: default_goals(),
            foods: map,
            logs: Vec::new(),
            inventory: BTreeMap::new(),
        }
    }

    /// Create a tracker with the built-in catalogue.
    pub fn with_seed_foods() -> Self {
        Self::new(seed_foods())
    }

    /// Rebuild a tracker from its stored form.
    ///
    /// Foods sharing a lowercase name collapse to the last one listed. Logs
    /// and inventory held under a dropped id move to the surviving id.
    pub fn from_stored(state: StoredState) -> Self {
        let survivors: HashMap<String, u32> =
            state.foods.iter().map(|f| (f.key(), f.id)).collect();
        let kept: HashSet<u32> = survivors.values().copied().collect();
        let moved: HashMap<u32, u32> = state
            .foods
            .iter()
            .filter(|f| !kept.contains(&f.id))
            .filter_map(|f| survivors.get(&f.key()).map(|&to| (f.id, to)))
            .collect();

        let mut tracker = Self::new(state.foods);
        tracker.goals = state.goals;
        tracker.logs = state.logs;
        tracker.inventory = BTreeMap::new();

        if !moved.is_empty() {
            info!(remapped = moved.len(), "merged duplicate foods");
        }
        for entry in &mut tracker.logs {
            if let Some(&to) = moved.get(&entry.food_id) {
                entry.food_id = to;
            }
        }
        for (id, qty) in state.inventory {
            let id = moved.get(&id).copied().unwrap_or(id);
            *tracker.inventory.entry(id).or_insert(0.0) += qty;
        }
        tracker
    }

    pub fn to_stored(&self) -> StoredState {
        StoredState {
            goals: self.goals,
            foods: self.all_foods().into_iter().cloned().collect(),
            logs: self.logs.clone(),
            inventory: self.inventory.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Goals
    // ─────────────────────────────────────────────────────────────────────

    pub fn goals(&self) -> Target {
        self.goals
    }

    /// Replace the daily goals wholesale.
    ///
    /// Calories must be positive; protein, carbs and fat may be zero.
    pub fn set_goals(&mut self, goals: Target) -> Result<()> {
        goals.ensure_valid("goals")?;
        if goals.calories <= 0.0 {
            return Err(MacroError::InvalidInput(
                "calorie goal must be positive".to_string(),
            ));
        }
        self.goals = goals;
        info!(?goals, "goals updated");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Food catalogue
    // ─────────────────────────────────────────────────────────────────────

    /// Get a food by name (case-insensitive).
    pub fn find_food(&self, name: &str) -> Option<&Food> {
        self.foods.get(&name.trim().to_lowercase())
    }

    pub fn food_by_id(&self, id: u32) -> Option<&Food> {
        self.foods.values().find(|f| f.id == id)
    }

    /// Get all foods, ordered by name.
    pub fn all_foods(&self) -> Vec<&Food> {
        let mut foods: Vec<&Food> = self.foods.values().collect();
        foods.sort_by_key(|f| f.key());
        foods
    }

    /// Add a food to the catalogue and return it.
    pub fn add_food(&mut self, name: &str, profile: NutrientProfile) -> Result<&Food> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MacroError::InvalidInput("food name is empty".to_string()));
        }
        profile.ensure_valid(&format!("profile of {}", name))?;

        let key = name.to_lowercase();
        if self.foods.contains_key(&key) {
            return Err(MacroError::DuplicateFood(name.to_string()));
        }

        let id = self.foods.values().map(|f| f.id).max().unwrap_or(0) + 1;
        info!(food = name, id, "food added to catalogue");
        let food = self
            .foods
            .entry(key)
            .or_insert_with(|| Food::new(id, name, profile));
        Ok(&*food)
    }

    /// Foods whose names contain `query` or closely resemble it, best match
    /// first.
    pub fn similar_foods(&self, query: &str) -> Vec<&Food> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(&Food, f64)> = self
            .foods
            .iter()
            .filter_map(|(key, food)| {
                let score = jaro_winkler(key, &query);
                if key.contains(&query) {
                    Some((food, score.max(1.0)))
                } else if score > SIMILARITY_THRESHOLD {
                    Some((food, score))
                } else {
                    None
                }
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        candidates
            .into_iter()
            .take(MAX_SIMILAR)
            .map(|(food, _)| food)
            .collect()
    }

    fn require_food(&self, name: &str) -> Result<&Food> {
        self.find_food(name)
            .ok_or_else(|| MacroError::FoodNotFound(name.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Daily log
    // ─────────────────────────────────────────────────────────────────────

    /// Log `amount` grams of a food as eaten on `date`.
    pub fn log_food(&mut self, name: &str, amount: f64, date: NaiveDate) -> Result<LogEntry> {
        ensure_positive(amount, "amount")?;
        let food_id = self.require_food(name)?.id;
        Ok(self.push_log(food_id, amount, date))
    }

    fn push_log(&mut self, food_id: u32, amount: f64, date: NaiveDate) -> LogEntry {
        let id = self.logs.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let entry = LogEntry {
            id,
            food_id,
            amount_grams: amount,
            date,
        };
        info!(food_id, amount, %date, "food logged");
        self.logs.push(entry.clone());
        entry
    }

    /// Entries logged on `date`, newest first.
    pub fn logs_on(&self, date: NaiveDate) -> Vec<&LogEntry> {
        let mut entries: Vec<&LogEntry> = self.logs.iter().filter(|l| l.date == date).collect();
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries
    }

    /// Resolve `date`'s log entries into consumption events.
    ///
    /// Entries whose food has left the catalogue are skipped.
    pub fn consumption_on(&self, date: NaiveDate) -> Vec<ConsumptionEvent> {
        self.logs_on(date)
            .into_iter()
            .filter_map(|entry| {
                self.food_by_id(entry.food_id)
                    .map(|food| ConsumptionEvent::new(food.profile(), entry.amount_grams))
            })
            .collect()
    }

    pub fn consumed_on(&self, date: NaiveDate) -> Consumed {
        engine::accumulate(&self.consumption_on(date))
    }

    pub fn remaining_on(&self, date: NaiveDate) -> Remaining {
        engine::remaining(&self.goals, &self.consumed_on(date))
    }

    pub fn progress_on(&self, date: NaiveDate) -> DailyProgress {
        engine::summarize(&self.goals, &self.consumed_on(date))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Inventory
    // ─────────────────────────────────────────────────────────────────────

    /// Grams of a food on hand; zero if absent.
    pub fn quantity_on_hand(&self, name: &str) -> f64 {
        self.find_food(name)
            .and_then(|f| self.inventory.get(&f.id).copied())
            .unwrap_or(0.0)
    }

    /// Add grams of a food to the inventory. Returns the new quantity.
    pub fn add_to_inventory(&mut self, name: &str, quantity: f64) -> Result<f64> {
        ensure_positive(quantity, "quantity")?;
        let food_id = self.require_food(name)?.id;

        let on_hand = self.inventory.entry(food_id).or_insert(0.0);
        *on_hand += quantity;
        let total = *on_hand;
        info!(food = name, quantity, total, "inventory added");
        Ok(total)
    }

    /// Take grams of a food out of the inventory.
    ///
    /// Fails without changes if the food is absent or short. The entry is
    /// dropped once it reaches zero.
    pub fn remove_from_inventory(&mut self, name: &str, quantity: f64) -> Result<()> {
        ensure_positive(quantity, "quantity")?;
        let food = self.require_food(name)?;
        let food_id = food.id;
        let food_name = food.name.clone();
        self.take_from_inventory(food_id, &food_name, quantity)
    }

    fn take_from_inventory(&mut self, food_id: u32, food_name: &str, quantity: f64) -> Result<()> {
        let available = self.inventory.get(&food_id).copied().unwrap_or(0.0);
        if available < quantity {
            return Err(MacroError::InsufficientInventory {
                food: food_name.to_string(),
                requested: quantity,
                available,
            });
        }

        let left = available - quantity;
        if left <= 0.0 {
            self.inventory.remove(&food_id);
        } else {
            self.inventory.insert(food_id, left);
        }
        info!(food = food_name, quantity, left, "inventory removed");
        Ok(())
    }

    /// Foods with a positive quantity on hand, ordered by name.
    pub fn inventory_items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self
            .inventory
            .iter()
            .filter(|&(_, &qty)| qty > 0.0)
            .filter_map(|(&id, &qty)| self.food_by_id(id).map(|food| InventoryItem::new(food, qty)))
            .collect();
        items.sort_by(|a, b| a.food_name.cmp(&b.food_name));
        items
    }

    // ─────────────────────────────────────────────────────────────────────
    // Suggestions
    // ─────────────────────────────────────────────────────────────────────

    /// Suggest up to `max_suggestions` portions from the inventory for what
    /// is left of `date`'s goals.
    pub fn suggest_on(&self, date: NaiveDate, max_suggestions: usize) -> Result<Vec<Suggestion>> {
        engine::suggest_meal(&self.remaining_on(date), &self.inventory_items(), max_suggestions)
    }

    /// Log every suggestion as eaten on `date` and take it out of inventory.
    ///
    /// All quantities are checked before anything changes.
    pub fn eat_suggestions(&mut self, suggestions: &[Suggestion], date: NaiveDate) -> Result<()> {
        let mut needed: BTreeMap<u32, f64> = BTreeMap::new();
        for suggestion in suggestions {
            ensure_positive(suggestion.amount, "amount")?;
            *needed.entry(suggestion.food_id).or_insert(0.0) += suggestion.amount;
        }

        for (&food_id, &quantity) in &needed {
            let available = self.inventory.get(&food_id).copied().unwrap_or(0.0);
            if available < quantity {
                let food = self
                    .food_by_id(food_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_else(|| food_id.to_string());
                return Err(MacroError::InsufficientInventory {
                    food,
                    requested: quantity,
                    available,
                });
            }
        }

        for suggestion in suggestions {
            self.take_from_inventory(suggestion.food_id, &suggestion.food_name, suggestion.amount)?;
            self.push_log(suggestion.food_id, suggestion.amount, date);
        }
        Ok(())
    }
}
