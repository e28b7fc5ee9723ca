use crate::models::food::Food;
use crate::models::macros::NutrientProfile;

/// A food on hand, resolved for the allocator.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub food_id: u32,
    pub food_name: String,
    pub profile: NutrientProfile,
    /// Grams on hand; may be fractional.
    pub quantity_on_hand: f64,
}

impl InventoryItem {
    pub fn new(food: &Food, quantity_on_hand: f64) -> Self {
        Self {
            food_id: food.id,
            food_name: food.name.clone(),
            profile: food.profile(),
            quantity_on_hand,
        }
    }
}

/// One resolved consumption: a profile and the grams eaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionEvent {
    pub profile: NutrientProfile,
    pub amount: f64,
}

impl ConsumptionEvent {
    pub fn new(profile: NutrientProfile, amount: f64) -> Self {
        Self { profile, amount }
    }
}
