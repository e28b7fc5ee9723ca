use serde::{Deserialize, Serialize};

use crate::models::macros::NutrientProfile;

/// A catalogue food with its nutrient profile per 100 g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
}

impl Food {
    pub fn new(id: u32, name: impl Into<String>, profile: NutrientProfile) -> Self {
        Self {
            id,
            name: name.into(),
            calories_per_100g: profile.calories,
            protein_per_100g: profile.protein,
            carbs_per_100g: profile.carbs,
            fat_per_100g: profile.fat,
        }
    }

    /// Nutrient profile per 100 g.
    #[inline]
    pub fn profile(&self) -> NutrientProfile {
        NutrientProfile::new(
            self.calories_per_100g,
            self.protein_per_100g,
            self.carbs_per_100g,
            self.fat_per_100g,
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Food {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trips_fields() {
        let food = Food::new(1, "Eggs", NutrientProfile::new(155.0, 13.0, 1.1, 11.0));
        assert_eq!(food.profile(), NutrientProfile::new(155.0, 13.0, 1.1, 11.0));
        assert_eq!(food.calories_per_100g, 155.0);
    }

    #[test]
    fn test_equality_case_insensitive() {
        let a = Food::new(1, "Greek Yogurt", NutrientProfile::ZERO);
        let b = Food::new(2, "greek yogurt", NutrientProfile::ZERO);
        assert_eq!(a, b);
    }
}
