use crate::models::{Food, NutrientProfile};

/// name, calories, protein, carbs, fat per 100 g
const SEED_FOODS: &[(&str, f64, f64, f64, f64)] = &[
    ("chicken breast", 165.0, 31.0, 0.0, 3.6),
    ("salmon", 208.0, 20.0, 0.0, 13.0),
    ("eggs", 155.0, 13.0, 1.1, 11.0),
    ("rice", 130.0, 2.7, 28.0, 0.3),
    ("oats", 389.0, 16.9, 66.3, 6.9),
    ("bread", 265.0, 9.0, 49.0, 3.2),
    ("potatoes", 77.0, 2.0, 17.0, 0.1),
    ("olive oil", 884.0, 0.0, 0.0, 100.0),
    ("avocado", 160.0, 2.0, 8.5, 14.7),
    ("almonds", 579.0, 21.2, 21.6, 49.9),
    ("donut", 452.0, 4.9, 51.0, 25.0),
    ("luncheon meat", 315.0, 13.0, 3.3, 27.0),
    ("cheese", 402.0, 25.0, 1.3, 33.0),
    ("broccoli", 34.0, 2.8, 7.0, 0.4),
    ("spinach", 23.0, 2.9, 3.6, 0.4),
    ("carrots", 41.0, 0.9, 10.0, 0.2),
    ("banana", 89.0, 1.1, 23.0, 0.3),
    ("apple", 52.0, 0.3, 14.0, 0.2),
    ("milk", 42.0, 3.4, 5.0, 1.0),
    ("greek yogurt", 59.0, 10.0, 3.6, 0.4),
];

/// The built-in food catalogue, ids starting at 1.
pub fn seed_foods() -> Vec<Food> {
    SEED_FOODS
        .iter()
        .zip(1u32..)
        .map(|(&(name, calories, protein, carbs, fat), id)| {
            Food::new(id, name, NutrientProfile::new(calories, protein, carbs, fat))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_foods_are_valid_and_unique() {
        let foods = seed_foods();
        assert_eq!(foods.len(), 20);

        let names: HashSet<String> = foods.iter().map(|f| f.key()).collect();
        assert_eq!(names.len(), foods.len());

        for food in &foods {
            assert!(food.profile().ensure_valid(&food.name).is_ok());
        }
    }
}
