use serde::Serialize;

use crate::engine::arithmetic::remaining;
use crate::engine::constants::{PROGRESS_EMPTY, PROGRESS_FILLED};
use crate::models::{Consumed, Target};

/// Progress toward one nutrient's goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientProgress {
    pub consumed: f64,
    pub target: f64,
    pub remaining: f64,
    /// In `[0, 100]`; 100 when the target is zero.
    pub percentage: f64,
}

/// Progress for all four macros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyProgress {
    pub calories: NutrientProgress,
    pub protein: NutrientProgress,
    pub carbs: NutrientProgress,
    pub fat: NutrientProgress,
}

impl DailyProgress {
    /// Label and progress pairs in display order.
    pub fn entries(&self) -> [(&'static str, &NutrientProgress); 4] {
        [
            ("Calories", &self.calories),
            ("Protein", &self.protein),
            ("Carbs", &self.carbs),
            ("Fat", &self.fat),
        ]
    }
}

/// Share of `target` consumed, clamped to 100. A zero target counts as met.
pub fn percentage(consumed: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 100.0;
    }
    (consumed / target * 100.0).min(100.0)
}

fn nutrient(consumed: f64, target: f64, remaining: f64) -> NutrientProgress {
    NutrientProgress {
        consumed,
        target,
        remaining,
        percentage: percentage(consumed, target),
    }
}

pub fn summarize(target: &Target, consumed: &Consumed) -> DailyProgress {
    let left = remaining(target, consumed);
    DailyProgress {
        calories: nutrient(consumed.calories, target.calories, left.calories),
        protein: nutrient(consumed.protein, target.protein, left.protein),
        carbs: nutrient(consumed.carbs, target.carbs, left.carbs),
        fat: nutrient(consumed.fat, target.fat, left.fat),
    }
}

/// Render a text bar like `[█████░░░░░] 55.0%`.
///
/// Out-of-range percentages are clamped to an empty or full bar; the suffix
/// shows the value as given.
pub fn format_progress_bar(percentage: f64, width: usize) -> String {
    let cells = (percentage / 100.0 * width as f64).floor();
    let filled = if cells.is_nan() {
        0
    } else {
        cells.clamp(0.0, width as f64) as usize
    };

    let bar: String = std::iter::repeat_n(PROGRESS_FILLED, filled)
        .chain(std::iter::repeat_n(PROGRESS_EMPTY, width - filled))
        .collect();
    format!("[{}] {:.1}%", bar, percentage)
}
