use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{MacroError, Result};

/// The four tracked macronutrients.
///
/// One shape serves every role in the engine: a food's profile per 100 g, a
/// daily target, a consumed total, a remaining budget, or the quantities a
/// portion yields. The aliases below name the role at each call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Nutrient values per 100 mass-units of a food.
pub type NutrientProfile = Macros;

/// Daily goal.
pub type Target = Macros;

/// Sum of scaled profiles over one day's consumption.
pub type Consumed = Macros;

/// `max(0, target - consumed)` per nutrient.
pub type Remaining = Macros;

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Fields in calories, protein, carbs, fat order.
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }

    /// Multiply every field by `factor`.
    #[inline]
    pub fn scaled_by(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// Apply `f` pairwise to the fields of `self` and `other`.
    #[inline]
    pub fn zip_with(self, other: Macros, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            calories: f(self.calories, other.calories),
            protein: f(self.protein, other.protein),
            carbs: f(self.carbs, other.carbs),
            fat: f(self.fat, other.fat),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Reject non-finite or negative fields.
    ///
    /// `what` names the value in the error message.
    pub fn ensure_valid(&self, what: &str) -> Result<()> {
        if !self.is_finite() {
            return Err(MacroError::InvalidInput(format!(
                "{} has a non-finite value: {:?}",
                what, self
            )));
        }
        if self.to_array().iter().any(|&v| v < 0.0) {
            return Err(MacroError::InvalidInput(format!(
                "{} has a negative value: {:?}",
                what, self
            )));
        }
        Ok(())
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        self.zip_with(other, |a, b| a + b)
    }
}

impl Sub for Macros {
    type Output = Macros;

    fn sub(self, other: Macros) -> Macros {
        self.zip_with(other, |a, b| a - b)
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::ZERO, |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub_are_fieldwise() {
        let a = Macros::new(100.0, 10.0, 20.0, 5.0);
        let b = Macros::new(50.0, 5.0, 5.0, 1.0);
        assert_eq!(a + b, Macros::new(150.0, 15.0, 25.0, 6.0));
        assert_eq!(a - b, Macros::new(50.0, 5.0, 15.0, 4.0));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Macros = Vec::<Macros>::new().into_iter().sum();
        assert_eq!(total, Macros::ZERO);
    }

    #[test]
    fn test_ensure_valid() {
        assert!(Macros::new(1.0, 0.0, 2.0, 3.0).ensure_valid("profile").is_ok());
        assert!(Macros::new(f64::NAN, 0.0, 0.0, 0.0).ensure_valid("profile").is_err());
        assert!(Macros::new(0.0, f64::INFINITY, 0.0, 0.0).ensure_valid("profile").is_err());
        assert!(Macros::new(0.0, 0.0, -1.0, 0.0).ensure_valid("profile").is_err());
    }
}
