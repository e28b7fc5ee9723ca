use crate::engine::constants::PROFILE_BASIS;
use crate::models::{Consumed, ConsumptionEvent, Macros, NutrientProfile, Remaining, Target};

/// Macros yielded by `amount` grams of a food with the given per-100 g profile.
#[inline]
pub fn scale(profile: &NutrientProfile, amount: f64) -> Macros {
    profile.scaled_by(amount / PROFILE_BASIS)
}

/// Fold a day's consumption events into a consumed total.
pub fn accumulate<'a, I>(events: I) -> Consumed
where
    I: IntoIterator<Item = &'a ConsumptionEvent>,
{
    events
        .into_iter()
        .map(|event| scale(&event.profile, event.amount))
        .sum()
}

/// Remaining budget, floored at zero per nutrient.
pub fn remaining(target: &Target, consumed: &Consumed) -> Remaining {
    target.zip_with(*consumed, |t, c| (t - c).max(0.0))
}
