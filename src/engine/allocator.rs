use tracing::debug;

use crate::engine::arithmetic::scale;
use crate::engine::constants::{LOOKAHEAD_FACTOR, MAX_PORTION, PROFILE_BASIS};
use crate::error::{MacroError, Result};
use crate::models::{InventoryItem, Remaining, Suggestion};

/// Round to one decimal place, half to even on the exact binary value.
///
/// `{:.1}` formats from the exact value, so 231.25 goes to 231.2 and 0.15
/// (stored just below) goes to 0.1.
fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value)
        .parse()
        .unwrap_or((value * 10.0).round() / 10.0)
}

/// Grams of `item` that just satisfy its most constraining nutrient.
///
/// Returns 0 when protein and calories are both exhausted, or when the item
/// supplies nothing that is still needed. The result is capped at the smaller
/// of the quantity on hand and `MAX_PORTION`, then rounded to one decimal.
pub fn optimal_amount(item: &InventoryItem, remaining: &Remaining) -> f64 {
    if remaining.protein <= 0.0 && remaining.calories <= 0.0 {
        return 0.0;
    }

    let fill = item
        .profile
        .to_array()
        .into_iter()
        .zip(remaining.to_array())
        .filter(|&(per_100g, need)| per_100g > 0.0 && need > 0.0)
        .map(|(per_100g, need)| need / per_100g * PROFILE_BASIS)
        .fold(None, |best: Option<f64>, amount| {
            Some(best.map_or(amount, |b| b.min(amount)))
        });

    match fill {
        Some(amount) => round_to_tenth(amount.min(item.quantity_on_hand).min(MAX_PORTION)),
        None => 0.0,
    }
}

fn validate_inputs(remaining: &Remaining, inventory: &[InventoryItem]) -> Result<()> {
    remaining.ensure_valid("remaining budget")?;
    for item in inventory {
        item.profile
            .ensure_valid(&format!("profile of {}", item.food_name))?;
        if !item.quantity_on_hand.is_finite() || item.quantity_on_hand < 0.0 {
            return Err(MacroError::InvalidInput(format!(
                "quantity on hand of {} must be a non-negative number, got {}",
                item.food_name, item.quantity_on_hand
            )));
        }
    }
    Ok(())
}

/// Greedily pick up to `max_suggestions` portions from `inventory` that fill
/// the remaining budget.
///
/// Items are ranked by calories per 100 g, highest first, with ties kept in
/// input order. Only the first `LOOKAHEAD_FACTOR * max_suggestions` ranked
/// items are considered. Each accepted portion is subtracted from the running
/// budget without flooring, so an overshoot on one nutrient lowers the need
/// seen by later candidates. Rejected items are not revisited.
pub fn suggest_meal(
    remaining: &Remaining,
    inventory: &[InventoryItem],
    max_suggestions: usize,
) -> Result<Vec<Suggestion>> {
    validate_inputs(remaining, inventory)?;

    if inventory.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranked: Vec<&InventoryItem> = inventory.iter().collect();
    ranked.sort_by(|a, b| {
        b.profile
            .calories
            .partial_cmp(&a.profile.calories)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let window = max_suggestions.saturating_mul(LOOKAHEAD_FACTOR);
    let mut budget = *remaining;
    let mut suggestions = Vec::with_capacity(max_suggestions);

    for item in ranked.into_iter().take(window) {
        if suggestions.len() >= max_suggestions {
            break;
        }

        let amount = optimal_amount(item, &budget);
        if amount <= 0.0 || amount > item.quantity_on_hand {
            debug!(food = %item.food_name, amount, "candidate rejected");
            continue;
        }

        let macros = scale(&item.profile, amount);
        debug!(food = %item.food_name, amount, "candidate accepted");

        budget = budget - macros;
        suggestions.push(Suggestion {
            food_id: item.food_id,
            food_name: item.food_name.clone(),
            amount,
            macros,
        });
    }

    Ok(suggestions)
}
