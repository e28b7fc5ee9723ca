use std::fmt::Write;

use chrono::NaiveDate;

use crate::engine::constants::PROGRESS_BAR_WIDTH;
use crate::engine::{format_progress_bar, DailyProgress};
use crate::models::{Food, InventoryItem, Macros, Remaining, Suggestion, Target};

/// Number of today's log entries shown by the status report.
const STATUS_LOG_LIMIT: usize = 5;

/// Capitalize each word of a food name for display.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn macro_lines(out: &mut String, macros: &Macros) {
    let _ = writeln!(out, "  Calories: {:.0}", macros.calories);
    let _ = writeln!(out, "  Protein:  {:.1}g", macros.protein);
    let _ = writeln!(out, "  Carbs:    {:.1}g", macros.carbs);
    let _ = writeln!(out, "  Fat:      {:.1}g", macros.fat);
}

pub fn render_goals(goals: &Target) -> String {
    let mut out = String::from("Daily targets:\n");
    macro_lines(&mut out, goals);
    out
}

pub fn render_logged(food: &Food, amount: f64, macros: &Macros) -> String {
    let mut out = format!("Logged {} ({}g)\n", title_case(&food.name), amount);
    macro_lines(&mut out, macros);
    out
}

pub fn render_inventory(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "Your inventory is empty. Add foods with `inventory add <food> <amount>`.\n"
            .to_string();
    }

    let width = items
        .iter()
        .map(|i| i.food_name.len())
        .max()
        .unwrap_or(10);

    let mut out = String::from("=== Inventory ===\n");
    for item in items {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>6.0}g",
            title_case(&item.food_name),
            item.quantity_on_hand,
            width = width
        );
    }
    let _ = writeln!(out, "Total items: {}", items.len());
    out
}

/// Suggestions, their totals, and what the budget looks like afterwards.
///
/// The "remaining after" figures are not floored and go negative on
/// overshoot.
pub fn render_suggestions(suggestions: &[Suggestion], remaining: &Remaining) -> String {
    if suggestions.is_empty() {
        return "You're all set for today: nothing in your inventory fits what is left.\n"
            .to_string();
    }

    let mut out = String::from("=== Meal Suggestion ===\n");
    for s in suggestions {
        let _ = writeln!(out, "  {}: {:.0}g", title_case(&s.food_name), s.amount);
        let _ = writeln!(
            out,
            "    {:.0} cal, {:.1}p, {:.1}c, {:.1}f",
            s.macros.calories, s.macros.protein, s.macros.carbs, s.macros.fat
        );
    }

    let totals: Macros = suggestions.iter().map(|s| s.macros).sum();
    out.push_str("\n--- Totals ---\n");
    macro_lines(&mut out, &totals);

    out.push_str("\n--- Remaining after suggestion ---\n");
    macro_lines(&mut out, &(*remaining - totals));
    out
}

/// Dated progress report: one bar per macro, the remaining budget, and the
/// newest few log entries as `(food name, grams)`.
pub fn render_status(date: NaiveDate, progress: &DailyProgress, logs: &[(String, f64)]) -> String {
    let mut out = format!("=== Daily Progress - {} ===\n\n", date.format("%B %d, %Y"));

    for (label, p) in progress.entries() {
        let _ = writeln!(
            out,
            "{:<9} {}",
            format!("{}:", label),
            format_progress_bar(p.percentage, PROGRESS_BAR_WIDTH)
        );
        if label == "Calories" {
            let _ = writeln!(out, "          {:.0}/{:.0} cal", p.consumed, p.target);
        } else {
            let _ = writeln!(out, "          {:.1}/{:.1}g", p.consumed, p.target);
        }
    }

    out.push_str("\n--- Remaining ---\n");
    let left = Macros::new(
        progress.calories.remaining,
        progress.protein.remaining,
        progress.carbs.remaining,
        progress.fat.remaining,
    );
    macro_lines(&mut out, &left);

    out.push('\n');
    if logs.is_empty() {
        out.push_str("No logs today yet\n");
    } else {
        out.push_str("--- Today's Logs ---\n");
        for (name, grams) in logs.iter().take(STATUS_LOG_LIMIT) {
            let _ = writeln!(out, "  {}: {:.0}g", title_case(name), grams);
        }
        if logs.len() > STATUS_LOG_LIMIT {
            let _ = writeln!(out, "  ... and {} more", logs.len() - STATUS_LOG_LIMIT);
        }
    }
    out
}

/// A titled list of foods with their per-100 g profiles.
pub fn render_food_list(foods: &[&Food], title: &str) -> String {
    if foods.is_empty() {
        return format!("{}: (none)\n", title);
    }

    let mut out = format!("=== {} ({} items) ===\n", title, foods.len());
    for food in foods {
        let _ = writeln!(
            out,
            "  {} - {} cal, P:{} C:{} F:{} per 100g",
            title_case(&food.name),
            food.calories_per_100g,
            food.protein_per_100g,
            food.carbs_per_100g,
            food.fat_per_100g
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::summarize;
    use crate::models::{Consumed, NutrientProfile};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chicken breast"), "Chicken Breast");
        assert_eq!(title_case("  greek   yogurt "), "Greek Yogurt");
    }

    #[test]
    fn test_render_suggestions_remaining_can_go_negative() {
        let suggestions = vec![Suggestion {
            food_id: 1,
            food_name: "donut".to_string(),
            amount: 100.0,
            macros: Macros::new(450.0, 5.0, 50.0, 25.0),
        }];
        let out = render_suggestions(&suggestions, &Remaining::new(400.0, 10.0, 60.0, 20.0));
        assert!(out.contains("Donut: 100g"));
        assert!(out.contains("Calories: -50"));
        assert!(out.contains("Fat:      -5.0g"));
    }

    #[test]
    fn test_render_empty_suggestions() {
        let out = render_suggestions(&[], &Remaining::ZERO);
        assert!(out.contains("all set"));
    }

    #[test]
    fn test_render_status_truncates_logs() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let progress = summarize(
            &Target::new(2000.0, 150.0, 160.0, 60.0),
            &Consumed::new(1100.0, 75.0, 0.0, 60.0),
        );
        let logs: Vec<(String, f64)> = (0..7).map(|i| (format!("food {}", i), 100.0)).collect();

        let out = render_status(date, &progress, &logs);
        assert!(out.contains("May 01, 2024"));
        assert!(out.contains("[█████░░░░░] 55.0%"));
        assert!(out.contains("[██████████] 100.0%"));
        assert!(out.contains("... and 2 more"));
        assert!(!out.contains("Food 5"));
    }

    #[test]
    fn test_render_food_list() {
        let food = Food::new(1, "apple", NutrientProfile::new(52.0, 0.3, 14.0, 0.2));
        let out = render_food_list(&[&food], "Foods");
        assert!(out.contains("=== Foods (1 items) ==="));
        assert!(out.contains("Apple - 52 cal"));
        assert_eq!(render_food_list(&[], "Foods"), "Foods: (none)\n");
    }
}
