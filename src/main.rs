use std::io::IsTerminal;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;

use macro_buddy_rs::cli::{Cli, Command, InventoryCommand};
use macro_buddy_rs::engine::scale;
use macro_buddy_rs::error::{MacroError, Result};
use macro_buddy_rs::interface::{
    prompt_food_match, prompt_yes_no, render_food_list, render_goals, render_inventory,
    render_logged, render_status, render_suggestions, title_case,
};
use macro_buddy_rs::logging;
use macro_buddy_rs::models::{NutrientProfile, Target};
use macro_buddy_rs::state::{load_state, save_state, MacroTracker};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);
    let today = Local::now().date_naive();

    match command {
        Command::Goal {
            calories,
            protein,
            carbs,
            fat,
        } => cmd_goal(path, Target::new(calories, protein, carbs, fat)),
        Command::Log { food, amount } => cmd_log(path, &food, amount, today),
        Command::Inventory { action } => match action.unwrap_or_default() {
            InventoryCommand::Add { food, amount } => cmd_inventory_add(path, &food, amount),
            InventoryCommand::List => cmd_inventory_list(path),
        },
        Command::Suggest { max, eat } => cmd_suggest(path, max, eat, today),
        Command::Status => cmd_status(path, today),
        Command::Foods { query } => cmd_foods(path, query.as_deref()),
        Command::AddFood {
            name,
            calories,
            protein,
            carbs,
            fat,
        } => cmd_add_food(path, &name, NutrientProfile::new(calories, protein, carbs, fat)),
    }
}

fn interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Resolve a user-typed food name to a catalogue name.
///
/// Falls back to "did you mean" candidates: confirmed interactively on a
/// terminal, listed in the error otherwise.
fn resolve_food(tracker: &MacroTracker, query: &str) -> Result<String> {
    if let Some(food) = tracker.find_food(query) {
        return Ok(food.name.clone());
    }

    let candidates = tracker.similar_foods(query);
    if candidates.is_empty() {
        return Err(MacroError::FoodNotFound(format!(
            "{} (see `foods` for the catalogue, or `add-food` to create it)",
            query
        )));
    }

    if interactive() {
        if let Some(name) = prompt_food_match(query, &candidates)? {
            return Ok(name);
        }
        return Err(MacroError::FoodNotFound(query.to_string()));
    }

    let names: Vec<String> = candidates.iter().map(|f| f.name.clone()).collect();
    Err(MacroError::FoodNotFound(format!(
        "{} (did you mean: {}?)",
        query,
        names.join(", ")
    )))
}

/// Set the daily targets.
fn cmd_goal(path: &Path, goals: Target) -> Result<()> {
    let mut tracker = load_state(path)?;
    tracker.set_goals(goals)?;
    save_state(path, &tracker)?;

    println!("Goals set.");
    print!("{}", render_goals(&tracker.goals()));
    Ok(())
}

/// Log food eaten today.
fn cmd_log(path: &Path, query: &str, amount: f64, today: NaiveDate) -> Result<()> {
    let mut tracker = load_state(path)?;
    let name = resolve_food(&tracker, query)?;
    tracker.log_food(&name, amount, today)?;
    save_state(path, &tracker)?;

    if let Some(food) = tracker.find_food(&name) {
        let macros = scale(&food.profile(), amount);
        print!("{}", render_logged(food, amount, &macros));
    }
    Ok(())
}

fn cmd_inventory_add(path: &Path, query: &str, amount: f64) -> Result<()> {
    let mut tracker = load_state(path)?;
    let name = resolve_food(&tracker, query)?;
    let total = tracker.add_to_inventory(&name, amount)?;
    save_state(path, &tracker)?;

    println!(
        "Added {}g of {} to inventory ({:.0}g on hand).",
        amount,
        title_case(&name),
        total
    );
    Ok(())
}

fn cmd_inventory_list(path: &Path) -> Result<()> {
    let tracker = load_state(path)?;
    print!("{}", render_inventory(&tracker.inventory_items()));
    Ok(())
}

/// Suggest a meal from inventory, optionally eating it.
fn cmd_suggest(path: &Path, max: usize, eat: bool, today: NaiveDate) -> Result<()> {
    let mut tracker = load_state(path)?;

    if tracker.inventory_items().is_empty() {
        println!("No foods in inventory. Add some with `inventory add <food> <amount>`.");
        return Ok(());
    }

    let suggestions = tracker.suggest_on(today, max)?;
    print!(
        "{}",
        render_suggestions(&suggestions, &tracker.remaining_on(today))
    );

    if suggestions.is_empty() {
        return Ok(());
    }

    let eat = eat || (interactive() && prompt_yes_no("Eat this meal now?", false)?);
    if eat {
        tracker.eat_suggestions(&suggestions, today)?;
        save_state(path, &tracker)?;
        println!("Logged {} foods and updated inventory.", suggestions.len());
    }
    Ok(())
}

/// Show today's progress.
fn cmd_status(path: &Path, today: NaiveDate) -> Result<()> {
    let tracker = load_state(path)?;
    let progress = tracker.progress_on(today);

    let logs: Vec<(String, f64)> = tracker
        .logs_on(today)
        .into_iter()
        .filter_map(|entry| {
            tracker
                .food_by_id(entry.food_id)
                .map(|food| (food.name.clone(), entry.amount_grams))
        })
        .collect();

    print!("{}", render_status(today, &progress, &logs));
    Ok(())
}

fn cmd_foods(path: &Path, query: Option<&str>) -> Result<()> {
    let tracker = load_state(path)?;
    match query {
        Some(q) => print!(
            "{}",
            render_food_list(&tracker.similar_foods(q), &format!("Foods matching '{}'", q))
        ),
        None => print!("{}", render_food_list(&tracker.all_foods(), "Foods")),
    }
    Ok(())
}

fn cmd_add_food(path: &Path, name: &str, profile: NutrientProfile) -> Result<()> {
    let mut tracker = load_state(path)?;
    let id = tracker.add_food(name, profile)?.id;
    save_state(path, &tracker)?;

    println!("Added {} to the catalogue (id {}).", title_case(name), id);
    Ok(())
}
