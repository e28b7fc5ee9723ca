use clap::{Parser, Subcommand};

use crate::engine::constants::DEFAULT_MAX_SUGGESTIONS;

/// Macro Buddy: track daily macros and get meal suggestions from what you have.
#[derive(Parser, Debug)]
#[command(name = "macro_buddy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the state JSON file.
    #[arg(short, long, env = "MACRO_BUDDY_FILE", default_value = "macro_buddy.json")]
    pub file: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Set daily macro targets.
    Goal {
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    },

    /// Log food eaten today, in grams.
    Log { food: String, amount: f64 },

    /// Manage the foods you have on hand.
    Inventory {
        #[command(subcommand)]
        action: Option<InventoryCommand>,
    },

    /// Suggest what to eat next from your inventory.
    Suggest {
        /// Maximum number of foods to suggest.
        #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
        max: usize,

        /// Log the suggestion as eaten and take it out of inventory.
        #[arg(long)]
        eat: bool,
    },

    /// Show today's progress.
    #[default]
    Status,

    /// List the food catalogue, or search it.
    Foods { query: Option<String> },

    /// Add a food to the catalogue (values per 100 g).
    AddFood {
        name: String,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    },
}

#[derive(Subcommand, Debug, Default)]
pub enum InventoryCommand {
    /// Add grams of a food to the inventory.
    Add { food: String, amount: f64 },

    /// Show the current inventory.
    #[default]
    List,
}
