mod persistence;
mod seed;
mod tracker;

pub use persistence::{load_state, save_state};
pub use seed::seed_foods;
pub use tracker::{default_goals, LogEntry, MacroTracker, StoredState};
