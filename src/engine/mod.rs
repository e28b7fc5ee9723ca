//! Pure macro arithmetic, greedy meal allocation, and progress summaries.
//!
//! Nothing here performs I/O or holds state between calls.

pub mod allocator;
pub mod arithmetic;
pub mod constants;
pub mod progress;

pub use allocator::{optimal_amount, suggest_meal};
pub use arithmetic::{accumulate, remaining, scale};
pub use constants::*;
pub use progress::{format_progress_bar, percentage, summarize, DailyProgress, NutrientProgress};
