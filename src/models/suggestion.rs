use serde::Serialize;

use crate::models::macros::Macros;

/// One advisory pick from the allocator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub food_id: u32,
    pub food_name: String,

    /// Grams to eat, rounded to one decimal place.
    pub amount: f64,

    /// Macros that `amount` yields.
    pub macros: Macros,
}
