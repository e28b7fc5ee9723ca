pub mod food;
pub mod inventory;
pub mod macros;
pub mod suggestion;

pub use food::Food;
pub use inventory::{ConsumptionEvent, InventoryItem};
pub use macros::{Consumed, Macros, NutrientProfile, Remaining, Target};
pub use suggestion::Suggestion;
