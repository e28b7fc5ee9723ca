use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Food already exists: {0}")]
    DuplicateFood(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not enough {food} in inventory: requested {requested}g, have {available}g")]
    InsufficientInventory {
        food: String,
        requested: f64,
        available: f64,
    },
}

pub type Result<T> = std::result::Result<T, MacroError>;
