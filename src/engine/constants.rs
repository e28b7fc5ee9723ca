/// Mass-units a nutrient profile is normalized to.
pub const PROFILE_BASIS: f64 = 100.0;

/// Upper portion cap for a single suggestion, in grams.
pub const MAX_PORTION: f64 = 500.0;

/// Default number of picks per suggestion.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Candidates examined per requested pick.
pub const LOOKAHEAD_FACTOR: usize = 2;

/// Cells in a rendered progress bar.
pub const PROGRESS_BAR_WIDTH: usize = 10;

pub const PROGRESS_FILLED: char = '█';
pub const PROGRESS_EMPTY: char = '░';

// ─────────────────────────────────────────────────────────────────────────────
// Default daily goals for a fresh state
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CALORIES_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_GOAL: f64 = 150.0;
pub const DEFAULT_CARBS_GOAL: f64 = 160.0;
pub const DEFAULT_FAT_GOAL: f64 = 60.0;
