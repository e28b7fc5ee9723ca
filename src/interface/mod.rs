pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_match, prompt_yes_no};
pub use render::{
    render_food_list, render_goals, render_inventory, render_logged, render_status,
    render_suggestions, title_case,
};
