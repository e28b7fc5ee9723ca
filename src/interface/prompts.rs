use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::interface::render::title_case;
use crate::models::Food;

/// Ask which catalogue food the user meant by `query`.
///
/// A single candidate gets a yes/no confirmation; several get a selection
/// list with a "None of these" escape. Returns the chosen food's name.
pub fn prompt_food_match(query: &str, candidates: &[&Food]) -> Result<Option<String>> {
    match candidates {
        [] => Ok(None),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!(
                    "'{}' not found. Did you mean '{}'?",
                    query,
                    title_case(&only.name)
                ))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| only.name.clone()))
        }
        many => {
            let mut options: Vec<String> = many.iter().map(|f| title_case(&f.name)).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt(format!("'{}' not found. Which did you mean?", query))
                .items(&options)
                .default(0)
                .interact()?;

            Ok(many.get(selection).map(|f| f.name.clone()))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
