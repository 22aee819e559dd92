use dialoguer::{Confirm, Input};

use crate::error::{FeedError, Result};
use crate::models::{Composition, DietProblem, Ingredient, DEFAULT_SIGMA};

/// Prompt for a number with a default value.
fn prompt_f64(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| FeedError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the four shares of a composition.
fn prompt_composition(what: &str, defaults: Composition) -> Result<Composition> {
    Ok(Composition::new(
        prompt_f64(&format!("{what} muscle share (0.0-1.0)"), defaults.muscle)?,
        prompt_f64(&format!("{what} organ share (0.0-1.0)"), defaults.organ)?,
        prompt_f64(&format!("{what} heart share (0.0-1.0)"), defaults.heart)?,
        prompt_f64(&format!("{what} bone share (0.0-1.0)"), defaults.bone)?,
    ))
}

/// Prompt for one ingredient. An empty name finishes the list.
fn prompt_ingredient(index: usize) -> Result<Option<Ingredient>> {
    let name: String = Input::new()
        .with_prompt(format!(
            "Ingredient {} name (press Enter to finish)",
            index + 1
        ))
        .allow_empty(true)
        .interact_text()?;

    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let composition = prompt_composition("Ingredient", Composition::default())?;
    let weight_conversion = prompt_f64("Weight delivered per unit", 1.0)?;

    Ok(Some(Ingredient::new(
        Some(name.to_string()),
        composition,
        weight_conversion,
    )))
}

/// Collect a full blend problem from the terminal.
pub fn collect_problem() -> Result<DietProblem> {
    let target = prompt_composition(
        "Target",
        Composition::new(0.75, 0.10, 0.05, 0.10),
    )?;
    let target_weight = prompt_f64("Target total weight", 4.0)?;
    let sigma = prompt_f64("Tolerance sigma", DEFAULT_SIGMA)?;

    println!();
    println!("Enter ingredients (at least one).");

    let mut ingredients = Vec::new();
    while let Some(ingredient) = prompt_ingredient(ingredients.len())? {
        ingredients.push(ingredient);
    }

    let mut problem = DietProblem::new(target, target_weight, ingredients);
    problem.sigma = sigma;
    Ok(problem)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
