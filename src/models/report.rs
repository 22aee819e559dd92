use serde::Serialize;

use crate::models::ingredient::Composition;
use crate::models::problem::DietProblem;

/// One solved ingredient line: how many units to use and the weight they
/// deliver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientPortion {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Quantity")]
    pub quantity: f64,

    #[serde(rename = "Weight")]
    pub weight: f64,
}

/// The caller-facing shape of a solved blend: achieved totals next to the
/// targets they were solved against, plus one portion per ingredient in
/// the original list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendReport {
    #[serde(rename = "TotalWeight")]
    pub total_weight: f64,

    #[serde(rename = "Achieved")]
    pub achieved: Composition,

    #[serde(rename = "TargetWeight")]
    pub target_weight: f64,

    #[serde(rename = "Targets")]
    pub targets: Composition,

    #[serde(rename = "Sigma")]
    pub sigma: f64,

    #[serde(rename = "Ingredients")]
    pub portions: Vec<IngredientPortion>,
}

impl BlendReport {
    /// Build a report from a solved problem. Returns `None` when the
    /// problem has not been solved (or its last solve failed).
    pub fn from_problem(problem: &DietProblem) -> Option<Self> {
        let outcome = problem.outcome()?;

        let portions = problem
            .ingredients
            .iter()
            .enumerate()
            .map(|(i, ingredient)| {
                let quantity = ingredient.quantity().unwrap_or(0.0);
                IngredientPortion {
                    name: ingredient
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("ingredient {}", i + 1)),
                    quantity,
                    weight: quantity * ingredient.weight_conversion,
                }
            })
            .collect();

        Some(Self {
            total_weight: outcome.total_weight,
            achieved: outcome.composition,
            target_weight: problem.target_weight,
            targets: problem.target,
            sigma: problem.sigma,
            portions,
        })
    }
}
