use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};
use crate::models::ingredient::{check_share, Composition, Ingredient};
use crate::solver::{build_model, LpSolver};

/// Default tolerance between target and achieved shares.
pub const DEFAULT_SIGMA: f64 = 0.05;

/// An optimum delivering no weight carries no blend; below this it is
/// reported as infeasible instead of dividing achieved shares by ~0.
const MIN_ACHIEVED_WEIGHT: f64 = 1e-9;

/// Achieved totals of a successful solve. All fields are populated in the
/// same solve call, so they are present together or absent together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendOutcome {
    /// Total delivered weight (the objective value).
    pub total_weight: f64,

    /// Achieved muscle/organ/heart/bone shares of the blend.
    pub composition: Composition,
}

/// The blend request: target composition, target weight, tolerance, and an
/// ordered list of candidate ingredients.
///
/// `validate` is a read-only well-formedness check; `solve` owns all
/// derived state (the outcome here and each ingredient's quantity) and
/// clears it at the start of every attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietProblem {
    #[serde(rename = "Targets")]
    pub target: Composition,

    #[serde(rename = "TargetWeight")]
    pub target_weight: f64,

    #[serde(rename = "Sigma", default = "default_sigma")]
    pub sigma: f64,

    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<Ingredient>,

    #[serde(skip)]
    outcome: Option<BlendOutcome>,
}

fn default_sigma() -> f64 {
    DEFAULT_SIGMA
}

impl DietProblem {
    pub fn new(target: Composition, target_weight: f64, ingredients: Vec<Ingredient>) -> Self {
        Self {
            target,
            target_weight,
            sigma: DEFAULT_SIGMA,
            ingredients,
            outcome: None,
        }
    }

    /// The achieved totals, absent until a solve succeeds.
    pub fn outcome(&self) -> Option<&BlendOutcome> {
        self.outcome.as_ref()
    }

    /// Check that the problem is well-formed without mutating it.
    ///
    /// Order matters for callers that assert on error identity: target
    /// weight, then the target share sum, then each target share, then the
    /// ingredient count, then each ingredient in list order (which applies
    /// the same field order internally).
    pub fn validate(&self) -> Result<()> {
        if self.target_weight <= 0.0 {
            return Err(FeedError::OutOfRange {
                field: "target weight",
                expected: "greater than 0",
                value: self.target_weight,
            });
        }
        if !self.target.is_normalized() {
            return Err(FeedError::InvalidModel(format!(
                "target shares must sum to between 0.99 and 1.01 (got {:.4})",
                self.target.sum()
            )));
        }
        for (field, value) in Composition::COMPONENTS
            .into_iter()
            .zip(self.target.as_array())
        {
            check_share(field, value)?;
        }
        if self.ingredients.is_empty() {
            return Err(FeedError::InvalidModel(
                "at least one ingredient is required".to_string(),
            ));
        }
        for ingredient in &self.ingredients {
            ingredient.validate()?;
        }
        Ok(())
    }

    /// Maximize delivered weight with the injected backend and map the
    /// solution back onto the problem.
    ///
    /// Callers are expected to `validate` first; an ill-formed problem fed
    /// straight to a backend has no defined numeric behavior. On any
    /// non-feasible answer every derived field is left absent and
    /// `FeedError::Infeasible` is returned; the caller may adjust inputs
    /// and retry.
    pub fn solve<S: LpSolver>(&mut self, backend: S) -> Result<f64> {
        self.reset();

        let model = build_model(self);
        let lp = backend.solve(&model).map_err(|_| FeedError::Infeasible)?;

        if lp.objective <= MIN_ACHIEVED_WEIGHT {
            return Err(FeedError::Infeasible);
        }
        debug_assert_eq!(lp.values.len(), self.ingredients.len());

        // Quantities map back strictly by list position.
        let mut totals = [0.0_f64; 4];
        for (ingredient, &quantity) in self.ingredients.iter_mut().zip(&lp.values) {
            ingredient.quantity = Some(quantity);
            for (total, share) in totals.iter_mut().zip(ingredient.composition.as_array()) {
                *total += quantity * share;
            }
        }

        let achieved = Composition::from_array(totals.map(|t| t / lp.objective));
        self.outcome = Some(BlendOutcome {
            total_weight: lp.objective,
            composition: achieved,
        });

        Ok(lp.objective)
    }

    /// Drop every derived field from a previous attempt.
    fn reset(&mut self) {
        self.outcome = None;
        for ingredient in &mut self.ingredients {
            ingredient.quantity = None;
        }
    }
}
