use crate::models::{Composition, DietProblem};
use crate::solver::model::{ConstraintOp, LpModel, Sense};

/// Translate a blend problem into a linear program.
///
/// One non-negative continuous variable per ingredient, column-aligned
/// with the ingredient list; the objective maximizes total delivered
/// weight. The constraint count is fixed at 10: the weight band plus a
/// lower and upper ratio constraint per component. Ratio constraints are
/// normalized by the quantity sum rather than the delivered weight, moved
/// to one side so the program stays linear:
///
///   sum(x_i * f_i) - (target ± sigma) * sum(x_i)  >=|<=  0
pub fn build_model(problem: &DietProblem) -> LpModel {
    let mut model = LpModel::new(Sense::Maximize);

    for (i, ingredient) in problem.ingredients.iter().enumerate() {
        model.add_variable(
            format!("x_{i}"),
            ingredient.weight_conversion,
            0.0,
            f64::INFINITY,
        );
    }

    let weights: Vec<f64> = problem
        .ingredients
        .iter()
        .map(|item| item.weight_conversion)
        .collect();
    model.add_constraint(
        "weight_lb",
        weights.clone(),
        ConstraintOp::Ge,
        problem.target_weight - problem.sigma,
    );
    model.add_constraint("weight_ub", weights, ConstraintOp::Le, problem.target_weight);

    let targets = problem.target.as_array();
    for (c, component) in Composition::COMPONENTS.into_iter().enumerate() {
        let shares: Vec<f64> = problem
            .ingredients
            .iter()
            .map(|item| item.composition.as_array()[c])
            .collect();

        let lower: Vec<f64> = shares
            .iter()
            .map(|share| share - (targets[c] - problem.sigma))
            .collect();
        model.add_constraint(format!("{component}_lb"), lower, ConstraintOp::Ge, 0.0);

        let upper: Vec<f64> = shares
            .iter()
            .map(|share| share - (targets[c] + problem.sigma))
            .collect();
        model.add_constraint(format!("{component}_ub"), upper, ConstraintOp::Le, 0.0);
    }

    model
}
