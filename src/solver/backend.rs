use thiserror::Error;

use crate::solver::model::LpModel;

/// Why a backend produced no solution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LpError {
    /// No point satisfies every constraint.
    #[error("the problem is infeasible")]
    Infeasible,

    /// The objective can grow without bound.
    #[error("the problem is unbounded")]
    Unbounded,

    /// The backend itself failed.
    #[error("solver failure: {0}")]
    Internal(String),
}

/// A feasible answer: the objective value plus one value per variable, in
/// column order.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    pub objective: f64,
    pub values: Vec<f64>,
}

/// A linear-program backend.
///
/// Consumed by the solve so that a backend instance serves exactly one
/// solve and releases whatever it holds on every exit path. Implementors
/// need nothing beyond this single call: no warm starts, no
/// incrementality.
pub trait LpSolver {
    fn solve(self, model: &LpModel) -> Result<LpSolution, LpError>;
}
