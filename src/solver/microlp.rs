//! Default backend built on [microlp](https://docs.rs/microlp), a pure
//! Rust simplex implementation.

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection};

use crate::solver::backend::{LpError, LpSolution, LpSolver};
use crate::solver::model::{ConstraintOp, LpModel, Sense};

/// The microlp backend. Stateless; construct one per solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Microlp;

impl LpSolver for Microlp {
    fn solve(self, model: &LpModel) -> Result<LpSolution, LpError> {
        let direction = match model.sense {
            Sense::Maximize => OptimizationDirection::Maximize,
            Sense::Minimize => OptimizationDirection::Minimize,
        };
        let mut problem = microlp::Problem::new(direction);

        let columns: Vec<microlp::Variable> = model
            .variables
            .iter()
            .map(|v| problem.add_var(v.objective, (v.min, v.max)))
            .collect();

        for constraint in &model.constraints {
            let mut expr = LinearExpr::empty();
            for (&column, &coefficient) in columns.iter().zip(&constraint.coefficients) {
                expr.add(column, coefficient);
            }
            let op = match constraint.op {
                ConstraintOp::Le => ComparisonOp::Le,
                ConstraintOp::Ge => ComparisonOp::Ge,
                ConstraintOp::Eq => ComparisonOp::Eq,
            };
            problem.add_constraint(expr, op, constraint.rhs);
        }

        let solution = problem.solve()?;
        Ok(LpSolution {
            objective: solution.objective(),
            values: columns.iter().map(|&column| solution[column]).collect(),
        })
    }
}

impl From<microlp::Error> for LpError {
    fn from(err: microlp::Error) -> Self {
        match err {
            microlp::Error::Unbounded => Self::Unbounded,
            microlp::Error::Infeasible => Self::Infeasible,
            microlp::Error::InternalError(message) => Self::Internal(message),
        }
    }
}
