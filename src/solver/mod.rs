mod backend;
mod build;
mod microlp;
mod model;

pub use backend::{LpError, LpSolution, LpSolver};
pub use build::build_model;
pub use microlp::Microlp;
pub use model::{ConstraintOp, LpConstraint, LpModel, LpVariable, Sense};
