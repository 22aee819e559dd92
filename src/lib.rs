pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;
pub mod state;

pub use error::{FeedError, Result};
pub use models::{Composition, DietProblem, Ingredient};
