use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// A single numeric field is outside its legal range.
    #[error("{field} must be {expected} (got {value})")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    /// A rule spanning several fields is violated (bad share sum, empty
    /// ingredient list).
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// The validated model admits no blend within the given tolerance.
    #[error("no feasible blend within the given tolerance")]
    Infeasible,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
