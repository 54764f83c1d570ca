use thiserror::Error;

/// Errors raised while validating or persisting change requests.
///
/// The solvers themselves never fail: an amount that cannot be formed is a
/// regular [`SolveResult`](crate::SolveResult) with `success == false`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid amount `{0}`: expected a non-negative integer")]
    InvalidAmount(String),

    #[error("invalid denomination `{0}`: expected a positive integer")]
    InvalidDenomination(String),

    #[error("denominations must be positive, got 0")]
    ZeroDenomination,

    #[error("amount {amount} exceeds the configured ceiling of {max}")]
    AmountTooLarge { amount: usize, max: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
