use thiserror::Error;

/// Errors raised by distribution construction and the Monte Carlo estimators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A constructor or estimator argument is outside its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The distribution does not implement the requested operation,
    /// e.g. sampling from an unnormalized target-only density.
    #[error("{distribution} does not support {operation}")]
    Unsupported {
        distribution: &'static str,
        operation: &'static str,
    },

    /// The rejection loop hit its configured attempt limit.
    #[error(
        "rejection sampling gave up after {attempts} attempts ({accepted} of {requested} samples accepted)"
    )]
    AttemptsExhausted {
        attempts: usize,
        accepted: usize,
        requested: usize,
    },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
