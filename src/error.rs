/// Boxed error produced by an objective function.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Errors returned by the optimizer and its helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the objective function fails to score a guess.
    #[error("objective failed on guess {guess:?}")]
    Objective {
        /// The guess that was being scored.
        guess: Vec<f64>,
        /// The error returned by the objective.
        source: BoxError,
    },

    /// Returned when a configured vector does not have one entry per dimension.
    #[error("dimension mismatch: {what} has {got} entries, expected {expected}")]
    DimensionMismatch {
        /// Which configuration value is mismatched.
        what: &'static str,
        /// The configured number of dimensions.
        expected: usize,
        /// The actual length provided.
        got: usize,
    },

    /// Returned when two sequences that must be paired have different lengths.
    #[error("length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch {
        /// Length of the left sequence.
        left: usize,
        /// Length of the right sequence.
        right: usize,
    },

    /// Returned when the blocking task running an async optimization fails.
    #[cfg(feature = "async")]
    #[error("async task error: {0}")]
    TaskError(String),
}

/// A `Result` with [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;
