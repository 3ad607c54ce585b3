//! Error types shared across the crate.

/// Boxed error produced by a scoring environment.
///
/// Environments carry their own failure types; the solver propagates
/// them without inspection.
pub type ScoringError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by solver construction, configuration, or stepping.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The environment reported fewer than two workers. The transposition
    /// move needs two distinct indices, so no neighborhood exists.
    #[error("problem size must be at least 2, got {n}")]
    InvalidProblemSize {
        /// The rejected worker count.
        n: usize,
    },

    /// A configuration parameter or input shape is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The scoring environment failed to evaluate a configuration.
    /// The solver performs no recovery; the caller decides policy.
    #[error("scoring failed: {0}")]
    Scoring(#[source] ScoringError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_problem_size_message() {
        let err = SolverError::InvalidProblemSize { n: 1 };
        assert_eq!(err.to_string(), "problem size must be at least 2, got 1");
    }

    #[test]
    fn test_scoring_wraps_source() {
        let inner: ScoringError = "weight lookup failed".into();
        let err = SolverError::Scoring(inner);
        assert!(err.to_string().contains("weight lookup failed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
