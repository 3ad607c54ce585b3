//! Core types and traits for the annealing solver.

use crate::error::{ScoringError, SolverError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An assignment of N workers to N tasks.
///
/// Position *i* is worker *i*; the value at position *i* is the task
/// assigned to that worker. The values are always a permutation of
/// `0..N-1`, so every task is assigned to exactly one worker. The type
/// is a value type: `current`, `candidate`, and `best` states are
/// independent copies and never alias.
///
/// # Examples
///
/// ```
/// use anneal_assign::solver::Configuration;
///
/// let identity = Configuration::identity(4);
/// assert_eq!(identity.as_slice(), &[0, 1, 2, 3]);
///
/// let swapped = identity.swapped(0, 2);
/// assert_eq!(swapped.as_slice(), &[2, 1, 0, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration(Vec<usize>);

impl Configuration {
    /// The identity assignment: worker *i* works task *i*.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Number of workers (and tasks).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The task assigned to `worker`.
    ///
    /// # Panics
    ///
    /// Panics if `worker >= len()`.
    pub fn task_of(&self, worker: usize) -> usize {
        self.0[worker]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// A copy with the assignments at positions `a` and `b` exchanged.
    ///
    /// A transposition of a permutation is itself a permutation, so
    /// the invariant is preserved by construction.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut values = self.0.clone();
        values.swap(a, b);
        Self(values)
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl TryFrom<Vec<usize>> for Configuration {
    type Error = SolverError;

    /// Accepts only a permutation of `0..values.len()`.
    fn try_from(values: Vec<usize>) -> Result<Self, SolverError> {
        let n = values.len();
        let mut seen = vec![false; n];
        for &task in &values {
            if task >= n || seen[task] {
                return Err(SolverError::Config(format!(
                    "assignment is not a permutation of 0..{n}"
                )));
            }
            seen[task] = true;
        }
        Ok(Self(values))
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// The problem the solver searches over.
///
/// Supplies the problem size and a fitness function. The solver
/// maximizes the score.
pub trait ScoringEnvironment {
    /// Number of workers N. Fixed for the environment's lifetime and
    /// equal to the length of every configuration scored.
    fn num_workers(&self) -> usize;

    /// The fitness of a configuration. Pure: no side effects, same
    /// score for the same configuration. Higher is better.
    ///
    /// A failure here is propagated by the solver untouched; it never
    /// recovers internally.
    fn score(&self, configuration: &Configuration) -> Result<f64, ScoringError>;
}

impl<E: ScoringEnvironment + ?Sized> ScoringEnvironment for &E {
    fn num_workers(&self) -> usize {
        (**self).num_workers()
    }

    fn score(&self, configuration: &Configuration) -> Result<f64, ScoringError> {
        (**self).score(configuration)
    }
}

/// Source of the solver's random decisions.
///
/// Separating the two draws behind a trait lets tests substitute
/// scripted moves and deterministic acceptance for the production
/// random source.
pub trait AnnealingPolicy {
    /// Two distinct positions in `[0, n)` for the transposition move.
    ///
    /// Callers guarantee `n >= 2`, so a distinct pair always exists.
    fn draw_swap(&mut self, n: usize) -> (usize, usize);

    /// Metropolis acceptance decision for the given probability.
    ///
    /// `probability` is in `(0, 1]` for non-improving moves; it may
    /// underflow to 0 near the frozen regime, in which case the move
    /// is effectively never accepted.
    fn accept(&mut self, probability: f64) -> bool;
}

/// Production policy backed by a pseudorandom generator.
///
/// The generator is owned by the policy and injected at solver
/// construction, so there is no hidden global randomness.
#[derive(Debug)]
pub struct RngPolicy<R: Rng> {
    rng: R,
}

impl<R: Rng> RngPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPolicy<StdRng> {
    /// A policy with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A policy seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> AnnealingPolicy for RngPolicy<R> {
    fn draw_swap(&mut self, n: usize) -> (usize, usize) {
        let first = self.rng.random_range(0..n);
        // Rejection sampling: redraw until the second index differs.
        let mut second = self.rng.random_range(0..n);
        while second == first {
            second = self.rng.random_range(0..n);
        }
        (first, second)
    }

    fn accept(&mut self, probability: f64) -> bool {
        self.rng.random_range(0.0..1.0) < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_configuration() {
        let cfg = Configuration::identity(5);
        assert_eq!(cfg.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(cfg.len(), 5);
        assert_eq!(cfg.task_of(3), 3);
    }

    #[test]
    fn test_swapped_exchanges_exactly_two_positions() {
        let cfg = Configuration::identity(5);
        let swapped = cfg.swapped(1, 3);
        assert_eq!(swapped.as_slice(), &[0, 3, 2, 1, 4]);
        // The original is untouched.
        assert_eq!(cfg.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_try_from_accepts_permutation() {
        let cfg = Configuration::try_from(vec![4, 1, 2, 3, 0]).unwrap();
        assert_eq!(cfg.task_of(0), 4);
    }

    #[test]
    fn test_try_from_rejects_duplicate_task() {
        assert!(Configuration::try_from(vec![0, 1, 1, 3]).is_err());
    }

    #[test]
    fn test_try_from_rejects_out_of_range_task() {
        assert!(Configuration::try_from(vec![0, 1, 4]).is_err());
    }

    #[test]
    fn test_display_matches_vec_format() {
        let cfg = Configuration::identity(3);
        assert_eq!(cfg.to_string(), "[0, 1, 2]");
    }

    #[test]
    fn test_rng_policy_draws_distinct_indices() {
        let mut policy = RngPolicy::seeded(42);
        for _ in 0..1000 {
            let (a, b) = policy.draw_swap(2);
            assert_ne!(a, b);
            assert!(a < 2 && b < 2);
        }
    }

    #[test]
    fn test_rng_policy_accept_extremes() {
        let mut policy = RngPolicy::seeded(42);
        for _ in 0..100 {
            // The uniform draw lives in [0, 1), so these are certain.
            assert!(policy.accept(1.0));
            assert!(!policy.accept(0.0));
        }
    }
}
