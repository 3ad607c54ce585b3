//! Weight-matrix scoring environment.

use crate::error::{ScoringError, SolverError};
use crate::solver::{Configuration, ScoringEnvironment};

/// A linear assignment instance: each worker carries a value and each
/// worker/task pairing a weight.
///
/// The fitness of a configuration is the sum over workers of
/// `value[worker] * weight[worker][assigned task]`. Higher is better.
///
/// # Examples
///
/// ```
/// use anneal_assign::assignment::AssignmentMatrix;
/// use anneal_assign::solver::{Configuration, ScoringEnvironment};
///
/// let env = AssignmentMatrix::from_weights(vec![
///     vec![4.0, 1.0],
///     vec![2.0, 3.0],
/// ])?;
/// let identity = Configuration::identity(2);
/// assert_eq!(env.score(&identity).unwrap(), 7.0);
/// # Ok::<(), anneal_assign::SolverError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentMatrix {
    values: Vec<f64>,
    weights: Vec<Vec<f64>>,
}

impl AssignmentMatrix {
    /// Builds an instance from per-worker values and a square
    /// worker×task weight matrix. Row count and every row length must
    /// equal the value count.
    pub fn new(values: Vec<f64>, weights: Vec<Vec<f64>>) -> Result<Self, SolverError> {
        let n = values.len();
        if weights.len() != n {
            return Err(SolverError::Config(format!(
                "weight matrix has {} rows, expected {n}",
                weights.len()
            )));
        }
        for (worker, row) in weights.iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::Config(format!(
                    "weight row {worker} has length {}, expected {n}",
                    row.len()
                )));
            }
        }
        Ok(Self { values, weights })
    }

    /// Builds an instance with unit worker values, so the score is the
    /// plain sum of assigned weights.
    pub fn from_weights(weights: Vec<Vec<f64>>) -> Result<Self, SolverError> {
        let values = vec![1.0; weights.len()];
        Self::new(values, weights)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }
}

impl ScoringEnvironment for AssignmentMatrix {
    fn num_workers(&self) -> usize {
        self.values.len()
    }

    fn score(&self, configuration: &Configuration) -> Result<f64, ScoringError> {
        if configuration.len() != self.values.len() {
            return Err(format!(
                "configuration length {} does not match problem size {}",
                configuration.len(),
                self.values.len()
            )
            .into());
        }
        Ok(configuration
            .as_slice()
            .iter()
            .enumerate()
            .map(|(worker, &task)| self.values[worker] * self.weights[worker][task])
            .sum())
    }
}
