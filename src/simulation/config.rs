//! Simulation driver configuration.

use crate::error::SolverError;
use crate::solver::SolverConfig;

/// Configuration for a simulation run.
///
/// # Examples
///
/// ```
/// use anneal_assign::simulation::SimulationConfig;
/// use anneal_assign::solver::SolverConfig;
///
/// let config = SimulationConfig::default()
///     .with_time_steps(500)
///     .with_solver(SolverConfig::default().with_seed(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of discrete time steps, one solver step each.
    pub time_steps: usize,

    /// Solver parameters for the run.
    pub solver: SolverConfig,

    /// Whether per-step scoring failures are logged as warnings. They
    /// are counted in the report either way.
    pub log_step_failures: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_steps: 200,
            solver: SolverConfig::default(),
            log_step_failures: true,
        }
    }
}

impl SimulationConfig {
    pub fn with_time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = time_steps;
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_log_step_failures(mut self, log: bool) -> Self {
        self.log_step_failures = log;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        self.solver.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.time_steps, 200);
        assert!(config.log_step_failures);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_delegates_to_solver() {
        let config = SimulationConfig::default()
            .with_solver(SolverConfig::default().with_cooling_rate(0.0));
        assert!(config.validate().is_err());
    }
}
