//! Simulation execution loop.

use super::config::SimulationConfig;
use crate::error::SolverError;
use crate::solver::{Configuration, ConfigurationSolver, ScoringEnvironment};

/// Outcome of a simulation run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationReport {
    /// Candidate produced by the last successful step (the identity
    /// permutation when no step succeeded).
    pub final_candidate: Configuration,

    /// Score of the final candidate.
    pub final_candidate_score: f64,

    /// Best-known configuration when the run ended.
    pub best: Configuration,

    /// Score of the best-known configuration.
    pub best_score: f64,

    /// Time steps driven.
    pub time_steps: usize,

    /// Steps that failed in the scoring environment and were skipped.
    pub step_failures: usize,
}

/// Drives a solver one step per time unit over a scoring environment.
pub struct SimulationRunner;

impl SimulationRunner {
    /// Runs the simulation to completion and reports the outcome.
    ///
    /// Construction failures (bad config, N < 2) end the run
    /// immediately. A scoring failure inside a step only skips that
    /// time step; the final report scoring must succeed, so an
    /// environment that never recovers still fails the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use anneal_assign::assignment::AssignmentMatrix;
    /// use anneal_assign::simulation::{SimulationConfig, SimulationRunner};
    /// use anneal_assign::solver::SolverConfig;
    ///
    /// let env = AssignmentMatrix::from_weights(vec![
    ///     vec![1.0, 9.0, 2.0],
    ///     vec![8.0, 2.0, 3.0],
    ///     vec![2.0, 3.0, 7.0],
    /// ])?;
    /// let config = SimulationConfig::default()
    ///     .with_time_steps(300)
    ///     .with_solver(SolverConfig::default().with_seed(42));
    ///
    /// let report = SimulationRunner::run(env, &config)?;
    /// println!("best {} scored {}", report.best, report.best_score);
    /// # Ok::<(), anneal_assign::SolverError>(())
    /// ```
    pub fn run<E: ScoringEnvironment>(
        env: E,
        config: &SimulationConfig,
    ) -> Result<SimulationReport, SolverError> {
        let mut solver = ConfigurationSolver::new(env, &config.solver)?;
        let mut final_candidate = solver.best_configuration().clone();
        let mut step_failures = 0usize;

        for time_step in 1..=config.time_steps {
            match solver.step() {
                Ok(candidate) => final_candidate = candidate,
                Err(err) => {
                    step_failures += 1;
                    if config.log_step_failures {
                        log::warn!("solver step failed at time step {time_step}: {err}");
                    }
                }
            }
        }

        let best = solver.best_configuration().clone();
        let best_score = solver
            .environment()
            .score(&best)
            .map_err(SolverError::Scoring)?;
        let final_candidate_score = solver
            .environment()
            .score(&final_candidate)
            .map_err(SolverError::Scoring)?;

        Ok(SimulationReport {
            final_candidate,
            final_candidate_score,
            best,
            best_score,
            time_steps: config.time_steps,
            step_failures,
        })
    }
}
