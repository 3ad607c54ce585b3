//! Simulated-annealing core for the linear assignment problem.
//!
//! A single-solution trajectory search over the permutation space of
//! worker-to-task assignments. Worsening moves are accepted with a
//! probability that decays as the temperature cools, allowing the
//! search to escape local optima.
//!
//! The solver is externally driven: [`ConfigurationSolver::step`]
//! performs exactly one annealing step (temperature lookup, candidate
//! generation, acceptance test, state update) and returns the
//! candidate. The caller decides how many steps to run and when.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::SolverConfig;
pub use runner::ConfigurationSolver;
pub use types::{AnnealingPolicy, Configuration, RngPolicy, ScoringEnvironment};
