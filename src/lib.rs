//! Simulated-annealing search for the linear assignment problem.
//!
//! N workers must each be assigned exactly one of N tasks, and each
//! worker/task pairing carries a value. The goal is a configuration
//! (a permutation of task indices) that maximizes the summed value.
//! Brute force is exact but explores N! permutations; this crate
//! instead anneals: a single-solution trajectory search that accepts
//! worsening moves with a probability decaying over time, trading
//! exactness for tractability.
//!
//! Unlike a conventional run-to-completion annealer, the solver here
//! is *externally driven*: a caller invokes exactly one annealing step
//! per discrete time unit, and the solver keeps no loop or timer of
//! its own. Optimality is never guaranteed, only statistically favored.
//!
//! # Architecture
//!
//! - [`solver`]: the annealing core (cooling schedule, transposition
//!   move, Metropolis acceptance). Talks to the outside world only
//!   through the [`solver::ScoringEnvironment`] trait.
//! - [`assignment`]: a concrete scoring environment backed by a
//!   worker-value vector and a worker×task weight matrix.
//! - [`simulation`]: a driver that runs one step per time unit and
//!   collects the outcome into a report.

pub mod assignment;
pub mod error;
pub mod simulation;
pub mod solver;

pub use error::SolverError;
