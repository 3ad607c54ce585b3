//! Time-step driver for the annealing solver.
//!
//! Runs one annealing step per discrete time unit and collects the
//! outcome into a [`SimulationReport`]. A scoring failure during a
//! step is treated as "no update this time step": it is logged,
//! counted, and the run continues. That policy belongs to the driver;
//! the solver itself only propagates the failure.

mod config;
mod runner;

pub use config::SimulationConfig;
pub use runner::{SimulationReport, SimulationRunner};
