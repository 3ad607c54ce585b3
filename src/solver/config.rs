//! Solver configuration and cooling constants.

use crate::error::SolverError;

/// Configuration for the annealing solver.
///
/// Cooling is geometric: at iteration `t` the temperature is
/// `initial_temperature * cooling_rate^t`, strictly decreasing and
/// approaching zero. In finite-precision arithmetic the product
/// eventually underflows to exactly zero; that underflow is the
/// solver's defined frozen terminal state. With the default constants
/// it occurs a little under iteration 15 000.
///
/// # Examples
///
/// ```
/// use anneal_assign::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Initial temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// Geometric decay factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            seed: None,
        }
    }
}

impl SolverConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SolverError::Config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SolverError::Config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.95).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SolverConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_temperature() {
        let config = SolverConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2] {
            let config = SolverConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }
}
