//! Externally driven annealing step engine.

use super::config::SolverConfig;
use super::types::{AnnealingPolicy, Configuration, RngPolicy, ScoringEnvironment};
use crate::error::SolverError;
use rand::rngs::StdRng;

/// Simulated-annealing solver driven one step at a time.
///
/// Holds the best-known configuration, the iteration counter indexing
/// the cooling schedule, and the injected randomness policy. The
/// caller invokes [`step`](Self::step) once per discrete time unit;
/// the solver runs no loop of its own. Not thread-safe: a single
/// logical thread of control is expected.
///
/// # Examples
///
/// ```
/// use anneal_assign::assignment::AssignmentMatrix;
/// use anneal_assign::solver::{ConfigurationSolver, SolverConfig};
///
/// let env = AssignmentMatrix::from_weights(vec![
///     vec![1.0, 8.0],
///     vec![6.0, 2.0],
/// ])?;
/// let config = SolverConfig::default().with_seed(42);
/// let mut solver = ConfigurationSolver::new(env, &config)?;
///
/// for _ in 0..100 {
///     solver.step()?;
/// }
/// println!("best: {}", solver.best_configuration());
/// # Ok::<(), anneal_assign::SolverError>(())
/// ```
#[derive(Debug)]
pub struct ConfigurationSolver<E, P = RngPolicy<StdRng>> {
    env: E,
    config: SolverConfig,
    best: Configuration,
    iteration: u64,
    policy: P,
}

impl<E: ScoringEnvironment> ConfigurationSolver<E> {
    /// Creates a solver with the production random policy, seeded from
    /// the config (OS entropy when no seed is given).
    ///
    /// Rejects environments with fewer than two workers: the
    /// transposition move has no neighborhood there and its distinct
    /// index draw would never terminate.
    pub fn new(env: E, config: &SolverConfig) -> Result<Self, SolverError> {
        let policy = match config.seed {
            Some(seed) => RngPolicy::seeded(seed),
            None => RngPolicy::from_entropy(),
        };
        Self::with_policy(env, config, policy)
    }
}

impl<E: ScoringEnvironment, P: AnnealingPolicy> ConfigurationSolver<E, P> {
    /// Creates a solver with a caller-supplied randomness policy.
    pub fn with_policy(env: E, config: &SolverConfig, policy: P) -> Result<Self, SolverError> {
        config.validate()?;
        let n = env.num_workers();
        if n < 2 {
            return Err(SolverError::InvalidProblemSize { n });
        }
        Ok(Self {
            best: Configuration::identity(n),
            env,
            config: config.clone(),
            iteration: 1,
            policy,
        })
    }

    /// Performs one annealing step and returns the step's candidate.
    ///
    /// The candidate is a transposition of the best configuration. It
    /// replaces the best configuration when it scores strictly higher,
    /// or otherwise with the Metropolis probability
    /// `exp(delta / temperature)`. The candidate is returned whether or
    /// not it was accepted.
    ///
    /// Once the temperature has underflowed to zero the solver is
    /// frozen: the step becomes a no-op that returns the best
    /// configuration, and the best configuration never changes again.
    ///
    /// A scoring failure is propagated untouched and leaves the solver
    /// state (including the iteration counter) exactly as it was.
    pub fn step(&mut self) -> Result<Configuration, SolverError> {
        let temperature = self.temperature();
        if temperature == 0.0 {
            self.iteration += 1;
            return Ok(self.best.clone());
        }

        let best_score = self.score(&self.best)?;
        let (a, b) = self.policy.draw_swap(self.best.len());
        let candidate = self.best.swapped(a, b);
        let delta = self.score(&candidate)? - best_score;

        if delta > 0.0 || self.policy.accept((delta / temperature).exp()) {
            self.best = candidate.clone();
        }
        self.iteration += 1;
        Ok(candidate)
    }

    /// The best-known configuration. Valid before any step, where it
    /// is the identity permutation.
    pub fn best_configuration(&self) -> &Configuration {
        &self.best
    }

    /// Current value of the cooling-schedule index. Starts at 1 and
    /// advances once per completed step; never reset.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Temperature the next step will anneal at, derived fresh from
    /// the iteration counter. Exactly zero means frozen.
    pub fn temperature(&self) -> f64 {
        self.config.initial_temperature * self.config.cooling_rate.powf(self.iteration as f64)
    }

    /// The scoring environment the solver searches over.
    pub fn environment(&self) -> &E {
        &self.env
    }

    fn score(&self, configuration: &Configuration) -> Result<f64, SolverError> {
        self.env.score(configuration).map_err(SolverError::Scoring)
    }
}
