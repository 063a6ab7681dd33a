//! Solver entry point that hides all internal wiring.

use std::fmt;
use std::path::Path;

use armada_config::{RestartMode, SolverConfig};
use armada_core::{Result, Solution};
use armada_solver::{solve_problem, CombatScorer, Problem};

/// A configured solver, reusable across problems.
///
/// Settings come from a [`SolverConfig`]; the combat scorer is optional and
/// required only when a minimum combat score is set.
#[derive(Default)]
pub struct Armada {
    config: SolverConfig,
    scorer: Option<Box<dyn CombatScorer>>,
}

impl Armada {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SolverConfig) -> Self {
        Self {
            config,
            scorer: None,
        }
    }

    /// Loads settings from `path`, falling back to defaults when the file
    /// is missing or invalid.
    pub fn load(path: impl AsRef<Path>) -> Self {
        Self::from_config(SolverConfig::load(path).unwrap_or_default())
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_random_seed(seed);
        self
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.config = self.config.with_restarts(restarts);
        self
    }

    pub fn with_swap_iterations(mut self, swap_iterations: usize) -> Self {
        self.config = self.config.with_swap_iterations(swap_iterations);
        self
    }

    pub fn with_restart_mode(mut self, mode: RestartMode) -> Self {
        self.config = self.config.with_restart_mode(mode);
        self
    }

    pub fn with_min_combat_score(mut self, min: f64) -> Self {
        self.config = self.config.with_min_combat_score(min);
        self
    }

    pub fn with_combat_scorer(mut self, scorer: impl CombatScorer + 'static) -> Self {
        self.scorer = Some(Box::new(scorer));
        self
    }

    /// Solves `problem` with the current settings.
    ///
    /// With the `console` feature, console logging is installed on first use.
    pub fn solve(&self, problem: &Problem) -> Result<Solution> {
        #[cfg(feature = "console")]
        armada_console::init();

        solve_problem(problem, &self.config, self.scorer.as_deref())
    }
}

impl fmt::Debug for Armada {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Armada")
            .field("config", &self.config)
            .field("combat_scorer", &self.scorer.is_some())
            .finish()
    }
}
