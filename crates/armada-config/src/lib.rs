//! Configuration system for Armada.
//!
//! Load solver configuration from TOML or YAML files to control the seed,
//! restart budget, swap budget and combat threshold without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use armada_config::{RestartMode, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!     restarts = 20
//!     swap_iterations = 100
//!     min_combat_score = 3.5
//!     restart_mode = "parallel"
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, 7);
//! assert_eq!(config.restarts, 20);
//! assert_eq!(config.restart_mode, RestartMode::Parallel);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use armada_config::SolverConfig;
//!
//! let config = SolverConfig::load("armada.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of greedy restart attempts.
pub const DEFAULT_RESTARTS: usize = 50;

/// Default swap-improvement iteration budget per attempt.
pub const DEFAULT_SWAP_ITERATIONS: usize = 200;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results.
    pub random_seed: u64,

    /// Number of randomized construction attempts (at least one always runs).
    pub restarts: usize,

    /// Maximum swap sweeps per attempt during local search.
    pub swap_iterations: usize,

    /// Minimum combat score an attempt must reach to be kept.
    pub min_combat_score: Option<f64>,

    /// How restart attempts are scheduled.
    pub restart_mode: RestartMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            random_seed: 0,
            restarts: DEFAULT_RESTARTS,
            swap_iterations: DEFAULT_SWAP_ITERATIONS,
            min_combat_score: None,
            restart_mode: RestartMode::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot drive a solve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min) = self.min_combat_score {
            if !min.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "min_combat_score must be finite, got {min}"
                )));
            }
            if min < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "min_combat_score cannot be negative, got {min}"
                )));
            }
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Sets the restart budget.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Sets the swap iteration budget.
    pub fn with_swap_iterations(mut self, swap_iterations: usize) -> Self {
        self.swap_iterations = swap_iterations;
        self
    }

    /// Sets the combat score minimum.
    pub fn with_min_combat_score(mut self, min: f64) -> Self {
        self.min_combat_score = Some(min);
        self
    }

    /// Sets the restart scheduling mode.
    pub fn with_restart_mode(mut self, mode: RestartMode) -> Self {
        self.restart_mode = mode;
        self
    }

    /// Returns the number of attempts that will actually run.
    ///
    /// # Examples
    ///
    /// ```
    /// use armada_config::SolverConfig;
    ///
    /// assert_eq!(SolverConfig::new().with_restarts(0).effective_restarts(), 1);
    /// assert_eq!(SolverConfig::new().with_restarts(8).effective_restarts(), 8);
    /// ```
    pub fn effective_restarts(&self) -> usize {
        self.restarts.max(1)
    }
}

/// Restart scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartMode {
    /// All attempts draw from one shared random stream, in order.
    #[default]
    Sequential,

    /// Attempts run on the rayon pool, each on its own random stream
    /// derived from the seed and the attempt index.
    Parallel,
}

impl RestartMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartMode::Sequential => "sequential",
            RestartMode::Parallel => "parallel",
        }
    }
}

#[cfg(test)]
mod tests;
