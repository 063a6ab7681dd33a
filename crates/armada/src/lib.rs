//! Armada - Constrained Unit Partitioning in Rust
//!
//! Split a roster into fixed-size units, keeping as many rapport pairs
//! together as possible while honoring must-share and must-separate pairs.
//!
//! # Example
//!
//! ```rust
//! use armada::prelude::*;
//!
//! let problem = Problem::new(["alice", "bob", "charlie", "dave"], [2, 2])
//!     .with_rapport([("alice", "bob"), ("charlie", "dave")])
//!     .unwrap();
//!
//! let solution = Armada::new().with_random_seed(42).solve(&problem).unwrap();
//! assert_eq!(solution.total_rapports, 2);
//! ```

// Core types
pub use armada_core::{
    ArmadaScore, Cluster, MemberId, Pair, PairSet, RestartStats, Result, Solution, SolveError,
};

// Configuration
pub use armada_config::{ConfigError, RestartMode, SolverConfig};

// Engine entry points
pub use armada_solver::{
    rapport_pairs_in_unit, score_unit, solve, solve_problem, CombatScorer, Problem,
};

mod solver;
pub use solver::Armada;

#[cfg(feature = "console")]
pub use armada_console as console;

pub mod prelude {
    pub use super::{Armada, CombatScorer, Problem, Solution, SolveError};
    pub use super::{MemberId, Pair, PairSet, RestartMode, SolverConfig};
}
