//! Armada Solver - Constrained unit partitioning engine
//!
//! This crate partitions a roster into fixed-capacity units, maximizing
//! co-located rapport pairs under hard whitelist and blacklist constraints:
//! - Whitelist closure into clusters (disjoint-set index)
//! - Placeholder padding and exact minimum-penalty trimming
//! - Randomized greedy construction and swap local search
//! - Restart orchestration with an optional combat scorer
//! - Sequential or rayon-parallel restart scheduling

pub mod assemble;
pub mod cluster;
pub mod disjoint_set;
pub mod metrics;
pub mod padding;
pub mod phase;
pub mod prepare;
pub mod problem;
pub mod restart;
pub mod scoring;
pub mod solve;
pub mod trim;

pub use armada_config::{RestartMode, SolverConfig};
pub use armada_core::{
    ArmadaScore, Cluster, MemberId, Pair, PairSet, RestartStats, Result, Solution, SolveError,
};
pub use metrics::ClusterMetrics;
pub use padding::{Placeholders, PLACEHOLDER_PREFIX};
pub use phase::{GreedyConstructor, SwapLocalSearch, UnitClusters, UnitState};
pub use prepare::PreparedProblem;
pub use problem::{Problem, ProblemView};
pub use restart::{CombatScorer, RestartRunner};
pub use scoring::{rapport_pairs_in_unit, score_unit};
pub use solve::{solve, solve_problem};
