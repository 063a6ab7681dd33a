//! Armada Core - Core types for constrained unit partitioning
//!
//! This crate provides the vocabulary shared by every Armada crate:
//! - Member ids and canonical unordered pairs
//! - Clusters (members that must always share a unit)
//! - The lexicographic attempt score
//! - The solution value and restart statistics
//! - The `SolveError` taxonomy

pub mod cluster;
pub mod error;
pub mod pair;
pub mod score;
pub mod solution;

pub use cluster::Cluster;
pub use error::{Result, SolveError};
pub use pair::{MemberId, Pair, PairSet};
pub use score::ArmadaScore;
pub use solution::{RestartStats, Solution};
