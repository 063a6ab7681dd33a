//! Per-attempt search phases.
//!
//! Each restart attempt runs the greedy construction phase and, when it
//! yields a feasible assignment, the swap-based local search phase.

pub mod construction;
pub mod local_search;

use smallvec::SmallVec;

/// Cluster indices placed in one unit.
pub type UnitClusters = SmallVec<[usize; 8]>;

pub use construction::{GreedyConstructor, UnitState};
pub use local_search::SwapLocalSearch;
