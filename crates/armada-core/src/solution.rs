//! Solver output.

use crate::pair::MemberId;

/// Counters for one solve call.
///
/// Per-attempt failures are expected outcomes of the randomized search, so
/// they are counted here instead of being raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartStats {
    /// Restart attempts run.
    pub attempts: usize,
    /// Attempts whose greedy construction found no feasible assignment.
    pub construction_failures: usize,
    /// Feasible attempts discarded for missing the combat score minimum.
    pub combat_rejections: usize,
    /// Improving swaps committed across all attempts.
    pub improving_swaps: usize,
}

impl RestartStats {
    /// Attempts that produced a feasible, accepted assignment.
    pub fn accepted(&self) -> usize {
        self.attempts - self.construction_failures - self.combat_rejections
    }
}

/// A constraint-satisfying partition of the roster into units.
///
/// `units` mirrors the order of the requested unit capacities. Placeholder
/// members never appear in any field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub units: Vec<Vec<MemberId>>,
    pub unit_rapports: Vec<usize>,
    pub total_rapports: usize,
    /// Real members left out by trimming, sorted.
    pub unassigned: Vec<MemberId>,
    /// Combat score of the winning attempt, when a scorer was supplied.
    pub combat_score: Option<f64>,
    pub seed: u64,
    pub restarts: usize,
    pub swap_iterations: usize,
    pub stats: RestartStats,
}

impl Solution {
    /// Number of members placed in units.
    pub fn assigned_count(&self) -> usize {
        self.units.iter().map(Vec::len).sum()
    }

    /// Returns the index of the unit holding `member`.
    pub fn unit_of(&self, member: &str) -> Option<usize> {
        self.units
            .iter()
            .position(|unit| unit.iter().any(|m| m == member))
    }

    /// Returns true if both members sit in the same unit.
    pub fn shares_unit(&self, a: &str, b: &str) -> bool {
        match (self.unit_of(a), self.unit_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}
