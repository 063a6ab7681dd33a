//! Swap-based local search phase.
//!
//! First-improvement hill climbing over equal-size cluster swaps between
//! units. Swaps never change unit capacities.

use armada_core::Cluster;
use tracing::trace;

use super::UnitClusters;
use crate::metrics::ClusterMetrics;

/// A committed swap: cluster positions in two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SwapMove {
    left_unit: usize,
    left_pos: usize,
    right_unit: usize,
    right_pos: usize,
}

/// Improves one assignment by swapping equal-size clusters between units.
///
/// Each sweep scans unit pairs `(i, j)` with `i < j` in order, then cluster
/// pairs in position order, and commits the first strictly positive swap.
/// The next sweep starts again from the top. The search stops at a local
/// optimum or after `max_iterations` sweeps.
#[derive(Debug, Clone, Copy)]
pub struct SwapLocalSearch<'a> {
    clusters: &'a [Cluster],
    metrics: &'a ClusterMetrics,
    max_iterations: usize,
}

impl<'a> SwapLocalSearch<'a> {
    pub fn new(
        clusters: &'a [Cluster],
        metrics: &'a ClusterMetrics,
        max_iterations: usize,
    ) -> Self {
        Self {
            clusters,
            metrics,
            max_iterations,
        }
    }

    /// Runs the search in place and returns the number of committed swaps.
    pub fn improve(&self, units: &mut [UnitClusters]) -> usize {
        let mut swaps = 0;
        for iteration in 0..self.max_iterations {
            let Some(found) = self.find_improving_swap(units) else {
                break;
            };

            let left = units[found.left_unit][found.left_pos];
            let right = units[found.right_unit][found.right_pos];
            units[found.left_unit][found.left_pos] = right;
            units[found.right_unit][found.right_pos] = left;
            swaps += 1;

            trace!(
                event = "swap",
                iteration = iteration,
                left_unit = found.left_unit,
                right_unit = found.right_unit,
                left_cluster = left,
                right_cluster = right,
            );
        }
        swaps
    }

    fn find_improving_swap(&self, units: &[UnitClusters]) -> Option<SwapMove> {
        for left_unit in 0..units.len() {
            for right_unit in (left_unit + 1)..units.len() {
                let left_members = &units[left_unit];
                let right_members = &units[right_unit];
                for (left_pos, &left) in left_members.iter().enumerate() {
                    for (right_pos, &right) in right_members.iter().enumerate() {
                        if !self.is_legal(left, right, left_members, right_members) {
                            continue;
                        }
                        if self.swap_delta(left, right, left_members, right_members) > 0 {
                            return Some(SwapMove {
                                left_unit,
                                left_pos,
                                right_unit,
                                right_pos,
                            });
                        }
                    }
                }
            }
        }
        None
    }

    fn is_legal(
        &self,
        left: usize,
        right: usize,
        left_unit: &[usize],
        right_unit: &[usize],
    ) -> bool {
        self.clusters[left].size() == self.clusters[right].size()
            && !self.metrics.conflicts_with_unit(left, right_unit, Some(right))
            && !self.metrics.conflicts_with_unit(right, left_unit, Some(left))
    }

    /// Affinity gained minus affinity lost when `left` and `right` trade
    /// units. Self-affinity is unchanged by a swap and left out.
    pub fn swap_delta(
        &self,
        left: usize,
        right: usize,
        left_unit: &[usize],
        right_unit: &[usize],
    ) -> i64 {
        let left_before = self.metrics.affinity_to_unit(left, left_unit, Some(left));
        let right_before = self.metrics.affinity_to_unit(right, right_unit, Some(right));
        let left_after = self.metrics.affinity_to_unit(left, right_unit, Some(right));
        let right_after = self.metrics.affinity_to_unit(right, left_unit, Some(left));
        (left_after + right_after) as i64 - (left_before + right_before) as i64
    }
}

#[cfg(test)]
#[path = "local_search_tests.rs"]
mod tests;
