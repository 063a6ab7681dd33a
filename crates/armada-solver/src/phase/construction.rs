//! Greedy construction phase.
//!
//! Places clusters one at a time, largest and most connected first, into the
//! eligible unit that gains the most affinity.

use std::cmp::Ordering;

use armada_core::Cluster;
use rand::Rng;

use super::UnitClusters;
use crate::metrics::ClusterMetrics;

/// Mutable state of one unit during a single construction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitState {
    /// Remaining capacity.
    pub capacity: usize,
    pub clusters: UnitClusters,
}

impl UnitState {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            clusters: UnitClusters::new(),
        }
    }
}

/// Randomized, potential-ordered greedy bin packing.
///
/// Unit choice for each cluster, among units with enough room and no
/// conflict:
/// 1. highest affinity increment
/// 2. smallest remaining capacity after placement
/// 3. lowest unit index
#[derive(Debug, Clone, Copy)]
pub struct GreedyConstructor<'a> {
    clusters: &'a [Cluster],
    capacities: &'a [usize],
    metrics: &'a ClusterMetrics,
}

impl<'a> GreedyConstructor<'a> {
    pub fn new(
        clusters: &'a [Cluster],
        capacities: &'a [usize],
        metrics: &'a ClusterMetrics,
    ) -> Self {
        Self {
            clusters,
            capacities,
            metrics,
        }
    }

    /// Orders cluster indices by size, then potential, then a random
    /// tiebreak, all descending.
    ///
    /// Draws exactly one `f64` per cluster, in cluster index order, before
    /// sorting. The sort is stable, so fully equal keys keep index order.
    pub fn processing_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let tiebreaks: Vec<f64> = (0..self.clusters.len()).map(|_| rng.random()).collect();
        let mut order: Vec<usize> = (0..self.clusters.len()).collect();
        order.sort_by(|&a, &b| {
            self.clusters[b]
                .size()
                .cmp(&self.clusters[a].size())
                .then_with(|| self.metrics.potential(b).cmp(&self.metrics.potential(a)))
                .then_with(|| tiebreaks[b].total_cmp(&tiebreaks[a]))
        });
        order
    }

    /// Builds one assignment, or `None` when some cluster fits nowhere or a
    /// unit is left partly empty.
    pub fn construct<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<UnitState>> {
        let order = self.processing_order(rng);
        let mut states: Vec<UnitState> =
            self.capacities.iter().map(|&c| UnitState::new(c)).collect();

        for cluster_idx in order {
            let unit_idx = self.pick_unit(cluster_idx, &states)?;
            let state = &mut states[unit_idx];
            state.clusters.push(cluster_idx);
            state.capacity -= self.clusters[cluster_idx].size();
        }

        if states.iter().any(|state| state.capacity != 0) {
            return None;
        }
        Some(states)
    }

    fn pick_unit(&self, cluster_idx: usize, states: &[UnitState]) -> Option<usize> {
        let size = self.clusters[cluster_idx].size();
        let mut best: Option<(usize, usize, usize)> = None;

        for (unit_idx, state) in states.iter().enumerate() {
            if state.capacity < size {
                continue;
            }
            if self.metrics.conflicts_with_unit(cluster_idx, &state.clusters, None) {
                continue;
            }
            let increment = self.metrics.affinity_to_unit(cluster_idx, &state.clusters, None);
            let remaining = state.capacity - size;

            let better = match best {
                None => true,
                Some((_, best_increment, best_remaining)) => {
                    match increment.cmp(&best_increment) {
                        Ordering::Greater => true,
                        Ordering::Equal => remaining < best_remaining,
                        Ordering::Less => false,
                    }
                }
            };
            if better {
                best = Some((unit_idx, increment, remaining));
            }
        }

        best.map(|(unit_idx, _, _)| unit_idx)
    }
}

#[cfg(test)]
#[path = "construction_tests.rs"]
mod tests;
