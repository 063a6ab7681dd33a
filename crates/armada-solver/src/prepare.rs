//! Per-call preprocessing shared by every restart attempt.

use std::collections::HashSet;

use armada_core::{Cluster, MemberId, PairSet, Result, SolveError};

use crate::cluster::build_clusters;
use crate::metrics::{compute_potentials, ClusterMetrics};
use crate::padding::Placeholders;
use crate::phase::UnitClusters;
use crate::problem::ProblemView;
use crate::trim::{choose_clusters_to_drop, TrimPlan};

/// Clusters, metrics and bookkeeping computed once per solve call.
///
/// After preparation the cluster sizes sum to the total unit capacity
/// exactly, and `rapport_edges`/`blacklist` only name assigned members.
#[derive(Debug, Clone)]
pub struct PreparedProblem {
    pub clusters: Vec<Cluster>,
    pub unit_capacities: Vec<usize>,
    pub placeholders: Placeholders,
    /// Members of trimmed clusters, sorted; may contain placeholders.
    pub unassigned: Vec<MemberId>,
    pub rapport_edges: PairSet,
    pub blacklist: PairSet,
    pub metrics: ClusterMetrics,
    pub trim: TrimPlan,
}

impl PreparedProblem {
    /// Pads, clusters, trims and builds metrics.
    ///
    /// Expects `problem` to have passed [`ProblemView::validate`].
    ///
    /// # Errors
    ///
    /// - [`SolveError::ClusterTooLarge`] or [`SolveError::BlacklistConflict`]
    ///   from clustering
    /// - [`SolveError::InsufficientMembers`] if clusters cannot fill the units
    /// - [`SolveError::TrimInfeasible`] if no exact trim exists
    /// - [`SolveError::Internal`] if the trimmed sizes do not match capacity
    pub fn build(problem: &ProblemView<'_>) -> Result<Self> {
        let total = problem.total_capacity();
        let placeholders =
            Placeholders::generate(problem.roster, total.saturating_sub(problem.roster.len()));

        let mut roster = problem.roster.to_vec();
        roster.extend(placeholders.sorted());

        let mut clusters = build_clusters(
            &roster,
            problem.whitelist,
            problem.blacklist,
            problem.max_capacity(),
        )?;

        let supply: usize = clusters.iter().map(Cluster::size).sum();
        if supply < total {
            return Err(SolveError::InsufficientMembers {
                available: supply,
                required: total,
            });
        }

        let potentials = compute_potentials(&clusters, problem.rapport_edges);
        let trim = choose_clusters_to_drop(&clusters, &potentials, supply - total)?;
        let mut unassigned = Vec::with_capacity(trim.dropped_members);
        if !trim.is_empty() {
            let dropped: HashSet<usize> = trim.dropped.iter().copied().collect();
            let mut kept = Vec::with_capacity(clusters.len() - dropped.len());
            for (idx, cluster) in clusters.into_iter().enumerate() {
                if dropped.contains(&idx) {
                    unassigned.extend(cluster.members().iter().cloned());
                } else {
                    kept.push(cluster);
                }
            }
            unassigned.sort();
            clusters = kept;
        }

        let assigned: HashSet<&str> = clusters
            .iter()
            .flat_map(|cluster| cluster.members().iter().map(String::as_str))
            .collect();
        if assigned.len() != total {
            return Err(SolveError::Internal(format!(
                "assigned {} members for {} unit slots",
                assigned.len(),
                total
            )));
        }

        let rapport_edges = restrict(problem.rapport_edges, &assigned);
        let blacklist = restrict(problem.blacklist, &assigned);
        let metrics = ClusterMetrics::build(&clusters, &rapport_edges, &blacklist)?;

        Ok(Self {
            clusters,
            unit_capacities: problem.unit_capacities.to_vec(),
            placeholders,
            unassigned,
            rapport_edges,
            blacklist,
            metrics,
            trim,
        })
    }

    /// Expands cluster indices into member lists, placeholders removed.
    pub fn member_units(&self, units: &[UnitClusters]) -> Vec<Vec<MemberId>> {
        units
            .iter()
            .map(|unit| {
                let mut members: Vec<MemberId> = unit
                    .iter()
                    .flat_map(|&idx| self.clusters[idx].members().iter().cloned())
                    .collect();
                self.placeholders.strip(&mut members);
                members
            })
            .collect()
    }

    /// Real members left out by trimming.
    pub fn real_unassigned(&self) -> Vec<MemberId> {
        let mut unassigned = self.unassigned.clone();
        self.placeholders.strip(&mut unassigned);
        unassigned
    }
}

fn restrict(pairs: &PairSet, assigned: &HashSet<&str>) -> PairSet {
    pairs
        .iter()
        .filter(|pair| pair.is_within(|member| assigned.contains(member)))
        .cloned()
        .collect()
}
