//! Excess trimmer: exact-weight, minimum-penalty cluster removal.

use armada_core::{Cluster, Result, SolveError};

/// Clusters chosen to leave out of every unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimPlan {
    /// Dropped cluster indices, ascending.
    pub dropped: Vec<usize>,
    /// Summed potential of the dropped clusters.
    pub penalty: usize,
    /// Summed size of the dropped clusters.
    pub dropped_members: usize,
}

impl TrimPlan {
    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Chooses clusters totalling exactly `extra` members with minimum summed
/// potential.
///
/// This is a 0/1 knapsack with an exact target weight. `penalty[w]` is the
/// cheapest way to drop exactly `w` members using the clusters seen so far;
/// totals are visited in descending order so each cluster is used at most
/// once. A `took` table records, per cluster and total, whether that cluster
/// improved the total, which lets reconstruction walk clusters backward
/// once. Among equal penalties the earliest subset found is kept.
///
/// # Errors
///
/// - [`SolveError::TrimInfeasible`] when no subset sums to `extra`
/// - [`SolveError::Internal`] when reconstruction does not add up
pub fn choose_clusters_to_drop(
    clusters: &[Cluster],
    potentials: &[usize],
    extra: usize,
) -> Result<TrimPlan> {
    if extra == 0 {
        return Ok(TrimPlan::default());
    }

    let width = extra + 1;
    let mut penalty: Vec<Option<usize>> = vec![None; width];
    let mut took = vec![false; clusters.len() * width];
    penalty[0] = Some(0);

    for (idx, cluster) in clusters.iter().enumerate() {
        let size = cluster.size();
        if size > extra {
            continue;
        }
        for total in (size..=extra).rev() {
            let Some(prev) = penalty[total - size] else {
                continue;
            };
            let candidate = prev + potentials[idx];
            if penalty[total].map_or(true, |current| candidate < current) {
                penalty[total] = Some(candidate);
                took[idx * width + total] = true;
            }
        }
    }

    let Some(best) = penalty[extra] else {
        return Err(SolveError::TrimInfeasible { extra });
    };

    let mut dropped = Vec::new();
    let mut remaining = extra;
    for idx in (0..clusters.len()).rev() {
        if remaining == 0 {
            break;
        }
        if took[idx * width + remaining] {
            dropped.push(idx);
            remaining -= clusters[idx].size();
        }
    }
    dropped.reverse();

    let dropped_members: usize = dropped.iter().map(|&idx| clusters[idx].size()).sum();
    let dropped_penalty: usize = dropped.iter().map(|&idx| potentials[idx]).sum();
    if remaining != 0 || dropped_members != extra || dropped_penalty != best {
        return Err(SolveError::Internal(format!(
            "trim reconstruction mismatch: dropped {dropped_members} of {extra} members"
        )));
    }

    Ok(TrimPlan {
        dropped,
        penalty: best,
        dropped_members,
    })
}
