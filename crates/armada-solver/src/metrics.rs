//! Cluster-level affinity, conflict and potential metrics.

use armada_core::{Cluster, PairSet, Result, SolveError};

use crate::cluster::member_lookup;

/// Dense square matrix indexed by cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> SquareMatrix<T> {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![T::default(); size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.size + col] = value;
    }

    /// Returns one row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
}

/// Per-cluster incident rapport-edge counts.
///
/// Cross-cluster edges count toward both endpoints, same-cluster edges once.
/// Edges naming members outside every cluster are ignored.
pub fn compute_potentials(clusters: &[Cluster], rapport_edges: &PairSet) -> Vec<usize> {
    let lookup = member_lookup(clusters);
    let mut potentials = vec![0usize; clusters.len()];
    for pair in rapport_edges {
        let (left, right) = pair.members();
        let (Some(&l), Some(&r)) = (lookup.get(left), lookup.get(right)) else {
            continue;
        };
        potentials[l] += 1;
        if l != r {
            potentials[r] += 1;
        }
    }
    potentials
}

/// Affinity, conflicts and potentials for one cluster list.
///
/// The affinity diagonal holds rapport edges internal to a cluster; those
/// are fixed by the whitelist and never change under a swap.
#[derive(Debug, Clone)]
pub struct ClusterMetrics {
    affinity: SquareMatrix<usize>,
    conflicts: SquareMatrix<bool>,
    potentials: Vec<usize>,
}

impl ClusterMetrics {
    /// Builds metrics from the edge and blacklist sets.
    ///
    /// # Errors
    ///
    /// [`SolveError::BlacklistConflict`] if a blacklist pair falls inside one
    /// cluster.
    pub fn build(
        clusters: &[Cluster],
        rapport_edges: &PairSet,
        blacklist: &PairSet,
    ) -> Result<Self> {
        let count = clusters.len();
        let lookup = member_lookup(clusters);

        let mut affinity = SquareMatrix::new(count);
        for pair in rapport_edges {
            let (left, right) = pair.members();
            let (Some(&l), Some(&r)) = (lookup.get(left), lookup.get(right)) else {
                continue;
            };
            affinity.set(l, r, affinity.get(l, r) + 1);
            if l != r {
                affinity.set(r, l, affinity.get(r, l) + 1);
            }
        }

        let mut conflicts = SquareMatrix::new(count);
        for pair in blacklist {
            let (left, right) = pair.members();
            let (Some(&l), Some(&r)) = (lookup.get(left), lookup.get(right)) else {
                continue;
            };
            if l == r {
                return Err(SolveError::BlacklistConflict(pair.clone()));
            }
            conflicts.set(l, r, true);
            conflicts.set(r, l, true);
        }

        Ok(Self {
            affinity,
            conflicts,
            potentials: compute_potentials(clusters, rapport_edges),
        })
    }

    /// Number of clusters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.potentials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.potentials.is_empty()
    }

    #[inline]
    pub fn affinity(&self, a: usize, b: usize) -> usize {
        self.affinity.get(a, b)
    }

    #[inline]
    pub fn conflicts(&self, a: usize, b: usize) -> bool {
        self.conflicts.get(a, b)
    }

    #[inline]
    pub fn potential(&self, cluster: usize) -> usize {
        self.potentials[cluster]
    }

    pub fn potentials(&self) -> &[usize] {
        &self.potentials
    }

    /// Returns true if `candidate` conflicts with any cluster in `unit`
    /// other than `exclude`.
    pub fn conflicts_with_unit(
        &self,
        candidate: usize,
        unit: &[usize],
        exclude: Option<usize>,
    ) -> bool {
        let row = self.conflicts.row(candidate);
        unit.iter().any(|&other| Some(other) != exclude && row[other])
    }

    /// Sum of affinity between `candidate` and the clusters in `unit`,
    /// skipping `exclude`.
    pub fn affinity_to_unit(
        &self,
        candidate: usize,
        unit: &[usize],
        exclude: Option<usize>,
    ) -> usize {
        let row = self.affinity.row(candidate);
        unit.iter()
            .filter(|&&other| Some(other) != exclude)
            .map(|&other| row[other])
            .sum()
    }

    /// Rapport count held inside one unit of clusters, diagonal included.
    pub fn unit_rapport(&self, unit: &[usize]) -> usize {
        let mut score = 0;
        for (idx, &left) in unit.iter().enumerate() {
            score += self.affinity(left, left);
            for &right in &unit[idx + 1..] {
                score += self.affinity(left, right);
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armada_core::Pair;

    fn clusters() -> Vec<Cluster> {
        vec![
            Cluster::new(vec!["alice".into(), "bob".into()]).unwrap(),
            Cluster::singleton("charlie"),
            Cluster::singleton("dave"),
        ]
    }

    #[test]
    fn test_affinity_counts_internal_and_cross_edges() {
        let edges = Pair::set_of([
            ("alice", "bob"),
            ("alice", "charlie"),
            ("bob", "charlie"),
            ("charlie", "dave"),
        ])
        .unwrap();
        let metrics = ClusterMetrics::build(&clusters(), &edges, &PairSet::new()).unwrap();

        assert_eq!(metrics.affinity(0, 0), 1);
        assert_eq!(metrics.affinity(0, 1), 2);
        assert_eq!(metrics.affinity(1, 0), 2);
        assert_eq!(metrics.affinity(1, 2), 1);
        assert_eq!(metrics.affinity(0, 2), 0);
        assert_eq!(metrics.potentials(), &[3, 3, 1]);
    }

    #[test]
    fn test_conflicts_are_symmetric() {
        let blacklist = Pair::set_of([("alice", "dave")]).unwrap();
        let metrics = ClusterMetrics::build(&clusters(), &PairSet::new(), &blacklist).unwrap();
        assert!(metrics.conflicts(0, 2));
        assert!(metrics.conflicts(2, 0));
        assert!(!metrics.conflicts(0, 1));
        assert!(metrics.conflicts_with_unit(2, &[1, 0], None));
        assert!(!metrics.conflicts_with_unit(2, &[1, 0], Some(0)));
    }

    #[test]
    fn test_blacklist_inside_cluster_fails() {
        let blacklist = Pair::set_of([("alice", "bob")]).unwrap();
        let err = ClusterMetrics::build(&clusters(), &PairSet::new(), &blacklist).unwrap_err();
        assert!(matches!(err, SolveError::BlacklistConflict(_)));
    }

    #[test]
    fn test_edges_outside_clusters_ignored() {
        let edges = Pair::set_of([("alice", "zed"), ("charlie", "dave")]).unwrap();
        let metrics = ClusterMetrics::build(&clusters(), &edges, &PairSet::new()).unwrap();
        assert_eq!(metrics.potentials(), &[0, 1, 1]);
    }

    #[test]
    fn test_unit_rapport_includes_diagonal() {
        let edges = Pair::set_of([("alice", "bob"), ("bob", "charlie")]).unwrap();
        let metrics = ClusterMetrics::build(&clusters(), &edges, &PairSet::new()).unwrap();
        assert_eq!(metrics.unit_rapport(&[0, 1]), 2);
        assert_eq!(metrics.unit_rapport(&[0]), 1);
        assert_eq!(metrics.unit_rapport(&[1, 2]), 0);
        assert_eq!(metrics.affinity_to_unit(1, &[0, 2], None), 1);
        assert_eq!(metrics.affinity_to_unit(1, &[0, 2], Some(0)), 0);
    }
}
