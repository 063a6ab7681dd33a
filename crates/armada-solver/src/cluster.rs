//! Cluster builder: whitelist closure into atomic groups.

use std::collections::HashMap;

use armada_core::{Cluster, MemberId, PairSet, Result, SolveError};

use crate::disjoint_set::DisjointSet;

/// Maps every member id to the index of the cluster holding it.
pub fn member_lookup(clusters: &[Cluster]) -> HashMap<&str, usize> {
    let mut lookup = HashMap::with_capacity(clusters.iter().map(Cluster::size).sum());
    for (idx, cluster) in clusters.iter().enumerate() {
        for member in cluster.members() {
            lookup.insert(member.as_str(), idx);
        }
    }
    lookup
}

/// Groups the roster into clusters by whitelist transitive closure.
///
/// Clusters come back sorted by their member lists. Whitelist or blacklist
/// pairs naming ids outside `roster` are ignored here; the caller validates
/// whitelist membership beforehand.
///
/// # Errors
///
/// - [`SolveError::ClusterTooLarge`] if a group exceeds `max_unit_size`
/// - [`SolveError::BlacklistConflict`] if a blacklist pair lands in one group
pub fn build_clusters(
    roster: &[MemberId],
    whitelist: &PairSet,
    blacklist: &PairSet,
    max_unit_size: usize,
) -> Result<Vec<Cluster>> {
    let index: HashMap<&str, usize> = roster
        .iter()
        .enumerate()
        .map(|(idx, member)| (member.as_str(), idx))
        .collect();

    let mut set = DisjointSet::new(roster.len());
    for pair in whitelist {
        let (left, right) = pair.members();
        if let (Some(&l), Some(&r)) = (index.get(left), index.get(right)) {
            set.union(l, r);
        }
    }

    let mut groups: HashMap<usize, Vec<MemberId>> = HashMap::new();
    for (idx, member) in roster.iter().enumerate() {
        groups.entry(set.find(idx)).or_default().push(member.clone());
    }

    let mut clusters = Vec::with_capacity(groups.len());
    for members in groups.into_values() {
        if members.len() > max_unit_size {
            return Err(SolveError::ClusterTooLarge {
                size: members.len(),
                max_capacity: max_unit_size,
            });
        }
        clusters.push(Cluster::new(members)?);
    }
    clusters.sort();

    check_blacklist(&clusters, blacklist)?;
    Ok(clusters)
}

/// Fails if any blacklist pair has both endpoints in one cluster.
pub fn check_blacklist(clusters: &[Cluster], blacklist: &PairSet) -> Result<()> {
    let lookup = member_lookup(clusters);
    for pair in blacklist {
        let (left, right) = pair.members();
        if let (Some(l), Some(r)) = (lookup.get(left), lookup.get(right)) {
            if l == r {
                return Err(SolveError::BlacklistConflict(pair.clone()));
            }
        }
    }
    Ok(())
}
