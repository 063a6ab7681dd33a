//! Clusters: members that must always share a unit.

use std::fmt;

use crate::error::{Result, SolveError};
use crate::pair::MemberId;

/// An immutable, sorted, non-empty group of members.
///
/// Clusters are the atomic unit of assignment. They order by their member
/// list, which gives the cluster builder a deterministic cluster order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    members: Vec<MemberId>,
}

impl Cluster {
    /// Creates a cluster, sorting the given members.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyCluster`] if `members` is empty.
    pub fn new(mut members: Vec<MemberId>) -> Result<Self> {
        if members.is_empty() {
            return Err(SolveError::EmptyCluster);
        }
        members.sort();
        Ok(Cluster { members })
    }

    /// Creates a single-member cluster.
    pub fn singleton(member: impl Into<MemberId>) -> Self {
        Cluster {
            members: vec![member.into()],
        }
    }

    #[inline]
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

impl fmt::Debug for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cluster{:?}", self.members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_sorts_members() {
        let members = vec!["charlie".into(), "alice".into(), "bob".into()];
        let cluster = Cluster::new(members).unwrap();
        assert_eq!(cluster.members(), ["alice", "bob", "charlie"]);
        assert_eq!(cluster.size(), 3);
    }

    #[test]
    fn test_clusters_order_by_member_list() {
        let mut clusters = vec![
            Cluster::singleton("dave"),
            Cluster::new(vec!["bob".into(), "alice".into()]).unwrap(),
            Cluster::singleton("alice"),
        ];
        clusters.sort();
        assert_eq!(clusters[0].members(), ["alice"]);
        assert_eq!(clusters[1].members(), ["alice", "bob"]);
        assert_eq!(clusters[2].members(), ["dave"]);
    }

    #[test]
    fn test_empty_cluster_rejected() {
        assert_eq!(Cluster::new(Vec::new()), Err(SolveError::EmptyCluster));
    }
}
