//! Disjoint-set index over dense member indices.

/// Union-find with path compression and union by rank.
///
/// `find` is iterative, so long parent chains on large rosters cannot
/// overflow the stack.
///
/// # Example
///
/// ```
/// use armada_solver::disjoint_set::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// set.union(0, 1);
/// set.union(1, 2);
/// assert_eq!(set.find(0), set.find(2));
/// assert_ne!(set.find(0), set.find(3));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the canonical representative of `item`.
    pub fn find(&mut self, item: usize) -> usize {
        let mut root = item;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every node on the path at the root.
        let mut current = item;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let root_left = self.find(left);
        let root_right = self.find(right);
        if root_left == root_right {
            return false;
        }

        match self.rank[root_left].cmp(&self.rank[root_right]) {
            std::cmp::Ordering::Less => {
                self.parent[root_left] = root_right;
            }
            std::cmp::Ordering::Greater => {
                self.parent[root_right] = root_left;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_right] = root_left;
                self.rank[root_left] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_returns_self_initially() {
        let mut set = DisjointSet::new(3);
        assert_eq!(set.find(0), 0);
        assert_eq!(set.find(2), 2);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_union_is_transitive() {
        let mut set = DisjointSet::new(3);
        assert!(set.union(0, 1));
        assert!(set.union(1, 2));
        assert_eq!(set.find(0), set.find(2));
        assert!(!set.union(2, 0));
    }

    #[test]
    fn test_separate_sets_keep_separate_roots() {
        let mut set = DisjointSet::new(4);
        set.union(0, 1);
        set.union(2, 3);
        assert_ne!(set.find(0), set.find(2));
    }

    #[test]
    fn test_long_chain_is_compressed() {
        let n = 100_000;
        let mut set = DisjointSet::new(n);
        for i in 1..n {
            set.union(i - 1, i);
        }
        let root = set.find(n - 1);
        for i in 0..n {
            assert_eq!(set.find(i), root);
        }
    }
}
