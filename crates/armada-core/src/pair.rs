//! Member ids and canonical unordered pairs.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Result, SolveError};

/// Opaque, unique member identifier.
pub type MemberId = String;

/// Ordered set of pairs.
///
/// A `BTreeSet` keeps iteration order independent of hashing state, so every
/// pass over rapport edges, whitelist or blacklist is reproducible.
pub type PairSet = BTreeSet<Pair>;

/// An unordered pair of distinct members.
///
/// The two ids are stored in sorted order, so `Pair::new("a", "b")` and
/// `Pair::new("b", "a")` are equal, hash equal and order equal.
///
/// # Examples
///
/// ```
/// use armada_core::Pair;
///
/// let left = Pair::new("bob", "alice").unwrap();
/// let right = Pair::new("alice", "bob").unwrap();
/// assert_eq!(left, right);
/// assert_eq!(left.first(), "alice");
///
/// assert!(Pair::new("alice", "alice").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    first: MemberId,
    second: MemberId,
}

impl Pair {
    /// Creates a canonical pair, rejecting identical ids.
    pub fn new(a: impl Into<MemberId>, b: impl Into<MemberId>) -> Result<Self> {
        let a = a.into();
        let b = b.into();
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Pair {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Ok(Pair {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => Err(SolveError::IdenticalPair(a)),
        }
    }

    /// Builds a pair set from id tuples.
    pub fn set_of<I, A, B>(pairs: I) -> Result<PairSet>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<MemberId>,
        B: Into<MemberId>,
    {
        pairs.into_iter().map(|(a, b)| Pair::new(a, b)).collect()
    }

    /// Returns the smaller id.
    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns both ids in canonical order.
    #[inline]
    pub fn members(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    /// Returns true if `member` is one of the endpoints.
    pub fn contains(&self, member: &str) -> bool {
        self.first == member || self.second == member
    }

    /// Returns true if both endpoints satisfy `present`.
    pub fn is_within(&self, mut present: impl FnMut(&str) -> bool) -> bool {
        present(&self.first) && present(&self.second)
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({}, {})", self.first, self.second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
