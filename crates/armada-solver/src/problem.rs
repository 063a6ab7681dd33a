//! Solver input and its validation.

use std::collections::HashSet;

use armada_core::{MemberId, Pair, PairSet, Result, SolveError};

/// One partitioning problem: who to place, where, and under which pairs.
///
/// # Examples
///
/// ```
/// use armada_solver::Problem;
///
/// let problem = Problem::new(["alice", "bob", "charlie", "dave"], [2, 2])
///     .with_rapport([("alice", "bob"), ("charlie", "dave")])
///     .unwrap()
///     .with_whitelist([("alice", "bob")])
///     .unwrap();
///
/// assert_eq!(problem.total_capacity(), 4);
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    pub roster: Vec<MemberId>,
    pub unit_capacities: Vec<usize>,
    pub rapport_edges: PairSet,
    pub whitelist: PairSet,
    pub blacklist: PairSet,
}

impl Problem {
    /// Creates a problem with no pairs.
    pub fn new<I, S>(roster: I, unit_capacities: impl Into<Vec<usize>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MemberId>,
    {
        Self {
            roster: roster.into_iter().map(Into::into).collect(),
            unit_capacities: unit_capacities.into(),
            ..Self::default()
        }
    }

    /// Adds rapport edges.
    ///
    /// # Errors
    ///
    /// [`SolveError::IdenticalPair`] if a pair names one id twice.
    pub fn with_rapport<I, A, B>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<MemberId>,
        B: Into<MemberId>,
    {
        self.rapport_edges.extend(Pair::set_of(pairs)?);
        Ok(self)
    }

    /// Adds must-share pairs.
    pub fn with_whitelist<I, A, B>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<MemberId>,
        B: Into<MemberId>,
    {
        self.whitelist.extend(Pair::set_of(pairs)?);
        Ok(self)
    }

    /// Adds must-separate pairs.
    pub fn with_blacklist<I, A, B>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<MemberId>,
        B: Into<MemberId>,
    {
        self.blacklist.extend(Pair::set_of(pairs)?);
        Ok(self)
    }

    /// Borrows every field at once.
    pub fn view(&self) -> ProblemView<'_> {
        ProblemView {
            roster: &self.roster,
            unit_capacities: &self.unit_capacities,
            rapport_edges: &self.rapport_edges,
            whitelist: &self.whitelist,
            blacklist: &self.blacklist,
        }
    }

    pub fn total_capacity(&self) -> usize {
        self.view().total_capacity()
    }

    pub fn max_capacity(&self) -> usize {
        self.view().max_capacity()
    }

    /// Runs the structural input checks.
    pub fn validate(&self) -> Result<()> {
        self.view().validate()
    }
}

/// Borrowed form of [`Problem`], used by the solve pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ProblemView<'a> {
    pub roster: &'a [MemberId],
    pub unit_capacities: &'a [usize],
    pub rapport_edges: &'a PairSet,
    pub whitelist: &'a PairSet,
    pub blacklist: &'a PairSet,
}

impl ProblemView<'_> {
    pub fn total_capacity(&self) -> usize {
        self.unit_capacities.iter().sum()
    }

    pub fn max_capacity(&self) -> usize {
        self.unit_capacities.iter().copied().max().unwrap_or(0)
    }

    /// Checks units, roster and whitelist, in this order:
    ///
    /// 1. at least one unit, each of size 2 or more, with a positive total
    /// 2. no duplicate roster ids
    /// 3. no pair on both the whitelist and the blacklist
    /// 4. every whitelist pair inside the roster and also a rapport edge
    ///
    /// Capacity feasibility depends on clustering and is checked later.
    pub fn validate(&self) -> Result<()> {
        if self.unit_capacities.is_empty() {
            return Err(SolveError::NoUnits);
        }
        if let Some((index, &size)) = self
            .unit_capacities
            .iter()
            .enumerate()
            .find(|(_, &size)| size < 2)
        {
            return Err(SolveError::UnitTooSmall { index, size });
        }
        if self.total_capacity() == 0 {
            return Err(SolveError::NonPositiveCapacity);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.roster.len());
        for member in self.roster {
            if !seen.insert(member.as_str()) {
                return Err(SolveError::DuplicateMember(member.clone()));
            }
        }

        if let Some(pair) = self.whitelist.intersection(self.blacklist).next() {
            return Err(SolveError::ListOverlap(pair.clone()));
        }

        for pair in self.whitelist {
            if !pair.is_within(|member| seen.contains(member)) {
                return Err(SolveError::WhitelistUnknownMember(pair.clone()));
            }
            if !self.rapport_edges.contains(pair) {
                return Err(SolveError::WhitelistNotRapport(pair.clone()));
            }
        }

        Ok(())
    }
}
