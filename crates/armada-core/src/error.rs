//! Error types for Armada

use thiserror::Error;

use crate::pair::{MemberId, Pair};

/// Main error type for solve operations.
///
/// Variants fall into two categories:
/// - validation errors, raised before any restart attempt runs
/// - search exhaustion errors, raised after the whole restart budget is spent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A pair was built from the same id twice.
    #[error("Pair cannot contain identical ids: {0}")]
    IdenticalPair(MemberId),

    /// A cluster was built from an empty member list.
    #[error("Cluster requires at least one member")]
    EmptyCluster,

    #[error("At least one unit size is required")]
    NoUnits,

    #[error("Unit sizes must be at least 2 (unit {index} has size {size})")]
    UnitTooSmall { index: usize, size: usize },

    #[error("Unit sizes must sum to a positive total")]
    NonPositiveCapacity,

    #[error("Roster contains duplicate member id {0}")]
    DuplicateMember(MemberId),

    #[error("Whitelist and blacklist overlap on {0}")]
    ListOverlap(Pair),

    #[error("Whitelist pair {0} contains ids missing from roster")]
    WhitelistUnknownMember(Pair),

    #[error("Whitelist pair {0} is not a valid rapport")]
    WhitelistNotRapport(Pair),

    /// A whitelist group is larger than every unit.
    #[error("Whitelist requires a group of {size} members but the largest unit holds {max_capacity}")]
    ClusterTooLarge { size: usize, max_capacity: usize },

    /// A blacklist pair was forced into one cluster by the whitelist.
    #[error("Blacklist pair {0} conflicts with required whitelist group")]
    BlacklistConflict(Pair),

    #[error("Not enough members to fill all units ({available} available, {required} required)")]
    InsufficientMembers { available: usize, required: usize },

    /// No exact-size subset of clusters can be left out.
    #[error("Roster cannot be trimmed by {extra} members while respecting whitelist groups")]
    TrimInfeasible { extra: usize },

    #[error("Minimum combat score cannot be negative (got {0})")]
    NegativeMinCombatScore(f64),

    #[error("Minimum combat score requires combat data (no combat scorer supplied)")]
    MissingCombatScorer,

    /// Every restart failed during construction.
    #[error("Unable to find a valid unit assignment after {attempts} attempts")]
    NoFeasibleAssignment { attempts: usize },

    /// At least one attempt was feasible, but none met the combat minimum.
    #[error("No assignment met the minimum combat score {min_combat_score} (best seen {best_combat_score})")]
    CombatScoreBelowMinimum {
        min_combat_score: f64,
        best_combat_score: f64,
        attempts: usize,
    },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SolveError {
    /// Returns true for malformed or contradictory input.
    pub fn is_validation(&self) -> bool {
        !self.is_search_exhausted() && !matches!(self, SolveError::Internal(_))
    }

    /// Returns true when the restart budget was spent without a result.
    pub fn is_search_exhausted(&self) -> bool {
        matches!(
            self,
            SolveError::NoFeasibleAssignment { .. } | SolveError::CombatScoreBelowMinimum { .. }
        )
    }
}

/// Result type alias for Armada operations
pub type Result<T> = std::result::Result<T, SolveError>;
