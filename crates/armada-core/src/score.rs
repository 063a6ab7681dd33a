//! ArmadaScore - Two-level attempt score

use std::cmp::Ordering;
use std::fmt;

/// Score of one restart attempt.
///
/// When comparing scores:
/// 1. Rapport totals are compared first
/// 2. Combat scores are only compared when rapport totals are equal
///
/// An attempt without a combat score ranks below one with a combat score at
/// equal rapport. A NaN combat score ranks below every other combat score;
/// the rest compare with `f64::total_cmp`, so the ordering is total.
///
/// # Examples
///
/// ```
/// use armada_core::ArmadaScore;
///
/// let low = ArmadaScore::of(3, Some(10.0));
/// let high = ArmadaScore::of(4, Some(0.0));
/// assert!(high > low);
///
/// let tie_break = ArmadaScore::of(4, Some(2.5));
/// assert!(tie_break > high);
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmadaScore {
    rapport: usize,
    combat: Option<f64>,
}

impl ArmadaScore {
    /// Creates a new score.
    #[inline]
    pub const fn of(rapport: usize, combat: Option<f64>) -> Self {
        ArmadaScore { rapport, combat }
    }

    /// Creates a score with only the rapport level.
    #[inline]
    pub const fn of_rapport(rapport: usize) -> Self {
        ArmadaScore {
            rapport,
            combat: None,
        }
    }

    #[inline]
    pub const fn rapport(&self) -> usize {
        self.rapport
    }

    #[inline]
    pub const fn combat(&self) -> Option<f64> {
        self.combat
    }
}

impl PartialEq for ArmadaScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ArmadaScore {}

impl PartialOrd for ArmadaScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArmadaScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rapport.cmp(&other.rapport) {
            Ordering::Equal => match (self.combat, other.combat) {
                (Some(a), Some(b)) => compare_combat(a, b),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            },
            other => other,
        }
    }
}

fn compare_combat(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.total_cmp(&b),
    }
}

impl fmt::Debug for ArmadaScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArmadaScore({}, {:?})", self.rapport, self.combat)
    }
}

impl fmt::Display for ArmadaScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.combat {
            Some(combat) => write!(f, "{}rapport/{}combat", self.rapport, combat),
            None => write!(f, "{}rapport", self.rapport),
        }
    }
}
