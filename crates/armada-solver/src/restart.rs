//! Restart orchestration: many randomized attempts, best one kept.
//!
//! Each attempt runs greedy construction then swap local search, optionally
//! scores the result with a [`CombatScorer`], and competes on
//! [`ArmadaScore`]. Attempts never share mutable state.

use armada_config::{RestartMode, SolverConfig};
use armada_core::{ArmadaScore, MemberId, RestartStats, Result, SolveError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::phase::{GreedyConstructor, SwapLocalSearch, UnitClusters};
use crate::prepare::PreparedProblem;

/// External composition-quality score for a candidate set of units.
///
/// Called with member lists in unit order, placeholders removed. It must be
/// deterministic and free of side effects; it runs once per feasible attempt
/// and, in parallel mode, from several threads at once.
pub trait CombatScorer: Send + Sync {
    fn score(&self, units: &[Vec<MemberId>]) -> f64;
}

impl<F> CombatScorer for F
where
    F: Fn(&[Vec<MemberId>]) -> f64 + Send + Sync,
{
    fn score(&self, units: &[Vec<MemberId>]) -> f64 {
        self(units)
    }
}

/// The assignment kept from one accepted attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub restart: usize,
    pub units: Vec<UnitClusters>,
    pub score: ArmadaScore,
}

/// What one attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    ConstructionFailed,
    CombatRejected { combat: f64, improving_swaps: usize },
    Accepted { candidate: Candidate, improving_swaps: usize },
}

/// The winning attempt and the counters of the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct RestartOutcome {
    pub best: Candidate,
    pub stats: RestartStats,
}

/// Runs restart attempts over one prepared problem.
pub struct RestartRunner<'a> {
    prepared: &'a PreparedProblem,
    config: &'a SolverConfig,
    scorer: Option<&'a dyn CombatScorer>,
}

impl<'a> RestartRunner<'a> {
    pub fn new(
        prepared: &'a PreparedProblem,
        config: &'a SolverConfig,
        scorer: Option<&'a dyn CombatScorer>,
    ) -> Self {
        Self {
            prepared,
            config,
            scorer,
        }
    }

    /// Runs `max(1, restarts)` attempts and returns the best.
    ///
    /// # Errors
    ///
    /// - [`SolveError::NoFeasibleAssignment`] if every construction failed
    /// - [`SolveError::CombatScoreBelowMinimum`] if feasible attempts existed
    ///   but all missed the minimum combat score
    pub fn run(&self) -> Result<RestartOutcome> {
        let attempts = self.config.effective_restarts();
        let mut tally = Tally::default();

        match self.config.restart_mode {
            RestartMode::Sequential => {
                let mut rng = ChaCha8Rng::seed_from_u64(self.config.random_seed);
                for restart in 0..attempts {
                    tally.record(self.attempt(restart, &mut rng));
                }
            }
            RestartMode::Parallel => {
                let outcomes: Vec<AttemptOutcome> = (0..attempts)
                    .into_par_iter()
                    .map(|restart| {
                        let mut rng = stream_rng(self.config.random_seed, restart);
                        self.attempt(restart, &mut rng)
                    })
                    .collect();
                for outcome in outcomes {
                    tally.record(outcome);
                }
            }
        }

        tally.finish(self.config.min_combat_score)
    }

    /// Runs one attempt, drawing its tiebreaks from `rng`.
    pub fn attempt<R: Rng + ?Sized>(&self, restart: usize, rng: &mut R) -> AttemptOutcome {
        let prepared = self.prepared;
        let constructor = GreedyConstructor::new(
            &prepared.clusters,
            &prepared.unit_capacities,
            &prepared.metrics,
        );
        let Some(states) = constructor.construct(rng) else {
            trace!(event = "construction_failed", restart = restart);
            return AttemptOutcome::ConstructionFailed;
        };

        let mut units: Vec<UnitClusters> =
            states.into_iter().map(|state| state.clusters).collect();
        let search = SwapLocalSearch::new(
            &prepared.clusters,
            &prepared.metrics,
            self.config.swap_iterations,
        );
        let improving_swaps = search.improve(&mut units);
        let rapport: usize = units
            .iter()
            .map(|unit| prepared.metrics.unit_rapport(unit))
            .sum();

        let combat = self
            .scorer
            .map(|scorer| scorer.score(&prepared.member_units(&units)));

        if let (Some(min), Some(value)) = (self.config.min_combat_score, combat) {
            if value.is_nan() || value < min {
                trace!(
                    event = "combat_rejected",
                    restart = restart,
                    combat_score = value,
                    min_combat_score = min,
                );
                return AttemptOutcome::CombatRejected {
                    combat: value,
                    improving_swaps,
                };
            }
        }

        debug!(
            event = "restart_end",
            restart = restart,
            rapport = rapport,
            combat_score = combat,
            improving_swaps = improving_swaps,
        );
        AttemptOutcome::Accepted {
            candidate: Candidate {
                restart,
                units,
                score: ArmadaScore::of(rapport, combat),
            },
            improving_swaps,
        }
    }
}

/// Random stream for attempt `restart` in parallel mode.
pub fn stream_rng(seed: u64, restart: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(restart as u64);
    rng
}

#[derive(Debug, Default)]
struct Tally {
    best: Option<Candidate>,
    best_rejected: Option<f64>,
    stats: RestartStats,
}

impl Tally {
    fn record(&mut self, outcome: AttemptOutcome) {
        self.stats.attempts += 1;
        match outcome {
            AttemptOutcome::ConstructionFailed => {
                self.stats.construction_failures += 1;
            }
            AttemptOutcome::CombatRejected {
                combat,
                improving_swaps,
            } => {
                self.stats.combat_rejections += 1;
                self.stats.improving_swaps += improving_swaps;
                self.best_rejected = Some(match self.best_rejected {
                    Some(seen) => seen.max(combat),
                    None => combat,
                });
            }
            AttemptOutcome::Accepted {
                candidate,
                improving_swaps,
            } => {
                self.stats.improving_swaps += improving_swaps;
                let replace = self
                    .best
                    .as_ref()
                    .map_or(true, |best| candidate.score > best.score);
                if replace {
                    self.best = Some(candidate);
                }
            }
        }
    }

    fn finish(self, min_combat_score: Option<f64>) -> Result<RestartOutcome> {
        let attempts = self.stats.attempts;
        match (self.best, min_combat_score, self.best_rejected) {
            (Some(best), _, _) => Ok(RestartOutcome {
                best,
                stats: self.stats,
            }),
            (None, Some(min), Some(best_seen)) => Err(SolveError::CombatScoreBelowMinimum {
                min_combat_score: min,
                best_combat_score: best_seen,
                attempts,
            }),
            (None, _, _) => Err(SolveError::NoFeasibleAssignment { attempts }),
        }
    }
}

#[cfg(test)]
#[path = "restart_tests.rs"]
mod tests;
