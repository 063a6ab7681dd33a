//! Solve entry points.

use std::time::Instant;

use armada_config::{RestartMode, SolverConfig};
use armada_core::{MemberId, PairSet, Result, Solution, SolveError};
use tracing::info;

use crate::assemble::assemble;
use crate::prepare::PreparedProblem;
use crate::problem::{Problem, ProblemView};
use crate::restart::{CombatScorer, RestartRunner};

/// Partitions `roster` into units of the given capacities.
///
/// Restarts run sequentially on one random stream seeded from `seed`, so
/// equal inputs give equal solutions. Pairs naming ids outside the roster
/// are ignored, except whitelist pairs, which must be inside it and must
/// also be rapport edges.
///
/// # Errors
///
/// Validation errors are returned before any attempt runs; see
/// [`SolveError::is_validation`]. If no attempt succeeds, the error is
/// [`SolveError::NoFeasibleAssignment`] or
/// [`SolveError::CombatScoreBelowMinimum`].
///
/// # Examples
///
/// ```
/// use armada_core::Pair;
/// use armada_solver::solve;
///
/// let roster: Vec<String> = ["alice", "bob", "charlie", "dave"]
///     .iter()
///     .map(|id| id.to_string())
///     .collect();
/// let rapport = Pair::set_of([("alice", "bob"), ("charlie", "dave")]).unwrap();
/// let none = Default::default();
///
/// let solution = solve(&roster, &[2, 2], &rapport, &none, &none, 42, 10, 100, None, None)
///     .unwrap();
/// assert_eq!(solution.total_rapports, 2);
/// assert!(solution.shares_unit("alice", "bob"));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn solve(
    roster: &[MemberId],
    unit_capacities: &[usize],
    rapport_edges: &PairSet,
    whitelist: &PairSet,
    blacklist: &PairSet,
    seed: u64,
    restarts: usize,
    swap_iterations: usize,
    combat_scorer: Option<&dyn CombatScorer>,
    min_combat_score: Option<f64>,
) -> Result<Solution> {
    let view = ProblemView {
        roster,
        unit_capacities,
        rapport_edges,
        whitelist,
        blacklist,
    };
    let mut config = SolverConfig::new()
        .with_random_seed(seed)
        .with_restarts(restarts)
        .with_swap_iterations(swap_iterations)
        .with_restart_mode(RestartMode::Sequential);
    config.min_combat_score = min_combat_score;

    solve_view(view, &config, combat_scorer)
}

/// Solves `problem` with every setting taken from `config`, including the
/// restart mode.
pub fn solve_problem(
    problem: &Problem,
    config: &SolverConfig,
    combat_scorer: Option<&dyn CombatScorer>,
) -> Result<Solution> {
    solve_view(problem.view(), config, combat_scorer)
}

fn solve_view(
    problem: ProblemView<'_>,
    config: &SolverConfig,
    combat_scorer: Option<&dyn CombatScorer>,
) -> Result<Solution> {
    problem.validate()?;
    if let Some(min) = config.min_combat_score {
        if min.is_nan() || min < 0.0 {
            return Err(SolveError::NegativeMinCombatScore(min));
        }
        if combat_scorer.is_none() {
            return Err(SolveError::MissingCombatScorer);
        }
    }

    let start = Instant::now();
    let prepared = PreparedProblem::build(&problem)?;

    info!(
        event = "solve_start",
        member_count = problem.roster.len(),
        unit_count = problem.unit_capacities.len(),
        capacity = problem.total_capacity(),
        cluster_count = prepared.clusters.len(),
        placeholder_count = prepared.placeholders.len(),
        restarts = config.effective_restarts(),
        swap_iterations = config.swap_iterations,
        seed = config.random_seed,
        mode = config.restart_mode.as_str(),
    );
    if !prepared.trim.is_empty() {
        info!(
            event = "trim",
            dropped_clusters = prepared.trim.dropped.len(),
            dropped_members = prepared.trim.dropped_members,
            penalty = prepared.trim.penalty,
        );
    }

    let outcome = RestartRunner::new(&prepared, config, combat_scorer).run()?;
    let solution = assemble(&prepared, &outcome.best, config, outcome.stats);

    info!(
        event = "solve_end",
        total_rapport = solution.total_rapports,
        combat_score = solution.combat_score,
        attempts = outcome.stats.attempts,
        construction_failures = outcome.stats.construction_failures,
        combat_rejections = outcome.stats.combat_rejections,
        duration_ms = start.elapsed().as_millis() as u64,
    );
    Ok(solution)
}
