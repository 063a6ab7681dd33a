//! Tests for the restart orchestrator.

use super::*;
use crate::problem::Problem;

fn prepared(problem: &Problem) -> PreparedProblem {
    problem.validate().unwrap();
    PreparedProblem::build(&problem.view()).unwrap()
}

fn pairs_problem() -> Problem {
    Problem::new(["alice", "bob", "charlie", "dave"], [2, 2])
        .with_rapport([("alice", "bob"), ("charlie", "dave")])
        .unwrap()
}

fn shares_unit(
    prepared: &PreparedProblem,
    units: &[UnitClusters],
    a: &str,
    b: &str,
) -> bool {
    prepared
        .member_units(units)
        .iter()
        .any(|unit| unit.iter().any(|m| m == a) && unit.iter().any(|m| m == b))
}

#[test]
fn test_sequential_finds_both_pairs() {
    let prepared = prepared(&pairs_problem());
    let config = SolverConfig::new().with_random_seed(42).with_restarts(10);
    let outcome = RestartRunner::new(&prepared, &config, None).run().unwrap();

    assert_eq!(outcome.best.score, ArmadaScore::of_rapport(2));
    assert!(shares_unit(&prepared, &outcome.best.units, "alice", "bob"));
    assert_eq!(outcome.stats.attempts, 10);
    assert_eq!(outcome.stats.accepted(), 10);
}

#[test]
fn test_zero_restarts_still_runs_once() {
    let prepared = prepared(&pairs_problem());
    let config = SolverConfig::new().with_restarts(0);
    let outcome = RestartRunner::new(&prepared, &config, None).run().unwrap();

    assert_eq!(outcome.stats.attempts, 1);
    assert_eq!(outcome.best.restart, 0);
}

#[test]
fn test_sequential_is_deterministic() {
    let problem = Problem::new(["a", "b", "c", "d", "e", "f"], [3, 3])
        .with_rapport([("a", "d"), ("b", "e"), ("c", "f"), ("a", "b")])
        .unwrap();
    let prepared = prepared(&problem);
    let config = SolverConfig::new().with_random_seed(7).with_restarts(12);

    let first = RestartRunner::new(&prepared, &config, None).run().unwrap();
    let second = RestartRunner::new(&prepared, &config, None).run().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_per_stream_attempts() {
    let problem = Problem::new(["a", "b", "c", "d", "e", "f"], [2, 2, 2])
        .with_rapport([("a", "d"), ("b", "e"), ("c", "f"), ("a", "b")])
        .unwrap();
    let prepared = prepared(&problem);
    let config = SolverConfig::new()
        .with_random_seed(11)
        .with_restarts(8)
        .with_restart_mode(RestartMode::Parallel);
    let runner = RestartRunner::new(&prepared, &config, None);

    let parallel = runner.run().unwrap();
    assert_eq!(parallel, runner.run().unwrap());

    let mut expected: Option<Candidate> = None;
    for restart in 0..8 {
        let mut rng = stream_rng(11, restart);
        if let AttemptOutcome::Accepted { candidate, .. } = runner.attempt(restart, &mut rng) {
            if expected
                .as_ref()
                .map_or(true, |best| candidate.score > best.score)
            {
                expected = Some(candidate);
            }
        }
    }
    assert_eq!(Some(parallel.best), expected);
}

#[test]
fn test_streams_differ_per_restart() {
    let mut first = stream_rng(5, 0);
    let mut second = stream_rng(5, 1);
    let a: u64 = first.random();
    let b: u64 = second.random();
    assert_ne!(a, b);
}

#[test]
fn test_all_constructions_fail() {
    let problem = Problem::new(["a", "b", "c", "d"], [2, 2])
        .with_blacklist([("a", "b"), ("a", "c"), ("a", "d")])
        .unwrap();
    let prepared = prepared(&problem);
    let config = SolverConfig::new().with_restarts(5);

    let err = RestartRunner::new(&prepared, &config, None)
        .run()
        .unwrap_err();
    assert_eq!(err, SolveError::NoFeasibleAssignment { attempts: 5 });
    assert!(err.is_search_exhausted());
}

#[test]
fn test_combat_minimum_rejects_everything() {
    let prepared = prepared(&pairs_problem());
    let config = SolverConfig::new()
        .with_restarts(4)
        .with_min_combat_score(10.0);
    let scorer = |units: &[Vec<MemberId>]| units.len() as f64;

    let err = RestartRunner::new(&prepared, &config, Some(&scorer))
        .run()
        .unwrap_err();
    assert_eq!(
        err,
        SolveError::CombatScoreBelowMinimum {
            min_combat_score: 10.0,
            best_combat_score: 2.0,
            attempts: 4,
        }
    );
}

#[test]
fn test_nan_combat_never_meets_minimum() {
    let prepared = prepared(&pairs_problem());
    let config = SolverConfig::new()
        .with_restarts(3)
        .with_min_combat_score(5.0);
    let scorer = |_: &[Vec<MemberId>]| f64::NAN;

    let err = RestartRunner::new(&prepared, &config, Some(&scorer))
        .run()
        .unwrap_err();
    match err {
        SolveError::CombatScoreBelowMinimum {
            min_combat_score,
            attempts,
            ..
        } => {
            assert_eq!(min_combat_score, 5.0);
            assert_eq!(attempts, 3);
        }
        other => panic!("expected CombatScoreBelowMinimum, got {other:?}"),
    }
}

#[test]
fn test_nan_combat_loses_rapport_ties() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let prepared = prepared(&pairs_problem());
    let config = SolverConfig::new().with_random_seed(42).with_restarts(5);
    let calls = AtomicUsize::new(0);
    let scorer = |_: &[Vec<MemberId>]| {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            f64::NAN
        } else {
            10.0
        }
    };

    let outcome = RestartRunner::new(&prepared, &config, Some(&scorer))
        .run()
        .unwrap();
    assert_eq!(outcome.best.score, ArmadaScore::of(2, Some(10.0)));
    assert_eq!(outcome.best.score.combat(), Some(10.0));
}

#[test]
fn test_combat_breaks_rapport_ties() {
    let problem = Problem::new(["a", "b", "c", "d"], [2, 2]);
    let prepared = prepared(&problem);
    let config = SolverConfig::new().with_random_seed(3).with_restarts(60);
    let scorer = |units: &[Vec<MemberId>]| {
        let together = units
            .iter()
            .any(|unit| unit.iter().any(|m| m == "a") && unit.iter().any(|m| m == "b"));
        if together {
            1.0
        } else {
            0.0
        }
    };

    let outcome = RestartRunner::new(&prepared, &config, Some(&scorer))
        .run()
        .unwrap();
    assert_eq!(outcome.best.score, ArmadaScore::of(0, Some(1.0)));
    assert!(shares_unit(&prepared, &outcome.best.units, "a", "b"));
}

#[test]
fn test_scorer_sees_no_placeholders() {
    let problem = Problem::new(["a", "b", "c"], [2, 2]);
    let prepared = prepared(&problem);
    let config = SolverConfig::new().with_restarts(3);
    let scorer = |units: &[Vec<MemberId>]| {
        assert!(units
            .iter()
            .flatten()
            .all(|m| !m.starts_with(crate::padding::PLACEHOLDER_PREFIX)));
        units.iter().map(Vec::len).sum::<usize>() as f64
    };

    let outcome = RestartRunner::new(&prepared, &config, Some(&scorer))
        .run()
        .unwrap();
    assert_eq!(outcome.best.score.combat(), Some(3.0));
}
