//! Integration tests for the `Armada` facade.

use armada::prelude::*;
use armada_test::{assert_solution_invariants, Scenario};

fn problem(scenario: &Scenario) -> Problem {
    Problem {
        roster: scenario.roster.clone(),
        unit_capacities: scenario.unit_capacities.clone(),
        rapport_edges: scenario.rapport_edges.clone(),
        whitelist: scenario.whitelist.clone(),
        blacklist: scenario.blacklist.clone(),
    }
}

#[test]
fn test_default_solver_pairs_partners() {
    let scenario = Scenario::two_pairs();
    let solution = Armada::new()
        .with_random_seed(42)
        .solve(&problem(&scenario))
        .unwrap();

    assert_solution_invariants(&solution, &scenario);
    assert_eq!(solution.total_rapports, 2);
    assert_eq!(solution.restarts, armada_config::DEFAULT_RESTARTS);
}

#[test]
fn test_solver_is_reusable() {
    let solver = Armada::new().with_random_seed(3).with_restarts(30);
    let scenario = Scenario::guild(24, 4);

    let first = solver.solve(&problem(&scenario)).unwrap();
    let second = solver.solve(&problem(&scenario)).unwrap();
    assert_eq!(first, second);
    assert_solution_invariants(&first, &scenario);
}

#[test]
fn test_combat_scorer_and_minimum() {
    let scenario = Scenario::two_pairs();
    let solver = Armada::new()
        .with_restarts(5)
        .with_min_combat_score(1.0)
        .with_combat_scorer(|units: &[Vec<MemberId>]| {
            let mixed = units
                .iter()
                .any(|unit| unit.iter().any(|m| m == "alice") && unit.iter().any(|m| m == "dave"));
            if mixed {
                1.0
            } else {
                0.0
            }
        });

    // Full rapport keeps alice with bob, so the minimum is never met.
    let err = solver.solve(&problem(&scenario)).unwrap_err();
    assert!(matches!(err, SolveError::CombatScoreBelowMinimum { .. }));
}

#[test]
fn test_minimum_without_scorer_is_rejected() {
    let err = Armada::new()
        .with_min_combat_score(1.0)
        .solve(&problem(&Scenario::two_pairs()))
        .unwrap_err();
    assert_eq!(err, SolveError::MissingCombatScorer);
    assert!(err.is_validation());
}

#[test]
fn test_parallel_mode_through_config() {
    let config = SolverConfig::from_toml_str(
        r#"
        random_seed = 77
        restarts = 24
        restart_mode = "parallel"
        "#,
    )
    .unwrap();
    let scenario = Scenario::guild(30, 5);
    let solver = Armada::from_config(config);

    let solution = solver.solve(&problem(&scenario)).unwrap();
    assert_solution_invariants(&solution, &scenario);
    assert_eq!(solution.seed, 77);
    assert_eq!(solution.stats.attempts, 24);
    assert_eq!(solution, solver.solve(&problem(&scenario)).unwrap());
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let solver = Armada::load("does-not-exist/armada.toml");
    assert_eq!(solver.config(), &SolverConfig::default());
}
