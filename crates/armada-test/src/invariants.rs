//! Assertions on returned solutions.
//!
//! Each checker panics with a descriptive message on the first violation.

use std::collections::HashMap;

use armada_core::{MemberId, PairSet, Solution};

use crate::scenario::Scenario;

/// Placeholder ids start with this prefix.
const PLACEHOLDER_PREFIX: &str = "__empty_slot__";

/// Every real member appears exactly once, in a unit or unassigned, and
/// nothing else appears.
pub fn assert_partition(solution: &Solution, roster: &[MemberId]) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for member in solution.units.iter().flatten().chain(&solution.unassigned) {
        assert!(
            !member.starts_with(PLACEHOLDER_PREFIX),
            "placeholder {member} leaked into the solution"
        );
        *seen.entry(member.as_str()).or_default() += 1;
    }
    for member in roster {
        match seen.remove(member.as_str()) {
            Some(1) => {}
            Some(n) => panic!("member {member} appears {n} times"),
            None => panic!("member {member} is missing"),
        }
    }
    assert!(seen.is_empty(), "unknown members in solution: {seen:?}");

    let mut sorted = solution.unassigned.clone();
    sorted.sort();
    assert_eq!(sorted, solution.unassigned, "unassigned list is not sorted");
}

/// Both ends of every whitelist pair share a unit, or were trimmed
/// together.
pub fn assert_whitelist(solution: &Solution, whitelist: &PairSet) {
    for pair in whitelist {
        let (a, b) = pair.members();
        let trimmed = |m: &str| solution.unassigned.iter().any(|u| u == m);
        assert!(
            solution.shares_unit(a, b) || (trimmed(a) && trimmed(b)),
            "whitelist pair {pair} is split"
        );
    }
}

/// No blacklist pair shares a unit.
pub fn assert_blacklist(solution: &Solution, blacklist: &PairSet) {
    for pair in blacklist {
        let (a, b) = pair.members();
        assert!(
            !solution.shares_unit(a, b),
            "blacklist pair {pair} shares a unit"
        );
    }
}

/// Unit sizes match the requested capacities, allowing for placeholders
/// removed from a short roster.
pub fn assert_capacity(solution: &Solution, unit_capacities: &[usize], roster_len: usize) {
    assert_eq!(solution.units.len(), unit_capacities.len());
    for (idx, (unit, &capacity)) in solution.units.iter().zip(unit_capacities).enumerate() {
        assert!(
            unit.len() <= capacity,
            "unit {idx} holds {} members for capacity {capacity}",
            unit.len()
        );
    }

    let total: usize = unit_capacities.iter().sum();
    let placeholders = total.saturating_sub(roster_len);
    assert_eq!(solution.assigned_count() + placeholders, total);
}

/// Rapport counts agree with the member lists.
pub fn assert_rapport_counts(solution: &Solution, rapport_edges: &PairSet) {
    let mut total = 0;
    for (unit, &reported) in solution.units.iter().zip(&solution.unit_rapports) {
        let actual = rapport_edges
            .iter()
            .filter(|pair| {
                let (a, b) = pair.members();
                unit.iter().any(|m| m == a) && unit.iter().any(|m| m == b)
            })
            .count();
        assert_eq!(actual, reported, "unit {unit:?} rapport mismatch");
        total += actual;
    }
    assert_eq!(total, solution.total_rapports);
}

/// Runs every checker against `scenario`.
pub fn assert_solution_invariants(solution: &Solution, scenario: &Scenario) {
    assert_partition(solution, &scenario.roster);
    assert_whitelist(solution, &scenario.whitelist);
    assert_blacklist(solution, &scenario.blacklist);
    assert_capacity(solution, &scenario.unit_capacities, scenario.roster.len());
    assert_rapport_counts(solution, &scenario.rapport_edges);
}
