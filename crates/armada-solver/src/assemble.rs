//! Turns the winning attempt into a [`Solution`].

use armada_config::SolverConfig;
use armada_core::{RestartStats, Solution};

use crate::prepare::PreparedProblem;
use crate::restart::Candidate;
use crate::scoring::score_unit;

/// Expands clusters to members in unit order, drops placeholders, and
/// recounts rapport per unit from the member lists.
pub fn assemble(
    prepared: &PreparedProblem,
    best: &Candidate,
    config: &SolverConfig,
    stats: RestartStats,
) -> Solution {
    let units = prepared.member_units(&best.units);
    let unit_rapports: Vec<usize> = units
        .iter()
        .map(|unit| score_unit(unit, &prepared.rapport_edges))
        .collect();

    Solution {
        total_rapports: unit_rapports.iter().sum(),
        units,
        unit_rapports,
        unassigned: prepared.real_unassigned(),
        combat_score: best.score.combat(),
        seed: config.random_seed,
        restarts: config.restarts,
        swap_iterations: config.swap_iterations,
        stats,
    }
}
