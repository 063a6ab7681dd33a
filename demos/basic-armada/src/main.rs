//! Partitions a small guild into three units and prints the result.
//!
//! Run with `RUST_LOG=armada_solver=debug` to see every restart.

use armada::prelude::*;

const ROSTER: [&str; 11] = [
    "alain", "celine", "chloe", "clive", "jeremy", "lex", "miriam", "rolf", "scarlett",
    "travis", "yahna",
];

const RAPPORT: [(&str, &str); 12] = [
    ("alain", "scarlett"),
    ("alain", "clive"),
    ("alain", "travis"),
    ("celine", "chloe"),
    ("celine", "lex"),
    ("chloe", "jeremy"),
    ("clive", "jeremy"),
    ("lex", "miriam"),
    ("miriam", "rolf"),
    ("rolf", "yahna"),
    ("scarlett", "yahna"),
    ("travis", "clive"),
];

fn main() -> Result<(), SolveError> {
    let problem = Problem::new(ROSTER, [4, 4, 3])
        .with_rapport(RAPPORT)?
        .with_whitelist([("alain", "scarlett")])?
        .with_blacklist([("celine", "travis"), ("rolf", "jeremy")])?;

    // Prefer units that mix the first letters of their members' names.
    let variety = |units: &[Vec<MemberId>]| {
        units
            .iter()
            .map(|unit| {
                let mut initials: Vec<char> =
                    unit.iter().filter_map(|m| m.chars().next()).collect();
                initials.sort_unstable();
                initials.dedup();
                initials.len() as f64
            })
            .sum::<f64>()
    };

    let solver = Armada::load("solver.toml").with_combat_scorer(variety);
    let solution = solver.solve(&problem)?;

    for (idx, (unit, rapport)) in solution
        .units
        .iter()
        .zip(&solution.unit_rapports)
        .enumerate()
    {
        println!("Unit {}: {} ({} rapport)", idx + 1, unit.join(", "), rapport);
    }
    if !solution.unassigned.is_empty() {
        println!("Unassigned: {}", solution.unassigned.join(", "));
    }
    println!(
        "Total rapport {} | combat {:.1} | {} of {} attempts accepted",
        solution.total_rapports,
        solution.combat_score.unwrap_or_default(),
        solution.stats.accepted(),
        solution.stats.attempts,
    );
    Ok(())
}
