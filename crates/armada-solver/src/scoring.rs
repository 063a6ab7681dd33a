//! Rapport counting on member lists.

use armada_core::{MemberId, Pair, PairSet};

/// Lists the rapport pairs co-located in `unit`, ordered by member position.
pub fn rapport_pairs_in_unit<'a>(
    unit: &'a [MemberId],
    edges: &PairSet,
) -> Vec<(&'a str, &'a str)> {
    let mut pairs = Vec::new();
    for (i, left) in unit.iter().enumerate() {
        for right in &unit[i + 1..] {
            let Ok(pair) = Pair::new(left.as_str(), right.as_str()) else {
                continue;
            };
            if edges.contains(&pair) {
                pairs.push((left.as_str(), right.as_str()));
            }
        }
    }
    pairs
}

/// Number of rapport pairs co-located in `unit`.
pub fn score_unit(unit: &[MemberId], edges: &PairSet) -> usize {
    rapport_pairs_in_unit(unit, edges).len()
}
