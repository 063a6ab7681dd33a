//! Problem fixtures.

use armada_core::{MemberId, Pair, PairSet};

/// Raw inputs for one solve call.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub roster: Vec<MemberId>,
    pub unit_capacities: Vec<usize>,
    pub rapport_edges: PairSet,
    pub whitelist: PairSet,
    pub blacklist: PairSet,
}

fn pairs(list: &[(&str, &str)]) -> PairSet {
    Pair::set_of(list.iter().copied()).expect("fixture pairs are distinct")
}

impl Scenario {
    pub fn new(roster: &[&str], unit_capacities: &[usize]) -> Self {
        Self {
            roster: roster.iter().map(|id| id.to_string()).collect(),
            unit_capacities: unit_capacities.to_vec(),
            ..Self::default()
        }
    }

    pub fn rapport(mut self, list: &[(&str, &str)]) -> Self {
        self.rapport_edges.extend(pairs(list));
        self
    }

    pub fn whitelist(mut self, list: &[(&str, &str)]) -> Self {
        self.whitelist.extend(pairs(list));
        self
    }

    pub fn blacklist(mut self, list: &[(&str, &str)]) -> Self {
        self.blacklist.extend(pairs(list));
        self
    }

    pub fn total_capacity(&self) -> usize {
        self.unit_capacities.iter().sum()
    }

    /// Four members in two units of two, with two disjoint rapport pairs.
    pub fn two_pairs() -> Self {
        Self::new(&["alice", "bob", "charlie", "dave"], &[2, 2])
            .rapport(&[("alice", "bob"), ("charlie", "dave")])
    }

    /// [`Scenario::two_pairs`] with alice and bob whitelisted.
    pub fn whitelisted_pair() -> Self {
        Self::two_pairs().whitelist(&[("alice", "bob")])
    }

    /// [`Scenario::two_pairs`] with alice and bob blacklisted.
    pub fn blacklisted_pair() -> Self {
        Self::two_pairs().blacklist(&[("alice", "bob")])
    }

    /// Five members for six slots; the solver must pad.
    pub fn short_roster() -> Self {
        Self::new(&["alice", "bob", "charlie", "dave", "erin"], &[3, 3])
            .rapport(&[("alice", "bob"), ("charlie", "dave"), ("dave", "erin")])
    }

    /// Seven members for four slots, with a whitelist group that must stay
    /// whole whether kept or trimmed.
    pub fn long_roster() -> Self {
        Self::new(
            &["alice", "bob", "charlie", "dave", "erin", "frank", "grace"],
            &[2, 2],
        )
        .rapport(&[
            ("alice", "bob"),
            ("charlie", "dave"),
            ("erin", "frank"),
            ("frank", "grace"),
            ("bob", "charlie"),
        ])
        .whitelist(&[("erin", "frank")])
        .blacklist(&[("alice", "dave")])
    }

    /// A deterministic guild of `size` members in units of `unit_size`.
    ///
    /// Member `i` has rapport with `i + 1` and `i + 3`; every fifth member
    /// is whitelisted with its successor and every seventh is blacklisted
    /// against the member two places ahead.
    pub fn guild(size: usize, unit_size: usize) -> Self {
        let names: Vec<MemberId> = (0..size).map(|i| format!("m{i:03}")).collect();
        let mut scenario = Self {
            roster: names.clone(),
            unit_capacities: vec![unit_size; size / unit_size],
            ..Self::default()
        };

        let link = |a: usize, b: usize| {
            Pair::new(names[a].as_str(), names[b].as_str()).expect("distinct ids")
        };
        for i in 0..size {
            for step in [1, 3] {
                if i + step < size {
                    scenario.rapport_edges.insert(link(i, i + step));
                }
            }
            if i % 5 == 0 && i + 1 < size {
                scenario.whitelist.insert(link(i, i + 1));
            }
            if i % 7 == 0 && i + 2 < size {
                scenario.blacklist.insert(link(i, i + 2));
            }
        }
        scenario
    }
}
