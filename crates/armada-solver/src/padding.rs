//! Placeholder members that fill a capacity shortfall.

use std::collections::HashSet;

use armada_core::MemberId;

/// Prefix of every generated placeholder id.
pub const PLACEHOLDER_PREFIX: &str = "__empty_slot__";

/// The synthetic ids added to a roster for one solve call.
///
/// Placeholders become singleton clusters and are stripped from every part
/// of the returned solution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    ids: HashSet<MemberId>,
}

impl Placeholders {
    /// Generates `deficit` ids that collide with neither `roster` nor each other.
    ///
    /// Ids are numbered sequentially from 1; a candidate already in the roster
    /// is skipped and numbering continues.
    pub fn generate(roster: &[MemberId], deficit: usize) -> Self {
        if deficit == 0 {
            return Self::default();
        }

        let taken: HashSet<&str> = roster.iter().map(String::as_str).collect();
        let mut ids = HashSet::with_capacity(deficit);
        let mut next_idx = 1usize;
        while ids.len() < deficit {
            let candidate = format!("{PLACEHOLDER_PREFIX}{next_idx}");
            next_idx += 1;
            if taken.contains(candidate.as_str()) || ids.contains(&candidate) {
                continue;
            }
            ids.insert(candidate);
        }
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.ids.contains(member)
    }

    /// Returns the ids in sorted order, ready to append to a roster.
    pub fn sorted(&self) -> Vec<MemberId> {
        let mut ids: Vec<MemberId> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Removes placeholder ids from `members`, keeping order.
    pub fn strip(&self, members: &mut Vec<MemberId>) {
        if !self.ids.is_empty() {
            members.retain(|member| !self.ids.contains(member));
        }
    }
}
