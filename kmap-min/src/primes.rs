// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{implicant::Implicant, logic_function::LogicFunction, term::Term};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};

impl LogicFunction {
    /// Generates the prime implicants of this function by Quine-McCluskey reduction.
    ///
    /// Returns no implicants if the on-set is empty, and the single all-dash implicant if the
    /// on-set and don't-care set together cover every minterm. Otherwise the primes are listed
    /// in the order they were found: by pass, then by group, then by position in the group.
    pub fn prime_implicants(&self) -> Vec<Implicant> {
        let count = self.variable_count();
        let care_set = self.on_set().union(self.dc_set());
        debug!(
            "computing prime implicants for on-set {:?}, dc-set {:?}",
            self.on_set(),
            self.dc_set()
        );

        if care_set.is_empty() || self.on_set().is_empty() {
            return Vec::new();
        }
        if care_set.len() == count.minterm_count() {
            debug!("care set is the whole universe");
            return vec![Implicant::new(Term::universe(count))];
        }

        // groups[k] holds the implicants with k ones.
        let mut groups: Vec<Vec<Implicant>> = vec![Vec::new(); count.get() + 1];
        for minterm in care_set.iter() {
            let implicant = Implicant::from_minterm(count, minterm);
            groups[implicant.term().ones()].push(implicant);
        }

        let mut candidates = Vec::new();
        for pass in 1.. {
            let (next_groups, used) = combine_pass(&groups);
            debug!(
                "pass {}: {} implicants, {} used",
                pass,
                groups.iter().map(Vec::len).sum::<usize>(),
                used.len()
            );

            candidates.extend(
                groups
                    .iter()
                    .flatten()
                    .filter(|implicant| !used.contains(implicant.term()))
                    .cloned(),
            );

            if used.is_empty() {
                break;
            }
            groups = next_groups;
        }

        dedup_by_term(candidates)
    }
}

/// Combines every implicant in group `k` with every implicant in group `k + 1`.
///
/// Returns the next level of groups (deduplicated by term within each group) and the terms of
/// the implicants that took part in at least one combination. Terms are unique across all
/// groups of a level, since each group holds a different number of ones.
fn combine_pass(groups: &[Vec<Implicant>]) -> (Vec<Vec<Implicant>>, BTreeSet<Term>) {
    let mut next_groups: Vec<Vec<Implicant>> = vec![Vec::new(); groups.len()];
    let mut used = BTreeSet::new();

    for (k, (lower, upper)) in groups.iter().tuple_windows::<(_, _)>().enumerate() {
        for a in lower {
            for b in upper {
                if let Some(combined) = a.combine(b) {
                    trace!("{} + {} -> {}", a.term(), b.term(), combined.term());
                    used.insert(a.term().clone());
                    used.insert(b.term().clone());

                    let group = &mut next_groups[k];
                    if !group.iter().any(|elem| elem.term() == combined.term()) {
                        group.push(combined);
                    }
                }
            }
        }
    }

    (next_groups, used)
}

/// Removes implicants with duplicate terms, keeping the position of the first occurrence.
///
/// Equal terms always cover equal minterm sets, so letting a later duplicate overwrite the
/// stored value doesn't change the result.
fn dedup_by_term(candidates: Vec<Implicant>) -> Vec<Implicant> {
    let mut positions: BTreeMap<Term, usize> = BTreeMap::new();
    let mut primes: Vec<Implicant> = Vec::with_capacity(candidates.len());

    for implicant in candidates {
        match positions.entry(implicant.term().clone()) {
            Entry::Occupied(entry) => primes[*entry.get()] = implicant,
            Entry::Vacant(entry) => {
                entry.insert(primes.len());
                primes.push(implicant);
            }
        }
    }

    primes
}
