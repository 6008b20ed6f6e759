// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    errors::MintermOutOfRange,
    implicant::Implicant,
    kmap::{KmapLayout, Region},
    minterms::MintermSet,
    variables::{VariableCount, VariableNames},
};
use log::debug;

/// A single-output boolean function with an on-set and a don't-care set.
///
/// A minterm in neither set belongs to the off-set. A minterm listed in both sets is
/// treated as part of the on-set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicFunction {
    variable_count: VariableCount,
    on_set: MintermSet,
    dc_set: MintermSet,
}

impl LogicFunction {
    pub fn new(
        variable_count: VariableCount,
        on_set: MintermSet,
        dc_set: MintermSet,
    ) -> Result<Self, MintermOutOfRange> {
        for set in [&on_set, &dc_set] {
            if let Some(last) = set.last() {
                check_minterm(variable_count, last as usize)?;
            }
        }
        Ok(Self::from_parts(variable_count, on_set, dc_set))
    }

    /// Creates a function from lists of minterm indices.
    pub fn from_minterms(
        variable_count: VariableCount,
        on_set: impl IntoIterator<Item = u8>,
        dc_set: impl IntoIterator<Item = u8>,
    ) -> Result<Self, MintermOutOfRange> {
        let on_set = collect_minterms(variable_count, on_set)?;
        let dc_set = collect_minterms(variable_count, dc_set)?;
        Ok(Self::from_parts(variable_count, on_set, dc_set))
    }

    pub(crate) fn from_parts(
        variable_count: VariableCount,
        on_set: MintermSet,
        dc_set: MintermSet,
    ) -> Self {
        let dc_set = dc_set.difference(&on_set);
        Self {
            variable_count,
            on_set,
            dc_set,
        }
    }

    #[inline]
    pub fn variable_count(&self) -> VariableCount {
        self.variable_count
    }

    #[inline]
    pub fn on_set(&self) -> &MintermSet {
        &self.on_set
    }

    #[inline]
    pub fn dc_set(&self) -> &MintermSet {
        &self.dc_set
    }

    /// Minimizes this function into a sum of products.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_min::{
    ///     variables::{VariableCount, VariableNames},
    ///     LogicFunction,
    /// };
    ///
    /// let f = LogicFunction::from_minterms(VariableCount::Three, [0, 2, 4, 6], []).unwrap();
    /// let minimized = f.minimize(&VariableNames::defaults(VariableCount::Three));
    /// assert_eq!(minimized.expression(), "C'");
    /// assert_eq!(minimized.selected()[0].term().to_string(), "--0");
    /// ```
    pub fn minimize(&self, names: &VariableNames) -> Minimization {
        debug_assert_eq!(
            names.count(),
            self.variable_count,
            "one name is required per variable"
        );

        let prime_implicants = self.prime_implicants();
        let cover = Cover::select(&prime_implicants, &self.on_set);
        let expression = cover.algebraic_display(names).to_string();
        debug!(
            "minimized to {} ({} of {} prime implicants)",
            expression,
            cover.len(),
            prime_implicants.len()
        );

        Minimization {
            variable_count: self.variable_count,
            prime_implicants,
            cover,
            expression,
        }
    }
}

/// Minimizes `function` into a sum of products. See [`LogicFunction::minimize`].
#[inline]
pub fn minimize(function: &LogicFunction, names: &VariableNames) -> Minimization {
    function.minimize(names)
}

fn collect_minterms(
    variable_count: VariableCount,
    minterms: impl IntoIterator<Item = u8>,
) -> Result<MintermSet, MintermOutOfRange> {
    minterms
        .into_iter()
        .map(|minterm| check_minterm(variable_count, minterm as usize).map(|()| minterm))
        .collect()
}

fn check_minterm(variable_count: VariableCount, minterm: usize) -> Result<(), MintermOutOfRange> {
    if minterm < variable_count.minterm_count() {
        Ok(())
    } else {
        Err(MintermOutOfRange {
            minterm,
            variable_count: variable_count.get(),
        })
    }
}

/// The result of minimizing a [`LogicFunction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimization {
    variable_count: VariableCount,
    prime_implicants: Vec<Implicant>,
    cover: Cover,
    expression: String,
}

impl Minimization {
    /// Returns every prime implicant found, selected or not.
    #[inline]
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.prime_implicants
    }

    /// Returns the selected implicants, in selection order.
    #[inline]
    pub fn selected(&self) -> &[Implicant] {
        self.cover.elements()
    }

    #[inline]
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Returns the minimized expression, such as `AB' + C`. This is `0` if nothing was
    /// selected and `1` if the function is constant true.
    #[inline]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[inline]
    pub fn layout(&self) -> KmapLayout {
        KmapLayout::new(self.variable_count)
    }

    /// Returns the K-map rectangles of each selected implicant, in selection order.
    pub fn regions(&self) -> Vec<Vec<Region>> {
        let layout = self.layout();
        self.selected()
            .iter()
            .map(|implicant| implicant.regions(layout))
            .collect()
    }

    /// Evaluates the minimized expression at `minterm`.
    #[inline]
    pub fn evaluate(&self, minterm: u8) -> bool {
        self.cover.evaluate(minterm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn minimize_with_defaults(count: VariableCount, on: &[u8], dc: &[u8]) -> Minimization {
        LogicFunction::from_minterms(count, on.iter().copied(), dc.iter().copied())
            .unwrap()
            .minimize(&VariableNames::defaults(count))
    }

    fn selected_terms(minimized: &Minimization) -> Vec<String> {
        minimized
            .selected()
            .iter()
            .map(|implicant| implicant.term().to_string())
            .collect()
    }

    #[test]
    fn test_all_ones() {
        let minimized = minimize_with_defaults(VariableCount::Two, &[0, 1, 2, 3], &[]);
        assert_eq!(selected_terms(&minimized), ["--"]);
        assert_eq!(minimized.expression(), "1");
        assert_eq!(minimized.selected()[0].minterms().len(), 4);
    }

    #[test]
    fn test_all_zeros() {
        let minimized = minimize_with_defaults(VariableCount::Two, &[], &[]);
        assert!(minimized.prime_implicants().is_empty());
        assert!(minimized.selected().is_empty());
        assert_eq!(minimized.expression(), "0");
    }

    #[test]
    fn test_dont_cares_only() {
        let minimized = minimize_with_defaults(VariableCount::Three, &[], &[1, 3, 5]);
        assert!(minimized.prime_implicants().is_empty());
        assert_eq!(minimized.expression(), "0");
    }

    #[test]
    fn test_single_variable() {
        let minimized = minimize_with_defaults(VariableCount::Three, &[0, 2, 4, 6], &[]);
        assert_eq!(selected_terms(&minimized), ["--0"]);
        assert_eq!(minimized.expression(), "C'");
    }

    #[test]
    fn test_all_but_last() {
        let minimized =
            minimize_with_defaults(VariableCount::Three, &[0, 1, 2, 3, 4, 5, 6], &[]);
        assert_eq!(minimized.expression(), "A' + B' + C'");
        assert!(minimized.selected().len() >= 2);
        for minterm in 0..7 {
            assert!(minimized.evaluate(minterm), "m{} is covered", minterm);
        }
        assert!(minimized
            .selected()
            .iter()
            .all(|implicant| !implicant.covers(7)));
    }

    #[test]
    fn test_with_dont_cares() {
        let minimized =
            minimize_with_defaults(VariableCount::Four, &[4, 8, 10, 11, 12, 15], &[9, 14]);
        assert_eq!(selected_terms(&minimized), ["-100", "1-1-", "10--"]);
        assert_eq!(minimized.expression(), "BC'D' + AC + AB'");
    }

    #[test]
    fn test_overlapping_sets() {
        let f = LogicFunction::from_minterms(VariableCount::Two, [1], [1, 3]).unwrap();
        assert_eq!(f.dc_set().iter().collect::<Vec<_>>(), [3]);
        let minimized = f.minimize(&VariableNames::defaults(VariableCount::Two));
        assert_eq!(minimized.expression(), "B");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            LogicFunction::from_minterms(VariableCount::Two, [0, 4], []),
            Err(MintermOutOfRange {
                minterm: 4,
                variable_count: 2
            })
        );
        let on_set: MintermSet = [9].iter().copied().collect();
        assert!(LogicFunction::new(VariableCount::Three, on_set, MintermSet::new()).is_err());
        assert!(LogicFunction::new(VariableCount::Four, on_set, MintermSet::new()).is_ok());
    }

    #[test]
    fn test_regions() {
        let minimized = minimize_with_defaults(VariableCount::Three, &[0, 2, 4, 6], &[]);
        let regions = minimized.regions();
        assert_eq!(regions.len(), 1);
        // Columns 00 and 10 sit at opposite edges of the map.
        assert_eq!(regions[0].len(), 2);
    }

    proptest! {
        #[test]
        fn proptest_minimize(f: LogicFunction) {
            let names = VariableNames::defaults(f.variable_count());
            let minimized = f.minimize(&names);

            // Every required minterm is covered, and nothing in the off-set is.
            prop_assert!(minimized.cover().covers_all(f.on_set()));
            for minterm in f.variable_count().minterms() {
                if !f.on_set().contains(minterm) && !f.dc_set().contains(minterm) {
                    prop_assert!(!minimized.evaluate(minterm), "m{} is in the off-set", minterm);
                }
            }

            // Selected implicants are prime implicants.
            for implicant in minimized.selected() {
                prop_assert!(minimized.prime_implicants().contains(implicant));
            }

            let again = minimize(&f, &names);
            prop_assert_eq!(&minimized, &again, "minimization is deterministic");
        }
    }
}
