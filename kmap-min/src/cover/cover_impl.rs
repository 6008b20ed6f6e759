// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{CoverAlgebraicDisplay, CoverMatrixDisplay},
    implicant::Implicant,
    minterms::MintermSet,
    variables::VariableNames,
};
use log::{debug, trace};
use std::cmp::Reverse;

/// An ordered list of implicants whose sum is a sum-of-products expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    elements: Vec<Implicant>,
}

impl Cover {
    pub fn new(elements: impl IntoIterator<Item = Implicant>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Selects implicants out of `primes` that together cover every minterm in `required`.
    ///
    /// Essential prime implicants (the only prime covering some required minterm) are
    /// selected first, in ascending order of the minterm that made them essential. The rest is
    /// covered greedily: the prime covering the most uncovered minterms is picked next, with
    /// ties going to the one listed first in `primes`.
    ///
    /// The result is not guaranteed to be a minimum cover.
    pub fn select(primes: &[Implicant], required: &MintermSet) -> Self {
        debug!(
            "selecting cover for {:?} out of {} prime implicants",
            required,
            primes.len()
        );

        let mut selected: Vec<&Implicant> = Vec::new();
        for minterm in required.iter() {
            let mut covering = primes.iter().filter(|prime| prime.covers(minterm));
            if let (Some(only), None) = (covering.next(), covering.next()) {
                if !selected.iter().any(|elem| elem.term() == only.term()) {
                    trace!("{} is essential (only cover of m{})", only.term(), minterm);
                    selected.push(only);
                }
            }
        }

        let mut uncovered = *required;
        for elem in &selected {
            uncovered.remove_all(elem.minterms());
        }

        let mut remaining: Vec<&Implicant> = primes
            .iter()
            .filter(|prime| !selected.iter().any(|elem| elem.term() == prime.term()))
            .collect();

        while !uncovered.is_empty() && !remaining.is_empty() {
            let (best_ix, best_count) = match remaining
                .iter()
                .map(|prime| prime.minterms().intersection_len(&uncovered))
                .enumerate()
                .max_by_key(|&(ix, count)| (count, Reverse(ix)))
            {
                Some(best) => best,
                None => break,
            };

            if best_count == 0 {
                debug!("no remaining prime covers {:?}, stopping", uncovered);
                break;
            }

            let best = remaining.remove(best_ix);
            trace!("greedily selected {} (covers {})", best.term(), best_count);
            uncovered.remove_all(best.minterms());
            selected.push(best);
        }

        Self::new(selected.into_iter().cloned())
    }

    #[inline]
    pub fn elements(&self) -> &[Implicant] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the union of the minterms covered by every element.
    pub fn minterms(&self) -> MintermSet {
        self.elements
            .iter()
            .flat_map(|elem| elem.minterms().iter())
            .collect()
    }

    /// Returns true if every minterm in `minterms` is covered by some element.
    #[inline]
    pub fn covers_all(&self, minterms: &MintermSet) -> bool {
        minterms.is_subset(&self.minterms())
    }

    /// Evaluates the sum of products at `minterm`.
    pub fn evaluate(&self, minterm: u8) -> bool {
        self.elements.iter().any(|elem| elem.covers(minterm))
    }

    /// Returns the total number of literals across all elements.
    pub fn literal_count(&self) -> usize {
        self.elements
            .iter()
            .map(|elem| elem.term().len() - elem.term().dash_count())
            .sum()
    }

    #[inline]
    pub fn matrix_display(&self) -> CoverMatrixDisplay<'_> {
        CoverMatrixDisplay::new(self)
    }

    #[inline]
    pub fn algebraic_display<'a>(&'a self, names: &'a VariableNames) -> CoverAlgebraicDisplay<'a> {
        CoverAlgebraicDisplay::new(self, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    fn implicants(terms: &[&str]) -> Vec<Implicant> {
        terms
            .iter()
            .map(|s| Implicant::new(s.parse::<Term>().unwrap()))
            .collect()
    }

    fn terms(cover: &Cover) -> Vec<String> {
        cover
            .elements()
            .iter()
            .map(|elem| elem.term().to_string())
            .collect()
    }

    fn minterms(values: &[u8]) -> MintermSet {
        values.iter().copied().collect()
    }

    #[test]
    fn test_essentials_then_greedy() {
        // f(A, B, C, D) = m(4, 8, 10, 11, 12, 15) + d(9, 14)
        let primes = implicants(&["-100", "10--", "1--0", "1-1-"]);
        let cover = Cover::select(&primes, &minterms(&[4, 8, 10, 11, 12, 15]));

        // -100 is the only cover of m4 and 1-1- of m15. m8 is left, and 10-- wins the tie
        // with 1--0 by coming first.
        assert_eq!(terms(&cover), ["-100", "1-1-", "10--"]);
        assert_eq!(cover.literal_count(), 7);
    }

    #[test]
    fn test_greedy_prefers_larger_coverage() {
        // Cyclic cover: no prime is essential.
        // f(A, B, C) = m(0, 1, 2, 5, 6, 7)
        let primes = implicants(&["00-", "0-0", "-01", "-10", "1-1", "11-"]);
        let required = minterms(&[0, 1, 2, 5, 6, 7]);
        let cover = Cover::select(&primes, &required);

        assert_eq!(terms(&cover), ["00-", "-10", "1-1"]);
        assert!(cover.covers_all(&required));
    }

    #[test]
    fn test_first_wins_ties() {
        let primes = implicants(&["0-", "-0"]);
        let cover = Cover::select(&primes, &minterms(&[0]));
        assert_eq!(terms(&cover), ["0-"]);

        let primes = implicants(&["-0", "0-"]);
        let cover = Cover::select(&primes, &minterms(&[0]));
        assert_eq!(terms(&cover), ["-0"]);
    }

    #[test]
    fn test_empty() {
        let cover = Cover::select(&[], &MintermSet::new());
        assert!(cover.is_empty());

        // Required minterms nothing covers are left uncovered.
        let primes = implicants(&["11"]);
        let cover = Cover::select(&primes, &minterms(&[0]));
        assert!(cover.is_empty());
        assert!(!cover.evaluate(0));
    }
}
