// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    kmap::{KmapLayout, Region},
    minterms::MintermSet,
    term::Term,
    variables::{VariableCount, VariableNames},
};

/// A term together with the minterms it covers.
///
/// The minterm set is always `term.minterms()`: it is derived from the term, so two
/// implicants with equal terms are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Implicant {
    term: Term,
    minterms: MintermSet,
}

impl Implicant {
    pub fn new(term: Term) -> Self {
        let minterms = term.minterms();
        Self { term, minterms }
    }

    #[inline]
    pub fn from_minterm(count: VariableCount, minterm: u8) -> Self {
        Self::new(Term::from_minterm(count, minterm))
    }

    #[inline]
    pub fn term(&self) -> &Term {
        &self.term
    }

    #[inline]
    pub fn minterms(&self) -> &MintermSet {
        &self.minterms
    }

    #[inline]
    pub fn covers(&self, minterm: u8) -> bool {
        self.minterms.contains(minterm)
    }

    /// Combines two implicants whose terms combine. See [`Term::combine`].
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        let term = self.term.combine(&other.term)?;
        Some(Self {
            term,
            minterms: self.minterms.union(&other.minterms),
        })
    }

    /// Returns the product expression for this implicant, for example `AB'`.
    pub fn expression(&self, names: &VariableNames) -> String {
        self.term.algebraic_display(names).to_string()
    }

    /// Returns the covered minterms formatted for a legend, for example `m0, 1, 5`.
    pub fn minterm_list(&self) -> String {
        self.minterms.to_string()
    }

    /// Returns the grid rectangles this implicant occupies on a K-map.
    #[inline]
    pub fn regions(&self, layout: KmapLayout) -> Vec<Region> {
        layout.regions_for_term(&self.term)
    }
}
