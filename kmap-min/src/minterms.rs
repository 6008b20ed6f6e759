// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::variables::VariableCount;
use bitvec::{array::BitArray, order::Lsb0};
use itertools::Itertools;
use std::{fmt, iter::FromIterator};

type MintermBits = BitArray<[u16; 1], Lsb0>;

/// A set of minterm indices of a function of at most four variables.
///
/// Iteration is always in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MintermSet {
    bits: MintermBits,
}

impl MintermSet {
    /// The number of minterms a set can hold.
    pub const CAPACITY: usize = 1 << VariableCount::MAX;

    #[inline]
    pub fn new() -> Self {
        Self {
            bits: BitArray::new([0; 1]),
        }
    }

    /// Returns the set of every minterm of a function over `count` variables.
    pub fn full(count: VariableCount) -> Self {
        count.minterms().collect()
    }

    /// Inserts `minterm`, returning true if it wasn't already present.
    ///
    /// Panics if `minterm` is not less than [`Self::CAPACITY`].
    pub fn insert(&mut self, minterm: u8) -> bool {
        let ix = Self::check_ix(minterm);
        let was_present = self.bits[ix];
        self.bits.set(ix, true);
        !was_present
    }

    /// Removes `minterm`, returning true if it was present.
    pub fn remove(&mut self, minterm: u8) -> bool {
        let ix = Self::check_ix(minterm);
        let was_present = self.bits[ix];
        self.bits.set(ix, false);
        was_present
    }

    #[inline]
    pub fn contains(&self, minterm: u8) -> bool {
        let ix = minterm as usize;
        ix < Self::CAPACITY && self.bits[ix]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Returns the largest minterm in this set, if any.
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.bits.last_one().map(|ix| ix as u8)
    }

    /// Iterates over the minterms in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter_ones().map(|ix| ix as u8)
    }

    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).collect()
    }

    pub fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|&m| !other.contains(m)).collect()
    }

    /// Returns the number of minterms present in both sets.
    pub fn intersection_len(&self, other: &Self) -> usize {
        self.iter().filter(|&m| other.contains(m)).count()
    }

    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|m| other.contains(m))
    }

    /// Removes every minterm of `other` from this set.
    pub fn remove_all(&mut self, other: &Self) {
        for minterm in other.iter() {
            self.remove(minterm);
        }
    }

    #[inline]
    fn check_ix(minterm: u8) -> usize {
        let ix = minterm as usize;
        assert!(
            ix < Self::CAPACITY,
            "minterm {} must be in range 0..{}",
            ix,
            Self::CAPACITY
        );
        ix
    }
}

impl Default for MintermSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<u8> for MintermSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<u8> for MintermSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for minterm in iter {
            self.insert(minterm);
        }
    }
}

impl fmt::Debug for MintermSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Lists the minterms as `m0, 1, 5`, the way K-map legends label a group.
impl fmt::Display for MintermSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "m{}", self.iter().join(", "))
    }
}
