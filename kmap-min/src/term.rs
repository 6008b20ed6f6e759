// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::InvalidTerm,
    minterms::MintermSet,
    variables::{VariableCount, VariableNames},
};
use arrayvec::ArrayVec;
use std::{borrow::Cow, fmt, str::FromStr};

const MAX_VARIABLES: usize = VariableCount::MAX;

/// A product term over up to four variables, written as a string of `0`, `1` and `-`.
///
/// Position 0 is the most significant bit of a minterm index. `None` (displayed as `-`)
/// means the variable is unconstrained. Two terms are equal iff their strings are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Term {
    count: VariableCount,
    input: ArrayVec<Option<bool>, MAX_VARIABLES>,
}

impl Term {
    /// Returns the term that covers exactly `minterm`.
    ///
    /// Panics if `minterm` doesn't fit in `count` variables.
    pub fn from_minterm(count: VariableCount, minterm: u8) -> Self {
        assert!(
            (minterm as usize) < count.minterm_count(),
            "minterm {} must be in range 0..{}",
            minterm,
            count.minterm_count()
        );
        let n = count.get();
        let input = (0..n)
            .map(|pos| Some((minterm >> (n - 1 - pos)) & 1 == 1))
            .collect();
        Self { count, input }
    }

    /// Returns the term with every position unconstrained, which covers all minterms.
    pub fn universe(count: VariableCount) -> Self {
        let input = (0..count.get()).map(|_| None).collect();
        Self { count, input }
    }

    /// Creates a term from its positions. Returns `None` if there aren't 2, 3 or 4 of them.
    pub fn from_input(input: &[Option<bool>]) -> Option<Self> {
        let count = VariableCount::new(input.len()).ok()?;
        Some(Self {
            count,
            input: input.iter().copied().collect(),
        })
    }

    #[inline]
    pub fn variable_count(&self) -> VariableCount {
        self.count
    }

    #[inline]
    pub fn input(&self) -> &[Option<bool>] {
        &self.input
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Returns the number of unconstrained positions.
    pub fn dash_count(&self) -> usize {
        self.input.iter().filter(|c| c.is_none()).count()
    }

    /// Returns the number of positions fixed to `1`.
    pub fn ones(&self) -> usize {
        self.input.iter().filter(|&&c| c == Some(true)).count()
    }

    #[inline]
    pub fn is_universe(&self) -> bool {
        self.input.iter().all(|c| c.is_none())
    }

    /// Combines two terms that differ in exactly one fixed position, replacing that position
    /// with a dash.
    ///
    /// Returns `None` if the terms are equal, differ in more than one position, or have dashes
    /// in different places.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_min::term::Term;
    ///
    /// let a: Term = "1-0".parse().unwrap();
    /// let b: Term = "1-1".parse().unwrap();
    /// assert_eq!(a.combine(&b), Some("1--".parse().unwrap()));
    ///
    /// let c: Term = "-10".parse().unwrap();
    /// assert_eq!(a.combine(&c), None);
    /// ```
    pub fn combine(&self, other: &Term) -> Option<Term> {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "terms {} and {} must have the same width",
            self,
            other
        );

        let mut diff_ix = None;
        for (ix, (&c, &d)) in self.input.iter().zip(&other.input).enumerate() {
            match (c, d) {
                _ if c == d => {}
                (Some(_), Some(_)) => {
                    if diff_ix.replace(ix).is_some() {
                        return None;
                    }
                }
                // One side has a dash here and the other doesn't.
                _ => return None,
            }
        }

        let ix = diff_ix?;
        let mut input = self.input.clone();
        input[ix] = None;
        Some(Self {
            count: self.count,
            input,
        })
    }

    /// Returns true if `minterm` agrees with every fixed position of this term.
    pub fn covers(&self, minterm: u8) -> bool {
        let n = self.len();
        self.input.iter().enumerate().all(|(pos, &c)| match c {
            Some(value) => ((minterm >> (n - 1 - pos)) & 1 == 1) == value,
            None => true,
        })
    }

    /// Iterates over the minterms consistent with this term.
    ///
    /// Dash positions are filled by counting from 0 to `2^d - 1`, with the first dash taking
    /// the most significant bit of the counter.
    pub fn expand(&self) -> impl Iterator<Item = u8> + '_ {
        let dash_count = self.dash_count();
        (0..1_u8 << dash_count).map(move |counter| {
            let mut dash_ix = 0;
            self.input.iter().fold(0_u8, |acc, &c| {
                let bit = match c {
                    Some(value) => value as u8,
                    None => {
                        dash_ix += 1;
                        (counter >> (dash_count - dash_ix)) & 1
                    }
                };
                (acc << 1) | bit
            })
        })
    }

    /// Returns the set of minterms consistent with this term. It always has `2^d` members,
    /// where `d` is the number of dashes.
    #[inline]
    pub fn minterms(&self) -> MintermSet {
        self.expand().collect()
    }

    #[inline]
    pub fn matrix_display(&self) -> TermMatrixDisplay<'_> {
        TermMatrixDisplay::new(self)
    }

    #[inline]
    pub fn algebraic_display<'a>(&'a self, names: &'a VariableNames) -> TermAlgebraicDisplay<'a> {
        TermAlgebraicDisplay::new(self, names)
    }
}

impl FromStr for Term {
    type Err = InvalidTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidTerm {
            input: s.to_owned(),
        };
        let count = VariableCount::new(s.chars().count()).map_err(|_| err())?;

        let input = s
            .chars()
            .map(|ch| match ch {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(err()),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { count, input })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.matrix_display())
    }
}

#[inline]
fn char_for_input(input: Option<bool>) -> char {
    match input {
        Some(true) => '1',
        Some(false) => '0',
        None => '-',
    }
}

/// Displays a term as `1-0`, with an optional separator between positions.
pub struct TermMatrixDisplay<'a> {
    term: &'a Term,
    internal_separator: Cow<'a, str>,
}

impl<'a> TermMatrixDisplay<'a> {
    pub fn new(term: &'a Term) -> Self {
        Self {
            term,
            internal_separator: Cow::Borrowed(""),
        }
    }

    pub fn with_internal_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.internal_separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for TermMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.term.len();
        for (input_ix, &input) in self.term.input.iter().enumerate() {
            write!(f, "{}", char_for_input(input))?;
            if input_ix < len - 1 {
                write!(f, "{}", self.internal_separator)?;
            }
        }
        Ok(())
    }
}

/// Displays a term as a product of literals such as `AB'`, or `1` if no variable is fixed.
pub struct TermAlgebraicDisplay<'a> {
    term: &'a Term,
    names: &'a VariableNames,
}

impl<'a> TermAlgebraicDisplay<'a> {
    pub fn new(term: &'a Term, names: &'a VariableNames) -> Self {
        debug_assert_eq!(
            term.variable_count(),
            names.count(),
            "names must match the width of term {}",
            term
        );
        Self { term, names }
    }
}

impl<'a> fmt::Display for TermAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.term.is_universe() {
            return write!(f, "1");
        }

        for (input_ix, &input) in self.term.input.iter().enumerate() {
            match input {
                Some(true) => write!(f, "{}", self.names.get(input_ix))?,
                Some(false) => write!(f, "{}'", self.names.get(input_ix))?,
                None => {}
            }
        }
        Ok(())
    }
}
