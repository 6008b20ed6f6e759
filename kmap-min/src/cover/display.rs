// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cover::Cover, variables::VariableNames};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// Displays a cover as one term per line, for example:
///
/// ```text
/// -100
/// 1-1-
/// ```
#[derive(Clone, Debug)]
pub struct CoverMatrixDisplay<'a> {
    cover: &'a Cover,
    internal_separator: Cow<'a, str>,
    term_separator: (Cow<'a, str>, bool),
}

impl<'a> CoverMatrixDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            internal_separator: Cow::Borrowed(""),
            term_separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_internal_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.internal_separator = separator.into();
        self
    }

    pub fn with_term_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.term_separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for CoverMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.cover.len();
        for (elem_ix, elem) in self.cover.elements().iter().enumerate() {
            let term_display = elem
                .term()
                .matrix_display()
                .with_internal_separator(&*self.internal_separator);
            write!(f, "{}", term_display)?;

            let (term_separator, print_last) = &self.term_separator;
            if *print_last || elem_ix < len - 1 {
                write!(f, "{}", term_separator)?;
            }
        }

        Ok(())
    }
}

/// Displays a cover as a sum of products such as `AB' + C`.
///
/// An empty cover is displayed as `0`.
pub struct CoverAlgebraicDisplay<'a> {
    cover: &'a Cover,
    names: &'a VariableNames,
    separator: Cow<'a, str>,
}

impl<'a> CoverAlgebraicDisplay<'a> {
    pub fn new(cover: &'a Cover, names: &'a VariableNames) -> Self {
        Self {
            cover,
            names,
            separator: Cow::Borrowed(" + "),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for CoverAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cover.is_empty() {
            return write!(f, "0");
        }
        for elem in self.cover.elements().iter().with_position() {
            match elem {
                Position::First(implicant) | Position::Middle(implicant) => {
                    write!(
                        f,
                        "{}{}",
                        implicant.term().algebraic_display(self.names),
                        self.separator
                    )?;
                }
                Position::Last(implicant) | Position::Only(implicant) => {
                    write!(f, "{}", implicant.term().algebraic_display(self.names))?;
                }
            }
        }
        Ok(())
    }
}
