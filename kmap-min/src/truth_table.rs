// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{InvalidCellValue, MintermOutOfRange, ParseTruthTableError},
    logic_function::LogicFunction,
    minterms::MintermSet,
    variables::VariableCount,
};
use std::{borrow::Cow, convert::TryFrom, fmt, str::FromStr};

/// The output value of one truth table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellValue {
    Zero,
    One,
    DontCare,
}

impl CellValue {
    /// Cycles `0 → 1 → x → 0`, the order a cell steps through when it is toggled.
    pub fn next(self) -> Self {
        match self {
            CellValue::Zero => CellValue::One,
            CellValue::One => CellValue::DontCare,
            CellValue::DontCare => CellValue::Zero,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            CellValue::Zero => '0',
            CellValue::One => '1',
            CellValue::DontCare => 'x',
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Zero
    }
}

impl TryFrom<char> for CellValue {
    type Error = InvalidCellValue;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '0' => Ok(CellValue::Zero),
            '1' => Ok(CellValue::One),
            'x' | 'X' => Ok(CellValue::DontCare),
            _ => Err(InvalidCellValue { ch }),
        }
    }
}

impl FromStr for CellValue {
    type Err = InvalidCellValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => CellValue::try_from(ch),
            (Some(ch), Some(_)) => Err(InvalidCellValue { ch }),
            // An empty string has no character to report.
            (None, _) => Err(InvalidCellValue { ch: ' ' }),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A truth table with one [`CellValue`] per minterm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TruthTable {
    count: VariableCount,
    cells: Vec<CellValue>,
}

impl TruthTable {
    /// Creates a table of `2^count` cells, all `0`.
    pub fn new(count: VariableCount) -> Self {
        Self {
            count,
            cells: vec![CellValue::Zero; count.minterm_count()],
        }
    }

    /// Creates a table from its cells, indexed by minterm.
    ///
    /// Returns `None` if there aren't 4, 8 or 16 cells.
    pub fn from_cells(cells: impl IntoIterator<Item = CellValue>) -> Option<Self> {
        let cells: Vec<CellValue> = cells.into_iter().collect();
        let count = count_for_len(cells.len())?;
        Some(Self { count, cells })
    }

    #[inline]
    pub fn variable_count(&self) -> VariableCount {
        self.count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns the value at `minterm`, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, minterm: usize) -> Option<CellValue> {
        self.cells.get(minterm).copied()
    }

    /// Sets the value at `minterm`, returning the previous value.
    pub fn set(&mut self, minterm: usize, value: CellValue) -> Result<CellValue, MintermOutOfRange> {
        let variable_count = self.count.get();
        let cell = self.cells.get_mut(minterm).ok_or(MintermOutOfRange {
            minterm,
            variable_count,
        })?;
        Ok(std::mem::replace(cell, value))
    }

    /// Iterates over `(minterm, value)` pairs in minterm order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, CellValue)> + '_ {
        self.count.minterms().zip(self.cells.iter().copied())
    }

    #[inline]
    pub fn on_set(&self) -> MintermSet {
        self.minterms_with(CellValue::One)
    }

    #[inline]
    pub fn dc_set(&self) -> MintermSet {
        self.minterms_with(CellValue::DontCare)
    }

    /// Returns the function described by this table.
    pub fn logic_function(&self) -> LogicFunction {
        LogicFunction::from_parts(self.count, self.on_set(), self.dc_set())
    }

    #[inline]
    pub fn matrix_display(&self) -> TruthTableDisplay<'_> {
        TruthTableDisplay::new(self)
    }

    fn minterms_with(&self, value: CellValue) -> MintermSet {
        self.iter()
            .filter(|&(_, cell)| cell == value)
            .map(|(minterm, _)| minterm)
            .collect()
    }
}

impl From<&LogicFunction> for TruthTable {
    fn from(function: &LogicFunction) -> Self {
        let cells = function
            .variable_count()
            .minterms()
            .map(|minterm| {
                if function.on_set().contains(minterm) {
                    CellValue::One
                } else if function.dc_set().contains(minterm) {
                    CellValue::DontCare
                } else {
                    CellValue::Zero
                }
            })
            .collect();
        Self {
            count: function.variable_count(),
            cells,
        }
    }
}

/// Parses a table from its cells in minterm order, for example `"1x0 1"`. Whitespace is
/// ignored.
impl FromStr for TruthTable {
    type Err = ParseTruthTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(CellValue::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let len = cells.len();
        Self::from_cells(cells).ok_or(ParseTruthTableError::InvalidLength { len })
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

fn count_for_len(len: usize) -> Option<VariableCount> {
    VariableCount::ALL
        .iter()
        .copied()
        .find(|count| count.minterm_count() == len)
}

/// Displays a truth table one row per line, for example:
///
/// ```text
/// m0 | 00 | 1
/// m1 | 01 | x
/// ```
pub struct TruthTableDisplay<'a> {
    table: &'a TruthTable,
    column_separator: Cow<'a, str>,
}

impl<'a> TruthTableDisplay<'a> {
    pub fn new(table: &'a TruthTable) -> Self {
        Self {
            table,
            column_separator: Cow::Borrowed(" | "),
        }
    }

    pub fn with_column_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.column_separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for TruthTableDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.table.count.get();
        for (minterm, value) in self.table.iter() {
            writeln!(
                f,
                "m{}{sep}{:0width$b}{sep}{}",
                minterm,
                minterm,
                value,
                sep = self.column_separator,
                width = width
            )?;
        }
        Ok(())
    }
}
