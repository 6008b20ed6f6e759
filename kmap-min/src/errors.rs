// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types returned by `kmap-min`.

use std::{error, fmt};

/// A variable count outside the supported range `2..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidVariableCount {
    pub count: usize,
}

impl fmt::Display for InvalidVariableCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "variable count {} is not supported (expected 2, 3 or 4)",
            self.count
        )
    }
}

impl error::Error for InvalidVariableCount {}

/// A minterm index that does not fit in a table of `2^variable_count` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintermOutOfRange {
    pub minterm: usize,
    pub variable_count: usize,
}

impl fmt::Display for MintermOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "minterm {} out of range for {} variables (valid range: 0..{})",
            self.minterm,
            self.variable_count,
            1_usize << self.variable_count
        )
    }
}

impl error::Error for MintermOutOfRange {}

/// A character that does not name a cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCellValue {
    pub ch: char,
}

impl fmt::Display for InvalidCellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell value '{}' (expected 0, 1 or x)", self.ch)
    }
}

impl error::Error for InvalidCellValue {}

/// A term string that is not made of `0`, `1` and `-`, or has an unsupported width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidTerm {
    pub input: String,
}

impl fmt::Display for InvalidTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid term '{}' (expected 2 to 4 characters out of 0, 1 and -)",
            self.input
        )
    }
}

impl error::Error for InvalidTerm {}

/// Errors produced while validating a list of variable names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariableNamesError {
    /// The number of names doesn't match the variable count.
    WrongCount { expected: usize, actual: usize },
    /// The name at `index` is empty.
    Empty { index: usize },
    /// The name at `index` was already used by an earlier variable.
    Duplicate { index: usize, name: String },
}

impl fmt::Display for VariableNamesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount { expected, actual } => {
                write!(f, "expected {} variable names, got {}", expected, actual)
            }
            Self::Empty { index } => write!(f, "variable name {} is empty", index + 1),
            Self::Duplicate { index, name } => {
                write!(f, "variable name {} ('{}') is a duplicate", index + 1, name)
            }
        }
    }
}

impl error::Error for VariableNamesError {}

/// Errors produced while parsing a truth table from a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTruthTableError {
    InvalidCell(InvalidCellValue),
    /// The number of cells is not 4, 8 or 16.
    InvalidLength { len: usize },
}

impl fmt::Display for ParseTruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCell(_) => write!(f, "error parsing truth table cell"),
            Self::InvalidLength { len } => write!(
                f,
                "truth table has {} cells (expected 4, 8 or 16)",
                len
            ),
        }
    }
}

impl error::Error for ParseTruthTableError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidCell(err) => Some(err),
            Self::InvalidLength { .. } => None,
        }
    }
}

impl From<InvalidCellValue> for ParseTruthTableError {
    fn from(err: InvalidCellValue) -> Self {
        Self::InvalidCell(err)
    }
}

/// Errors produced by [`Session`](crate::session::Session) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    InvalidVariableNames(VariableNamesError),
    MintermOutOfRange(MintermOutOfRange),
    VariableIndexOutOfRange { index: usize, variable_count: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVariableNames(_) => write!(f, "invalid variable names"),
            Self::MintermOutOfRange(_) => write!(f, "truth table update failed"),
            Self::VariableIndexOutOfRange {
                index,
                variable_count,
            } => write!(
                f,
                "variable index {} out of range (valid range: 0..{})",
                index, variable_count
            ),
        }
    }
}

impl error::Error for SessionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidVariableNames(err) => Some(err),
            Self::MintermOutOfRange(err) => Some(err),
            Self::VariableIndexOutOfRange { .. } => None,
        }
    }
}

impl From<VariableNamesError> for SessionError {
    fn from(err: VariableNamesError) -> Self {
        Self::InvalidVariableNames(err)
    }
}

impl From<MintermOutOfRange> for SessionError {
    fn from(err: MintermOutOfRange) -> Self {
        Self::MintermOutOfRange(err)
    }
}
