// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{InvalidVariableCount, VariableNamesError};
use std::{convert::TryFrom, fmt};

/// The number of input variables of a function. Only 2, 3 and 4 variables are supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableCount {
    Two,
    Three,
    Four,
}

impl VariableCount {
    /// The largest supported number of variables.
    pub const MAX: usize = 4;

    /// All supported variable counts, in increasing order.
    pub const ALL: [VariableCount; 3] = [Self::Two, Self::Three, Self::Four];

    pub fn new(count: usize) -> Result<Self, InvalidVariableCount> {
        match count {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(InvalidVariableCount { count }),
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Returns the number of rows in a truth table over this many variables.
    #[inline]
    pub fn minterm_count(self) -> usize {
        1 << self.get()
    }

    /// Iterates over every minterm index of a truth table over this many variables.
    #[inline]
    pub fn minterms(self) -> impl Iterator<Item = u8> {
        0..self.minterm_count() as u8
    }
}

impl TryFrom<usize> for VariableCount {
    type Error = InvalidVariableCount;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl fmt::Display for VariableCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

const DEFAULT_NAMES: [&str; VariableCount::MAX] = ["A", "B", "C", "D"];

/// Names for the input variables, index-aligned with bit positions.
///
/// The name at index 0 belongs to the most significant bit of a minterm index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableNames {
    count: VariableCount,
    names: Vec<String>,
}

impl VariableNames {
    /// Creates a new list of names, checking that there is exactly one non-empty, distinct name
    /// per variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_min::variables::{VariableCount, VariableNames};
    ///
    /// let names = VariableNames::new(VariableCount::Two, ["x", "y"]).unwrap();
    /// assert_eq!(names.get(1), "y");
    ///
    /// assert!(VariableNames::new(VariableCount::Two, ["x", "x"]).is_err());
    /// ```
    pub fn new(
        count: VariableCount,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, VariableNamesError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        validate_names(count, &names)?;
        Ok(Self { count, names })
    }

    /// Returns the default names `A`, `B`, `C` and `D`, truncated to `count`.
    pub fn defaults(count: VariableCount) -> Self {
        let names = DEFAULT_NAMES[..count.get()]
            .iter()
            .map(|name| name.to_string())
            .collect();
        Self { count, names }
    }

    #[inline]
    pub fn count(&self) -> VariableCount {
        self.count
    }

    /// Returns the name of the variable at `ix`.
    ///
    /// Panics if `ix` is not less than the variable count.
    #[inline]
    pub fn get(&self, ix: usize) -> &str {
        &self.names[ix]
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| name.as_str())
    }
}

/// Checks that `names` holds one non-empty, distinct name per variable.
///
/// Duplicates are reported at the index of the later occurrence.
pub fn validate_names(
    count: VariableCount,
    names: &[impl AsRef<str>],
) -> Result<(), VariableNamesError> {
    if names.len() != count.get() {
        return Err(VariableNamesError::WrongCount {
            expected: count.get(),
            actual: names.len(),
        });
    }

    for (index, name) in names.iter().enumerate() {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(VariableNamesError::Empty { index });
        }
        if names[..index].iter().any(|prev| prev.as_ref() == name) {
            return Err(VariableNamesError::Duplicate {
                index,
                name: name.to_owned(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_count() {
        assert_eq!(VariableCount::new(3), Ok(VariableCount::Three));
        assert_eq!(
            VariableCount::try_from(5),
            Err(InvalidVariableCount { count: 5 })
        );
        assert!(VariableCount::new(1).is_err());

        for count in VariableCount::ALL {
            assert_eq!(count.minterms().count(), count.minterm_count());
        }
        assert_eq!(VariableCount::Four.minterm_count(), 16);
    }

    #[test]
    fn test_default_names() {
        let names = VariableNames::defaults(VariableCount::Three);
        assert_eq!(names.iter().collect::<Vec<_>>(), ["A", "B", "C"]);
    }

    #[test]
    fn test_validate_names() {
        assert_eq!(
            VariableNames::new(VariableCount::Three, ["A", "B"]),
            Err(VariableNamesError::WrongCount {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            VariableNames::new(VariableCount::Two, ["A", ""]),
            Err(VariableNamesError::Empty { index: 1 })
        );
        assert_eq!(
            VariableNames::new(VariableCount::Three, ["A", "B", "A"]),
            Err(VariableNamesError::Duplicate {
                index: 2,
                name: "A".to_owned()
            })
        );
        assert!(VariableNames::new(VariableCount::Four, ["w", "x", "y", "z"]).is_ok());
    }
}
