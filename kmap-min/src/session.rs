// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Editing state for an interactive K-map session.

use crate::{
    errors::{MintermOutOfRange, SessionError, VariableNamesError},
    logic_function::{LogicFunction, Minimization},
    truth_table::{CellValue, TruthTable},
    variables::{validate_names, VariableCount, VariableNames},
};
use log::debug;
use once_cell::sync::OnceCell;

/// The state edited by a K-map front end: variable count, variable names and truth table.
///
/// Every mutation bumps [`version`](Self::version) and drops the cached minimization, which is
/// recomputed on the next call to [`minimization`](Self::minimization).
///
/// # Examples
///
/// ```
/// use kmap_min::{
///     session::Session,
///     truth_table::CellValue,
///     variables::VariableCount,
/// };
///
/// let mut session = Session::new(VariableCount::Two);
/// session.set_cell(3, CellValue::One).unwrap();
/// session.set_variable_name(0, " x ").unwrap();
/// assert_eq!(session.minimization().unwrap().expression(), "xB");
///
/// session.set_variable_name(1, "x").unwrap();
/// assert!(session.minimization().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    count: VariableCount,
    names: Vec<String>,
    table: TruthTable,
    version: u64,
    cache: SessionCache,
}

impl Session {
    /// Creates a session with default names and a table of zeroes.
    pub fn new(count: VariableCount) -> Self {
        Self {
            count,
            names: default_names(count),
            table: TruthTable::new(count),
            version: 0,
            cache: SessionCache::default(),
        }
    }

    /// Creates a session editing `table`, with default names.
    pub fn from_table(table: TruthTable) -> Self {
        let count = table.variable_count();
        Self {
            count,
            names: default_names(count),
            table,
            version: 0,
            cache: SessionCache::default(),
        }
    }

    #[inline]
    pub fn variable_count(&self) -> VariableCount {
        self.count
    }

    /// Returns the names as entered, which may be invalid.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Returns the number of mutations made to this session so far.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Changes the variable count. This resets the names to their defaults and every cell to
    /// `0`.
    pub fn set_variable_count(&mut self, count: VariableCount) {
        debug!("variable count {} -> {}, resetting table", self.count, count);
        self.count = count;
        self.names = default_names(count);
        self.table = TruthTable::new(count);
        self.mark_changed();
    }

    /// Renames the variable at `index`. Surrounding whitespace is trimmed. The table is kept.
    pub fn set_variable_name(
        &mut self,
        index: usize,
        name: impl AsRef<str>,
    ) -> Result<(), SessionError> {
        let variable_count = self.count.get();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(SessionError::VariableIndexOutOfRange {
                index,
                variable_count,
            })?;
        *slot = name.as_ref().trim().to_owned();
        self.mark_changed();
        Ok(())
    }

    /// Sets the cell at `minterm`, returning its previous value.
    pub fn set_cell(&mut self, minterm: usize, value: CellValue) -> Result<CellValue, SessionError> {
        let previous = self.table.set(minterm, value)?;
        self.mark_changed();
        Ok(previous)
    }

    /// Steps the cell at `minterm` to its next value (`0 → 1 → x → 0`) and returns the new
    /// value.
    pub fn toggle_cell(&mut self, minterm: usize) -> Result<CellValue, SessionError> {
        let value = self
            .table
            .get(minterm)
            .ok_or(MintermOutOfRange {
                minterm,
                variable_count: self.count.get(),
            })?
            .next();
        self.set_cell(minterm, value)?;
        Ok(value)
    }

    pub fn validate_names(&self) -> Result<(), VariableNamesError> {
        validate_names(self.count, &self.names)
    }

    /// Returns the current names if they are valid.
    pub fn variable_names(&self) -> Result<VariableNames, VariableNamesError> {
        VariableNames::new(self.count, self.names.iter().cloned())
    }

    /// Returns the function described by the current table.
    #[inline]
    pub fn logic_function(&self) -> LogicFunction {
        self.table.logic_function()
    }

    /// Returns the minimization of the current table, computing it if anything changed since
    /// the last call.
    ///
    /// Fails with [`SessionError::InvalidVariableNames`] if a name is empty or repeated.
    pub fn minimization(&self) -> Result<&Minimization, SessionError> {
        let names = self.variable_names()?;
        Ok(self.cache.get_or_init_minimization(|| {
            debug!("recomputing minimization for version {}", self.version);
            self.logic_function().minimize(&names)
        }))
    }

    fn mark_changed(&mut self) {
        self.version += 1;
        self.cache.invalidate();
    }
}

fn default_names(count: VariableCount) -> Vec<String> {
    VariableNames::defaults(count).as_slice().to_vec()
}

/// Cache for derived session data.
#[derive(Clone, Debug, Default)]
struct SessionCache {
    minimization: OnceCell<Minimization>,
}

impl SessionCache {
    fn invalidate(&mut self) {
        self.minimization = OnceCell::new();
    }

    fn get_or_init_minimization(&self, f: impl FnOnce() -> Minimization) -> &Minimization {
        self.minimization.get_or_init(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = Session::new(VariableCount::Three);
        assert_eq!(session.names(), ["A", "B", "C"]);
        assert_eq!(session.table().len(), 8);
        assert_eq!(session.version(), 0);
        assert_eq!(session.minimization().unwrap().expression(), "0");
    }

    #[test]
    fn test_cache_invalidation() {
        let mut session = Session::new(VariableCount::Three);
        for minterm in [0, 2, 4, 6] {
            session.set_cell(minterm, CellValue::One).unwrap();
        }
        assert_eq!(session.version(), 4);

        let first = session.minimization().unwrap() as *const Minimization;
        let second = session.minimization().unwrap() as *const Minimization;
        assert_eq!(first, second, "unchanged session reuses the cached result");
        assert_eq!(session.minimization().unwrap().expression(), "C'");

        session.set_cell(6, CellValue::DontCare).unwrap();
        session.set_cell(1, CellValue::DontCare).unwrap();
        assert_eq!(session.minimization().unwrap().expression(), "C'");
        session.set_cell(1, CellValue::One).unwrap();
        assert_eq!(session.minimization().unwrap().expression(), "A'B' + C'");
    }

    #[test]
    fn test_variable_names() {
        let mut session = Session::new(VariableCount::Two);
        session.set_cell(2, CellValue::One).unwrap();
        session.set_cell(3, CellValue::One).unwrap();

        session.set_variable_name(0, "  in ").unwrap();
        assert_eq!(session.names(), ["in", "B"]);
        assert_eq!(session.minimization().unwrap().expression(), "in");
        // Renaming keeps the table.
        assert_eq!(session.table().on_set().len(), 2);

        session.set_variable_name(1, "in").unwrap();
        assert_eq!(
            session.minimization(),
            Err(SessionError::InvalidVariableNames(
                VariableNamesError::Duplicate {
                    index: 1,
                    name: "in".to_owned()
                }
            ))
        );

        session.set_variable_name(1, "   ").unwrap();
        assert_eq!(
            session.validate_names(),
            Err(VariableNamesError::Empty { index: 1 })
        );

        assert_eq!(
            session.set_variable_name(2, "C"),
            Err(SessionError::VariableIndexOutOfRange {
                index: 2,
                variable_count: 2
            })
        );
    }

    #[test]
    fn test_set_variable_count() {
        let mut session = Session::new(VariableCount::Two);
        session.set_variable_name(0, "x").unwrap();
        session.set_cell(0, CellValue::One).unwrap();

        session.set_variable_count(VariableCount::Four);
        assert_eq!(session.names(), ["A", "B", "C", "D"]);
        assert!(session.table().on_set().is_empty());
        assert_eq!(session.table().len(), 16);
        assert_eq!(session.version(), 3);

        assert!(session.set_cell(15, CellValue::One).is_ok());
        assert!(matches!(
            session.set_cell(16, CellValue::One),
            Err(SessionError::MintermOutOfRange(_))
        ));
    }

    #[test]
    fn test_toggle_cell() {
        let mut session = Session::from_table("0000".parse().unwrap());
        assert_eq!(session.toggle_cell(1), Ok(CellValue::One));
        assert_eq!(session.toggle_cell(1), Ok(CellValue::DontCare));
        assert_eq!(session.toggle_cell(1), Ok(CellValue::Zero));
        assert!(session.toggle_cell(4).is_err());
        assert_eq!(session.version(), 3);
    }
}
