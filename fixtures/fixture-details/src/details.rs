// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use kmap_min::{
    kmap::GridCell,
    truth_table::TruthTable,
    variables::VariableNames,
    Minimization,
};
use std::{collections::BTreeSet, fmt};

const FIELD_SEPARATOR: &str = " | ";
const TERM_SEPARATOR: &str = ",";

/// A truth table together with its minimization under the default variable names.
#[derive(Clone, Debug)]
pub struct FixtureDetails {
    table: TruthTable,
    minimization: Minimization,
}

impl FixtureDetails {
    pub fn new(table: TruthTable) -> Self {
        let names = VariableNames::defaults(table.variable_count());
        let minimization = table.logic_function().minimize(&names);
        Self {
            table,
            minimization,
        }
    }

    #[inline]
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    #[inline]
    pub fn minimization(&self) -> &Minimization {
        &self.minimization
    }

    /// Returns the terms of the selected implicants, in selection order.
    pub fn selected_terms(&self) -> Vec<String> {
        self.minimization
            .selected()
            .iter()
            .map(|implicant| implicant.term().to_string())
            .collect()
    }

    /// Checks the invariants every minimization must uphold.
    pub fn check(&self) -> Result<()> {
        let f = self.table.logic_function();
        let minimization = &self.minimization;
        let care_set = f.on_set().union(f.dc_set());

        for minterm in f.variable_count().minterms() {
            let value = minimization.evaluate(minterm);
            if f.on_set().contains(minterm) && !value {
                bail!("{}: required minterm m{} is not covered", self.table, minterm);
            }
            if !care_set.contains(minterm) && value {
                bail!("{}: off-set minterm m{} is covered", self.table, minterm);
            }
        }

        let primes = minimization.prime_implicants();
        let unique: BTreeSet<_> = primes.iter().map(|prime| prime.term()).collect();
        if unique.len() != primes.len() {
            bail!("{}: prime implicants are not unique", self.table);
        }
        for prime in primes {
            if !prime.minterms().is_subset(&care_set) {
                bail!("{}: prime {} leaves the care set", self.table, prime.term());
            }
        }
        for implicant in minimization.selected() {
            if !primes.contains(implicant) {
                bail!("{}: selected {} is not prime", self.table, implicant.term());
            }
        }

        let layout = minimization.layout();
        for (implicant, regions) in minimization.selected().iter().zip(minimization.regions()) {
            let expected: BTreeSet<GridCell> = implicant
                .minterms()
                .iter()
                .map(|minterm| layout.minterm_to_cell(minterm))
                .collect();
            let actual: BTreeSet<GridCell> =
                regions.into_iter().flat_map(|region| region.cells()).collect();
            if actual != expected {
                bail!(
                    "{}: regions of {} don't match its cells",
                    self.table,
                    implicant.term()
                );
            }
        }

        Ok(())
    }
}

/// Formats a fixture record: `<table> | <expression> | <selected terms>`.
impl fmt::Display for FixtureDetails {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.table,
            self.minimization.expression(),
            self.selected_terms().join(TERM_SEPARATOR),
            sep = FIELD_SEPARATOR
        )
    }
}

/// A fixture record read back from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedFixture {
    pub table: TruthTable,
    pub expression: String,
    pub selected: Vec<String>,
}

impl RecordedFixture {
    pub fn parse(line: &str) -> Result<Self> {
        let mut fields = line.splitn(3, FIELD_SEPARATOR);
        let (table, expression, selected) = match (fields.next(), fields.next(), fields.next()) {
            (Some(table), Some(expression), Some(selected)) => (table, expression, selected),
            _ => bail!("fixture record '{}' doesn't have 3 fields", line),
        };

        let table = table
            .parse::<TruthTable>()
            .wrap_err_with(|| format!("invalid truth table in '{}'", line))?;
        let selected = selected
            .split(TERM_SEPARATOR)
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Self {
            table,
            expression: expression.to_owned(),
            selected,
        })
    }

    /// Minimizes the recorded table again and compares the result with the record.
    pub fn verify(&self) -> Result<()> {
        let details = FixtureDetails::new(self.table.clone());
        details.check()?;
        if details.minimization().expression() != self.expression {
            bail!(
                "{}: expected expression '{}', got '{}'",
                self.table,
                self.expression,
                details.minimization().expression()
            );
        }
        if details.selected_terms() != self.selected {
            bail!(
                "{}: expected selected terms {:?}, got {:?}",
                self.table,
                self.selected,
                details.selected_terms()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let details = FixtureDetails::new("0000 1000 1x11 10x1".parse().unwrap());
        details.check().unwrap();

        let line = details.to_string();
        assert_eq!(line, "000010001x1110x1 | BC'D' + AC + AB' | -100,1-1-,10--");

        let recorded = RecordedFixture::parse(&line).unwrap();
        assert_eq!(recorded.selected, ["-100", "1-1-", "10--"]);
        recorded.verify().unwrap();
    }

    #[test]
    fn test_empty_selection() {
        let details = FixtureDetails::new("0x00".parse().unwrap());
        assert_eq!(details.to_string(), "0x00 | 0 | ");

        let recorded = RecordedFixture::parse(&details.to_string()).unwrap();
        assert!(recorded.selected.is_empty());
        recorded.verify().unwrap();
    }

    #[test]
    fn test_mismatch() {
        let recorded = RecordedFixture::parse("0101 | A | 1-").unwrap();
        assert!(recorded.verify().is_err());
        assert!(RecordedFixture::parse("0101 | B").is_err());
        assert!(RecordedFixture::parse("01 | B | -1").is_err());
    }
}
