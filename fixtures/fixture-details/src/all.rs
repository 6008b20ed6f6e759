// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    details::{FixtureDetails, RecordedFixture},
    value_generator::ValueGenerator,
};
use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use kmap_min::truth_table::TruthTable;
use log::{debug, info};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use std::fs;

pub struct AllFixtures {
    dir: Utf8PathBuf,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let dir: Utf8PathBuf = env!("CARGO_MANIFEST_DIR").into();
        let dir = match dir.parent() {
            Some(parent) => parent.join("data"),
            None => dir.join("data"),
        };
        Self { dir }
    }

    /// The directory fixtures are written to by default.
    #[inline]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Returns the path of the fixture file for `seed` under `dir`.
    pub fn fixture_path(dir: &Utf8Path, seed: &str) -> Utf8PathBuf {
        dir.join(format!("kmap-{}.txt", seed))
    }

    /// Generates `count` random truth tables of 2 to 4 variables, deterministically for `seed`,
    /// and minimizes each of them.
    pub fn generate(seed: &str, count: usize) -> Vec<FixtureDetails> {
        let mut value_gen = ValueGenerator::from_seed(seed);
        (0..count)
            .map(|_| {
                let mut gen = value_gen.partial_clone();
                FixtureDetails::new(gen.generate(any::<TruthTable>()))
            })
            .collect()
    }

    /// Generates fixtures and checks the minimization invariants on each of them.
    pub fn check(seed: &str, count: usize) -> Result<()> {
        let mut constant_count = 0;
        let mut selected_total = 0;
        for details in Self::generate(seed, count) {
            debug!("checking {}", details);
            details.check()?;
            if details.minimization().selected().is_empty()
                || details.minimization().expression() == "1"
            {
                constant_count += 1;
            }
            selected_total += details.minimization().selected().len();
        }

        println!(
            "checked {} tables: {} constant, {} implicants selected",
            count, constant_count, selected_total
        );
        Ok(())
    }

    /// Writes one fixture record per line to the fixture file for `seed` under `dir`.
    pub fn write(dir: &Utf8Path, seed: &str, count: usize) -> Result<Utf8PathBuf> {
        let mut contents = String::new();
        for details in Self::generate(seed, count) {
            details.check()?;
            contents.push_str(&details.to_string());
            contents.push('\n');
        }

        fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir))?;
        let path = Self::fixture_path(dir, seed);
        fs::write(&path, contents).wrap_err_with(|| format!("failed to write {}", path))?;
        info!("wrote {} fixtures to {}", count, path);
        Ok(path)
    }

    /// Reads back the fixture file for `seed` under `dir` and verifies every record against a
    /// fresh minimization. Returns the number of records verified.
    pub fn verify(dir: &Utf8Path, seed: &str) -> Result<usize> {
        let path = Self::fixture_path(dir, seed);
        let contents =
            fs::read_to_string(&path).wrap_err_with(|| format!("failed to read {}", path))?;

        let mut verified = 0;
        for (line_ix, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            RecordedFixture::parse(line)
                .and_then(|recorded| recorded.verify())
                .wrap_err_with(|| format!("{}:{}", path, line_ix + 1))?;
            verified += 1;
        }

        if verified == 0 {
            bail!("{} has no fixture records", path);
        }
        Ok(verified)
    }
}
