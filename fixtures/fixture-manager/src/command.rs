// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::Result;
use fixture_details::AllFixtures;

const DEFAULT_SEED: &str = "kmap-min";

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Parser)]
pub enum FixtureManagerCommand {
    /// Minimize random truth tables and check the results.
    Check {
        #[clap(long, short, default_value_t = 1024)]
        count: usize,
        #[clap(long, default_value = DEFAULT_SEED)]
        seed: String,
    },
    /// Write fixture records for random truth tables.
    Generate {
        #[clap(long, short, default_value_t = 64)]
        count: usize,
        #[clap(long, default_value = DEFAULT_SEED)]
        seed: String,
        /// Output directory [default: fixtures/data]
        #[clap(long)]
        out: Option<Utf8PathBuf>,
    },
    /// Verify previously written fixture records against the current minimizer.
    Verify {
        #[clap(long, default_value = DEFAULT_SEED)]
        seed: String,
        /// Fixture directory [default: fixtures/data]
        #[clap(long)]
        dir: Option<Utf8PathBuf>,
    },
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Check { count, seed } => AllFixtures::check(&seed, count),
            Self::Generate { count, seed, out } => {
                let dir = out.unwrap_or_else(|| AllFixtures::get().dir().to_owned());
                let path = AllFixtures::write(&dir, &seed, count)?;
                println!("wrote {} fixtures to {}", count, path);
                Ok(())
            }
            Self::Verify { seed, dir } => {
                let dir = dir.unwrap_or_else(|| AllFixtures::get().dir().to_owned());
                let verified = AllFixtures::verify(&dir, &seed)?;
                println!("verified {} fixtures", verified);
                Ok(())
            }
        }
    }
}
