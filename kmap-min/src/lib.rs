// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimize boolean functions of 2 to 4 variables and lay them out on Karnaugh maps.
//!
//! A [`TruthTable`](truth_table::TruthTable) assigns `0`, `1` or don't-care to each minterm.
//! Its [`LogicFunction`] is minimized by Quine-McCluskey reduction into prime implicants, out
//! of which essential and then greedily chosen implicants form a sum-of-products
//! [`Minimization`]. Each selected implicant maps onto rectangles of a
//! [`KmapLayout`](kmap::KmapLayout) for drawing.
//!
//! ```
//! use kmap_min::{truth_table::TruthTable, variables::{VariableCount, VariableNames}};
//!
//! let table: TruthTable = "1010 1010".parse().unwrap();
//! let names = VariableNames::defaults(VariableCount::Three);
//! let minimized = table.logic_function().minimize(&names);
//! assert_eq!(minimized.expression(), "C'");
//! assert_eq!(minimized.regions()[0].len(), 2);
//! ```

pub mod cover;
pub mod errors;
pub mod implicant;
pub mod kmap;
pub mod logic_function;
pub mod minterms;
mod primes;
#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
pub mod session;
pub mod term;
pub mod truth_table;
pub mod variables;

pub use logic_function::{minimize, LogicFunction, Minimization};
