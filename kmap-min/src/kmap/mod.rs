// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Karnaugh map geometry: where each minterm sits on the grid, and which rectangles an
//! implicant occupies.

mod layout;
mod regions;

pub use layout::*;
pub use regions::*;
