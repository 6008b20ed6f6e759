// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    kmap::{GridCell, KmapLayout},
    term::Term,
};
use itertools::Itertools;
use std::ops::Range;

/// An axis-aligned rectangle of K-map cells, in grid units.
///
/// `x` and `width` count columns; `y` and `height` count rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    /// Iterates over the cells inside this region, in row-major order.
    pub fn cells(self) -> impl Iterator<Item = GridCell> {
        (self.y..self.y + self.height)
            .cartesian_product(self.x..self.x + self.width)
            .map(|(row, col)| GridCell::new(row, col))
    }

    /// Projects this region onto pixel coordinates.
    pub fn to_pixels(self, geometry: CellGeometry) -> PixelRect {
        PixelRect {
            x: geometry.label_offset + self.x as u32 * geometry.cell_size,
            y: geometry.label_offset + self.y as u32 * geometry.cell_size,
            width: self.width as u32 * geometry.cell_size,
            height: self.height as u32 * geometry.cell_size,
        }
    }
}

/// Pixel sizes used to project grid regions onto a drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    /// The side of a square cell.
    pub cell_size: u32,
    /// The space reserved above and to the left of the grid for header labels.
    pub label_offset: u32,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            cell_size: 100,
            label_offset: 30,
        }
    }
}

/// A rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl KmapLayout {
    /// Returns the rectangles covering the cells of `term`.
    ///
    /// The rows and the columns the term touches are each split into runs of consecutive
    /// indices, and one rectangle is produced per (row run, column run) pair, in row-run-major
    /// order. Runs don't wrap around the grid edges, so a group that wraps is drawn as several
    /// rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_min::{kmap::{KmapLayout, Region}, variables::VariableCount};
    ///
    /// let layout = KmapLayout::new(VariableCount::Three);
    /// let regions = layout.regions_for_term(&"-1-".parse().unwrap());
    /// assert_eq!(regions, [Region { x: 2, y: 0, width: 2, height: 2 }]);
    /// ```
    pub fn regions_for_term(self, term: &Term) -> Vec<Region> {
        debug_assert_eq!(
            term.variable_count(),
            self.variable_count(),
            "term {} must match the layout",
            term
        );

        let cells: Vec<GridCell> = term.expand().map(|m| self.minterm_to_cell(m)).collect();
        let row_runs = contiguous_runs(cells.iter().map(|cell| cell.row).sorted().dedup());
        let col_runs = contiguous_runs(cells.iter().map(|cell| cell.col).sorted().dedup());

        row_runs
            .iter()
            .cartesian_product(col_runs.iter())
            .map(|(rows, cols)| Region {
                x: cols.start,
                y: rows.start,
                width: cols.len(),
                height: rows.len(),
            })
            .collect()
    }
}

/// Splits sorted, distinct indices into maximal runs of consecutive values.
fn contiguous_runs(indices: impl IntoIterator<Item = usize>) -> Vec<Range<usize>> {
    let mut runs: Vec<Range<usize>> = Vec::new();
    for ix in indices {
        match runs.last_mut() {
            Some(run) if run.end == ix => run.end += 1,
            _ => runs.push(ix..ix + 1),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::VariableCount;
    use std::collections::BTreeSet;

    fn regions(count: VariableCount, term: &str) -> Vec<Region> {
        KmapLayout::new(count).regions_for_term(&term.parse().unwrap())
    }

    fn region(x: usize, y: usize, width: usize, height: usize) -> Region {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_contiguous_runs() {
        assert_eq!(contiguous_runs(vec![]), Vec::<Range<usize>>::new());
        assert_eq!(contiguous_runs(vec![0, 2, 3]), [0..1, 2..4]);
        assert_eq!(contiguous_runs(vec![0, 1, 2, 3]), [0..4]);
    }

    #[test]
    fn test_single_rectangles() {
        assert_eq!(
            regions(VariableCount::Four, "----"),
            [region(0, 0, 4, 4)]
        );
        assert_eq!(regions(VariableCount::Four, "0101"), [region(1, 1, 1, 1)]);
        // B = 1: the middle two rows.
        assert_eq!(regions(VariableCount::Four, "-1--"), [region(0, 1, 4, 2)]);
        assert_eq!(regions(VariableCount::Two, "1-"), [region(0, 1, 2, 1)]);
    }

    #[test]
    fn test_wrapping_rectangles() {
        // B' D' are the four corners of a 4 variable map.
        assert_eq!(
            regions(VariableCount::Four, "-0-0"),
            [
                region(0, 0, 1, 1),
                region(3, 0, 1, 1),
                region(0, 3, 1, 1),
                region(3, 3, 1, 1),
            ]
        );
        // B' C' wraps vertically: rows 00 and 10.
        assert_eq!(
            regions(VariableCount::Four, "-00-"),
            [region(0, 0, 2, 1), region(0, 3, 2, 1)]
        );
        // C' wraps horizontally on a 3 variable map.
        assert_eq!(
            regions(VariableCount::Three, "--0"),
            [region(0, 0, 1, 2), region(3, 0, 1, 2)]
        );
    }

    #[test]
    fn test_regions_cover_term() {
        for count in VariableCount::ALL {
            let layout = KmapLayout::new(count);
            let terms = (0..3_usize.pow(count.get() as u32)).map(|mut code| {
                let input: Vec<Option<bool>> = (0..count.get())
                    .map(|_| {
                        let value = [Some(false), Some(true), None][code % 3];
                        code /= 3;
                        value
                    })
                    .collect();
                Term::from_input(&input).unwrap()
            });

            for term in terms {
                let expected: BTreeSet<GridCell> =
                    term.expand().map(|m| layout.minterm_to_cell(m)).collect();
                let actual: BTreeSet<GridCell> = layout
                    .regions_for_term(&term)
                    .into_iter()
                    .flat_map(Region::cells)
                    .collect();
                assert_eq!(actual, expected, "regions for {} cover its cells", term);
            }
        }
    }

    #[test]
    fn test_to_pixels() {
        let geometry = CellGeometry::default();
        assert_eq!(
            region(1, 0, 2, 1).to_pixels(geometry),
            PixelRect {
                x: 130,
                y: 30,
                width: 200,
                height: 100
            }
        );
        let geometry = CellGeometry {
            cell_size: 10,
            label_offset: 0,
        };
        assert_eq!(
            region(0, 3, 1, 1).to_pixels(geometry),
            PixelRect {
                x: 0,
                y: 30,
                width: 10,
                height: 10
            }
        );
    }
}
