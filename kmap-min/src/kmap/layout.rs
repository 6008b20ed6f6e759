// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::variables::{VariableCount, VariableNames};

/// Two-bit reflected binary code: the value shown at each position along a four-cell axis.
const GRAY_CODE: [u8; 4] = [0, 1, 3, 2];

/// The position along a four-cell axis at which each two-bit value is shown.
const GRAY_POSITION: [usize; 4] = [0, 1, 3, 2];

const ONE_BIT_LABELS: [&str; 2] = ["0", "1"];
const TWO_BIT_LABELS: [&str; 4] = ["00", "01", "11", "10"];

/// A (row, column) position on a K-map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The grid layout of a K-map over 2, 3 or 4 variables.
///
/// The leading variables are laid out along the vertical axis and the rest along the
/// horizontal axis. Axes of four cells are in Gray code order, so that cells next to each
/// other (including across the edges of the grid) differ in exactly one variable.
///
/// | variables | rows × cols | vertical | horizontal |
/// |-----------|-------------|----------|------------|
/// | 2         | 2 × 2       | A        | B          |
/// | 3         | 2 × 4       | A        | BC         |
/// | 4         | 4 × 4       | AB       | CD         |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KmapLayout {
    count: VariableCount,
}

impl KmapLayout {
    #[inline]
    pub fn new(count: VariableCount) -> Self {
        Self { count }
    }

    #[inline]
    pub fn variable_count(self) -> VariableCount {
        self.count
    }

    #[inline]
    pub fn rows(self) -> usize {
        1 << self.row_bits()
    }

    #[inline]
    pub fn cols(self) -> usize {
        1 << self.col_bits()
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns the cell at which `minterm` is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_min::{kmap::{GridCell, KmapLayout}, variables::VariableCount};
    ///
    /// let layout = KmapLayout::new(VariableCount::Four);
    /// // m8 is AB = 10, CD = 00: the last row and the first column.
    /// assert_eq!(layout.minterm_to_cell(8), GridCell::new(3, 0));
    /// assert_eq!(layout.cell_to_minterm(GridCell::new(3, 0)), 8);
    /// ```
    ///
    /// Panics if `minterm` is out of range for the variable count.
    pub fn minterm_to_cell(self, minterm: u8) -> GridCell {
        assert!(
            (minterm as usize) < self.count.minterm_count(),
            "minterm {} must be in range 0..{}",
            minterm,
            self.count.minterm_count()
        );
        let col_bits = self.col_bits();
        let row_value = minterm >> col_bits;
        let col_value = minterm & ((1 << col_bits) - 1);
        GridCell {
            row: axis_position(row_value, self.row_bits()),
            col: axis_position(col_value, col_bits),
        }
    }

    /// Returns the minterm shown at `cell`.
    ///
    /// Panics if `cell` is outside the grid.
    pub fn cell_to_minterm(self, cell: GridCell) -> u8 {
        assert!(
            cell.row < self.rows() && cell.col < self.cols(),
            "cell {:?} must be within a {}x{} grid",
            cell,
            self.rows(),
            self.cols()
        );
        let row_value = axis_value(cell.row, self.row_bits());
        let col_value = axis_value(cell.col, self.col_bits());
        (row_value << self.col_bits()) | col_value
    }

    /// Iterates over every cell in row-major order, together with the minterm it shows.
    pub fn cells(self) -> impl Iterator<Item = (GridCell, u8)> {
        let cols = self.cols();
        (0..self.rows() * cols).map(move |ix| {
            let cell = GridCell::new(ix / cols, ix % cols);
            (cell, self.cell_to_minterm(cell))
        })
    }

    /// Returns the header labels of the rows, for example `["00", "01", "11", "10"]`.
    #[inline]
    pub fn row_labels(self) -> &'static [&'static str] {
        labels_for(self.row_bits())
    }

    /// Returns the header labels of the columns.
    #[inline]
    pub fn col_labels(self) -> &'static [&'static str] {
        labels_for(self.col_bits())
    }

    /// Splits `names` into the variables of the vertical and the horizontal axis.
    pub fn axis_variables(self, names: &VariableNames) -> (&[String], &[String]) {
        debug_assert_eq!(names.count(), self.count, "names must match the layout");
        names.as_slice().split_at(self.row_bits())
    }

    /// Returns the axis titles, such as `("AB", "CD")`.
    pub fn axis_titles(self, names: &VariableNames) -> (String, String) {
        let (vertical, horizontal) = self.axis_variables(names);
        (vertical.concat(), horizontal.concat())
    }

    /// The number of variables along the vertical axis.
    #[inline]
    fn row_bits(self) -> usize {
        match self.count {
            VariableCount::Two | VariableCount::Three => 1,
            VariableCount::Four => 2,
        }
    }

    /// The number of variables along the horizontal axis.
    #[inline]
    fn col_bits(self) -> usize {
        match self.count {
            VariableCount::Two => 1,
            VariableCount::Three | VariableCount::Four => 2,
        }
    }
}

#[inline]
fn axis_position(value: u8, bits: usize) -> usize {
    match bits {
        1 => value as usize,
        _ => GRAY_POSITION[value as usize],
    }
}

#[inline]
fn axis_value(position: usize, bits: usize) -> u8 {
    match bits {
        1 => position as u8,
        _ => GRAY_CODE[position],
    }
}

#[inline]
fn labels_for(bits: usize) -> &'static [&'static str] {
    match bits {
        1 => &ONE_BIT_LABELS,
        _ => &TWO_BIT_LABELS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_shapes() {
        assert_eq!(KmapLayout::new(VariableCount::Two).shape(), (2, 2));
        assert_eq!(KmapLayout::new(VariableCount::Three).shape(), (2, 4));
        assert_eq!(KmapLayout::new(VariableCount::Four).shape(), (4, 4));
    }

    #[test]
    fn test_round_trip() {
        for count in VariableCount::ALL {
            let layout = KmapLayout::new(count);
            let mut seen = BTreeSet::new();
            for minterm in count.minterms() {
                let cell = layout.minterm_to_cell(minterm);
                assert!(cell.row < layout.rows() && cell.col < layout.cols());
                assert!(seen.insert(cell), "{:?} is used once", cell);
                assert_eq!(layout.cell_to_minterm(cell), minterm);
            }
            assert_eq!(seen.len(), layout.rows() * layout.cols());
        }
    }

    #[test]
    fn test_gray_adjacency() {
        for count in VariableCount::ALL {
            let layout = KmapLayout::new(count);
            let (rows, cols) = layout.shape();
            for (cell, minterm) in layout.cells() {
                let neighbours = [
                    GridCell::new((cell.row + 1) % rows, cell.col),
                    GridCell::new((cell.row + rows - 1) % rows, cell.col),
                    GridCell::new(cell.row, (cell.col + 1) % cols),
                    GridCell::new(cell.row, (cell.col + cols - 1) % cols),
                ];
                for neighbour in neighbours {
                    let other = layout.cell_to_minterm(neighbour);
                    assert_eq!(
                        (minterm ^ other).count_ones(),
                        1,
                        "{} variables: m{} at {:?} and m{} at {:?}",
                        count,
                        minterm,
                        cell,
                        other,
                        neighbour
                    );
                }
            }
        }
    }

    #[test]
    fn test_known_positions() {
        let layout = KmapLayout::new(VariableCount::Four);
        let grid: Vec<u8> = layout.cells().map(|(_, minterm)| minterm).collect();
        assert_eq!(
            grid,
            [0, 1, 3, 2, 4, 5, 7, 6, 12, 13, 15, 14, 8, 9, 11, 10]
        );

        let layout = KmapLayout::new(VariableCount::Three);
        assert_eq!(layout.minterm_to_cell(6), GridCell::new(1, 3));
        assert_eq!(layout.cell_to_minterm(GridCell::new(0, 2)), 3);

        let layout = KmapLayout::new(VariableCount::Two);
        assert_eq!(layout.minterm_to_cell(2), GridCell::new(1, 0));
    }

    #[test]
    fn test_labels() {
        let layout = KmapLayout::new(VariableCount::Three);
        assert_eq!(layout.row_labels(), ["0", "1"]);
        assert_eq!(layout.col_labels(), ["00", "01", "11", "10"]);

        let names = VariableNames::defaults(VariableCount::Three);
        assert_eq!(
            layout.axis_titles(&names),
            ("A".to_owned(), "BC".to_owned())
        );

        let layout = KmapLayout::new(VariableCount::Four);
        let names = VariableNames::new(VariableCount::Four, ["w", "x", "y", "z"]).unwrap();
        let (vertical, horizontal) = layout.axis_variables(&names);
        assert_eq!(vertical, ["w", "x"]);
        assert_eq!(horizontal, ["y", "z"]);
    }
}
