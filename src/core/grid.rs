//! The 3x3 facelet grid of a single face.
//!
//! A `FaceGrid` is a plain (row, column) matrix of colors. Row 0 / column 0
//! orientation is fixed by the adjacency table in `core::edge`; the grid
//! itself knows nothing about neighbors, only how to rotate 90 degrees
//! around its own center and how to read and write its row/column strips.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::edge::EdgeSelector;

/// Three facelets read out of one row or column, in stored order.
///
/// Always a copy: a strip read never aliases the grid, and a strip write
/// overwrites the same three positions value-for-value.
pub type Strip = [Color; 3];

/// A 3x3 matrix of facelet colors, indexed by (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceGrid([[Color; 3]; 3]);

impl FaceGrid {
    /// A grid filled uniformly with one color (a solved face).
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self([[color; 3]; 3])
    }

    /// The color at (row, column).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.0[row][col]
    }

    /// Rotate the grid 90 degrees clockwise, as viewed from outside the cube.
    ///
    /// New `(r, c)` takes the old value at `(2 - c, r)`: row 0 of the result
    /// is column 0 of the input read bottom-to-top.
    pub fn rotate_cw(&mut self) {
        let old = self.0;
        for r in 0..3 {
            for c in 0..3 {
                self.0[r][c] = old[2 - c][r];
            }
        }
    }

    /// Rotate the grid 90 degrees counterclockwise.
    ///
    /// Exact inverse of [`rotate_cw`](Self::rotate_cw): new `(r, c)` takes
    /// the old value at `(c, 2 - r)`.
    pub fn rotate_ccw(&mut self) {
        let old = self.0;
        for r in 0..3 {
            for c in 0..3 {
                self.0[r][c] = old[c][2 - r];
            }
        }
    }

    /// Copy out row `k`, left-to-right.
    #[must_use]
    pub fn row(&self, k: usize) -> Strip {
        self.0[k]
    }

    /// Copy out column `k`, top-to-bottom.
    #[must_use]
    pub fn col(&self, k: usize) -> Strip {
        [self.0[0][k], self.0[1][k], self.0[2][k]]
    }

    /// Overwrite row `k` with `strip`, left-to-right.
    pub fn set_row(&mut self, k: usize, strip: Strip) {
        self.0[k] = strip;
    }

    /// Overwrite column `k` with `strip`, top-to-bottom.
    pub fn set_col(&mut self, k: usize, strip: Strip) {
        for (r, value) in strip.into_iter().enumerate() {
            self.0[r][k] = value;
        }
    }

    /// Copy out the strip addressed by `selector`.
    #[must_use]
    pub fn strip(&self, selector: EdgeSelector) -> Strip {
        match selector {
            EdgeSelector::Row(k) => self.row(k),
            EdgeSelector::Col(k) => self.col(k),
        }
    }

    /// Overwrite the strip addressed by `selector`.
    pub fn set_strip(&mut self, selector: EdgeSelector, strip: Strip) {
        match selector {
            EdgeSelector::Row(k) => self.set_row(k, strip),
            EdgeSelector::Col(k) => self.set_col(k, strip),
        }
    }

    /// Whether every facelet holds the same color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let first = self.0[0][0];
        self.0.iter().flatten().all(|&c| c == first)
    }

    /// Iterate over all nine facelets in row-major order.
    pub fn facelets(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A grid with nine distinct positions, encoded by color pairs so every
    // facelet is distinguishable under rotation.
    fn numbered() -> FaceGrid {
        let mut grid = FaceGrid::solid(Color::White);
        let palette = [
            [Color::White, Color::Yellow, Color::Green],
            [Color::Blue, Color::Red, Color::Orange],
            [Color::Green, Color::Yellow, Color::Blue],
        ];
        for r in 0..3 {
            grid.set_row(r, palette[r]);
        }
        grid
    }

    #[test]
    fn test_rotate_cw_moves_first_column_to_first_row() {
        let mut grid = numbered();
        let col0 = grid.col(0);
        grid.rotate_cw();

        // Row 0 of the result is column 0 of the input, bottom-to-top.
        assert_eq!(grid.row(0), [col0[2], col0[1], col0[0]]);
    }

    #[test]
    fn test_rotate_cw_four_times_is_identity() {
        let original = numbered();
        let mut grid = original;
        for _ in 0..4 {
            grid.rotate_cw();
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn test_rotate_ccw_is_inverse_of_cw() {
        let original = numbered();

        let mut grid = original;
        grid.rotate_cw();
        grid.rotate_ccw();
        assert_eq!(grid, original);

        let mut grid = original;
        grid.rotate_ccw();
        grid.rotate_cw();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_three_cw_equals_one_ccw() {
        let original = numbered();

        let mut thrice = original;
        for _ in 0..3 {
            thrice.rotate_cw();
        }

        let mut once = original;
        once.rotate_ccw();

        assert_eq!(thrice, once);
    }

    #[test]
    fn test_strip_round_trip() {
        let mut grid = FaceGrid::solid(Color::White);
        let strip = [Color::Red, Color::Green, Color::Blue];

        grid.set_strip(EdgeSelector::Row(1), strip);
        assert_eq!(grid.strip(EdgeSelector::Row(1)), strip);

        grid.set_strip(EdgeSelector::Col(2), strip);
        assert_eq!(grid.strip(EdgeSelector::Col(2)), strip);

        // Row 1 / col 2 intersect at (1, 2): the later column write wins there.
        assert_eq!(grid.get(1, 2), Color::Green);
    }

    #[test]
    fn test_col_reads_top_to_bottom() {
        let grid = numbered();
        assert_eq!(grid.col(1), [grid.get(0, 1), grid.get(1, 1), grid.get(2, 1)]);
    }

    #[test]
    fn test_is_uniform() {
        assert!(FaceGrid::solid(Color::Orange).is_uniform());
        assert!(!numbered().is_uniform());
    }
}
