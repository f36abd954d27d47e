use std::fmt;

use super::Cell;
use crate::error::{LifeError, Result};

/// A rectangular block of cells that can be stamped onto a board.
///
/// Transformations never mutate the receiver; each one returns a new pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Build a pattern from rows of 0/1 values.
    ///
    /// Fails on jagged rows, on values other than 0 and 1, and on empty input.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(LifeError::EmptyPattern);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LifeError::RaggedPattern {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::from_bit(value)
                    .ok_or(LifeError::InvalidCellValue { row: r, col: c, value })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows: rows.len(), cols, cells })
    }

    /// Pattern dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get cell at position, `None` outside the pattern
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Rows of the pattern, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Build a `rows x cols` pattern whose cell `(r, c)` is `source(r, c)`
    fn remap(&self, rows: usize, cols: usize, source: impl Fn(usize, usize) -> (usize, usize)) -> Self {
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| {
                let (sr, sc) = source(r, c);
                self.cells[sr * self.cols + sc]
            })
            .collect();
        Self { rows, cols, cells }
    }

    /// Mirror top to bottom
    pub fn flip_vertical(&self) -> Self {
        self.remap(self.rows, self.cols, |r, c| (self.rows - 1 - r, c))
    }

    /// Mirror left to right
    pub fn flip_horizontal(&self) -> Self {
        self.remap(self.rows, self.cols, |r, c| (r, self.cols - 1 - c))
    }

    /// Transpose across the main diagonal; non-square patterns swap dimensions
    pub fn flip_diag(&self) -> Self {
        self.remap(self.cols, self.rows, |r, c| (c, r))
    }

    /// Rotate by `n` quarter-turns counter-clockwise.
    ///
    /// Each quarter-turn is a horizontal flip followed by a transpose.
    /// `n` is taken modulo 4, so negative values turn clockwise.
    pub fn rotate(&self, n: i32) -> Self {
        (0..n.rem_euclid(4)).fold(self.clone(), |pattern, _| {
            pattern.flip_horizontal().flip_diag()
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
