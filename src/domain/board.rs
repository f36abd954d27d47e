use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, Pattern};
use crate::error::{LifeError, Result};

/// Board is the fixed-size square grid of cells.
/// Addressed as `(row, col)`, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells dead
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Dead; size * size],
        })
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get cell at position, `None` outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if !self.contains(row, col) {
            return Err(LifeError::out_of_bounds(row, col, self.size));
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// XOR `pattern` onto the board with its top-left corner at `(top, left)`.
    /// Callers check that the whole pattern fits first.
    pub(crate) fn xor_pattern(&mut self, top: usize, left: usize, pattern: &Pattern) {
        debug_assert!(top + pattern.dimensions().0 <= self.size);
        debug_assert!(left + pattern.dimensions().1 <= self.size);
        for (dr, pattern_row) in pattern.rows().enumerate() {
            let start = self.index(top + dr, left);
            self.cells[start..start + pattern_row.len()]
                .iter_mut()
                .zip(pattern_row)
                .for_each(|(cell, &value)| *cell = cell.xor(value));
        }
    }

    /// Count live neighbors; cells beyond the edge count as dead
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.size - 1);
        rows.flat_map(|r| {
            let cols = col.saturating_sub(1)..=(col + 1).min(self.size - 1);
            cols.map(move |c| (r, c))
        })
        .filter(|&(r, c)| (r, c) != (row, col))
        .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
        .count() as u8
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.index(row, col)];
        current.evolve(self.count_live_neighbors(row, col))
    }

    /// Pure evolution - returns the next generation (serial)
    pub fn evolve(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self { size: self.size, cells }
    }

    /// Same generation as `evolve`, rows computed on the rayon pool
    pub fn evolve_parallel(&self) -> Self {
        let cells = (0..self.size)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.size).map(move |col| self.next_cell(row, col)))
            .collect();

        Self { size: self.size, cells }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }
}

impl fmt::Display for Board {
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
