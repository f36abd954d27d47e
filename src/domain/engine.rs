use std::ops::Range;

use log::{debug, trace};

use super::{Board, Cell, Pattern};
use crate::error::{LifeError, Result};

/// Engine owns the board and advances it one generation at a time.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    generation: u64,
}

impl Engine {
    /// Create an engine with a `size x size` board, all cells dead
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            generation: 0,
        })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Generations advanced since creation or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current board for rendering
    pub const fn snapshot(&self) -> &Board {
        &self.board
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.board.population()
    }

    /// Read a single cell
    pub fn get_cell(&self, (row, col): (usize, usize)) -> Result<Cell> {
        self.board
            .get(row, col)
            .ok_or_else(|| LifeError::out_of_bounds(row, col, self.size()))
    }

    /// Set a single cell
    pub fn set_cell(&mut self, (row, col): (usize, usize), cell: Cell) -> Result<()> {
        self.board.set(row, col, cell)
    }

    /// Set every cell in `rows x cols` to `cell`.
    ///
    /// The whole region is checked first; on error nothing is written.
    pub fn set_region(&mut self, rows: Range<usize>, cols: Range<usize>, cell: Cell) -> Result<()> {
        if rows.is_empty() || cols.is_empty() {
            return Ok(());
        }
        let size = self.size();
        if rows.end > size || cols.end > size {
            let row = if rows.end > size { size } else { rows.start };
            let col = if cols.end > size { size } else { cols.start };
            return Err(LifeError::out_of_bounds(row, col, size));
        }
        for row in rows {
            for col in cols.clone() {
                self.board.set(row, col, cell)?;
            }
        }
        Ok(())
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.board = self.board.evolve();
        self.generation += 1;
        trace!("generation {} population {}", self.generation, self.board.population());
    }

    /// Advance one generation with rows computed on the rayon pool
    pub fn step_parallel(&mut self) {
        self.board = self.board.evolve_parallel();
        self.generation += 1;
        trace!("generation {} population {}", self.generation, self.board.population());
    }

    /// Advance `n` generations
    pub fn steps(&mut self, n: u64) {
        (0..n).for_each(|_| self.step());
    }

    /// Stamp `pattern` centered on `(row, col)`.
    ///
    /// Each covered cell becomes `(board + pattern) mod 2`, so inserting the
    /// same pattern twice at one spot cancels out. A pattern that would reach
    /// past any edge is rejected and the board is left as it was.
    pub fn insert(&mut self, pattern: &Pattern, (row, col): (usize, usize)) -> Result<()> {
        let (rows, cols) = pattern.dimensions();
        let size = self.size();
        let out_of_bounds = || LifeError::PatternOutOfBounds { row, col, rows, cols, size };

        let top = row.checked_sub(rows / 2).ok_or_else(out_of_bounds)?;
        let left = col.checked_sub(cols / 2).ok_or_else(out_of_bounds)?;
        if rows > size || top > size - rows || cols > size || left > size - cols {
            return Err(out_of_bounds());
        }

        self.board.xor_pattern(top, left, pattern);
        debug!("inserted {rows}x{cols} pattern at ({row}, {col})");
        Ok(())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.board.clear();
        self.generation = 0;
        debug!("board cleared");
    }

    /// Seed the board at random and reset the generation counter
    pub fn randomize(&mut self, density: f64) {
        self.board.randomize(density, &mut rand::rng());
        self.generation = 0;
        debug!("board randomized, population {}", self.board.population());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Pattern {
        Pattern::from_rows(&[[0, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap()
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(Engine::new(0).unwrap_err(), LifeError::InvalidSize(0));
    }

    #[test]
    fn test_set_and_get_cell() {
        let mut engine = Engine::new(4).unwrap();
        engine.set_cell((1, 2), Cell::Alive).unwrap();
        assert_eq!(engine.get_cell((1, 2)), Ok(Cell::Alive));
        assert_eq!(engine.get_cell((2, 1)), Ok(Cell::Dead));
        assert!(engine.get_cell((4, 0)).is_err());
    }

    #[test]
    fn test_set_region() {
        let mut engine = Engine::new(5).unwrap();
        engine.set_region(1..3, 2..5, Cell::Alive).unwrap();
        assert_eq!(engine.population(), 6);
        assert_eq!(engine.get_cell((1, 4)), Ok(Cell::Alive));
        assert_eq!(engine.get_cell((3, 2)), Ok(Cell::Dead));
    }

    #[test]
    fn test_set_region_out_of_bounds_writes_nothing() {
        let mut engine = Engine::new(5).unwrap();
        let err = engine.set_region(3..6, 0..2, Cell::Alive).unwrap_err();
        assert_eq!(err, LifeError::out_of_bounds(5, 0, 5));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_empty_region_is_noop() {
        let mut engine = Engine::new(3).unwrap();
        engine.set_region(2..2, 0..10, Cell::Alive).unwrap();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_step_counts_generations() {
        let mut engine = Engine::new(5).unwrap();
        engine.step();
        engine.step_parallel();
        engine.steps(3);
        assert_eq!(engine.generation(), 5);
    }

    #[test]
    fn test_insert_centers_pattern() {
        let mut engine = Engine::new(7).unwrap();
        engine.insert(&blinker(), (3, 3)).unwrap();
        let alive: Vec<_> = engine
            .snapshot()
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(alive, vec![(3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_insert_xor_with_existing() {
        let mut engine = Engine::new(5).unwrap();
        engine.set_cell((2, 2), Cell::Alive).unwrap();
        engine.set_cell((1, 1), Cell::Alive).unwrap();
        engine.insert(&blinker(), (2, 2)).unwrap();
        assert_eq!(engine.get_cell((2, 2)), Ok(Cell::Dead));
        assert_eq!(engine.get_cell((2, 1)), Ok(Cell::Alive));
        assert_eq!(engine.get_cell((1, 1)), Ok(Cell::Alive));
    }

    #[test]
    fn test_insert_past_edge_fails_untouched() {
        let mut engine = Engine::new(5).unwrap();
        let err = engine.insert(&blinker(), (0, 2)).unwrap_err();
        assert!(matches!(err, LifeError::PatternOutOfBounds { row: 0, col: 2, .. }));
        assert!(engine.insert(&blinker(), (2, 4)).is_err());
        assert!(engine.insert(&blinker(), (9, 9)).is_err());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_insert_far_past_edge_fails() {
        let mut engine = Engine::new(5).unwrap();
        assert!(engine.insert(&blinker(), (usize::MAX, 2)).is_err());
        assert!(engine.insert(&blinker(), (2, usize::MAX)).is_err());
        assert!(engine.insert(&blinker(), (usize::MAX, usize::MAX)).is_err());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_pattern_larger_than_board_fails() {
        let mut engine = Engine::new(2).unwrap();
        assert!(matches!(
            engine.insert(&blinker(), (1, 1)),
            Err(LifeError::PatternOutOfBounds { rows: 3, cols: 3, size: 2, .. })
        ));
    }

    #[test]
    fn test_insert_touching_edges() {
        let mut engine = Engine::new(3).unwrap();
        engine.insert(&blinker(), (1, 1)).unwrap();
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut engine = Engine::new(6).unwrap();
        engine.randomize(1.0);
        assert_eq!(engine.population(), 36);
        engine.step();
        engine.clear();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
    }
}
