/// Cell is the binary state of a single board position.
/// Dead maps to 0 and Alive maps to 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Build a cell from a 0/1 value; anything else is rejected
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }

    /// Numeric value of the cell (0 or 1)
    pub const fn bit(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Parity combination: `(self + other) mod 2`
    pub const fn xor(self, other: Cell) -> Self {
        match (self, other) {
            (Cell::Alive, Cell::Dead) | (Cell::Dead, Cell::Alive) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Next state under B3/S23:
    /// 1. Any cell with exactly 3 live neighbors is alive
    /// 2. A live cell with exactly 2 live neighbors stays alive
    /// 3. Everything else is dead
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) => Cell::Alive,
            (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
