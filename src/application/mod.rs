mod config;
mod simulation;

pub use config::{BOARD_SIZE_VAR, MAX_SPEED, MIN_SPEED, PlayConfig, SPEED_VAR};
pub use simulation::Simulation;

use crate::domain::Board;

/// Displays board snapshots; the simulation only ever hands it a read-only view
pub trait Renderer {
    fn show(&mut self, board: &Board, generation: u64);
}
