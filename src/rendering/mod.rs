use macroquad::prelude::*;

use crate::application::Renderer;
use crate::domain::Board;

/// Draws board snapshots into the macroquad window
pub struct MacroquadRenderer {
    pub cell_size: f32,
    pub status: String,
}

impl MacroquadRenderer {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size, status: String::new() }
    }
}

impl Renderer for MacroquadRenderer {
    fn show(&mut self, board: &Board, generation: u64) {
        clear_background(BLACK);
        draw_board(board, self.cell_size);

        let info = format!(
            "Generation: {}  Population: {}  {}",
            generation,
            board.population(),
            self.status
        );
        draw_text(&info, 10.0, screen_height() - 10.0, 18.0, Color::from_rgba(180, 180, 180, 255));
    }
}

/// Draw every live cell, plus faint grid lines when cells are big enough
pub fn draw_board(board: &Board, cell_size: f32) {
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let grid_line_color = Color::from_rgba(40, 40, 40, 255); // Dark gray
    let draw_grid_lines = cell_size >= 4.0;

    for (row, col, cell) in board.iter_cells() {
        let (x, y) = (col as f32 * cell_size, row as f32 * cell_size);

        // Skip if outside viewport
        if x > screen_width() || y > screen_height() {
            continue;
        }

        if cell.is_alive() {
            draw_rectangle(x, y, cell_size, cell_size, alive_color);
        }
        if draw_grid_lines {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, grid_line_color);
        }
    }
}
