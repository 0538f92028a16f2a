// render.rs - Paints a generation onto the canvas

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use life::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color32::from_rgb(0x9b, 0xa0, 0xf0),
            dead: Color32::from_gray(0x44),
        }
    }
}

impl Palette {
    pub fn color(&self, cell: Cell) -> Color32 {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead  => self.dead,
        }
    }
}

/// Square for `(row, col)`: side `cell_size - 1`, leaving a one pixel gap.
pub fn cell_rect(origin: Pos2, row: usize, col: usize, cell_size: u32) -> Rect {
    let size = cell_size as f32;
    let min = origin + Vec2::new(col as f32 * size, row as f32 * size);
    Rect::from_min_size(min, Vec2::splat(size - 1.0))
}

/// Repaints every cell of `grid`.
pub fn paint_grid(painter: &Painter, origin: Pos2, grid: &Grid, cell_size: u32, palette: &Palette) {
    for (row, col, cell) in grid.iter() {
        painter.rect_filled(cell_rect(origin, row, col, cell_size), 0.0, palette.color(cell));
    }
}
