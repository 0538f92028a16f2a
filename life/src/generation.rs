// generation.rs - B3/S23 generation transition

use crate::grid::{Cell, Dimensions, Grid};
use crate::neighbors::count_alive_neighbors;

/// Conway's rule for one cell given its live neighbor count.
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
        (Cell::Dead, 3)                     => Cell::Alive,  // Birth
        _                                   => Cell::Dead,   // Death or stays dead
    }
}

/// Computes the next generation from `grid`.
///
/// Every neighbor count reads the unmodified input; the result is a new grid
/// of the same dimensions.
pub fn next_generation(grid: &Grid) -> Grid {
    let cells = grid
        .iter()
        .map(|(row, col, cell)| next_state(cell, count_alive_neighbors(grid, row, col)))
        .collect();
    Grid::from_parts(grid.dimensions(), cells)
}

/// A transition bound to fixed grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    dims: Dimensions,
}

impl Transition {
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn apply(&self, grid: &Grid) -> Grid {
        debug_assert_eq!(grid.dimensions(), self.dims, "grid does not match transition dimensions");
        next_generation(grid)
    }
}
