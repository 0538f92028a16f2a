// grid.rs - Grid types for Conway's Game of Life on a torus

use rand::Rng;

use crate::error::GridError;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// 1 for a live cell, 0 for a dead one.
    pub fn weight(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead  => 0,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Row and column counts of a grid. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        // Zero-sized, or too many cells to index
        match rows.checked_mul(cols) {
            Some(count) if count > 0 && count <= isize::MAX as usize => Ok(Self { rows, cols }),
            _ => Err(GridError::InvalidDimension { rows, cols }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Wraps an arbitrary signed coordinate onto the torus.
    pub fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as isize) as usize,
            col.rem_euclid(self.cols as isize) as usize,
        )
    }
}

/// An immutable snapshot of one generation.
///
/// Cells are stored row-major. A `Grid` is never changed after construction;
/// the next generation is always a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `rows × cols` grid, calling `fill` once per cell in row-major order.
    pub fn new(rows: usize, cols: usize, fill: impl FnMut() -> Cell) -> Result<Self, GridError> {
        Ok(Self::from_fn(Dimensions::new(rows, cols)?, fill))
    }

    pub fn from_fn(dims: Dimensions, mut fill: impl FnMut() -> Cell) -> Self {
        let cells = (0..dims.cell_count()).map(|_| fill()).collect();
        Self { dims, cells }
    }

    /// All cells dead.
    pub fn dead(dims: Dimensions) -> Self {
        Self::from_fn(dims, || Cell::Dead)
    }

    /// Every cell independently alive with probability 1/2.
    pub fn random<R: Rng + ?Sized>(dims: Dimensions, rng: &mut R) -> Self {
        Self::from_fn(dims, || Cell::from(rng.random_bool(0.5)))
    }

    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let dims = Dimensions::new(rows, cols)?;
        if cells.len() != dims.cell_count() {
            return Err(GridError::CellCount {
                expected: dims.cell_count(),
                actual:   cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// A dead grid with the listed coordinates alive. Coordinates wrap.
    pub fn with_alive(dims: Dimensions, alive: &[(isize, isize)]) -> Self {
        let mut cells = vec![Cell::Dead; dims.cell_count()];
        for &(row, col) in alive {
            let (row, col) = dims.wrap(row, col);
            cells[row * dims.cols + col] = Cell::Alive;
        }
        Self { dims, cells }
    }

    pub(crate) fn from_parts(dims: Dimensions, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), dims.cell_count());
        Self { dims, cells }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Cell at `(row, col)`, out-of-range coordinates wrap.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        let row = row % self.dims.rows;
        let col = col % self.dims.cols;
        self.cells[row * self.dims.cols + col]
    }

    /// `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.dims.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / cols, i % cols, cell))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}
