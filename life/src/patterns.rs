use crate::grid::{Dimensions, Grid};

/// A named arrangement of live cells, relative to its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER];

impl Pattern {
    /// Stamps the pattern onto a dead grid with its corner at `(row, col)`.
    /// Cells past an edge wrap around.
    pub fn place(&self, dims: Dimensions, row: isize, col: isize) -> Grid {
        let cells: Vec<_> = self
            .cells
            .iter()
            .map(|&(r, c)| (row + r, col + c))
            .collect();
        Grid::with_alive(dims, &cells)
    }
}
