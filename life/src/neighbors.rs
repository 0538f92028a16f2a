// neighbors.rs - Toroidal Moore neighborhood

use crate::grid::Grid;

/// Offsets of the 8 surrounding cells.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Number of live cells among the 8 neighbors of `(row, col)`, in `[0, 8]`.
///
/// Edges wrap, so the grid behaves as a torus. `row` and `col` are reduced
/// modulo the grid's own size first. On grids narrower than 3 cells the same
/// cell can be reached through several offsets and is counted once per offset.
pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let dims = grid.dimensions();
    let row = (row % dims.rows()) as isize;
    let col = (col % dims.cols()) as isize;

    OFFSETS
        .iter()
        .map(|&(dr, dc)| {
            let (r, c) = dims.wrap(row + dr, col + dc);
            grid.get(r, c).weight()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Dimensions};

    #[test]
    fn corner_sees_opposite_edges() {
        let dims = Dimensions::new(5, 5).unwrap();
        let grid = Grid::with_alive(dims, &[(4, 4), (0, 4), (4, 0), (1, 1)]);
        assert_eq!(count_alive_neighbors(&grid, 0, 0), 4);
    }

    #[test]
    fn self_is_not_counted() {
        let dims = Dimensions::new(5, 5).unwrap();
        let grid = Grid::with_alive(dims, &[(2, 2)]);
        assert_eq!(count_alive_neighbors(&grid, 2, 2), 0);
        assert_eq!(count_alive_neighbors(&grid, 1, 1), 1);
    }

    #[test]
    fn out_of_range_coordinates_wrap() {
        let dims = Dimensions::new(4, 6).unwrap();
        let grid = Grid::with_alive(dims, &[(0, 0), (0, 1)]);
        assert_eq!(
            count_alive_neighbors(&grid, 5, 13),
            count_alive_neighbors(&grid, 1, 1)
        );
    }

    #[test]
    fn single_live_cell_torus_counts_itself_eight_times() {
        let grid = Grid::new(1, 1, || Cell::Alive).unwrap();
        assert_eq!(count_alive_neighbors(&grid, 0, 0), 8);
    }

    #[test]
    fn full_two_by_two_torus_saturates() {
        let grid = Grid::new(2, 2, || Cell::Alive).unwrap();
        for (row, col, _) in grid.iter() {
            assert_eq!(count_alive_neighbors(&grid, row, col), 8);
        }
    }
}
