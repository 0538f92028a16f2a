//! Conway's Game of Life on a fixed-size torus.
//!
//! [`Grid`] is an immutable snapshot of one generation. [`next_generation`]
//! builds the successor from it using [`count_alive_neighbors`], which wraps
//! at every edge. [`Life`] owns the running simulation: one current grid,
//! replaced on every tick and reseeded on restart.

pub mod error;
pub mod generation;
pub mod grid;
pub mod life;
pub mod neighbors;
pub mod patterns;

pub use error::GridError;
pub use generation::{Transition, next_generation, next_state};
pub use grid::{Cell, Dimensions, Grid};
pub use life::Life;
pub use neighbors::count_alive_neighbors;
pub use patterns::Pattern;
