pub mod array;
pub mod dims;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod invariants;
pub mod loader;
pub mod solver;

/// Largest number of rows or columns a maze may have.
pub const MAX_DIMENSION: usize = 20;

pub use error::SearchError;
pub use grid::{CellState, Grid};
pub use solver::{Search, SearchState};
