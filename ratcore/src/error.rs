use std::io;

use thiserror::Error;

use crate::{dims::Cell, grid::CellState, MAX_DIMENSION};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell {cell} is out of bounds of {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    #[error("No {0:?} cell in the grid")]
    NotFound(CellState),
    #[error("Cannot visit wall at {0}")]
    WallVisit(Cell),
    #[error("Grid dimensions {rows}x{cols} must be within 1..={}", MAX_DIMENSION)]
    InvalidDimensions { rows: usize, cols: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontierError {
    #[error("Pop from an empty frontier")]
    EmptyFrontier,
}

/// Broken consistency rule, found by [`InvariantChecker`](crate::invariants::InvariantChecker).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Grid dimensions {rows}x{cols} are outside of 1..={}", MAX_DIMENSION)]
    Dimensions { rows: usize, cols: usize },
    #[error("Grid buffer holds {len} cells, expected {rows}x{cols}")]
    BufferSize { len: usize, rows: usize, cols: usize },
    #[error("Cursor cell {0} is out of bounds")]
    CursorOutOfBounds(Cell),
    #[error("Goal cell {0} is out of bounds")]
    GoalOutOfBounds(Cell),
    #[error("Frontier cell {0} is out of bounds")]
    FrontierOutOfBounds(Cell),
    #[error("Frontier cell {0} is a wall")]
    FrontierWall(Cell),
    #[error("Grid holds {count} {state:?} cells, at most one allowed")]
    Duplicate { state: CellState, count: usize },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read maze: {0}")]
    Io(#[from] io::Error),
    #[error("Missing maze {0} count")]
    MissingDimension(&'static str),
    #[error("Invalid maze {what} count: {token:?}")]
    InvalidDimension { what: &'static str, token: String },
    #[error("Maze dimensions: {0}")]
    Dimensions(#[from] GridError),
    #[error("Maze ended after {read} of {expected} cells")]
    UnexpectedEnd { read: usize, expected: usize },
    #[error("Maze has {count} {state:?} cells, exactly one required")]
    EndpointCount { state: CellState, count: usize },
    #[error("Loaded maze is inconsistent: {0}")]
    Invariant(#[from] InvariantViolation),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
    #[error("Frontier error: {0}")]
    Frontier(#[from] FrontierError),
    #[error("Invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
    #[error("Observer failed: {0}")]
    Observer(#[from] io::Error),
    #[error("Search already finished")]
    Finished,
}
