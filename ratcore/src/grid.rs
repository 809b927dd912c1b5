use std::fmt;

use crate::{array::Array2D, dims::Cell, error::GridError, MAX_DIMENSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Wall,
    Open,
    Visited,
    MouseStart,
    Exit,
}

impl CellState {
    pub const ALL: [CellState; 5] = [
        CellState::Wall,
        CellState::Open,
        CellState::Visited,
        CellState::MouseStart,
        CellState::Exit,
    ];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(CellState::Wall),
            '0' => Some(CellState::Open),
            '.' => Some(CellState::Visited),
            'm' => Some(CellState::MouseStart),
            'e' => Some(CellState::Exit),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellState::Wall => '1',
            CellState::Open => '0',
            CellState::Visited => '.',
            CellState::MouseStart => 'm',
            CellState::Exit => 'e',
        }
    }

    /// Whether the mouse may still step on a cell in this state.
    pub fn is_passable(self) -> bool {
        !matches!(self, CellState::Wall | CellState::Visited)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Fixed size maze board.
///
/// Dimensions are chosen once, at construction, and stay within
/// `1..=MAX_DIMENSION`. The only mutation the search performs is marking
/// cells as [`CellState::Visited`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<CellState>,
}

impl Grid {
    /// Creates a grid of `rows` x `cols` open cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::check_dimensions(rows, cols)?;
        Ok(Grid {
            cells: Array2D::new(CellState::Open, rows, cols),
        })
    }

    pub fn from_cells(cells: Array2D<CellState>) -> Result<Self, GridError> {
        Self::check_dimensions(cells.rows(), cells.cols())?;
        Ok(Grid { cells })
    }

    /// Parses rows of cell characters, mainly for building grids in code.
    ///
    /// Unlike the [loader](crate::loader), unknown characters are rejected
    /// with `None` instead of substituted.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        let mut buf = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.chars().count() != cols {
                return None;
            }
            for ch in row.chars() {
                buf.push(CellState::from_char(ch)?);
            }
        }

        Self::from_cells(Array2D::from_buf(buf, rows.len(), cols)?).ok()
    }

    pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
        if rows == 0 || cols == 0 || rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn cells(&self) -> &Array2D<CellState> {
        &self.cells
    }

    pub fn bounds_check(&self, cell: Cell) -> bool {
        0 <= cell.0 && cell.0 < self.rows() as i32 && 0 <= cell.1 && cell.1 < self.cols() as i32
    }

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds {
            cell,
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    /// Builds a cell, failing when it would not lie on this grid.
    pub fn make_cell(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        let cell = Cell(row, col);
        if !self.bounds_check(cell) {
            return Err(self.out_of_bounds(cell));
        }
        Ok(cell)
    }

    pub fn state_at(&self, cell: Cell) -> Result<CellState, GridError> {
        self.cells
            .get(cell)
            .copied()
            .ok_or_else(|| self.out_of_bounds(cell))
    }

    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<(), GridError> {
        let err = self.out_of_bounds(cell);
        *self.cells.get_mut(cell).ok_or(err)? = state;
        Ok(())
    }

    /// Marks `cell` as visited. Visiting an already visited cell does nothing.
    pub fn mark_visited(&mut self, cell: Cell) -> Result<(), GridError> {
        match self.state_at(cell)? {
            CellState::Wall => Err(GridError::WallVisit(cell)),
            CellState::Visited => Ok(()),
            _ => self.set(cell, CellState::Visited),
        }
    }

    /// Whether `cell` is on the grid and still worth visiting.
    ///
    /// Bounds are checked first, so positions just past the border are fine to ask about.
    pub fn is_candidate(&self, cell: Cell) -> bool {
        self.cells.get(cell).is_some_and(|s| s.is_passable())
    }

    /// First cell in row-major order that is in the `target` state.
    pub fn locate(&self, target: CellState) -> Result<Cell, GridError> {
        self.cells
            .iter_pos()
            .find(|&pos| self.cells[pos] == target)
            .ok_or(GridError::NotFound(target))
    }

    pub fn count(&self, target: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == target).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if let Some(row) = self.cells.row(r) {
                for state in row {
                    write!(f, "{}", state)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
