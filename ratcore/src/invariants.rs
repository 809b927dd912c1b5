use crate::{
    dims::Cell,
    error::InvariantViolation,
    frontier::Frontier,
    grid::{CellState, Grid},
    MAX_DIMENSION,
};

/// How thorough the consistency pass is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckLevel {
    /// Dimensions and endpoints only, constant time.
    Structural,
    /// Also scans the whole grid and the whole frontier.
    Full,
}

impl Default for CheckLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            CheckLevel::Full
        } else {
            CheckLevel::Structural
        }
    }
}

impl CheckLevel {
    pub fn from_deep(deep: bool) -> Self {
        if deep {
            CheckLevel::Full
        } else {
            CheckLevel::Structural
        }
    }
}

/// Consistency pass run around every mutation of the search state.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantChecker {
    level: CheckLevel,
}

impl InvariantChecker {
    pub fn new(level: CheckLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> CheckLevel {
        self.level
    }

    pub fn check_grid(&self, grid: &Grid) -> Result<(), InvariantViolation> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows == 0 || rows > MAX_DIMENSION || cols == 0 || cols > MAX_DIMENSION {
            return Err(InvariantViolation::Dimensions { rows, cols });
        }

        if self.level == CheckLevel::Full {
            let len = grid.cells().len();
            if len != rows * cols {
                return Err(InvariantViolation::BufferSize { len, rows, cols });
            }

            // Marking only ever removes endpoints, so more than one means corruption.
            for state in [CellState::MouseStart, CellState::Exit] {
                let count = grid.count(state);
                if count > 1 {
                    return Err(InvariantViolation::Duplicate { state, count });
                }
            }
        }

        Ok(())
    }

    pub fn check(
        &self,
        grid: &Grid,
        cursor: Cell,
        goal: Cell,
        frontier: &Frontier,
    ) -> Result<(), InvariantViolation> {
        self.check_grid(grid)?;

        if !grid.bounds_check(cursor) {
            return Err(InvariantViolation::CursorOutOfBounds(cursor));
        }
        if !grid.bounds_check(goal) {
            return Err(InvariantViolation::GoalOutOfBounds(goal));
        }

        if self.level == CheckLevel::Full {
            for &cell in frontier.iter() {
                match grid.state_at(cell) {
                    Err(_) => return Err(InvariantViolation::FrontierOutOfBounds(cell)),
                    Ok(CellState::Wall) => return Err(InvariantViolation::FrontierWall(cell)),
                    Ok(_) => {}
                }
            }
        }

        Ok(())
    }
}
