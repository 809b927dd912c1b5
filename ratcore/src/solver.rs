use std::io;

use smallvec::SmallVec;

use crate::{
    dims::{self, Cell, Dir},
    error::SearchError,
    frontier::Frontier,
    grid::{CellState, Grid},
    invariants::{CheckLevel, InvariantChecker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    Searching,
    /// The mouse reached the exit.
    Succeeded,
    /// Every reachable cell was tried, the mouse is trapped.
    Failed,
}

impl SearchState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, SearchState::Searching)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchState::Succeeded)
    }
}

/// Receives the grid once before the search starts and after every visited cell.
pub trait SearchObserver {
    fn snapshot(&mut self, grid: &Grid) -> io::Result<()>;
}

impl<F: FnMut(&Grid) -> io::Result<()>> SearchObserver for F {
    fn snapshot(&mut self, grid: &Grid) -> io::Result<()> {
        self(grid)
    }
}

/// Observer that ignores every snapshot.
pub struct NoObserver;

impl SearchObserver for NoObserver {
    fn snapshot(&mut self, _grid: &Grid) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells marked as visited by the search, the start included.
    pub visited: usize,
    pub pushed: usize,
    /// Popped candidates that had been visited meanwhile and were skipped.
    pub stale: usize,
    pub peak_frontier: usize,
}

/// Depth-first backtracking search of the exit.
///
/// The search owns both the grid and the frontier for its whole lifetime.
/// Every step marks exactly one cell as visited, so the number of steps is
/// bounded by the number of cells.
#[derive(Debug, Clone)]
pub struct Search {
    grid: Grid,
    frontier: Frontier,
    checker: InvariantChecker,
    start: Cell,
    goal: Cell,
    cursor: Cell,
    state: SearchState,
    stats: SearchStats,
    started: bool,
}

impl Search {
    /// Prepares a search from the grid's mouse to the grid's exit.
    pub fn new(grid: Grid, level: CheckLevel) -> Result<Self, SearchError> {
        let start = grid.locate(CellState::MouseStart)?;
        let goal = grid.locate(CellState::Exit)?;
        Self::with_endpoints(grid, start, goal, level)
    }

    /// Prepares a search between explicitly given cells.
    pub fn with_endpoints(
        grid: Grid,
        start: Cell,
        goal: Cell,
        level: CheckLevel,
    ) -> Result<Self, SearchError> {
        let start = grid.make_cell(start.0, start.1)?;
        let goal = grid.make_cell(goal.0, goal.1)?;

        let search = Search {
            frontier: Frontier::with_capacity(grid.rows() * grid.cols()),
            grid,
            checker: InvariantChecker::new(level),
            start,
            goal,
            cursor: start,
            state: SearchState::Searching,
            stats: SearchStats::default(),
            started: false,
        };
        search.check()?;

        log::debug!("Searching from {} to {}", start, goal);
        Ok(search)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Runs the search to the end, reporting every grid change to `observer`.
    pub fn run<O: SearchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<SearchState, SearchError> {
        if !self.started {
            observer.snapshot(&self.grid)?;
        }

        while !self.state.is_finished() {
            if self.step()? != SearchState::Failed {
                observer.snapshot(&self.grid)?;
            }
        }

        log::info!(
            "Search {:?} after visiting {} cell(s)",
            self.state,
            self.stats.visited
        );
        log::debug!("{:?}", self.stats);
        Ok(self.state)
    }

    /// Moves the mouse by one cell.
    ///
    /// The first step visits the start. Every following one expands the
    /// cursor's neighbors and moves to the newest candidate that is still
    /// unvisited. A step that returns [`SearchState::Failed`] visited nothing.
    pub fn step(&mut self) -> Result<SearchState, SearchError> {
        if self.state.is_finished() {
            return Err(SearchError::Finished);
        }

        if !self.started {
            self.started = true;
            self.visit(self.start)?;
        } else {
            for cell in self.candidates() {
                self.push_candidate(cell)?;
            }

            match self.pop_candidate()? {
                Some(next) => self.visit(next)?,
                None => {
                    log::debug!("Frontier exhausted at {}", self.cursor);
                    self.state = SearchState::Failed;
                    return Ok(self.state);
                }
            }
        }

        if dims::equal(self.cursor, self.goal) {
            self.state = SearchState::Succeeded;
        }
        Ok(self.state)
    }

    /// Unvisited open neighbors of the cursor, in expansion order.
    fn candidates(&self) -> SmallVec<[Cell; 4]> {
        Dir::get_in_order()
            .into_iter()
            .map(|dir| self.cursor.neighbor(dir))
            .filter(|&cell| self.grid.is_candidate(cell))
            .collect()
    }

    fn check(&self) -> Result<(), SearchError> {
        self.checker
            .check(&self.grid, self.cursor, self.goal, &self.frontier)?;
        Ok(())
    }

    fn push_candidate(&mut self, cell: Cell) -> Result<(), SearchError> {
        self.check()?;
        self.frontier.push(cell);
        self.stats.pushed += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        self.check()
    }

    /// Pops until a cell that is not yet visited comes up. Drains the
    /// frontier when there is none.
    fn pop_candidate(&mut self) -> Result<Option<Cell>, SearchError> {
        while !self.frontier.is_empty() {
            self.check()?;
            let cell = self.frontier.pop()?;
            self.check()?;

            if self.grid.state_at(cell)? == CellState::Visited {
                self.stats.stale += 1;
                continue;
            }
            return Ok(Some(cell));
        }
        Ok(None)
    }

    fn visit(&mut self, cell: Cell) -> Result<(), SearchError> {
        self.check()?;
        self.cursor = cell;
        self.grid.mark_visited(cell)?;
        self.stats.visited += 1;
        log::debug!("Mouse moved to {}", cell);
        self.check()
    }
}
