use std::fmt;
use std::ops::Add;

/// Position in the grid as `(row, column)`.
///
/// A `Cell` on its own is just a coordinate, it may lie outside of any grid.
/// Use [`Grid::make_cell`](crate::grid::Grid::make_cell) to get one that is
/// known to be in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(pub i32, pub i32);

impl Cell {
    pub const ZERO: Self = Self(0, 0);

    pub fn row(&self) -> i32 {
        self.0
    }

    pub fn col(&self) -> i32 {
        self.1
    }

    pub fn neighbor(self, dir: Dir) -> Cell {
        self + dir.offset()
    }

    /// Iterates over all the positions of a `rows` x `cols` area in row-major order.
    pub fn iter_fill(rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
        (0..rows as i32).flat_map(move |r| (0..cols as i32).map(move |c| Cell(r, c)))
    }
}

/// Structural equality of two cells.
pub fn equal(a: Cell, b: Cell) -> bool {
    a == b
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Add for Cell {
    type Output = Cell;

    #[inline(always)]
    fn add(self, other: Cell) -> Cell {
        Cell(self.0 + other.0, self.1 + other.1)
    }
}

/// One of the four directions the mouse can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Down,
    Right,
    Up,
    Left,
}

impl Dir {
    /// Expansion order of the search. Changing it changes the explored route,
    /// never the verdict.
    pub fn get_in_order() -> [Dir; 4] {
        [Dir::Down, Dir::Right, Dir::Up, Dir::Left]
    }

    pub fn offset(&self) -> Cell {
        match self {
            Dir::Down => Cell(1, 0),
            Dir::Right => Cell(0, 1),
            Dir::Up => Cell(-1, 0),
            Dir::Left => Cell(0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps() {
        let sum = Dir::get_in_order()
            .into_iter()
            .fold(Cell::ZERO, |acc, d| acc + d.offset());
        assert_eq!(sum, Cell::ZERO);
        for dir in Dir::get_in_order() {
            let Cell(r, c) = dir.offset();
            assert_eq!(r.abs() + c.abs(), 1);
        }
    }

    #[test]
    fn neighbor_order() {
        let c = Cell(2, 2);
        let around: Vec<_> = Dir::get_in_order()
            .into_iter()
            .map(|d| c.neighbor(d))
            .collect();
        assert_eq!(around, vec![Cell(3, 2), Cell(2, 3), Cell(1, 2), Cell(2, 1)]);
    }

    #[test]
    fn iter_fill_is_row_major() {
        let cells: Vec<_> = Cell::iter_fill(2, 2).collect();
        assert_eq!(cells, vec![Cell(0, 0), Cell(0, 1), Cell(1, 0), Cell(1, 1)]);
    }

    #[test]
    fn ops() {
        assert_eq!(Cell(1, 1) + Cell(2, -1), Cell(3, 0));
        assert_eq!(Cell(0, 0).neighbor(Dir::Up), Cell(-1, 0));
        assert!(equal(Cell(4, 5), Cell(4, 5)));
        assert!(!equal(Cell(4, 5), Cell(5, 4)));
    }
}
