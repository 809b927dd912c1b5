use std::fmt;

use crate::{dims::Cell, error::FrontierError};

/// LIFO stack of cells still to be tried.
///
/// Nothing is deduplicated on push, the search discards stale entries when
/// it pops them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    stack: Vec<Cell>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, cell: Cell) {
        log::trace!("push {}", cell);
        self.stack.push(cell);
    }

    pub fn pop(&mut self) -> Result<Cell, FrontierError> {
        let cell = self.stack.pop().ok_or(FrontierError::EmptyFrontier)?;
        log::trace!("pop {}", cell);
        Ok(cell)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Iterates from the top of the stack (next to pop) down.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.stack.iter().rev()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}
