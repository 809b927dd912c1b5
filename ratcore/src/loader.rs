//! Reads a maze from text.
//!
//! The format is two whitespace separated counts, rows then columns, followed
//! by `rows * cols` cell characters. Whitespace between cells is ignored, so
//! the maze may be laid out one row per line or all on one line.
//!
//! Characters other than `1`, `0`, `.`, `m` and `e` don't stop the load, they
//! are turned into visited cells and reported.

use std::{io::Read, iter::Peekable, str::Chars};

use crate::{
    dims::Cell,
    error::LoadError,
    grid::{CellState, Grid},
    invariants::InvariantChecker,
};

/// Character that was replaced while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub cell: Cell,
    pub found: char,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub substitutions: Vec<Substitution>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.substitutions.is_empty()
    }
}

pub fn load<R: Read>(mut reader: R) -> Result<(Grid, LoadReport), LoadError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    // bytes that aren't UTF-8 become U+FFFD and get substituted like any other bad cell
    load_str(&String::from_utf8_lossy(&input))
}

pub fn load_str(input: &str) -> Result<(Grid, LoadReport), LoadError> {
    let mut chars = input.chars().peekable();

    let rows = next_count(&mut chars, "row")?;
    let cols = next_count(&mut chars, "column")?;
    let mut grid = Grid::new(rows, cols)?;
    let mut report = LoadReport::default();

    let expected = rows * cols;
    for (read, pos) in Cell::iter_fill(rows, cols).enumerate() {
        let ch = chars
            .by_ref()
            .find(|c| !c.is_whitespace())
            .ok_or(LoadError::UnexpectedEnd { read, expected })?;

        let state = CellState::from_char(ch).unwrap_or_else(|| {
            log::warn!(
                "Invalid character {:?} at {}, treating it as visited",
                ch,
                pos
            );
            report.substitutions.push(Substitution {
                cell: pos,
                found: ch,
            });
            CellState::Visited
        });
        grid.set(pos, state)?;
    }

    if chars.any(|c| !c.is_whitespace()) {
        log::debug!("Ignoring input after the last maze cell");
    }

    for state in [CellState::MouseStart, CellState::Exit] {
        let count = grid.count(state);
        if count != 1 {
            return Err(LoadError::EndpointCount { state, count });
        }
    }

    InvariantChecker::default().check_grid(&grid)?;
    log::debug!(
        "Loaded {}x{} maze, {} substitution(s)",
        rows,
        cols,
        report.substitutions.len()
    );

    Ok((grid, report))
}

fn next_count(chars: &mut Peekable<Chars>, what: &'static str) -> Result<usize, LoadError> {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}

    if chars.peek().is_none() {
        return Err(LoadError::MissingDimension(what));
    }

    // the count ends at the first non-digit, whatever follows is left for the cells
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }

    if digits.is_empty() {
        let mut token = String::new();
        while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
            token.push(c);
        }
        return Err(LoadError::InvalidDimension { what, token });
    }

    digits.parse().map_err(|_| LoadError::InvalidDimension {
        what,
        token: digits.clone(),
    })
}
