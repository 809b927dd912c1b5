use std::io::{self, Write};

use colored::Colorize;
use ratcore::{grid::Grid, solver::SearchObserver, SearchState};

use crate::settings::ColorScheme;

pub const FREE_MESSAGE: &str = "The mouse is free!!!!";
pub const TRAPPED_MESSAGE: &str = "The mouse is trapped!!!!";
pub const DONE_MESSAGE: &str = "End of processing";

pub fn verdict_message(state: SearchState) -> &'static str {
    if state.is_success() {
        FREE_MESSAGE
    } else {
        TRAPPED_MESSAGE
    }
}

/// Prints the maze after every move of the mouse, each snapshot preceded by an empty line.
pub struct TraceRenderer<W: Write> {
    out: W,
    scheme: Option<ColorScheme>,
    enabled: bool,
    frames: usize,
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            scheme: None,
            enabled: true,
            frames: 0,
        }
    }

    pub fn with_colors(mut self, scheme: ColorScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Keeps counting snapshots but stops printing them.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.enabled = !quiet;
        self
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_grid(&mut self, grid: &Grid) -> io::Result<()> {
        let Some(scheme) = &self.scheme else {
            return write!(self.out, "{}", grid);
        };

        for r in 0..grid.rows() {
            if let Some(row) = grid.cells().row(r) {
                for &state in row {
                    let ch = state.to_char().to_string();
                    write!(self.out, "{}", ch.color(scheme.color_of(state)))?;
                }
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Prints the verdict and the closing notice.
    pub fn finish(&mut self, state: SearchState) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", verdict_message(state))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", DONE_MESSAGE)?;
        self.out.flush()
    }
}

impl<W: Write> SearchObserver for TraceRenderer<W> {
    fn snapshot(&mut self, grid: &Grid) -> io::Result<()> {
        self.frames += 1;
        if !self.enabled {
            return Ok(());
        }

        writeln!(self.out)?;
        self.write_grid(grid)
    }
}
