use std::io::{self, Read, Write};

use ratcore::{
    error::{LoadError, SearchError},
    invariants::CheckLevel,
    loader,
    solver::{Search, SearchStats},
    SearchState,
};

use crate::{
    render::TraceRenderer,
    settings::{ColorScheme, SettingsError},
};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Could not load the maze: {0}")]
    Load(#[from] LoadError),
    #[error("Search aborted: {0}")]
    Search(#[from] SearchError),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub quiet: bool,
    pub colors: Option<ColorScheme>,
    pub check_level: CheckLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub state: SearchState,
    pub stats: SearchStats,
    pub substitutions: usize,
}

/// Loads a maze from `input`, searches it and writes the trace and verdict to `out`.
pub fn run<R: Read, W: Write>(input: R, out: W, opts: &RunOptions) -> Result<Outcome, AppError> {
    let (grid, report) = loader::load(input)?;

    let mut renderer = TraceRenderer::new(out).quiet(opts.quiet);
    if let Some(scheme) = &opts.colors {
        renderer = renderer.with_colors(scheme.clone());
    }

    let mut search = Search::new(grid, opts.check_level)?;
    let state = search.run(&mut renderer)?;
    renderer.finish(state)?;

    Ok(Outcome {
        state,
        stats: search.stats(),
        substitutions: report.substitutions.len(),
    })
}
