use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};
use ratcore::{
    dims::{Cell, Dir},
    grid::{CellState, Grid},
    invariants::CheckLevel,
    loader,
    solver::{NoObserver, Search, SearchState},
};

fn random_grid(rng: &mut StdRng) -> Grid {
    let rows = rng.gen_range(1..=12);
    let cols = rng.gen_range(1..=12);
    let mut grid = Grid::new(rows, cols).unwrap();

    for pos in Cell::iter_fill(rows, cols) {
        let state = if rng.gen_bool(0.35) {
            CellState::Wall
        } else {
            CellState::Open
        };
        grid.set(pos, state).unwrap();
    }

    let cells: Vec<_> = Cell::iter_fill(rows, cols).collect();
    let start = cells[rng.gen_range(0..cells.len())];
    grid.set(start, CellState::MouseStart).unwrap();
    if cells.len() > 1 {
        let goal = loop {
            let c = cells[rng.gen_range(0..cells.len())];
            if c != start {
                break c;
            }
        };
        grid.set(goal, CellState::Exit).unwrap();
    }
    grid
}

/// Breadth-first flood fill over non-wall cells, independent of the search.
fn reachable(grid: &Grid, from: Cell) -> Vec<Cell> {
    let mut seen = vec![from];
    let mut queue = VecDeque::from([from]);
    while let Some(c) = queue.pop_front() {
        for dir in Dir::get_in_order() {
            let n = c.neighbor(dir);
            if !grid.bounds_check(n) || seen.contains(&n) {
                continue;
            }
            if grid.state_at(n).unwrap() != CellState::Wall {
                seen.push(n);
                queue.push_back(n);
            }
        }
    }
    seen
}

#[test]
fn verdict_matches_flood_fill() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut checked = 0;

    for _ in 0..500 {
        let grid = random_grid(&mut rng);
        let Ok(goal) = grid.locate(CellState::Exit) else {
            continue;
        };
        let start = grid.locate(CellState::MouseStart).unwrap();
        let region = reachable(&grid, start);

        let mut search = Search::new(grid, CheckLevel::Full).unwrap();
        let verdict = search.run(&mut NoObserver).unwrap();

        if region.contains(&goal) {
            assert_eq!(verdict, SearchState::Succeeded);
            assert_eq!(search.cursor(), goal);
        } else {
            assert_eq!(verdict, SearchState::Failed);
            assert!(search.frontier().is_empty());
            for cell in region {
                assert_eq!(search.grid().state_at(cell), Ok(CellState::Visited));
            }
        }
        checked += 1;
    }

    assert!(checked > 400);
}

#[test]
fn snapshots_are_deterministic() {
    let input = "5 6\nm00100\n011101\n000001\n101100\n00010e\n";
    let trace = || {
        let (grid, _) = loader::load_str(input).unwrap();
        let mut frames = String::new();
        let mut search = Search::new(grid, CheckLevel::Full).unwrap();
        let verdict = search
            .run(&mut |g: &Grid| -> std::io::Result<()> {
                frames.push_str(&g.to_string());
                frames.push('\n');
                Ok(())
            })
            .unwrap();
        (verdict, frames)
    };

    let (verdict, first) = trace();
    assert_eq!(verdict, SearchState::Succeeded);
    assert!(first.starts_with("m00100\n"));
    assert_eq!(trace().1, first);
}

#[test]
fn cyclic_grid_escapes() {
    let (grid, _) = loader::load_str("4 4\nm000\n0110\n0000\n111e").unwrap();
    let mut search = Search::new(grid, CheckLevel::Full).unwrap();
    assert_eq!(search.run(&mut NoObserver).unwrap(), SearchState::Succeeded);
    assert!(search.stats().stale <= search.stats().pushed);
}

#[test]
fn largest_open_maze() {
    let mut grid = Grid::new(20, 20).unwrap();
    grid.set(Cell(0, 0), CellState::MouseStart).unwrap();
    grid.set(Cell(19, 19), CellState::Exit).unwrap();

    let mut search = Search::new(grid, CheckLevel::Structural).unwrap();
    assert_eq!(search.run(&mut NoObserver).unwrap(), SearchState::Succeeded);
    assert!(search.stats().visited <= 400);
}
