use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratcore::{
    dims::Cell,
    grid::{CellState, Grid},
    invariants::CheckLevel,
    solver::{NoObserver, Search},
};

/// Serpentine corridor covering the whole board, the exit at its far end.
fn serpentine() -> Grid {
    let mut grid = Grid::new(20, 20).unwrap();
    for row in (1..20).step_by(2) {
        for col in 0..20 {
            grid.set(Cell(row, col), CellState::Wall).unwrap();
        }
        let gap = if row % 4 == 1 { 19 } else { 0 };
        grid.set(Cell(row, gap), CellState::Open).unwrap();
    }
    grid.set(Cell(0, 0), CellState::MouseStart).unwrap();
    grid.set(Cell(19, 19), CellState::Exit).unwrap();
    grid
}

pub fn serpentine_structural(c: &mut Criterion) {
    let grid = serpentine();
    c.bench_function("serpentine_structural", |b| {
        b.iter(|| {
            let mut search = Search::new(black_box(grid.clone()), CheckLevel::Structural).unwrap();
            search.run(&mut NoObserver).unwrap()
        })
    });
}

pub fn serpentine_full_checks(c: &mut Criterion) {
    let grid = serpentine();
    c.bench_function("serpentine_full_checks", |b| {
        b.iter(|| {
            let mut search = Search::new(black_box(grid.clone()), CheckLevel::Full).unwrap();
            search.run(&mut NoObserver).unwrap()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = serpentine_structural, serpentine_full_checks}
criterion_main!(benches);
