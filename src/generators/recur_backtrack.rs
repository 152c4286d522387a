use rand::{Rng, seq::SliceRandom};

use crate::maze::{Cell, Coord, Grid};

/// Lattice steps: two cells at a time so a one-cell wall stays between parallel corridors.
const STEPS: [(i16, i16); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// One level of the carving walk: a cell and the directions not yet tried from it.
struct Frame {
    cell: Coord,
    steps: std::array::IntoIter<(i16, i16), 4>,
}

impl Frame {
    fn new<R: Rng + ?Sized>(cell: Coord, rng: &mut R) -> Self {
        let mut steps = STEPS;
        steps.shuffle(rng);
        Frame {
            cell,
            steps: steps.into_iter(),
        }
    }
}

fn midpoint(a: Coord, b: Coord) -> Coord {
    Coord::new(
        ((a.row as u32 + b.row as u32) / 2) as u16,
        ((a.col as u32 + b.col as u32) / 2) as u16,
    )
}

/// Randomized backtracking carve over the odd-coordinate lattice, starting at `origin`.
///
/// Uses an explicit stack instead of recursion so large grids cannot exhaust the call stack.
/// The carved cells form a spanning tree of the reachable lattice. Returns the number of
/// cells opened.
///
/// # Panics
/// If `origin` is out of bounds.
pub fn recursive_backtrack<R: Rng + ?Sized>(grid: &mut Grid, origin: Coord, rng: &mut R) -> usize {
    grid.set(origin, Cell::Open);
    let mut carved = 1;

    let mut stack = vec![Frame::new(origin, rng)];
    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        let Some((dr, dc)) = frame.steps.next() else {
            // Every direction tried, backtrack
            stack.pop();
            continue;
        };

        let target = cell
            .offset(dr, dc)
            .filter(|&t| grid.is_interior(t) && grid[t] == Cell::Wall);
        if let Some(target) = target {
            grid.set(midpoint(cell, target), Cell::Open);
            grid.set(target, Cell::Open);
            carved += 2;
            stack.push(Frame::new(target, rng));
        }
    }

    tracing::debug!(
        "[generator] carved {} cells from {} on a {}x{} grid",
        carved,
        origin,
        grid.rows(),
        grid.cols()
    );
    carved
}
