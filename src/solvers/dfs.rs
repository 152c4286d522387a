use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use super::{
    SearchOutcome,
    path::{Predecessors, reconstruct_path},
};
use crate::maze::{Coord, Grid};

/// Depth-first search with randomly shuffled neighbor order.
///
/// Cells are marked visited when pushed, so each is pushed at most once. Finds a path
/// whenever one exists but it is usually not the shortest.
pub fn solve_dfs<R: Rng + ?Sized>(grid: &Grid, start: Coord, goal: Coord, rng: &mut R) -> SearchOutcome {
    let mut stack = vec![start];
    let mut visited = HashSet::from([start]);
    let mut predecessors = Predecessors::new();

    while let Some(current) = stack.pop() {
        if current == goal {
            break;
        }
        let mut neighbors = grid.open_neighbors(current).collect::<Vec<_>>();
        neighbors.shuffle(rng);
        for neighbor in neighbors {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    SearchOutcome {
        path: reconstruct_path(&predecessors, start, goal),
        visited: visited.len(),
    }
}
