use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap, HashSet},
};

use super::{
    SearchOutcome,
    path::{Predecessors, reconstruct_path},
};
use crate::maze::{Coord, Grid};

/// A frontier entry: estimated total cost `f = g + h`, cost so far `g`, and the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    g: u32,
    coord: Coord,
}

/// Orders by `f`, then `g`, then cell (row, then column). Lower sorts first.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.coord.cmp(&other.coord))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* with the Manhattan distance heuristic.
///
/// Manhattan distance is admissible and consistent on a 4-connected unit-cost grid, so the
/// first time a cell is popped its cost is final and the path found is a shortest one.
pub fn solve_astar(grid: &Grid, start: Coord, goal: Coord) -> SearchOutcome {
    let heuristic = |c: Coord| c.manhattan(goal);

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq = BinaryHeap::from([Reverse(FrontierEntry {
        f: heuristic(start),
        g: 0,
        coord: start,
    })]);
    let mut costs = HashMap::from([(start, 0u32)]);
    let mut settled = HashSet::new();
    let mut predecessors = Predecessors::new();

    while let Some(Reverse(current)) = pq.pop() {
        if current.coord == goal {
            break;
        }
        // Stale entry for a cell already expanded with a lower cost
        if !settled.insert(current.coord) {
            continue;
        }

        let new_cost = current.g + 1;
        for neighbor in grid.open_neighbors(current.coord) {
            let is_cheaper = match costs.get(&neighbor) {
                Some(&existing_cost) => new_cost < existing_cost,
                None => true,
            };
            if is_cheaper {
                costs.insert(neighbor, new_cost);
                predecessors.insert(neighbor, current.coord);
                pq.push(Reverse(FrontierEntry {
                    f: new_cost + heuristic(neighbor),
                    g: new_cost,
                    coord: neighbor,
                }));
            }
        }
    }

    SearchOutcome {
        path: reconstruct_path(&predecessors, start, goal),
        visited: settled.len(),
    }
}
