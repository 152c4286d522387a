use std::collections::{HashSet, VecDeque};

use super::{
    SearchOutcome,
    path::{Predecessors, reconstruct_path},
};
use crate::maze::{Coord, Grid};

/// Breadth-first search. The path found is a shortest one by edge count.
pub fn solve_bfs(grid: &Grid, start: Coord, goal: Coord) -> SearchOutcome {
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut predecessors = Predecessors::new();

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for neighbor in grid.open_neighbors(current) {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    SearchOutcome {
        path: reconstruct_path(&predecessors, start, goal),
        visited: visited.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_short_branch() {
        let grid: Grid = "
            #######
            #.....#
            #.###.#
            #.#...#
            #######
        "
        .parse()
        .unwrap();
        let outcome = solve_bfs(&grid, Coord::new(1, 1), Coord::new(3, 3));
        // Right along the top then down and back is the only route: 4 + 2 + 2 edges
        assert_eq!(outcome.path.len(), 9);
        assert_eq!(outcome.path.first(), Some(&Coord::new(1, 1)));
        assert_eq!(outcome.path.last(), Some(&Coord::new(3, 3)));
    }

    #[test]
    fn test_shortest_in_open_room() {
        let grid: Grid = "
            #######
            #.....#
            #.....#
            #.....#
            #######
        "
        .parse()
        .unwrap();
        let outcome = solve_bfs(&grid, Coord::new(1, 1), Coord::new(3, 5));
        assert_eq!(outcome.path.len(), 7);
    }

    #[test]
    fn test_visits_whole_component_when_unreachable() {
        let grid: Grid = "
            #####
            #.#.#
            #.#.#
            #####
        "
        .parse()
        .unwrap();
        let outcome = solve_bfs(&grid, Coord::new(1, 1), Coord::new(1, 3));
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.visited, 2);
    }
}
